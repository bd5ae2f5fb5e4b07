//! Inline SVG glyphs drawn inside the checkbox indicator.

use yew::prelude::*;

use crate::logic::checkbox::Glyph;

/// Props shared by the glyph icons.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Additional CSS classes for the SVG.
    #[prop_or_default]
    pub class: Classes,
    /// Size token, e.g. `sm` or `size-4`.
    #[prop_or_default]
    pub size: Option<AttrValue>,
    /// Optional accessible title; the icon is hidden from assistive tech without one.
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw: &str = value;
        match raw {
            "xs" => "size-2.5".to_string(),
            "sm" => "size-3".to_string(),
            "lg" => "size-5".to_string(),
            raw if raw.starts_with("size-") => raw.to_string(),
            raw => format!("size-{raw}"),
        }
    })
}

fn icon_svg(props: &IconProps, name: &'static str, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(props.size.as_ref()) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="3"
            role="img"
            data-icon={name}
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Check mark glyph.
#[function_component(CheckIcon)]
pub fn check_icon(props: &IconProps) -> Html {
    icon_svg(props, Glyph::Check.icon_name(), html! { <path d="M20 6L9 17l-5-5" /> })
}

/// Horizontal bar glyph for partial selection.
#[function_component(MinusIcon)]
pub fn minus_icon(props: &IconProps) -> Html {
    icon_svg(props, Glyph::Minus.icon_name(), html! { <path d="M5 12h14" /> })
}

/// Props for [`GlyphIcon`].
#[derive(Properties, PartialEq)]
pub struct GlyphIconProps {
    /// Which glyph to draw.
    pub glyph: Glyph,
    /// Additional CSS classes for the SVG.
    #[prop_or_default]
    pub class: Classes,
    /// Size token.
    #[prop_or_default]
    pub size: Option<AttrValue>,
}

/// Resolves a [`Glyph`] to its icon component.
#[function_component(GlyphIcon)]
pub fn glyph_icon(props: &GlyphIconProps) -> Html {
    let class = props.class.clone();
    let size = props.size.clone();
    match props.glyph {
        Glyph::Check => html! { <CheckIcon {class} {size} /> },
        Glyph::Minus => html! { <MinusIcon {class} {size} /> },
    }
}
