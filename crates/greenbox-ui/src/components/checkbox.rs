use yew::prelude::*;

use crate::components::icons::GlyphIcon;
use crate::logic::attrs::PassthroughAttrs;
use crate::logic::checkbox::{
    CheckboxProps, CheckboxView, GLYPH_CLASSES, GLYPH_SIZE, Interaction, should_activate,
};

/// Props for [`TriStateCheckbox`].
#[derive(Properties, PartialEq)]
pub struct TriStateCheckboxProps {
    /// Shared by the native input, the label `for` and the accessible name.
    pub id: AttrValue,
    /// Fired once per accepted click, label change or Space/Enter press.
    pub on_change: Callback<()>,
    /// Affirmative state.
    #[prop_or_default]
    pub checked: bool,
    /// Partial state; the indicator shows a minus glyph.
    #[prop_or_default]
    pub indeterminate: bool,
    /// Suppresses interaction.
    #[prop_or_default]
    pub disabled: bool,
    /// Label text; an empty label still renders its element.
    #[prop_or(AttrValue::Static(""))]
    pub label: AttrValue,
    /// Title of the native input.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Extra attributes for the native input.
    #[prop_or_default]
    pub attrs: PassthroughAttrs,
    /// Ref attached to the native input.
    #[prop_or_default]
    pub input_ref: NodeRef,
}

impl TriStateCheckboxProps {
    fn to_core(&self) -> CheckboxProps {
        CheckboxProps {
            id: self.id.to_string(),
            checked: self.checked,
            indeterminate: self.indeterminate,
            disabled: self.disabled,
            label: self.label.to_string(),
            title: self.title.as_ref().map(ToString::to_string),
            attrs: self.attrs.clone(),
        }
    }
}

/// Checkbox with a custom indicator, a hidden native input and a label.
///
/// The component keeps no state; the parent owns `checked`/`indeterminate`
/// and updates them from `on_change`.
#[function_component(TriStateCheckbox)]
pub fn tri_state_checkbox(props: &TriStateCheckboxProps) -> Html {
    let view = CheckboxView::render(&props.to_core());
    let disabled = props.disabled;

    let onclick = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if should_activate(disabled, Interaction::Click) {
                on_change.emit(());
            }
        })
    };
    let onkeydown = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: KeyboardEvent| {
            if should_activate(disabled, Interaction::Key(&event.code())) {
                on_change.emit(());
            }
        })
    };
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: Event| {
            if should_activate(disabled, Interaction::NativeChange) {
                on_change.emit(());
            }
        })
    };

    let glyph = view
        .indicator
        .glyph
        .map(|glyph| {
            html! {
                <GlyphIcon
                    {glyph}
                    class={GLYPH_CLASSES}
                    size={AttrValue::Static(GLYPH_SIZE)}
                />
            }
        })
        .unwrap_or_default();

    let mut input = html! {
        <input
            type="checkbox"
            id={view.input.id.clone()}
            aria-label={view.input.aria_label.clone()}
            class={view.input.class}
            checked={view.input.checked}
            disabled={view.input.disabled}
            tabindex={view.input.tab_index.to_string()}
            title={view.input.title.clone().map(AttrValue::from)}
            onchange={onchange}
            ref={props.input_ref.clone()}
        />
    };
    if let Html::VTag(tag) = &mut input {
        for (name, value) in &view.input.attrs {
            tag.add_attribute(*name, value.clone());
        }
    }

    html! {
        <>
            <span
                class={view.indicator.class.clone()}
                tabindex={view.indicator.tab_index.to_string()}
                data-state={view.indicator.state.as_str()}
                aria-disabled={(!view.indicator.interactive).then_some("true")}
                onclick={onclick}
                onkeydown={onkeydown}
            >
                {glyph}
            </span>
            {input}
            <div class={view.label.wrapper_class}>
                <label class={view.label.class} for={view.label.html_for.clone()}>
                    {view.label.text.clone()}
                </label>
            </div>
        </>
    }
}
