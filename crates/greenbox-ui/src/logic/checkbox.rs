//! DOM-free state derivation for the tri-state checkbox.
//!
//! The widget is stateless: [`CheckboxView::render`] is a pure function of
//! [`CheckboxProps`], and the only side effect a component may perform is the
//! parent's change callback, gated by [`should_activate`].

use crate::logic::attrs::PassthroughAttrs;

/// Classes applied to every indicator regardless of state.
pub const INDICATOR_BASE_CLASSES: &str = "absolute flex justify-center items-center h-4 w-4 m-1 rounded border border-gray-500 focus:outline-none focus-visible transition duration-100 ease-in-out filter";
/// Classes that make the indicator look interactive; omitted when disabled.
pub const INDICATOR_INTERACTIVE_CLASSES: &str =
    "border-green-500 cursor-pointer hover:brightness-110 hover:shadow-sm";
/// Background applied when the checkbox is checked or indeterminate.
pub const INDICATOR_VALUE_CLASSES: &str = "bg-green-500";
/// Classes applied to the glyph drawn inside the indicator.
pub const GLYPH_CLASSES: &str = "absolute text-white";
/// Size token requested from the glyph provider.
pub const GLYPH_SIZE: &str = "sm";
/// The native input only anchors the label and form semantics.
pub const NATIVE_INPUT_CLASSES: &str = "hidden";
/// Wrapper offsetting the label past the absolutely positioned indicator.
pub const LABEL_WRAPPER_CLASSES: &str = "ml-6";
/// Classes on the label element itself.
pub const LABEL_CLASSES: &str = "select-none";

/// Key codes (`KeyboardEvent.code`) that activate a focused indicator.
pub const ACTIVATION_KEYS: [&str; 2] = ["Space", "Enter"];

/// Display state of a checkbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckState {
    /// Neither checked nor partially checked.
    #[default]
    Unchecked,
    /// Fully checked.
    Checked,
    /// Partially checked, typically a parent over a mixed group.
    Indeterminate,
}

impl CheckState {
    /// Resolves the two-flag input. `indeterminate` wins over `checked`.
    #[must_use]
    pub const fn from_flags(checked: bool, indeterminate: bool) -> Self {
        if indeterminate {
            Self::Indeterminate
        } else if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }

    /// Returns `(checked, indeterminate)` for this state.
    #[must_use]
    pub const fn flags(self) -> (bool, bool) {
        match self {
            Self::Unchecked => (false, false),
            Self::Checked => (true, false),
            Self::Indeterminate => (false, true),
        }
    }

    /// Conventional parent transition after a change callback.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Unchecked => Self::Checked,
            Self::Checked | Self::Indeterminate => Self::Unchecked,
        }
    }

    /// Whether the indicator shows a value (checked or indeterminate).
    #[must_use]
    pub const fn has_value(self) -> bool {
        !matches!(self, Self::Unchecked)
    }

    /// Glyph drawn for this state, if any.
    #[must_use]
    pub const fn glyph(self) -> Option<Glyph> {
        match self {
            Self::Unchecked => None,
            Self::Checked => Some(Glyph::Check),
            Self::Indeterminate => Some(Glyph::Minus),
        }
    }

    /// Stable lowercase name, used for `data-state` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::Checked => "checked",
            Self::Indeterminate => "indeterminate",
        }
    }
}

/// Glyphs the indicator can request from the icon provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Check mark.
    Check,
    /// Horizontal bar for partial selection.
    Minus,
}

impl Glyph {
    /// Logical icon name understood by the glyph provider.
    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Minus => "minus",
        }
    }
}

/// How the user tried to change the checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction<'a> {
    /// Pointer click on the indicator.
    Click,
    /// Change event from the hidden native input, e.g. after a label click.
    NativeChange,
    /// Key-down on the focused indicator, carrying `KeyboardEvent.code`.
    Key(&'a str),
}

/// Returns true when `code` is one of [`ACTIVATION_KEYS`].
#[must_use]
pub fn is_activation_key(code: &str) -> bool {
    ACTIVATION_KEYS.contains(&code)
}

/// Decides whether an interaction should fire the change callback.
#[must_use]
pub fn should_activate(disabled: bool, interaction: Interaction<'_>) -> bool {
    if matches!(interaction, Interaction::Key(code) if !is_activation_key(code)) {
        return false;
    }
    if disabled {
        tracing::debug!(?interaction, "checkbox disabled; activation suppressed");
        return false;
    }
    true
}

/// Props of the checkbox, independent of any rendering framework.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckboxProps {
    /// Identifier shared by the native input, its label and the accessible name.
    pub id: String,
    /// Affirmative state.
    pub checked: bool,
    /// Partial state; takes glyph precedence over `checked`.
    pub indeterminate: bool,
    /// Suppresses interaction and interactive styling.
    pub disabled: bool,
    /// Text rendered next to the indicator.
    pub label: String,
    /// Optional title forwarded to the native input.
    pub title: Option<String>,
    /// Extra attributes forwarded to the native input.
    pub attrs: PassthroughAttrs,
}

impl CheckboxProps {
    /// Creates unchecked, enabled props with an empty label.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets both state flags from an explicit tri-state value.
    #[must_use]
    pub const fn with_state(mut self, state: CheckState) -> Self {
        let (checked, indeterminate) = state.flags();
        self.checked = checked;
        self.indeterminate = indeterminate;
        self
    }

    /// Sets the `checked` flag.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets the `indeterminate` flag.
    #[must_use]
    pub const fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Sets the `disabled` flag.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the native input title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the passthrough attributes.
    #[must_use]
    pub fn attrs(mut self, attrs: PassthroughAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// `checked || indeterminate`.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.checked || self.indeterminate
    }

    /// Resolved display state.
    #[must_use]
    pub const fn state(&self) -> CheckState {
        CheckState::from_flags(self.checked, self.indeterminate)
    }
}

/// The focusable box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorView {
    /// Space separated utility classes.
    pub class: String,
    /// Always `0`: the indicator sits in the default tab order.
    pub tab_index: i32,
    /// Display state, exposed as `data-state`.
    pub state: CheckState,
    /// Glyph inside the box, if any.
    pub glyph: Option<Glyph>,
    /// Whether pointer and keyboard interaction is live.
    pub interactive: bool,
}

/// The visually hidden native checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeInputView {
    /// Mirrors the `id` prop.
    pub id: String,
    /// Accessible name; mirrors the `id` prop.
    pub aria_label: String,
    /// Mirrors the `checked` prop only; `indeterminate` is not reflected here.
    pub checked: bool,
    /// Mirrors the `disabled` prop.
    pub disabled: bool,
    /// Always `-1`: the input is not reachable by tabbing.
    pub tab_index: i32,
    /// Optional title.
    pub title: Option<String>,
    /// Always [`NATIVE_INPUT_CLASSES`].
    pub class: &'static str,
    /// Forwarded attributes, in key order.
    pub attrs: Vec<(&'static str, String)>,
}

/// The label and its wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelView {
    /// Wrapper classes.
    pub wrapper_class: &'static str,
    /// Label classes.
    pub class: &'static str,
    /// `for` attribute; mirrors the `id` prop.
    pub html_for: String,
    /// Label text, possibly empty.
    pub text: String,
}

/// Full render output of the checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxView {
    /// Clickable indicator.
    pub indicator: IndicatorView,
    /// Hidden native input.
    pub input: NativeInputView,
    /// Associated label.
    pub label: LabelView,
}

impl CheckboxView {
    /// Derives the complete view from props.
    #[must_use]
    pub fn render(props: &CheckboxProps) -> Self {
        let state = props.state();
        Self {
            indicator: IndicatorView {
                class: indicator_classes(props.disabled, props.has_value()),
                tab_index: 0,
                state,
                glyph: state.glyph(),
                interactive: !props.disabled,
            },
            input: NativeInputView {
                id: props.id.clone(),
                aria_label: props.id.clone(),
                checked: props.checked,
                disabled: props.disabled,
                tab_index: -1,
                title: props.title.clone(),
                class: NATIVE_INPUT_CLASSES,
                attrs: props
                    .attrs
                    .iter()
                    .map(|(attr, value)| (attr.name(), value.to_string()))
                    .collect(),
            },
            label: LabelView {
                wrapper_class: LABEL_WRAPPER_CLASSES,
                class: LABEL_CLASSES,
                html_for: props.id.clone(),
                text: props.label.clone(),
            },
        }
    }
}

/// Builds the indicator class list.
#[must_use]
pub fn indicator_classes(disabled: bool, has_value: bool) -> String {
    let mut classes = String::from(INDICATOR_BASE_CLASSES);
    if !disabled {
        classes.push(' ');
        classes.push_str(INDICATOR_INTERACTIVE_CLASSES);
    }
    if has_value {
        classes.push(' ');
        classes.push_str(INDICATOR_VALUE_CLASSES);
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::attrs::{AttrError, PassthroughAttr};
    use proptest::prelude::*;

    const BOOLS: [bool; 2] = [false, true];

    fn count_activations(props: &CheckboxProps, interactions: &[Interaction<'_>]) -> usize {
        interactions
            .iter()
            .filter(|interaction| should_activate(props.disabled, **interaction))
            .count()
    }

    const LOCKED: CheckboxProps = CheckboxProps {
        id: String::new(),
        checked: false,
        indeterminate: false,
        disabled: false,
        label: String::new(),
        title: None,
        attrs: PassthroughAttrs::new(),
    }
    .with_state(CheckState::Indeterminate)
    .checked(true)
    .disabled(true);

    #[test]
    fn state_builders_evaluate_in_const_context() {
        assert!(LOCKED.checked);
        assert!(LOCKED.indeterminate);
        assert!(LOCKED.disabled);
        assert!(!should_activate(LOCKED.disabled, Interaction::Click));
    }

    #[test]
    fn has_value_is_checked_or_indeterminate() {
        for checked in BOOLS {
            for indeterminate in BOOLS {
                let props = CheckboxProps::new("x")
                    .checked(checked)
                    .indeterminate(indeterminate);
                assert_eq!(props.has_value(), checked || indeterminate);
                assert_eq!(props.state().has_value(), checked || indeterminate);
            }
        }
    }

    #[test]
    fn glyph_prefers_minus_when_indeterminate() {
        for checked in BOOLS {
            let view = CheckboxView::render(
                &CheckboxProps::new("x").checked(checked).indeterminate(true),
            );
            assert_eq!(view.indicator.glyph, Some(Glyph::Minus));
        }
        let checked = CheckboxView::render(&CheckboxProps::new("x").checked(true));
        assert_eq!(checked.indicator.glyph, Some(Glyph::Check));
        let empty = CheckboxView::render(&CheckboxProps::new("x"));
        assert_eq!(empty.indicator.glyph, None);
    }

    #[test]
    fn state_flags_round_trip_through_props() {
        for state in [
            CheckState::Unchecked,
            CheckState::Checked,
            CheckState::Indeterminate,
        ] {
            assert_eq!(CheckboxProps::new("x").with_state(state).state(), state);
        }
        assert_eq!(
            CheckState::from_flags(true, true),
            CheckState::Indeterminate
        );
    }

    #[test]
    fn toggled_moves_partial_state_to_unchecked() {
        assert_eq!(CheckState::Unchecked.toggled(), CheckState::Checked);
        assert_eq!(CheckState::Checked.toggled(), CheckState::Unchecked);
        assert_eq!(CheckState::Indeterminate.toggled(), CheckState::Unchecked);
    }

    #[test]
    fn disabled_never_activates() {
        let props = CheckboxProps::new("x").checked(true).disabled(true);
        let interactions = [
            Interaction::Click,
            Interaction::NativeChange,
            Interaction::Key("Space"),
            Interaction::Key("Enter"),
        ];
        assert_eq!(count_activations(&props, &interactions), 0);
    }

    #[test]
    fn enabled_activates_once_per_click_and_activation_key() {
        let props = CheckboxProps::new("x");
        assert_eq!(count_activations(&props, &[Interaction::Click]), 1);
        assert_eq!(
            count_activations(&props, &[Interaction::Click, Interaction::Click]),
            2
        );
        assert_eq!(count_activations(&props, &[Interaction::Key("Space")]), 1);
        assert_eq!(count_activations(&props, &[Interaction::Key("Enter")]), 1);
        assert_eq!(count_activations(&props, &[Interaction::NativeChange]), 1);
    }

    #[test]
    fn other_keys_are_ignored() {
        let props = CheckboxProps::new("x");
        let keys = [
            Interaction::Key("KeyA"),
            Interaction::Key("Tab"),
            Interaction::Key("Escape"),
            Interaction::Key("NumpadEnter"),
            Interaction::Key(" "),
            Interaction::Key(""),
        ];
        assert_eq!(count_activations(&props, &keys), 0);
    }

    #[test]
    fn id_is_shared_by_input_label_and_accessible_name() {
        let view = CheckboxView::render(&CheckboxProps::new("agree"));
        assert_eq!(view.input.id, "agree");
        assert_eq!(view.input.aria_label, "agree");
        assert_eq!(view.label.html_for, "agree");
    }

    #[test]
    fn tab_order_includes_indicator_only() {
        let view = CheckboxView::render(&CheckboxProps::new("x"));
        assert_eq!(view.indicator.tab_index, 0);
        assert_eq!(view.input.tab_index, -1);
        assert_eq!(view.input.class, "hidden");
    }

    #[test]
    fn disabled_drops_interactive_classes() {
        let enabled = indicator_classes(false, false);
        let disabled = indicator_classes(true, false);
        assert!(enabled.contains("cursor-pointer"));
        assert!(!disabled.contains("cursor-pointer"));
        assert!(!disabled.contains("border-green-500"));
        assert!(disabled.starts_with(INDICATOR_BASE_CLASSES));
        assert!(indicator_classes(true, true).ends_with("bg-green-500"));
        assert!(!indicator_classes(false, false).contains("bg-green-500"));
    }

    #[test]
    fn falsy_conditions_add_no_tokens() {
        let classes = indicator_classes(true, false);
        assert!(!classes.split_whitespace().any(|token| token == "false"));
        assert_eq!(classes, INDICATOR_BASE_CLASSES);
    }

    #[test]
    fn agree_scenario_renders_unchecked_with_label() {
        let props = CheckboxProps::new("agree").label("I agree");
        let view = CheckboxView::render(&props);
        assert_eq!(view.indicator.state, CheckState::Unchecked);
        assert_eq!(view.indicator.glyph, None);
        assert!(!view.input.checked);
        assert_eq!(view.label.text, "I agree");
        assert_eq!(count_activations(&props, &[Interaction::Click]), 1);
    }

    #[test]
    fn checked_and_indeterminate_scenario_shows_minus_and_activates() {
        let props = CheckboxProps::new("x").checked(true).indeterminate(true);
        let view = CheckboxView::render(&props);
        assert_eq!(view.indicator.glyph, Some(Glyph::Minus));
        assert!(view.indicator.class.contains("bg-green-500"));
        assert_eq!(count_activations(&props, &[Interaction::Click]), 1);
    }

    #[test]
    fn disabled_checked_scenario_is_inert() {
        let props = CheckboxProps::new("x").checked(true).disabled(true);
        let view = CheckboxView::render(&props);
        assert_eq!(view.indicator.glyph, Some(Glyph::Check));
        assert!(!view.indicator.interactive);
        assert!(!view.indicator.class.contains("cursor-pointer"));
        assert!(view.input.disabled);
        assert_eq!(
            count_activations(
                &props,
                &[
                    Interaction::Click,
                    Interaction::Key("Enter"),
                    Interaction::Key("Space")
                ]
            ),
            0
        );
    }

    #[test]
    fn empty_label_still_renders_label_element() {
        let view = CheckboxView::render(&CheckboxProps::new("x"));
        assert_eq!(view.label.text, "");
        assert_eq!(view.label.html_for, "x");
        assert_eq!(view.label.wrapper_class, "ml-6");
    }

    #[test]
    fn native_input_does_not_mirror_indeterminate() {
        // Only the indicator shows the partial state; the native input keeps
        // its plain `checked` value.
        let view = CheckboxView::render(&CheckboxProps::new("x").indeterminate(true));
        assert_eq!(view.indicator.state, CheckState::Indeterminate);
        assert!(!view.input.checked);
    }

    #[test]
    fn passthrough_attrs_and_title_reach_native_input() -> Result<(), AttrError> {
        let attrs = PassthroughAttrs::new()
            .with(PassthroughAttr::Name, "terms")?
            .with(PassthroughAttr::data("data-section")?, "legal")?;
        let view = CheckboxView::render(&CheckboxProps::new("x").title("Terms").attrs(attrs));
        assert_eq!(view.input.title.as_deref(), Some("Terms"));
        assert_eq!(
            view.input.attrs,
            vec![
                ("name", "terms".to_string()),
                ("data-section", "legal".to_string())
            ]
        );
        Ok(())
    }

    #[test]
    fn glyph_icon_names_are_stable() {
        assert_eq!(Glyph::Check.icon_name(), "check");
        assert_eq!(Glyph::Minus.icon_name(), "minus");
        assert_eq!(CheckState::Indeterminate.as_str(), "indeterminate");
    }

    proptest! {
        #[test]
        fn render_is_a_pure_function_of_props(
            id in "[a-z][a-z0-9-]{0,12}",
            label in ".{0,24}",
            checked in any::<bool>(),
            indeterminate in any::<bool>(),
            disabled in any::<bool>(),
        ) {
            let props = CheckboxProps::new(id)
                .label(label)
                .checked(checked)
                .indeterminate(indeterminate)
                .disabled(disabled);
            prop_assert_eq!(CheckboxView::render(&props), CheckboxView::render(&props));
        }

        #[test]
        fn value_background_tracks_has_value(
            checked in any::<bool>(),
            indeterminate in any::<bool>(),
            disabled in any::<bool>(),
        ) {
            let props = CheckboxProps::new("p")
                .checked(checked)
                .indeterminate(indeterminate)
                .disabled(disabled);
            let view = CheckboxView::render(&props);
            prop_assert_eq!(
                view.indicator.class.contains(INDICATOR_VALUE_CLASSES),
                checked || indeterminate
            );
            prop_assert_eq!(view.indicator.glyph.is_some(), checked || indeterminate);
        }
    }
}
