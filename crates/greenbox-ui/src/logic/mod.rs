//! DOM-free state and view derivation for the widgets.
pub mod attrs;
pub mod checkbox;
pub mod modal;
pub mod preferences;
pub mod selection;
