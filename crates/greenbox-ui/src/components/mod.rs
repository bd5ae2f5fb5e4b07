//! Yew components rendering the core views.

pub mod checkbox;
pub mod icons;
pub mod modal;

pub use checkbox::{TriStateCheckbox, TriStateCheckboxProps};
pub use icons::{CheckIcon, GlyphIcon, MinusIcon};
pub use modal::{Modal, ModalProps};
