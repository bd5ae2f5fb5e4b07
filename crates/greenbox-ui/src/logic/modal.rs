//! Open/close state and view derivation for the modal dialog.

/// `data-testid` of the button that opens the modal.
pub const TRIGGER_TEST_ID: &str = "modal-button";
/// `data-testid` of the backdrop rendered while the modal is open.
pub const BACKDROP_TEST_ID: &str = "backdrop";

/// Whether the modal is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

/// Result of feeding an event into [`ModalState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransition {
    /// The modal opened.
    Opened,
    /// The modal closed.
    Closed,
    /// Nothing changed.
    Unchanged,
}

impl ModalState {
    /// A modal that starts open.
    #[must_use]
    pub const fn opened() -> Self {
        Self { open: true }
    }

    /// True while the dialog is showing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Opens the modal.
    pub fn open(&mut self) -> ModalTransition {
        if self.open {
            tracing::debug!("modal already open");
            return ModalTransition::Unchanged;
        }
        self.open = true;
        ModalTransition::Opened
    }

    /// Closes the modal.
    pub fn close(&mut self) -> ModalTransition {
        if !self.open {
            tracing::debug!("modal already closed");
            return ModalTransition::Unchanged;
        }
        self.open = false;
        ModalTransition::Closed
    }

    /// Flips between open and closed.
    pub fn toggle(&mut self) -> ModalTransition {
        if self.open { self.close() } else { self.open() }
    }

    /// `Escape` closes an open modal; other keys are ignored.
    pub fn handle_key(&mut self, code: &str) -> ModalTransition {
        if code == "Escape" {
            self.close()
        } else {
            ModalTransition::Unchanged
        }
    }
}

/// The button that opens the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerView {
    /// Always [`TRIGGER_TEST_ID`].
    pub test_id: &'static str,
    /// Button caption.
    pub label: String,
    /// Mirrors the open state for assistive technology.
    pub expanded: bool,
}

/// The click-to-dismiss layer behind the dialog box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackdropView {
    /// Always [`BACKDROP_TEST_ID`].
    pub test_id: &'static str,
    /// Utility classes.
    pub class: &'static str,
}

/// Render output of the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    /// Opening button.
    pub trigger: TriggerView,
    /// Dialog container classes.
    pub dialog_class: String,
    /// Heading shown in the dialog box.
    pub title: String,
    /// Present only while open.
    pub backdrop: Option<BackdropView>,
    /// The dialog takes keyboard focus while open so `Escape` reaches it;
    /// the trigger that opened it sits outside the dialog.
    pub focus_dialog: bool,
}

impl ModalView {
    /// Derives the view for `state`.
    #[must_use]
    pub fn render(state: ModalState, trigger_label: &str, title: &str) -> Self {
        let mut dialog_class = String::from("modal");
        if state.is_open() {
            dialog_class.push_str(" modal-open");
        }
        Self {
            trigger: TriggerView {
                test_id: TRIGGER_TEST_ID,
                label: trigger_label.to_string(),
                expanded: state.is_open(),
            },
            dialog_class,
            title: title.to_string(),
            backdrop: state.is_open().then_some(BackdropView {
                test_id: BACKDROP_TEST_ID,
                class: "modal-backdrop fixed inset-0 bg-black/40",
            }),
            focus_dialog: state.is_open(),
        }
    }
}
