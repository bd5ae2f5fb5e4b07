use gloo::console;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::logic::modal::{ModalState, ModalTransition, ModalView};

/// Props for [`Modal`].
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Caption of the opening button.
    #[prop_or(AttrValue::Static("Open"))]
    pub trigger_label: AttrValue,
    /// Dialog heading.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Start in the open state.
    #[prop_or_default]
    pub open: bool,
    /// Extra classes for the dialog container.
    #[prop_or_default]
    pub class: Classes,
    /// Notified whenever the dialog opens or closes.
    #[prop_or_default]
    pub on_toggle: Callback<bool>,
    /// Dialog body.
    #[prop_or_default]
    pub children: Children,
}

/// Trigger button plus dialog with a click-to-dismiss backdrop.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let state = {
        let open = props.open;
        use_state(move || {
            if open {
                ModalState::opened()
            } else {
                ModalState::default()
            }
        })
    };
    let title = props
        .title
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let view = ModalView::render(*state, &props.trigger_label, &title);
    let dialog_ref = use_node_ref();
    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |focus: &bool| {
                let dialog = dialog_ref.cast::<HtmlElement>().filter(|_| *focus);
                if let Some(Err(err)) = dialog.map(|dialog| dialog.focus()) {
                    console::error!("modal dialog focus failed", err);
                }
                || ()
            },
            view.focus_dialog,
        );
    }

    let apply = {
        let state = state.clone();
        let on_toggle = props.on_toggle.clone();
        move |update: fn(&mut ModalState) -> ModalTransition| {
            let mut next = *state;
            match update(&mut next) {
                ModalTransition::Unchanged => {}
                ModalTransition::Opened | ModalTransition::Closed => {
                    state.set(next);
                    on_toggle.emit(next.is_open());
                }
            }
        }
    };
    let on_trigger = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply(ModalState::toggle))
    };
    let on_dismiss = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply(ModalState::close))
    };
    let on_keydown = {
        let state = state.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: KeyboardEvent| {
            let mut next = *state;
            if next.handle_key(&event.code()) == ModalTransition::Closed {
                state.set(next);
                on_toggle.emit(false);
            }
        })
    };

    let backdrop = view
        .backdrop
        .as_ref()
        .map(|backdrop| {
            html! {
                <div
                    class={backdrop.class}
                    data-testid={backdrop.test_id}
                    onclick={on_dismiss.clone()}
                ></div>
            }
        })
        .unwrap_or_default();

    html! {
        <>
            <button
                type="button"
                class="btn btn-sm"
                data-testid={view.trigger.test_id}
                aria-expanded={view.trigger.expanded.to_string()}
                onclick={on_trigger}
            >
                {view.trigger.label.clone()}
            </button>
            <div
                class={classes!(view.dialog_class.clone(), props.class.clone())}
                ref={dialog_ref}
                role="dialog"
                aria-modal="true"
                tabindex="0"
                onkeydown={on_keydown}
            >
                {backdrop}
                <div class="modal-box relative">
                    <div class="flex items-start justify-between">
                        <h3 class="text-lg font-semibold">{view.title.clone()}</h3>
                        <button
                            type="button"
                            class="btn btn-ghost btn-xs btn-circle"
                            aria-label="Close"
                            onclick={on_dismiss}
                        >
                            {"✕"}
                        </button>
                    </div>
                    { for props.children.iter() }
                </div>
            </div>
        </>
    }
}
