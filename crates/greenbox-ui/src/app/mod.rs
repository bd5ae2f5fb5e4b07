use crate::components::{Modal, TriStateCheckbox};
use crate::logic::attrs::{PassthroughAttr, PassthroughAttrs};
use crate::logic::checkbox::CheckState;
use crate::logic::selection::GroupSelection;
use gloo::console;
use preferences::{load_selection, persist_selection};
use yew::prelude::*;

mod preferences;

const TOPPINGS: [&str; 4] = ["basil", "mozzarella", "olives", "peppers"];

fn item_attrs(id: &'static str) -> PassthroughAttrs {
    let attrs = PassthroughAttrs::new()
        .with(PassthroughAttr::Name, "toppings")
        .and_then(|attrs| attrs.with(PassthroughAttr::Value, id));
    match attrs {
        Ok(attrs) => attrs,
        Err(err) => {
            console::error!("invalid checkbox attributes", id, err.to_string());
            PassthroughAttrs::new()
        }
    }
}

#[function_component(DemoApp)]
fn demo_app() -> Html {
    let selection = use_state(|| load_selection(&TOPPINGS));
    let agreed = use_state(|| false);

    let update = {
        let selection = selection.clone();
        move |change: &dyn Fn(&mut GroupSelection)| {
            let mut next = (*selection).clone();
            change(&mut next);
            persist_selection(&next);
            selection.set(next);
        }
    };

    let on_toggle_all = {
        let update = update.clone();
        Callback::from(move |()| update(&GroupSelection::toggle_all))
    };
    let parent = selection.parent_state();
    let (parent_checked, parent_partial) = parent.flags();

    let items = TOPPINGS.iter().map(|id| {
        let id = *id;
        let on_change = {
            let update = update.clone();
            Callback::from(move |()| {
                update(&|group: &mut GroupSelection| {
                    group.toggle(id);
                });
            })
        };
        let checked = selection.member_state(id) == CheckState::Checked;
        html! {
            <li class="relative" key={id}>
                <TriStateCheckbox
                    id={id}
                    label={id}
                    {checked}
                    {on_change}
                    attrs={item_attrs(id)}
                />
            </li>
        }
    });

    let on_agree = {
        let agreed = agreed.clone();
        Callback::from(move |()| agreed.set(!*agreed))
    };

    html! {
        <main class="mx-auto flex max-w-md flex-col gap-6 p-8">
            <section class="relative">
                <TriStateCheckbox
                    id="toppings-all"
                    label="All toppings"
                    checked={parent_checked}
                    indeterminate={parent_partial}
                    on_change={on_toggle_all}
                />
                <ul class="ml-6 mt-2 flex flex-col gap-2">
                    { for items }
                </ul>
            </section>
            <section class="relative flex flex-col gap-2">
                <div class="relative">
                    <TriStateCheckbox
                        id="agree"
                        label="I agree"
                        checked={*agreed}
                        on_change={on_agree}
                        title="Terms of service"
                    />
                </div>
                <div class="relative">
                    <TriStateCheckbox
                        id="locked"
                        label="Locked"
                        checked={true}
                        disabled={true}
                        on_change={Callback::from(|()| ())}
                    />
                </div>
            </section>
            <Modal trigger_label="Show selection" title="Selected toppings">
                <p class="py-4">
                    { selection.selected().collect::<Vec<_>>().join(", ") }
                </p>
            </Modal>
        </main>
    }
}

/// Mounts the demo app on `#root`, or on the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DemoApp>::with_root(root).render();
    } else {
        yew::Renderer::<DemoApp>::new().render();
    }
}
