use crate::api::StationSource;
use crate::autocomplete::Autocomplete;
use crate::constants::SHOW_CLASS;
use crate::dom;
use leptos::{
    component, create_effect, create_rw_signal, view, IntoView, SignalUpdate, SignalWith,
    SignalWithUntracked,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement};

/// Suggestion entries rendered inside `dropdown`, fed by lookups on `input`
///
/// Every qualifying keystroke starts its own lookup; whichever response
/// arrives last is what the list shows.
#[component]
pub fn StationSuggestions(
    input: HtmlInputElement,
    dropdown: HtmlElement,
    lookup: Rc<dyn StationSource>,
) -> impl IntoView {
    let state = create_rw_signal(Autocomplete::default());

    create_effect({
        let dropdown = dropdown.clone();
        move |_| dom::set_class(&dropdown, SHOW_CLASS, state.with(Autocomplete::is_visible))
    });

    dom::listen(&input, "input", {
        let input = input.clone();
        move |_: web_sys::Event| {
            let Some(query) = state.try_update(|s| s.on_input(&input.value())).flatten() else {
                return;
            };
            let pending = lookup.search(&query);
            spawn_local(async move {
                match pending.await {
                    Ok(names) => {
                        crate::log!("Autocomplete: {} stations for {:?}", names.len(), query);
                        state.update(|s| s.on_suggestions(names));
                    }
                    Err(e) => leptos::logging::error!("Station lookup for {query:?} failed: {e}"),
                }
            });
        }
    });

    if let Some(document) = dom::document() {
        let input = input.clone();
        let dropdown = dropdown.clone();
        dom::listen(&document, "click", move |ev: web_sys::MouseEvent| {
            if !state.with_untracked(Autocomplete::is_visible) {
                return;
            }
            if !dom::event_within(&ev, &input) && !dom::event_within(&ev, &dropdown) {
                state.update(Autocomplete::dismiss);
            }
        });
    }

    view! {
        {move || {
            let input = input.clone();
            state.with(|s| s.suggestions().to_vec())
                .into_iter()
                .enumerate()
                .map(|(index, name)| {
                    let input = input.clone();
                    view! {
                        <li>
                            <a
                                class="dropdown-item"
                                on:click=move |_| {
                                    if let Some(name) = state.try_update(|s| s.select(index)).flatten() {
                                        input.set_value(&name);
                                    }
                                }
                            >
                                {name}
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        }}
    }
}
