//! Thin helpers over `web_sys` for the server-rendered host page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement};

#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

#[must_use]
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// All elements matching `selector`, in document order
#[must_use]
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_classes(element: &Element, classes: &[&str]) {
    for class in classes {
        let _ = element.class_list().add_1(class);
    }
}

pub fn remove_classes(element: &Element, classes: &[&str]) {
    for class in classes {
        let _ = element.class_list().remove_1(class);
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Attach `callback` for the page lifetime
///
/// The closure is leaked; widgets installed on the host page never unmount.
pub fn listen<E>(target: &EventTarget, event: &str, callback: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(E)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        leptos::logging::warn!("failed to attach {event} listener");
    }
    closure.forget();
}

/// Whether `target` of an event lies inside `container`
#[must_use]
pub fn event_within(event: &web_sys::Event, container: &Element) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}
