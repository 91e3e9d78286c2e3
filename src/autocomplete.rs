//! Station name suggestions for the search form inputs.

use crate::api::StationSource;
use crate::components::station_suggestions::StationSuggestions;
use crate::constants::MIN_QUERY_LENGTH;
use crate::dom;
use leptos::view;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Suggestion list state of one station input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autocomplete {
    suggestions: Vec<String>,
    visible: bool,
}

impl Autocomplete {
    /// React to the input's text changing
    ///
    /// Returns the query to look up, or hides the list and returns `None`
    /// when the trimmed text is shorter than `MIN_QUERY_LENGTH` characters.
    pub fn on_input(&mut self, text: &str) -> Option<String> {
        let query = text.trim();
        if query.chars().count() < MIN_QUERY_LENGTH {
            self.visible = false;
            return None;
        }
        Some(query.to_string())
    }

    /// Replace the list with a lookup response
    pub fn on_suggestions(&mut self, names: Vec<String>) {
        self.visible = !names.is_empty();
        self.suggestions = names;
    }

    /// Pick the suggestion at `index`, hiding the list
    pub fn select(&mut self, index: usize) -> Option<String> {
        let name = self.suggestions.get(index).cloned()?;
        self.visible = false;
        Some(name)
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

/// Attach suggestions to the input `input_id`, rendering into `dropdown_id`
pub fn install(input_id: &str, dropdown_id: &str, lookup: Rc<dyn StationSource>) -> bool {
    let input = dom::element_by_id(input_id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let (Some(input), Some(dropdown)) = (input, dom::html_element_by_id(dropdown_id)) else {
        crate::log!("Autocomplete: no #{}/#{} on this page", input_id, dropdown_id);
        return false;
    };

    leptos::mount_to(dropdown.clone(), move || {
        view! { <StationSuggestions input=input dropdown=dropdown lookup=lookup/> }
    });
    true
}
