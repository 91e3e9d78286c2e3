//! Entry point wiring the widgets into whichever page loaded the bundle.

use crate::api::{StationLookup, StationSource};
use crate::constants::STATION_FIELDS;
use crate::{autocomplete, date_field, dom, loading_screen, seat_map, travel_time};
use std::rc::Rc;

/// Install every widget once the document is parsed
pub fn boot() {
    loading_screen::install_pageshow_listener();
    on_ready(activate);
}

/// Install the widgets whose anchors exist on the current page
pub fn activate() {
    date_field::install();

    let lookup: Rc<dyn StationSource> = Rc::new(StationLookup::default());
    let mut stations = 0;
    for (input, dropdown) in STATION_FIELDS {
        if autocomplete::install(input, dropdown, Rc::clone(&lookup)) {
            stations += 1;
        }
    }

    let seat_map_ready = seat_map::install();
    let travel_times = travel_time::install();
    let forms = loading_screen::install_submit_listeners();

    crate::log!(
        "Page ready: {} station inputs, seat map {}, {} travel times, {} forms",
        stations,
        seat_map_ready,
        travel_times,
        forms
    );
}

fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let mut pending = Some(f);
    dom::listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}
