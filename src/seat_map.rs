//! Expansion of a result row into seat availability cards and diagrams.
//!
//! The layout is computed from the page's seat and diagram tables without
//! touching the DOM; `components::seat_map` renders it.

use crate::components::seat_map::SeatMap;
use crate::constants::{
    SEAT_MAP_COLUMNS, SEAT_PANEL_ID, SELECTABLE_ROW_SELECTOR, SHOW_CLASS, SVG_PANEL_ID,
    TOGGLE_BUTTON_ID,
};
use crate::dom;
use crate::models::{CarriageSeats, PageSeatData, RowDiagrams, RowSeats, SeatType};
use leptos::view;
use std::rc::Rc;

/// Seats of one type within a carriage, in encounter order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGroup {
    pub seat_type: SeatType,
    pub seats: Vec<String>,
}

impl SeatGroup {
    #[must_use]
    pub fn count(&self) -> usize {
        self.seats.len()
    }

    /// Comma separated seat numbers, as shown when the badge is expanded
    #[must_use]
    pub fn seat_list(&self) -> String {
        self.seats.join(", ")
    }
}

/// Availability summary of one carriage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarriageCard {
    pub carriage: String,
    pub groups: Vec<SeatGroup>,
}

impl CarriageCard {
    /// Group a carriage's seats by type, types ordered by first appearance
    #[must_use]
    pub fn from_seats(carriage: &str, seats: &CarriageSeats) -> Self {
        let mut groups: Vec<SeatGroup> = Vec::new();
        for (number, seat_type) in seats {
            match groups.iter_mut().find(|g| &g.seat_type == seat_type) {
                Some(group) => group.seats.push(number.clone()),
                None => groups.push(SeatGroup {
                    seat_type: seat_type.clone(),
                    seats: vec![number.clone()],
                }),
            }
        }

        Self {
            carriage: carriage.to_string(),
            groups,
        }
    }
}

/// Seat diagram of one carriage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub carriage: String,
    pub svg: String,
}

impl Diagram {
    /// Titled diagram block; the server-supplied SVG is inserted verbatim
    #[must_use]
    pub fn markup(&self) -> String {
        format!(
            r#"<div class="mt-5"><h3 class="text-center fw-bold">Wagon {}</h3>{}</div>"#,
            escape_text(&self.carriage),
            self.svg
        )
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Everything rendered for one expanded row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMapLayout {
    /// Always `SEAT_MAP_COLUMNS` columns; carriage *i* sits in column *i mod n*
    pub columns: Vec<Vec<CarriageCard>>,
    pub diagrams: Vec<Diagram>,
}

impl SeatMapLayout {
    #[must_use]
    pub fn build(seats: Option<&RowSeats>, diagrams: Option<&RowDiagrams>) -> Self {
        let occupied: Vec<(&String, &CarriageSeats)> = seats
            .into_iter()
            .flatten()
            .filter_map(|(carriage, seats)| match seats {
                Some(seats) if !seats.is_empty() => Some((carriage, seats)),
                _ => None,
            })
            .collect();

        let mut columns = vec![Vec::new(); SEAT_MAP_COLUMNS];
        for (i, (carriage, seats)) in occupied.iter().enumerate() {
            columns[i % SEAT_MAP_COLUMNS].push(CarriageCard::from_seats(carriage, seats));
        }

        let diagrams = diagrams
            .into_iter()
            .flatten()
            .filter(|(carriage, _)| occupied.iter().any(|(c, _)| c == carriage))
            .map(|(carriage, svg)| Diagram {
                carriage: carriage.clone(),
                svg: svg.clone(),
            })
            .collect();

        Self { columns, diagrams }
    }

    #[must_use]
    pub fn for_row(data: &PageSeatData, row: &str) -> Self {
        Self::build(data.seats.get(row), data.diagrams.get(row))
    }

    /// Markup of every diagram block, in diagram order
    #[must_use]
    pub fn diagram_markup(&self) -> String {
        self.diagrams.iter().map(Diagram::markup).collect()
    }

    /// Cards in column-major order
    pub fn cards(&self) -> impl Iterator<Item = &CarriageCard> {
        self.columns.iter().flatten()
    }
}

/// Which result row, if any, is expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected { row: String, previous: Option<String> },
    Cleared { row: String },
}

impl SelectionState {
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, row: &str) -> bool {
        self.selected() == Some(row)
    }

    /// Select `row`, or clear the selection if `row` is already selected
    pub fn toggle(&mut self, row: &str) -> SelectionChange {
        if self.is_selected(row) {
            self.selected = None;
            SelectionChange::Cleared {
                row: row.to_string(),
            }
        } else {
            let previous = self.selected.replace(row.to_string());
            SelectionChange::Selected {
                row: row.to_string(),
                previous,
            }
        }
    }
}

/// Mount the seat map on a seat results page
///
/// Returns `false` when the page has no seat panels or its seat data could
/// not be read.
pub fn install() -> bool {
    let (Some(seat_panel), Some(svg_panel)) = (
        dom::html_element_by_id(SEAT_PANEL_ID),
        dom::element_by_id(SVG_PANEL_ID),
    ) else {
        crate::log!("Seat map: no seat panels on this page");
        return false;
    };

    let data = match PageSeatData::from_page() {
        Ok(data) => Rc::new(data),
        Err(e) => {
            leptos::logging::error!("Seat map disabled: {e}");
            return false;
        }
    };

    let rows = dom::query_all(SELECTABLE_ROW_SELECTOR);
    let toggle_button = dom::html_element_by_id(TOGGLE_BUTTON_ID);

    if let Some(button) = &toggle_button {
        let panel = svg_panel.clone();
        dom::listen(button, "click", move |_: web_sys::MouseEvent| {
            let _ = panel.class_list().toggle(SHOW_CLASS);
        });
    }

    crate::log!("Seat map: {} rows, {} with seat data", rows.len(), data.seats.len());

    leptos::mount_to(seat_panel, move || {
        view! {
            <SeatMap
                data=data
                rows=rows
                svg_panel=svg_panel
                toggle_button=toggle_button
            />
        }
    });
    true
}
