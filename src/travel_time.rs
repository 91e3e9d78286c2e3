//! Emphasis of the fastest and slowest connections in the results table.

use crate::constants::{BEST_TIME_CLASS, EMPHASIS_CLASS, TRAVEL_TIME_SELECTOR, WORST_TIME_CLASS};
use crate::dom;
use crate::time::TravelTime;
use web_sys::Element;

/// Every class the highlighter may have applied to a cell
const HIGHLIGHT_CLASSES: [&str; 3] = [BEST_TIME_CLASS, WORST_TIME_CLASS, EMPHASIS_CLASS];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Best,
    Worst,
}

impl Emphasis {
    #[must_use]
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Best => &[BEST_TIME_CLASS, EMPHASIS_CLASS],
            Self::Worst => &[WORST_TIME_CLASS, EMPHASIS_CLASS],
        }
    }
}

/// Decide the emphasis of each cell from its parsed duration
///
/// Cells whose text did not parse take no part in the min/max and are never
/// emphasised. When every parsed duration is equal nothing is emphasised.
#[must_use]
pub fn classify(times: &[Option<TravelTime>]) -> Vec<Emphasis> {
    let parsed = times.iter().flatten();
    let (Some(min), Some(max)) = (parsed.clone().min(), parsed.max()) else {
        return vec![Emphasis::None; times.len()];
    };

    times
        .iter()
        .map(|time| match time {
            _ if min == max => Emphasis::None,
            Some(t) if t == min => Emphasis::Best,
            Some(t) if t == max => Emphasis::Worst,
            _ => Emphasis::None,
        })
        .collect()
}

/// A table cell holding a rendered travel duration
pub trait DurationCell {
    fn text(&self) -> String;
    fn remove_classes(&mut self, classes: &[&str]);
    fn add_classes(&mut self, classes: &[&str]);
}

impl DurationCell for Element {
    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn remove_classes(&mut self, classes: &[&str]) {
        dom::remove_classes(self, classes);
    }

    fn add_classes(&mut self, classes: &[&str]) {
        dom::add_classes(self, classes);
    }
}

/// Clear previous emphasis and mark the fastest and slowest cells
///
/// Re-running over the same cells yields the same classes.
pub fn highlight<C: DurationCell>(cells: &mut [C]) {
    let times: Vec<_> = cells.iter().map(|c| TravelTime::parse(&c.text())).collect();
    let emphasis = classify(&times);

    for (cell, emphasis) in cells.iter_mut().zip(emphasis) {
        cell.remove_classes(&HIGHLIGHT_CLASSES);
        cell.add_classes(emphasis.classes());
    }
}

/// Highlight every travel-time cell on the page
///
/// Returns the number of cells inspected.
pub fn install() -> usize {
    let mut cells = dom::query_all(TRAVEL_TIME_SELECTOR);
    highlight(&mut cells);
    crate::log!("Travel times: highlighted {} cells", cells.len());
    cells.len()
}
