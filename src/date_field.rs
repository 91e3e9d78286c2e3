use crate::constants::DATE_INPUT_ID;
use crate::dom;
use chrono::{DateTime, Utc};

/// Earliest selectable travel date, as an `<input type="date">` value
#[must_use]
pub fn min_date(now: DateTime<Utc>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

/// Stop the search form from offering dates in the past
pub fn install() -> bool {
    let Some(input) = dom::element_by_id(DATE_INPUT_ID) else {
        return false;
    };
    let min = min_date(Utc::now());
    if let Err(e) = input.set_attribute("min", &min) {
        leptos::logging::warn!("Failed to set minimum date: {e:?}");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_min_date_format() {
        let now = Utc.with_ymd_and_hms(2025, 3, 7, 9, 41, 0).single().expect("valid time");
        assert_eq!(min_date(now), "2025-03-07");
    }

    #[test]
    fn test_min_date_uses_utc_day() {
        let late = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).single().expect("valid time");
        assert_eq!(min_date(late), "2024-12-31");
    }
}
