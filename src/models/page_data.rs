use super::{RowTable, SeatType};
use crate::constants::{SEATS_DATA_GLOBAL, SVG_DATA_GLOBAL};
use crate::error::PageDataError;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

/// Seat number to seat type, for one carriage
pub type CarriageSeats = IndexMap<String, SeatType>;

/// Carriage id to its available seats, for one result row
///
/// A carriage may be listed with no seats at all (`null` or `{}`).
pub type RowSeats = IndexMap<String, Option<CarriageSeats>>;

/// Carriage id to its seat diagram markup, for one result row
pub type RowDiagrams = IndexMap<String, String>;

/// Seat and diagram tables the server embedded into the results page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSeatData {
    pub seats: RowTable<RowSeats>,
    pub diagrams: RowTable<RowDiagrams>,
}

impl PageSeatData {
    /// Build from the JSON text of both tables
    ///
    /// # Errors
    ///
    /// Returns an error if either document does not have the table shape.
    pub fn from_json(seats: &str, diagrams: &str) -> Result<Self, PageDataError> {
        Ok(Self {
            seats: parse_table(SEATS_DATA_GLOBAL, seats)?,
            diagrams: parse_table(SVG_DATA_GLOBAL, diagrams)?,
        })
    }

    /// Read the `seatsData` and `svgData` globals of the current page
    ///
    /// # Errors
    ///
    /// Returns an error if a global is missing, cannot be serialized by the
    /// browser, or does not have the table shape.
    pub fn from_page() -> Result<Self, PageDataError> {
        let seats = read_global_json(SEATS_DATA_GLOBAL)?;
        let diagrams = read_global_json(SVG_DATA_GLOBAL)?;
        Self::from_json(&seats, &diagrams)
    }
}

fn parse_table<T: DeserializeOwned>(
    name: &'static str,
    json: &str,
) -> Result<RowTable<T>, PageDataError> {
    serde_json::from_str(json).map_err(|source| PageDataError::Shape { name, source })
}

fn read_global_json(name: &'static str) -> Result<String, PageDataError> {
    let window = web_sys::window().ok_or(PageDataError::Missing(name))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| PageDataError::Missing(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(PageDataError::Missing(name));
    }

    js_sys::JSON::stringify(&value)
        .map(String::from)
        .map_err(|e| PageDataError::Unserializable {
            name,
            reason: format!("{e:?}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_reads_both_tables() {
        let data = PageSeatData::from_json(
            r#"{"0": {"A": {"1": "normal_seat", "2": "bike_seat"}, "B": null}}"#,
            r#"{"0": {"A": "<svg/>", "B": "<svg id='b'/>"}}"#,
        )
        .expect("valid page data");

        let row = data.seats.get("0").expect("row 0");
        let carriage_a = row.get("A").and_then(Option::as_ref).expect("carriage A");
        assert_eq!(carriage_a.get("1"), Some(&SeatType::Normal));
        assert_eq!(carriage_a.get("2"), Some(&SeatType::Bike));
        assert_eq!(row.get("B"), Some(&None));

        let diagrams = data.diagrams.get("0").expect("row 0 diagrams");
        assert_eq!(diagrams.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_seat_order_follows_document() {
        let data = PageSeatData::from_json(
            r#"[{"12": {"40a": "normal_seat", "3b": "normal_seat", "17c": "quiet_zone_seat"}}]"#,
            "[]",
        )
        .expect("valid page data");

        let seats = data.seats.get("0").and_then(|row| row.get("12")).and_then(Option::as_ref);
        let numbers: Vec<_> = seats.expect("carriage 12").keys().cloned().collect();
        assert_eq!(numbers, vec!["40a", "3b", "17c"]);
    }

    #[test]
    fn test_shape_error_names_the_table() {
        let err = PageSeatData::from_json("{}", r#"{"0": {"A": 5}}"#).expect_err("bad svg table");
        assert!(matches!(err, PageDataError::Shape { name: "svgData", .. }));
        assert!(err.to_string().contains("svgData"));
    }
}
