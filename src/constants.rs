//! DOM anchors and tunables shared by the page widgets.
//!
//! The host page is rendered by the server; these ids and classes are the
//! contract between its markup and this bundle.

/// Search form date input
pub const DATE_INPUT_ID: &str = "date";

/// Station inputs paired with their suggestion dropdowns
pub const STATION_FIELDS: [(&str, &str); 2] = [("from", "fromDropdown"), ("to", "toDropdown")];

/// Container that receives the carriage cards of the selected row
pub const SEAT_PANEL_ID: &str = "available-seats";

/// Container that receives the carriage diagrams of the selected row
pub const SVG_PANEL_ID: &str = "svgSection";

/// Button that shows or hides the diagram panel
pub const TOGGLE_BUTTON_ID: &str = "toggleButton";

/// Full-page overlay shown while a form submission is in flight
pub const LOADING_SCREEN_ID: &str = "loading-screen";

/// Result rows that can be expanded into a seat map
pub const SELECTABLE_ROW_SELECTOR: &str = ".selectable-row";

/// Attribute on a selectable row holding its index into the page data
pub const ROW_INDEX_ATTR: &str = "data-index";

/// Table cells holding a travel duration
pub const TRAVEL_TIME_SELECTOR: &str = ".travel_time";

/// Page globals with per-row seat and diagram data
pub const SEATS_DATA_GLOBAL: &str = "seatsData";
pub const SVG_DATA_GLOBAL: &str = "svgData";

/// Shorter queries never reach the station lookup
pub const MIN_QUERY_LENGTH: usize = 3;

/// Station lookup endpoint, relative to the page origin
pub const STATIONS_ENDPOINT: &str = "/stations";

/// Query parameter carrying the search text
pub const STATIONS_QUERY_PARAM: &str = "name";

/// Number of card columns in the seat panel
pub const SEAT_MAP_COLUMNS: usize = 4;

/// Visibility class toggled on dropdowns, seat lists and the diagram panel
pub const SHOW_CLASS: &str = "show";

/// Class that hides an element outright
pub const HIDDEN_CLASS: &str = "d-none";

/// Class marking the currently expanded result row
pub const SELECTED_ROW_CLASS: &str = "table-primary";

/// Classes applied to the fastest and slowest travel times
pub const BEST_TIME_CLASS: &str = "text-success";
pub const WORST_TIME_CLASS: &str = "text-danger";
pub const EMPHASIS_CLASS: &str = "fw-bold";
