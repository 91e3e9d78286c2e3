pub mod api;
pub mod autocomplete;
pub mod components;
pub mod constants;
pub mod date_field;
pub mod dom;
pub mod error;
pub mod loading_screen;
pub mod logging;
pub mod models;
pub mod page;
pub mod seat_map;
pub mod time;
pub mod travel_time;

pub use page::boot;
