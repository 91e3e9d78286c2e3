#![allow(clippy::needless_pass_by_value)]

pub mod seat_map;
pub mod station_suggestions;
