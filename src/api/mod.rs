mod stations;

pub use stations::{LookupFuture, StationLookup, StationSource};
