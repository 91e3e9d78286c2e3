use serde::Deserialize;
use std::fmt;

/// Category of an available seat as tagged by the server
///
/// The server emits a small closed set of tags; anything else is carried
/// through verbatim and rendered with a neutral style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum SeatType {
    Normal,
    Bike,
    QuietZone,
    Other(String),
}

impl SeatType {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "normal_seat" => Self::Normal,
            "bike_seat" => Self::Bike,
            "quiet_zone_seat" => Self::QuietZone,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Normal => "normal_seat",
            Self::Bike => "bike_seat",
            Self::QuietZone => "quiet_zone_seat",
            Self::Other(tag) => tag,
        }
    }

    /// Label shown on the seat badge (Polish UI)
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Normal => "Normalne",
            Self::Bike => "Rowerowe",
            Self::QuietZone => "W strefie ciszy",
            Self::Other(tag) => tag,
        }
    }

    /// Badge style class
    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Normal => "seat-normal",
            Self::Bike => "seat-bike",
            Self::QuietZone => "seat-quiet",
            Self::Other(_) => "bg-secondary",
        }
    }
}

impl From<String> for SeatType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
