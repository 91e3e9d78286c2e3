use std::fmt;

/// Travel duration of a connection, in whole minutes
///
/// The results table renders durations under an hour as bare minutes (`45`)
/// and longer ones as `H:MM` (`1:05`). Parsing accepts both forms; the
/// `Display` impl produces the same text the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelTime(u32);

impl TravelTime {
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// Parse a duration cell's text
    ///
    /// Surrounding whitespace is ignored. `H:MM` yields `H * 60 + MM`, bare
    /// digits yield the number itself. Anything else is `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.contains(':') {
            let mut parts = text.split(':');
            let hours: u32 = parts.next()?.trim().parse().ok()?;
            let minutes: u32 = parts.next()?.trim().parse().ok()?;
            return hours.checked_mul(60)?.checked_add(minutes).map(Self);
        }
        text.parse().ok().map(Self)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 60 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
        }
    }
}
