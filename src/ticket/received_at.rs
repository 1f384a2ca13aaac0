use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::{Offset, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ReplydeskError;

/// Receipt time of a ticket.
///
/// Sources send either an absolute instant (`2024-03-01T07:15:00Z`) or a local
/// wall-clock time without an offset (`2024-03-01T10:15:00`, `2024-03-01`).
/// Local times are already in the display zone and are shown as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceivedAt {
    Instant(Timestamp),
    Local(DateTime),
}

impl ReceivedAt {
    /// Wall-clock time in the given display offset
    pub fn in_offset(&self, offset: Offset) -> DateTime {
        match self {
            ReceivedAt::Instant(ts) => ts.to_zoned(TimeZone::fixed(offset)).datetime(),
            ReceivedAt::Local(dt) => *dt,
        }
    }
}

impl FromStr for ReceivedAt {
    type Err = ReplydeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ts) = s.parse::<Timestamp>() {
            return Ok(ReceivedAt::Instant(ts));
        }
        if let Ok(dt) = s.parse::<DateTime>() {
            return Ok(ReceivedAt::Local(dt));
        }
        if let Ok(date) = s.parse::<Date>() {
            return Ok(ReceivedAt::Local(date.to_datetime(Time::midnight())));
        }
        Err(ReplydeskError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for ReceivedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceivedAt::Instant(ts) => write!(f, "{}", ts),
            ReceivedAt::Local(dt) => write!(f, "{}", dt),
        }
    }
}

impl Serialize for ReceivedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReceivedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
