//! Wall-clock abstraction and record timestamp parsing
//!
//! Every engine operation samples `now` exactly once through a [`Clock`] and
//! reuses it for all windows it builds, so bucket boundaries within a single
//! call never drift apart. Tests inject a [`FixedClock`].

use chrono::{DateTime, Local, NaiveDateTime};

use crate::error::{Error, Result};

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Local date-time layouts accepted in record timestamps
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%MZ"];

/// Offset layouts RFC 3339 rejects (no seconds)
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z"];

/// Parse an ISO-8601 record timestamp into a local date-time
///
/// Accepts local date-times (`2024-03-01T09:30:00`, optional fraction,
/// optional seconds) and offset forms (`...Z`, `...+02:00`, optional seconds,
/// with or without a trailing `[Zone/Id]`). For offset forms the wall-clock part is kept as
/// written; the offset is not applied.
pub fn parse_timestamp(field: &str, value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    let without_zone = match trimmed.find('[') {
        Some(idx) if trimmed.ends_with(']') => &trimmed[..idx],
        _ => trimmed,
    };

    for format in LOCAL_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(without_zone, format) {
            return Ok(dt);
        }
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(without_zone, format) {
            return Ok(dt.naive_local());
        }
    }

    DateTime::parse_from_rfc3339(without_zone)
        .map(|dt| dt.naive_local())
        .map_err(|_| {
            Error::DataFormat(format!(
                "{} is not an ISO-8601 date-time: {:?}",
                field, value
            ))
        })
}
