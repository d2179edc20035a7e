//! Trailing time windows and calendar-month bucketing

use chrono::{Datelike, Duration, Months, NaiveDateTime};

use crate::clock::parse_timestamp;
use crate::error::{Error, Result};
use crate::models::{Bid, Timeframe};

/// Longest month series a caller may request (ten years)
pub const MAX_MONTHS: u32 = 120;

/// `now` shifted back by whole calendar months, clamping the day of month
/// (March 31 minus one month is the last day of February)
pub fn months_before(now: NaiveDateTime, months: u32) -> NaiveDateTime {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Closed interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// `[now - months, now]`
    pub fn trailing_months(now: NaiveDateTime, months: u32) -> Self {
        Self {
            start: months_before(now, months),
            end: now,
        }
    }

    /// `[now - days, now]`
    pub fn trailing_days(now: NaiveDateTime, days: i64) -> Self {
        Self {
            start: now - Duration::days(days),
            end: now,
        }
    }

    /// Fixed trailing window for each trend timeframe
    pub fn for_timeframe(now: NaiveDateTime, timeframe: Timeframe) -> Self {
        match timeframe {
            Timeframe::Day => Self::trailing_days(now, 30),
            Timeframe::Week => Self::trailing_days(now, 12 * 7),
            Timeframe::Month => Self::trailing_months(now, 6),
            Timeframe::Quarter => Self::trailing_months(now, 12),
            Timeframe::Year => Self::trailing_months(now, 36),
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }
}

/// One calendar month of bids
///
/// Buckets are keyed by (year, month); `label` is display-only, so windows
/// longer than a year keep same-named months from different years apart.
#[derive(Debug, Clone)]
pub struct MonthBucket<'a> {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub bids: Vec<&'a Bid>,
}

/// Build `months` buckets ending at the month of `now`, oldest first, and
/// assign every bid created inside `[now - months, now]` to its month
///
/// Bids inside the window whose month has no bucket (the partial month at
/// the very start of the window) are dropped. Any unparsable `createdAt`
/// fails the whole call. `months` must lie in `1..=MAX_MONTHS`.
pub fn bucket_by_month(
    bids: &[Bid],
    now: NaiveDateTime,
    months: u32,
) -> Result<Vec<MonthBucket<'_>>> {
    if months == 0 {
        return Err(Error::InvalidData(
            "months must be at least 1".to_string(),
        ));
    }
    if months > MAX_MONTHS {
        return Err(Error::InvalidData(format!(
            "months must be at most {}",
            MAX_MONTHS
        )));
    }

    let window = TimeWindow::trailing_months(now, months);

    let mut buckets: Vec<MonthBucket<'_>> = (0..months)
        .map(|i| {
            let anchor = months_before(now, months - 1 - i);
            MonthBucket {
                label: anchor.format("%b").to_string(),
                year: anchor.year(),
                month: anchor.month(),
                bids: Vec::new(),
            }
        })
        .collect();

    for bid in bids {
        let created = parse_timestamp("createdAt", &bid.created_at)?;
        if !window.contains(created) {
            continue;
        }
        // Whole calendar months between the bid and `now`
        let back = (now.year() - created.year()) * 12 + now.month() as i32
            - created.month() as i32;
        if (0..months as i32).contains(&back) {
            buckets[(months as i32 - 1 - back) as usize].bids.push(bid);
        }
    }

    Ok(buckets)
}

/// Bids created inside `window`, in input order
pub fn filter_in_window<'a>(bids: &'a [Bid], window: &TimeWindow) -> Result<Vec<&'a Bid>> {
    let mut inside = Vec::new();
    for bid in bids {
        let created = parse_timestamp("createdAt", &bid.created_at)?;
        if window.contains(created) {
            inside.push(bid);
        }
    }
    Ok(inside)
}
