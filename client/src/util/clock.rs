//! Wall clock in the browser's local zone.
//!
//! The reactive "today" is recomputed from here. [`BrowserZone`] hands the
//! `tasks::dates` helpers the offset in effect at each converted instant, so a
//! reminder across a daylight-saving change keeps its wall-clock time.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tasks::dates::LocalZone;

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn now_local() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

pub fn today() -> NaiveDate {
    now_local().date_naive()
}

/// Milliseconds since the epoch, for gesture velocity sampling.
#[allow(clippy::cast_precision_loss)]
pub fn now_ms() -> f64 {
    now_utc().timestamp_millis() as f64
}

/// The user's zone as reported by the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserZone;

impl LocalZone for BrowserZone {
    /// Ambiguous times take the earlier offset. Times skipped by a forward
    /// change take the offset from just before it.
    fn offset_at_local(&self, local: NaiveDateTime) -> Option<FixedOffset> {
        Local.offset_from_local_datetime(&local).earliest().or_else(|| {
            let before = local.checked_sub_signed(Duration::hours(1))?;
            Local.offset_from_local_datetime(&before).earliest()
        })
    }

    fn offset_at_utc(&self, ts: DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&ts.naive_utc())
    }
}
