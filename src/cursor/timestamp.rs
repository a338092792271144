//! Timestamp codec
//!
//! Instants are stored as a signed 64-bit count of 100-nanosecond ticks since
//! 0001-01-01T00:00:00Z. Values are normalized to UTC before encoding;
//! nanoseconds below one tick are truncated.

use chrono::{DateTime, Local, TimeZone, Utc};

use super::ByteCursor;
use crate::error::{CursorError, Result};

/// Ticks in one second (1 tick = 100 ns)
pub const TICKS_PER_SECOND: i64 = 10_000_000;

const NANOS_PER_TICK: i64 = 100;

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch
const EPOCH_OFFSET_SECONDS: i64 = 62_135_596_800;

/// Convert an instant to ticks since 0001-01-01 UTC
///
/// Returns `None` if the instant falls outside the i64 tick range.
pub fn datetime_to_ticks<Tz: TimeZone>(value: &DateTime<Tz>) -> Option<i64> {
    let utc = value.with_timezone(&Utc);
    let seconds = utc.timestamp().checked_add(EPOCH_OFFSET_SECONDS)?;
    let sub_ticks = i64::from(utc.timestamp_subsec_nanos()) / NANOS_PER_TICK;
    seconds.checked_mul(TICKS_PER_SECOND)?.checked_add(sub_ticks)
}

/// Convert ticks since 0001-01-01 UTC back to an instant
pub fn ticks_to_datetime(ticks: i64) -> Option<DateTime<Utc>> {
    let seconds = ticks.div_euclid(TICKS_PER_SECOND) - EPOCH_OFFSET_SECONDS;
    let nanos = (ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
    DateTime::from_timestamp(seconds, nanos)
}

impl ByteCursor {
    /// Write an instant as UTC ticks
    pub fn write_timestamp<Tz: TimeZone>(&mut self, value: &DateTime<Tz>) -> Result<()> {
        let ticks = datetime_to_ticks(value)
            .ok_or_else(|| CursorError::InvalidTimestamp(value.with_timezone(&Utc).timestamp()))?;
        self.write_i64(ticks);
        Ok(())
    }

    /// Read an instant in UTC
    pub fn read_timestamp(&mut self) -> Result<DateTime<Utc>> {
        self.transactional(|cursor| {
            let ticks = cursor.read_i64()?;
            ticks_to_datetime(ticks).ok_or(CursorError::InvalidTimestamp(ticks))
        })
    }

    /// Read an instant converted to the host's local zone
    ///
    /// The UTC instant is exact; the local offset depends on the environment.
    pub fn read_timestamp_local(&mut self) -> Result<DateTime<Local>> {
        Ok(self.read_timestamp()?.with_timezone(&Local))
    }
}
