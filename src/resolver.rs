//! AM/PM inference for alarm times spoken without a qualifier

use chrono::{NaiveTime, TimeDelta, Timelike};

/// Pick the time of day to schedule for a spoken alarm time.
///
/// For an ambiguous hour (1-11, no AM/PM or day-part word) that has already
/// passed today, the PM version is used if it is still ahead of `now`.
/// Otherwise the time is returned unchanged and the scheduler places it on
/// the next calendar occurrence.
///
/// - now 15:00, "four" -> 04:00 passed, 16:00 ahead -> 16:00
/// - now 20:00, "seven" -> 07:00 passed, 19:00 passed too -> 07:00 tomorrow
/// - now 15:00, "seven in the morning" -> explicit -> 07:00
pub fn resolve_time(time: NaiveTime, is_explicit_time: bool, now: NaiveTime) -> NaiveTime {
    if is_explicit_time {
        return time;
    }

    if (1..=11).contains(&time.hour()) && time < now {
        // hour <= 11 so this never wraps past midnight
        let pm = time + TimeDelta::hours(12);
        if pm > now {
            return pm;
        }
    }

    time
}
