//! Display text for confirmations: 12-hour times and spoken durations

use chrono::{NaiveTime, Timelike};

/// "7:05 AM", "12:00 AM" for midnight, "12:30 PM" for noon
pub fn format_time(time: NaiveTime) -> String {
    format_hour_minute(time.hour(), time.minute())
}

pub fn format_hour_minute(hour: u32, minute: u32) -> String {
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let am_pm = if hour < 12 { "AM" } else { "PM" };
    format!("{}:{:02} {}", display_hour, minute, am_pm)
}

/// "1 hour and 30 minutes", "2 minutes and 1 second", "0 seconds"
///
/// Only the two largest units are spoken; seconds are dropped once there is
/// an hour.
pub fn format_duration(millis: u64) -> String {
    let seconds = millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        let remaining_minutes = minutes % 60;
        let hours_text = format!("{} hour{}", hours, if hours > 1 { "s" } else { "" });
        if remaining_minutes > 0 {
            format!("{} and {}", hours_text, unit(remaining_minutes, "minute"))
        } else {
            hours_text
        }
    } else if minutes > 0 {
        let remaining_seconds = seconds % 60;
        if remaining_seconds > 0 {
            format!(
                "{} and {}",
                unit(minutes, "minute"),
                unit(remaining_seconds, "second")
            )
        } else {
            unit(minutes, "minute")
        }
    } else {
        unit(seconds, "second")
    }
}

fn unit(count: u64, name: &str) -> String {
    format!("{} {}{}", count, name, if count != 1 { "s" } else { "" })
}

/// Countdown display: "04:59" or "01:02:03"
pub fn format_countdown(millis: u64) -> String {
    let total_seconds = millis / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
