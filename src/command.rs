//! Command parser - turns normalized speech text into alarm/timer commands
//!
//! Classification happens in order of priority:
//! 1. Alarm keywords - extract a time of day
//! 2. Timer keywords - extract a duration
//! 3. Inference - a duration means timer, a time means alarm
//! 4. Unknown

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::fmt;

use crate::config::VoiceConfig;
use crate::numbers;

pub const TIME_NOT_UNDERSTOOD: &str = "Could not understand the time. Please try again.";
pub const DURATION_NOT_UNDERSTOOD: &str = "Could not understand the duration. Please try again.";

const PM_WORDS: &[&str] = &["pm", "evening", "afternoon", "night", "tonight"];
const AM_WORDS: &[&str] = &["am", "morning"];

const HOUR_MS: u64 = 3_600_000;
const MINUTE_MS: u64 = 60_000;
const SECOND_MS: u64 = 1_000;

/// Result of parsing one utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Set an alarm at a time of day
    Alarm {
        time: NaiveTime,
        /// AM/PM or a day-part word was spoken
        is_explicit_time: bool,
        label: Option<String>,
    },

    /// Start a countdown
    Timer {
        duration_millis: u64,
        label: Option<String>,
    },

    /// Nothing recognizable
    Unknown { original_text: String },

    /// Looked like a command but the time/duration was malformed
    ParseError { message: String },
}

impl ParsedCommand {
    fn parse_error(message: &str) -> Self {
        ParsedCommand::ParseError {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedCommand::Alarm {
                time,
                is_explicit_time,
                label,
            } => {
                write!(f, "alarm at {:02}:{:02}", time.hour(), time.minute())?;
                if *is_explicit_time {
                    write!(f, " (explicit)")?;
                }
                if let Some(label) = label {
                    write!(f, " '{}'", label)?;
                }
                Ok(())
            }
            ParsedCommand::Timer {
                duration_millis,
                label,
            } => {
                write!(f, "timer for {}ms", duration_millis)?;
                if let Some(label) = label {
                    write!(f, " '{}'", label)?;
                }
                Ok(())
            }
            ParsedCommand::Unknown { original_text } => write!(f, "unknown: {}", original_text),
            ParsedCommand::ParseError { message } => write!(f, "error: {}", message),
        }
    }
}

/// Precompiled patterns, built once per parser
struct Patterns {
    digit_letter: Regex,
    label: Regex,
    quoted_label: Regex,
    for_duration: Regex,
    am_pm_digits: Regex,
    clock_digits: Regex,
    minutes_past: Regex,
    hour_oh_digit: Regex,
    hour_digit: Regex,
    at_or_for_hour: Regex,
    hour_word: Regex,
    bare_digits: Regex,
}

impl Patterns {
    fn new() -> Self {
        let hours = numbers::hour_alternation();
        let digits = numbers::single_digit_alternation();
        let past = numbers::past_minute_alternation();

        Self {
            digit_letter: re(r"(\d)([a-z])"),
            label: re(r"\b(?:called|named|labeled|label)\s+(.+)$"),
            quoted_label: re(r#"["“]([^"“”]+)["”]\s*$"#),
            for_duration: re(r"\bfor\s+\d+\s+(?:minute|second|hour)"),
            am_pm_digits: re(r"\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b"),
            clock_digits: re(r"\b(\d{1,2}):(\d{2})\b"),
            minutes_past: re(&format!(r"\b({past})\s+past\s+({hours})\b")),
            hour_oh_digit: re(&format!(r"\b({hours})\s+o\s+({digits})\b")),
            hour_digit: re(&format!(r"\b({hours})\s+({digits})\b")),
            at_or_for_hour: re(&format!(r"\b(?:at|for)\s+({hours})\b")),
            hour_word: re(&format!(r"\b({hours})\b")),
            bare_digits: re(r"\b(\d{1,2})\b"),
        }
    }
}

// Patterns above are fixed strings built from the number tables
fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

/// Command parser - keyword lists come from config
pub struct CommandParser {
    alarm_keywords: Vec<String>,
    timer_keywords: Vec<String>,
    patterns: Patterns,
}

impl CommandParser {
    /// Create new parser from config
    pub fn new(config: &VoiceConfig) -> Self {
        let lower = |list: &[String]| -> Vec<String> {
            list.iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };

        Self {
            alarm_keywords: lower(&config.alarm_keywords),
            timer_keywords: lower(&config.timer_keywords),
            patterns: Patterns::new(),
        }
    }

    /// Parse normalized text into a command. Never fails; bad input becomes
    /// `Unknown` or `ParseError`.
    #[hotpath::measure]
    pub fn parse(&self, text: &str) -> ParsedCommand {
        let prepared = self.prepare(text);
        let (body, label) = self.split_label(&prepared);

        if self.has_alarm_keyword(body) {
            return self.parse_alarm(body, label);
        }

        if self.has_timer_keyword(body) {
            return self.parse_timer(body, label);
        }

        // Partial or distorted recognition: infer from content
        if let DurationScan::Found(duration_millis) = scan_duration(body) {
            return ParsedCommand::Timer {
                duration_millis,
                label: None,
            };
        }

        if let Some(time) = self.extract_time(body) {
            return ParsedCommand::Alarm {
                time,
                is_explicit_time: has_explicit_time_context(body),
                label: None,
            };
        }

        ParsedCommand::Unknown {
            original_text: text.to_string(),
        }
    }

    /// Lowercase, collapse whitespace, split "7am" into "7 am"
    fn prepare(&self, text: &str) -> String {
        let lowered = text
            .to_lowercase()
            .replace("a.m.", "am")
            .replace("p.m.", "pm");
        let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
        self.patterns
            .digit_letter
            .replace_all(&collapsed, "$1 $2")
            .into_owned()
    }

    /// Split off a trailing "called/named/label X" phrase or a quoted tail
    fn split_label<'a>(&self, text: &'a str) -> (&'a str, Option<String>) {
        let caps = self
            .patterns
            .label
            .captures(text)
            .or_else(|| self.patterns.quoted_label.captures(text));
        let Some(caps) = caps else {
            return (text, None);
        };
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            return (text, None);
        };

        let label = label
            .as_str()
            .trim()
            .trim_matches(|c: char| matches!(c, '"' | '\u{201c}' | '\u{201d}'))
            .trim();
        let label = (!label.is_empty()).then(|| label.to_string());
        (text[..whole.start()].trim_end(), label)
    }

    fn has_alarm_keyword(&self, text: &str) -> bool {
        self.alarm_keywords.iter().any(|k| text.contains(k.as_str()))
    }

    fn has_timer_keyword(&self, text: &str) -> bool {
        self.timer_keywords.iter().any(|k| text.contains(k.as_str()))
            || self.patterns.for_duration.is_match(text)
    }

    fn parse_alarm(&self, text: &str, label: Option<String>) -> ParsedCommand {
        match self.extract_time(text) {
            Some(time) => ParsedCommand::Alarm {
                time,
                is_explicit_time: has_explicit_time_context(text),
                label,
            },
            None => ParsedCommand::parse_error(TIME_NOT_UNDERSTOOD),
        }
    }

    fn parse_timer(&self, text: &str, label: Option<String>) -> ParsedCommand {
        match scan_duration(text) {
            DurationScan::Found(duration_millis) => ParsedCommand::Timer {
                duration_millis,
                label,
            },
            DurationScan::Zero | DurationScan::MissingQuantity | DurationScan::NoUnits => {
                ParsedCommand::parse_error(DURATION_NOT_UNDERSTOOD)
            }
        }
    }

    /// Extract a time of day; first matching form wins
    fn extract_time(&self, text: &str) -> Option<NaiveTime> {
        // "in 5 minutes" reads as a timer, not a clock time
        if !matches!(scan_duration(text), DurationScan::NoUnits) {
            return None;
        }

        let p = &self.patterns;

        // 7 am, 7:30 pm
        if let Some(caps) = p.am_pm_digits.captures(text) {
            let hour: u32 = caps[1].parse().ok()?;
            let minute: u32 = caps.get(2).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
            let hour = match (&caps[3], hour) {
                ("pm", h) if h != 12 => h + 12,
                ("am", 12) => 0,
                (_, h) => h,
            };
            if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                return Some(time);
            }
        }

        // 19:30, 7:30, 8:30 tonight
        if let Some(caps) = p.clock_digits.captures(text) {
            let hour: u32 = caps[1].parse().ok()?;
            let minute: u32 = caps[2].parse().ok()?;
            let hour = if (1..=12).contains(&hour) {
                apply_day_part(hour, text)
            } else {
                hour
            };
            if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                return Some(time);
            }
        }

        // twenty past seven, quarter past eight
        if let Some(caps) = p.minutes_past.captures(text) {
            let minute = numbers::leading_minutes(&[&caps[1]]).map(|(m, _)| m);
            let hour = numbers::hour_word(&caps[2]);
            if let (Some(minute), Some(hour)) = (minute, hour) {
                return word_time(hour, minute, text);
            }
        }

        // eight o four
        if let Some(caps) = p.hour_oh_digit.captures(text) {
            if let (Some(hour), Some(minute)) =
                (numbers::hour_word(&caps[1]), numbers::single_digit(&caps[2]))
            {
                return word_time(hour, minute, text);
            }
        }

        // eight five
        if let Some(caps) = p.hour_digit.captures(text) {
            if let (Some(hour), Some(minute)) =
                (numbers::hour_word(&caps[1]), numbers::single_digit(&caps[2]))
            {
                return word_time(hour, minute, text);
            }
        }

        // at seven twenty five, for eight thirty
        if let Some(caps) = p.at_or_for_hour.captures(text) {
            if let (Some(hour), Some(whole)) = (numbers::hour_word(&caps[1]), caps.get(0)) {
                let minute = minutes_after(&text[whole.end()..]);
                return word_time(hour, minute, text);
            }
        }

        // seven o'clock, wake up seven thirty
        if let Some(m) = p.hour_word.find(text) {
            if let Some(hour) = numbers::hour_word(m.as_str()) {
                let minute = minutes_after(&text[m.end()..]);
                return word_time(hour, minute, text);
            }
        }

        // 7, 7 o'clock
        for caps in p.bare_digits.captures_iter(text) {
            let Ok(hour) = caps[1].parse::<u32>() else {
                continue;
            };
            if hour < 24 {
                let hour = if (1..=12).contains(&hour) {
                    apply_day_part(hour, text)
                } else {
                    hour
                };
                return NaiveTime::from_hms_opt(hour, 0, 0);
            }
        }

        if has_word(text, "noon") || has_word(text, "midday") {
            return NaiveTime::from_hms_opt(12, 0, 0);
        }
        if has_word(text, "midnight") {
            return NaiveTime::from_hms_opt(0, 0, 0);
        }

        None
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(&VoiceConfig::default())
    }
}

/// Spoken hour + minute, adjusted by any day-part word in the utterance
fn word_time(hour: u32, minute: u32, text: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(apply_day_part(hour, text), minute, 0)
}

fn apply_day_part(hour: u32, text: &str) -> u32 {
    if PM_WORDS.iter().any(|w| has_word(text, w)) {
        if hour == 12 { 12 } else { hour + 12 }
    } else if AM_WORDS.iter().any(|w| has_word(text, w)) {
        if hour == 12 { 0 } else { hour }
    } else {
        hour
    }
}

/// Minutes spoken right after the hour word, "o'clock" and day parts mean 0
fn minutes_after(rest: &str) -> u32 {
    let words: Vec<&str> = rest.split_whitespace().collect();
    numbers::leading_minutes(&words).map_or(0, |(m, _)| m)
}

fn has_explicit_time_context(text: &str) -> bool {
    PM_WORDS
        .iter()
        .chain(AM_WORDS.iter())
        .any(|w| has_word(text, w))
}

fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .any(|w| w == word)
}

enum DurationScan {
    /// Sum of every quantity/unit pair, > 0
    Found(u64),
    /// Units present but they add up to nothing
    Zero,
    /// A unit word with no quantity in front of it
    MissingQuantity,
    NoUnits,
}

fn unit_millis(word: &str) -> Option<u64> {
    match word {
        "hour" | "hours" | "hr" | "hrs" => Some(HOUR_MS),
        "minute" | "minutes" | "min" | "mins" => Some(MINUTE_MS),
        "second" | "seconds" | "sec" | "secs" => Some(SECOND_MS),
        _ => None,
    }
}

/// Add up "<quantity> <unit>" pairs, e.g. "one hour and thirty minutes"
fn scan_duration(text: &str) -> DurationScan {
    let words: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect();

    let mut total: u64 = 0;
    let mut saw_unit = false;
    let mut missing_quantity = false;

    for (i, word) in words.iter().enumerate() {
        let Some(unit) = unit_millis(word) else {
            continue;
        };
        saw_unit = true;

        let half = unit / 2;
        let amount = match &words[..i] {
            // one and a half hours
            [.., "and", "a", "half"] => numbers::quantity_before(&words, i - 3)
                .map(|n| n.saturating_mul(unit).saturating_add(half)),
            // half an hour, half hour
            [.., "half", "a" | "an"] | [.., "half"] => Some(half),
            _ => numbers::quantity_before(&words, i).map(|n| n.saturating_mul(unit)),
        };
        // an hour and a half
        let amount = match &words[i + 1..] {
            ["and", "a", "half", ..] => amount.map(|a| a.saturating_add(half)),
            _ => amount,
        };

        match amount {
            Some(ms) => total = total.saturating_add(ms),
            None => missing_quantity = true,
        }
    }

    match (saw_unit, missing_quantity, total) {
        (false, _, _) => DurationScan::NoUnits,
        (true, true, _) => DurationScan::MissingQuantity,
        (true, false, 0) => DurationScan::Zero,
        (true, false, total) => DurationScan::Found(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedCommand {
        CommandParser::default().parse(text)
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn alarm_time(text: &str) -> NaiveTime {
        match parse(text) {
            ParsedCommand::Alarm { time, .. } => time,
            other => panic!("expected alarm for {:?}, got {:?}", text, other),
        }
    }

    fn timer_millis(text: &str) -> u64 {
        match parse(text) {
            ParsedCommand::Timer {
                duration_millis, ..
            } => duration_millis,
            other => panic!("expected timer for {:?}, got {:?}", text, other),
        }
    }

    #[test]
    fn test_alarm_with_word_and_am() {
        assert_eq!(
            parse("set alarm for seven am"),
            ParsedCommand::Alarm {
                time: time(7, 0),
                is_explicit_time: true,
                label: None,
            }
        );
    }

    #[test]
    fn test_alarm_digits_am_pm() {
        assert_eq!(alarm_time("set alarm for 7 AM"), time(7, 0));
        assert_eq!(alarm_time("set alarm for 8 PM"), time(20, 0));
        assert_eq!(alarm_time("alarm at 6:30 AM"), time(6, 30));
        assert_eq!(alarm_time("wake me up at 9:45 PM"), time(21, 45));
        assert_eq!(alarm_time("set alarm for 12 AM"), time(0, 0));
        assert_eq!(alarm_time("alarm at 12 PM"), time(12, 0));
        assert_eq!(alarm_time("alarm at 7am"), time(7, 0));
        assert_eq!(alarm_time("alarm at 7 p.m."), time(19, 0));
    }

    #[test]
    fn test_alarm_24_hour() {
        assert_eq!(alarm_time("set alarm for 19:30"), time(19, 30));
        assert_eq!(alarm_time("alarm at 08:15"), time(8, 15));
        assert_eq!(alarm_time("alarm at 0:30"), time(0, 30));
    }

    #[test]
    fn test_clock_digits_with_day_part() {
        assert_eq!(
            parse("alarm at 8:30 in the evening"),
            ParsedCommand::Alarm {
                time: time(20, 30),
                is_explicit_time: true,
                label: None,
            }
        );
        assert_eq!(alarm_time("set alarm for 8:30 tonight"), time(20, 30));
        assert_eq!(alarm_time("alarm at 12:15 at night"), time(12, 15));
        assert_eq!(alarm_time("alarm at 12:15 in the morning"), time(0, 15));
        assert_eq!(alarm_time("alarm at 6:45 in the morning"), time(6, 45));
        assert_eq!(alarm_time("alarm at 19:30 in the evening"), time(19, 30));
    }

    #[test]
    fn test_alarm_word_forms() {
        assert_eq!(alarm_time("set alarm for seven o'clock"), time(7, 0));
        assert_eq!(alarm_time("alarm at eight thirty"), time(8, 30));
        assert_eq!(alarm_time("wake me up at nine PM"), time(21, 0));
        assert_eq!(alarm_time("alarm at seven twenty five"), time(7, 25));
        assert_eq!(alarm_time("alarm at eight o four"), time(8, 4));
        assert_eq!(alarm_time("alarm eight five"), time(8, 5));
        assert_eq!(alarm_time("alarm twenty past seven"), time(7, 20));
        assert_eq!(alarm_time("alarm quarter past six in the evening"), time(18, 15));
        assert_eq!(alarm_time("alarm one thirty"), time(1, 30));
        assert_eq!(alarm_time("wake me up at eleven fifteen tonight"), time(23, 15));
        assert_eq!(alarm_time("alarm at twelve in the morning"), time(0, 0));
    }

    #[test]
    fn test_alarm_bare_digits_and_named_times() {
        assert_eq!(alarm_time("set alarm for 7"), time(7, 0));
        assert_eq!(alarm_time("alarm at 18"), time(18, 0));
        assert_eq!(alarm_time("alarm for 9 tonight"), time(21, 0));
        assert_eq!(alarm_time("alarm at noon"), time(12, 0));
        assert_eq!(alarm_time("alarm at midnight"), time(0, 0));
    }

    #[test]
    fn test_explicit_flag() {
        let explicit = |text: &str| match parse(text) {
            ParsedCommand::Alarm {
                is_explicit_time, ..
            } => is_explicit_time,
            other => panic!("expected alarm, got {:?}", other),
        };
        assert!(explicit("wake me up at seven in the morning"));
        assert!(explicit("alarm for six pm"));
        assert!(explicit("alarm at eight tonight"));
        // "alarm" contains "am" but is not a qualifier
        assert!(!explicit("set alarm for seven"));
        assert!(!explicit("set alarm for 19:30"));
    }

    #[test]
    fn test_timer_durations() {
        assert_eq!(
            parse("timer for five minutes"),
            ParsedCommand::Timer {
                duration_millis: 300_000,
                label: None,
            }
        );
        assert_eq!(timer_millis("timer for one hour and thirty minutes"), 5_400_000);
        assert_eq!(timer_millis("set timer for 1 minute"), 60_000);
        assert_eq!(timer_millis("timer 10 min"), 600_000);
        assert_eq!(timer_millis("countdown 30 seconds"), 30_000);
        assert_eq!(timer_millis("timer 45 sec"), 45_000);
        assert_eq!(timer_millis("timer 1 hr"), 3_600_000);
        assert_eq!(timer_millis("set timer for 1 hour 15 minutes 30 seconds"), 4_530_000);
        assert_eq!(timer_millis("countdown ten seconds"), 10_000);
        assert_eq!(timer_millis("timer seventy five seconds"), 75_000);
        assert_eq!(timer_millis("timer for an hour"), 3_600_000);
        assert_eq!(timer_millis("timer 5min"), 300_000);
        assert_eq!(timer_millis("count down 2 minutes"), 120_000);
    }

    #[test]
    fn test_timer_halves() {
        assert_eq!(timer_millis("timer for half an hour"), 1_800_000);
        assert_eq!(timer_millis("timer for an hour and a half"), 5_400_000);
        assert_eq!(timer_millis("timer for one and a half hours"), 5_400_000);
        assert_eq!(timer_millis("timer for half a minute"), 30_000);
        assert_eq!(timer_millis("timer 2 and a half minutes"), 150_000);
        assert_eq!(timer_millis("timer for half hour"), 1_800_000);
        assert!(matches!(
            parse("timer for and a half minutes"),
            ParsedCommand::ParseError { .. }
        ));
    }

    #[test]
    fn test_labels() {
        match parse("set alarm for 7 AM called morning alarm") {
            ParsedCommand::Alarm { time: t, label, .. } => {
                assert_eq!(t, time(7, 0));
                assert_eq!(label.as_deref(), Some("morning alarm"));
            }
            other => panic!("expected alarm, got {:?}", other),
        }

        match parse("set timer for 5 minutes named workout") {
            ParsedCommand::Timer {
                duration_millis,
                label,
            } => {
                assert_eq!(duration_millis, 300_000);
                assert_eq!(label.as_deref(), Some("workout"));
            }
            other => panic!("expected timer, got {:?}", other),
        }

        // label words never leak into the quantities
        assert_eq!(timer_millis("timer for ten minutes called two eggs"), 600_000);
    }

    #[test]
    fn test_quoted_labels() {
        assert_eq!(
            parse("timer for 5 minutes \"pasta\""),
            ParsedCommand::Timer {
                duration_millis: 300_000,
                label: Some("pasta".to_string()),
            }
        );
        assert_eq!(
            parse("alarm at 7 am \u{201c}gym day\u{201d}"),
            ParsedCommand::Alarm {
                time: time(7, 0),
                is_explicit_time: true,
                label: Some("gym day".to_string()),
            }
        );
        assert!(matches!(
            parse("alarm at 6 pm called \"dinner\""),
            ParsedCommand::Alarm { label: Some(l), .. } if l == "dinner"
        ));
    }

    #[test]
    fn test_no_label_is_none() {
        assert!(matches!(
            parse("timer for five minutes"),
            ParsedCommand::Timer { label: None, .. }
        ));
        assert!(matches!(
            parse("timer for five minutes named"),
            ParsedCommand::Timer { label: None, .. }
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("set alarm for tomorrow"),
            ParsedCommand::ParseError {
                message: TIME_NOT_UNDERSTOOD.to_string()
            }
        );
        assert!(matches!(parse("set timer"), ParsedCommand::ParseError { .. }));
        assert!(matches!(parse("set timer for 0 minutes"), ParsedCommand::ParseError { .. }));
        assert!(matches!(parse("timer for minutes"), ParsedCommand::ParseError { .. }));
        assert!(matches!(parse("wake me up in 5 minutes"), ParsedCommand::ParseError { .. }));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            parse("what time is it"),
            ParsedCommand::Unknown {
                original_text: "what time is it".to_string()
            }
        );
        assert!(matches!(parse("hello world"), ParsedCommand::Unknown { .. }));
        assert!(matches!(parse(""), ParsedCommand::Unknown { .. }));
        assert!(matches!(parse("   "), ParsedCommand::Unknown { .. }));
    }

    #[test]
    fn test_inferred_commands() {
        assert_eq!(timer_millis("five minutes"), 300_000);
        assert_eq!(alarm_time("seven thirty pm"), time(19, 30));
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(alarm_time("SET ALARM FOR 7 AM"), time(7, 0));
        assert_eq!(timer_millis("SeT tImEr FoR 5 MiNuTeS"), 300_000);
        assert_eq!(alarm_time("  set   alarm   for   7   AM  "), time(7, 0));
    }

    #[test]
    fn test_custom_keywords() {
        let config = VoiceConfig {
            alarm_keywords: vec!["Rouse me".to_string()],
            ..VoiceConfig::default()
        };
        let parser = CommandParser::new(&config);
        assert!(matches!(
            parser.parse("rouse me at six"),
            ParsedCommand::Alarm { .. }
        ));
    }
}
