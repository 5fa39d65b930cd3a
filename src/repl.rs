//! REPL input handling - slash commands for inspecting alarms and timers

use chrono::NaiveDateTime;
use std::sync::Arc;
use std::time::Instant;

use crate::executor::{AlarmId, TimerId};
use crate::format::format_duration;
use crate::store::{AlarmStore, TimerState, TimerStore};

/// Result of a slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Print this
    Say(String),
    Quit,
}

/// Stores the REPL can inspect
pub struct Session {
    pub alarms: Arc<AlarmStore>,
    pub timers: Arc<TimerStore>,
    pub use_24_hour: bool,
}

const HELP: &str = "\
Commands:
  /alarms - List alarms
  /next - Show the next alarm to ring
  /delete <id> - Delete an alarm
  /enable <id>, /disable <id> - Toggle an alarm
  /timers - List timers
  /pause <id>, /resume <id>, /stop <id> - Control a timer
  /help - Show this help
  /quit - Exit

Anything else is treated as a spoken command, e.g.:
  'set alarm for seven thirty am'
  'wake me up at six called gym'
  'timer for five minutes named tea'";

/// Check if input is a slash command
pub fn process_slash_command(
    input: &str,
    session: &Session,
    now: NaiveDateTime,
) -> Option<ReplAction> {
    let input = input.trim();
    let rest = input.strip_prefix('/')?;

    let mut parts = rest.split_whitespace();
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    let action = match cmd.as_str() {
        "alarms" => ReplAction::Say(list_alarms(session)),
        "next" => ReplAction::Say(match session.alarms.next_alarm(now) {
            Some((alarm, at)) => format!(
                "Next alarm: #{} at {} ({})",
                alarm.id,
                alarm.formatted_time(session.use_24_hour),
                at.format("%a %b %-d")
            ),
            None => "No alarms enabled".to_string(),
        }),
        "delete" => with_id(arg, |id: AlarmId| {
            session
                .alarms
                .delete(id)
                .map(|_| format!("Alarm {} deleted", id))
        }),
        "enable" | "disable" => {
            let enabled = cmd == "enable";
            with_id(arg, |id: AlarmId| {
                session
                    .alarms
                    .set_enabled(id, enabled)
                    .map(|_| format!("Alarm {} {}d", id, cmd))
            })
        }
        "timers" => ReplAction::Say(list_timers(session)),
        "pause" => with_id(arg, |id: TimerId| {
            session.timers.pause(id).map(|_| format!("Timer {} paused", id))
        }),
        "resume" => with_id(arg, |id: TimerId| {
            session.timers.resume(id).map(|_| format!("Timer {} resumed", id))
        }),
        "stop" => with_id(arg, |id: TimerId| {
            session.timers.stop(id).map(|_| format!("Timer {} stopped", id))
        }),
        "help" | "commands" => ReplAction::Say(HELP.to_string()),
        "quit" | "exit" => ReplAction::Quit,
        _ => ReplAction::Say(format!("Unknown command /{}. Try /help", cmd)),
    };

    Some(action)
}

fn with_id<E: std::fmt::Display>(
    arg: Option<&str>,
    f: impl FnOnce(u64) -> Result<String, E>,
) -> ReplAction {
    let Some(id) = arg.and_then(|a| a.trim_start_matches('#').parse::<u64>().ok()) else {
        return ReplAction::Say("Expected an id, e.g. /stop 1".to_string());
    };
    match f(id) {
        Ok(message) => ReplAction::Say(message),
        Err(e) => ReplAction::Say(e.to_string()),
    }
}

fn list_alarms(session: &Session) -> String {
    let alarms = session.alarms.list();
    if alarms.is_empty() {
        return "No alarms".to_string();
    }

    alarms
        .iter()
        .map(|a| {
            let mut line = format!(
                "#{} {} [{}]",
                a.id,
                a.formatted_time(session.use_24_hour),
                if a.enabled { "on" } else { "off" }
            );
            if !a.label.is_empty() {
                line.push_str(&format!(" '{}'", a.label));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_timers(session: &Session) -> String {
    let timers = session.timers.list();
    if timers.is_empty() {
        return "No timers".to_string();
    }

    let now = Instant::now();
    timers
        .iter()
        .map(|t| {
            let state = match t.state {
                TimerState::Running => "running",
                TimerState::Paused => "paused",
                TimerState::Finished => "finished",
                TimerState::Stopped => "stopped",
            };
            let mut line = format!(
                "#{} {} of {} ({}, {:.0}%)",
                t.id,
                t.formatted_remaining(now),
                format_duration(t.duration.as_millis() as u64),
                state,
                t.progress(now) * 100.0
            );
            if !t.label.is_empty() {
                line.push_str(&format!(" '{}'", t.label));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
