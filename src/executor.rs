//! Command executor - runs parsed voice commands against the alarm and timer
//! backends and builds the confirmation shown to the user.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveTime;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::command::{CommandParser, ParsedCommand};
use crate::config::{AlarmConfig, Config};
use crate::format::{format_duration, format_time};
use crate::normalize::Normalizer;
use crate::resolver::resolve_time;

pub type AlarmId = u64;
pub type TimerId = u64;

pub const UNKNOWN_COMMAND: &str = "I didn't understand that command";
pub const ALARM_FAILED: &str = "Failed to create alarm";
pub const TIMER_FAILED: &str = "Failed to start timer";

/// Everything needed to create a one-time alarm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmRequest {
    pub time: NaiveTime,
    /// Empty when no label was spoken
    pub label: String,
    pub vibrate: bool,
    pub gradual_volume: bool,
    pub volume_level: u8,
    pub snooze_enabled: bool,
    pub snooze_minutes: u32,
    pub max_snooze_count: u32,
}

impl AlarmRequest {
    pub fn new(time: NaiveTime, label: String, defaults: &AlarmConfig) -> Self {
        Self {
            time,
            label,
            vibrate: defaults.vibrate,
            gradual_volume: defaults.gradual_volume,
            volume_level: defaults.volume_level,
            snooze_enabled: defaults.snooze_enabled,
            snooze_minutes: defaults.snooze_minutes,
            max_snooze_count: defaults.max_snooze_count,
        }
    }
}

/// Creates and schedules alarms
#[async_trait]
pub trait AlarmCreator: Send + Sync {
    async fn create_alarm(&self, request: AlarmRequest) -> Result<AlarmId>;
}

/// Starts countdown timers
#[async_trait]
pub trait TimerStarter: Send + Sync {
    async fn start_timer(&self, duration_millis: u64, label: String) -> Result<TimerId>;
}

/// Watches a started timer until it finishes
pub trait TimerMonitor: Send + Sync {
    fn watch(&self, id: TimerId);
}

/// Outcome shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Success { message: String },
    Error { message: String },
}

impl ExecutionResult {
    fn success(message: String) -> Self {
        ExecutionResult::Success { message }
    }

    fn error(message: impl Into<String>) -> Self {
        ExecutionResult::Error {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ExecutionResult::Success { message } | ExecutionResult::Error { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }
}

/// Voice command pipeline: normalize -> parse -> execute
pub struct VoiceCommandExecutor {
    normalizer: Normalizer,
    parser: CommandParser,
    alarm_defaults: AlarmConfig,
    alarms: Arc<dyn AlarmCreator>,
    timers: Arc<dyn TimerStarter>,
    monitor: Arc<dyn TimerMonitor>,
}

impl VoiceCommandExecutor {
    pub fn new(
        config: &Config,
        alarms: Arc<dyn AlarmCreator>,
        timers: Arc<dyn TimerStarter>,
        monitor: Arc<dyn TimerMonitor>,
    ) -> Self {
        Self {
            normalizer: Normalizer::from_config(&config.voice),
            parser: CommandParser::new(&config.voice),
            alarm_defaults: config.alarm.clone(),
            alarms,
            timers,
            monitor,
        }
    }

    /// Normalize, parse and execute one recognized utterance
    pub async fn execute_voice_command(
        &self,
        recognized_text: &str,
        now: NaiveTime,
    ) -> ExecutionResult {
        debug!("Executing voice command: {}", recognized_text);

        let normalized = self.normalizer.normalize(recognized_text);
        if normalized != recognized_text {
            debug!("Normalized to: {}", normalized);
        }

        let command = self.parser.parse(&normalized);
        self.execute(command, now).await
    }

    /// Execute an already parsed command
    pub async fn execute(&self, command: ParsedCommand, now: NaiveTime) -> ExecutionResult {
        match command {
            ParsedCommand::Alarm {
                time,
                is_explicit_time,
                label,
            } => self.execute_alarm(time, is_explicit_time, label, now).await,
            ParsedCommand::Timer {
                duration_millis,
                label,
            } => self.execute_timer(duration_millis, label).await,
            ParsedCommand::Unknown { original_text } => {
                warn!("Unknown command: {}", original_text);
                ExecutionResult::error(UNKNOWN_COMMAND)
            }
            ParsedCommand::ParseError { message } => {
                warn!("Parse error: {}", message);
                ExecutionResult::error(message)
            }
        }
    }

    async fn execute_alarm(
        &self,
        time: NaiveTime,
        is_explicit_time: bool,
        label: Option<String>,
        now: NaiveTime,
    ) -> ExecutionResult {
        let resolved = resolve_time(time, is_explicit_time, now);
        debug!(
            "Creating alarm for {} (original: {}, explicit: {})",
            resolved, time, is_explicit_time
        );

        let request = AlarmRequest::new(
            resolved,
            label.clone().unwrap_or_default(),
            &self.alarm_defaults,
        );
        match self.alarms.create_alarm(request).await {
            Ok(id) => {
                info!("Alarm {} created for {}", id, resolved);
                ExecutionResult::success(format!(
                    "Alarm set for {}{}",
                    format_time(resolved),
                    label_suffix(label.as_deref())
                ))
            }
            Err(e) => {
                // Cause stays in the log
                error!("Error creating alarm: {:#}", e);
                ExecutionResult::error(ALARM_FAILED)
            }
        }
    }

    async fn execute_timer(&self, duration_millis: u64, label: Option<String>) -> ExecutionResult {
        debug!("Starting timer for {}ms", duration_millis);

        let id = match self
            .timers
            .start_timer(duration_millis, label.clone().unwrap_or_default())
            .await
        {
            Ok(id) => id,
            Err(e) => {
                error!("Failed to start timer: {:#}", e);
                let message = e.to_string();
                return ExecutionResult::error(if message.is_empty() {
                    TIMER_FAILED.to_string()
                } else {
                    message
                });
            }
        };

        debug!("Monitoring timer {}", id);
        self.monitor.watch(id);

        ExecutionResult::success(format!(
            "Timer set for {}{}",
            format_duration(duration_millis),
            label_suffix(label.as_deref())
        ))
    }
}

fn label_suffix(label: Option<&str>) -> String {
    label.map(|l| format!(" '{}'", l)).unwrap_or_default()
}
