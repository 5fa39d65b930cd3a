//! Error types for the alarm and timer stores

use thiserror::Error;

use crate::executor::{AlarmId, TimerId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duration must be positive")]
    InvalidDuration,

    #[error("Cannot start timer: Timer {0} is already running")]
    TimerAlreadyRunning(TimerId),

    #[error("Alarm {0} not found")]
    AlarmNotFound(AlarmId),

    #[error("Timer {0} not found")]
    TimerNotFound(TimerId),

    #[error("Timer {0} is not paused")]
    TimerNotPaused(TimerId),

    #[error("Timer {0} is not running")]
    TimerNotRunning(TimerId),
}
