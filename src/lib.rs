//! Voice commands for an alarm clock: recognized speech in, alarms and
//! timers out.
//!
//! ```text
//! text -> Normalizer -> CommandParser -> ParsedCommand -> VoiceCommandExecutor -> ExecutionResult
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod format;
pub mod monitor;
pub mod normalize;
pub mod numbers;
pub mod repl;
pub mod resolver;
pub mod store;

pub use command::{CommandParser, ParsedCommand};
pub use config::Config;
pub use error::StoreError;
pub use executor::{
    AlarmCreator, AlarmId, AlarmRequest, ExecutionResult, TimerId, TimerMonitor, TimerStarter,
    VoiceCommandExecutor,
};
pub use format::{format_duration, format_time};
pub use monitor::{TimerEvent, TokioTimerMonitor};
pub use normalize::Normalizer;
pub use resolver::resolve_time;
