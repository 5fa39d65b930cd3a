//! In-memory alarm and timer stores backing the voice executor

pub mod alarms;
pub mod timers;

pub use alarms::{Alarm, AlarmStore};
pub use timers::{Timer, TimerState, TimerStore};
