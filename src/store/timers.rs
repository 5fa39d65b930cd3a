//! In-memory countdown timers. At most one timer runs at a time.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::error::StoreError;
use crate::executor::{TimerId, TimerStarter};
use crate::format::format_countdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Paused,
    Finished,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Timer {
    pub id: TimerId,
    pub label: String,
    pub duration: Duration,
    /// Remaining time as of `started_at` (or frozen while paused)
    remaining: Duration,
    started_at: Instant,
    pub state: TimerState,
}

impl Timer {
    pub fn remaining_at(&self, now: Instant) -> Duration {
        match self.state {
            TimerState::Running => self
                .remaining
                .saturating_sub(now.saturating_duration_since(self.started_at)),
            TimerState::Paused => self.remaining,
            TimerState::Finished | TimerState::Stopped => Duration::ZERO,
        }
    }

    /// "MM:SS" or "HH:MM:SS"
    pub fn formatted_remaining(&self, now: Instant) -> String {
        format_countdown(self.remaining_at(now).as_millis() as u64)
    }

    /// Elapsed share of the duration, 0.0 to 1.0
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = self.duration.saturating_sub(self.remaining_at(now));
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Default)]
struct Board {
    last_id: TimerId,
    timers: Vec<Timer>,
}

impl Board {
    fn find(&mut self, id: TimerId) -> Result<&mut Timer, StoreError> {
        self.timers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TimerNotFound(id))
    }
}

#[derive(Default)]
pub struct TimerStore {
    board: Mutex<Board>,
}

impl TimerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn board(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self, duration_millis: u64, label: String) -> Result<TimerId, StoreError> {
        if duration_millis == 0 {
            return Err(StoreError::InvalidDuration);
        }

        let mut board = self.board();
        if let Some(running) = board.timers.iter().find(|t| t.state == TimerState::Running) {
            return Err(StoreError::TimerAlreadyRunning(running.id));
        }

        board.last_id += 1;
        let id = board.last_id;
        let duration = Duration::from_millis(duration_millis);
        board.timers.push(Timer {
            id,
            label,
            duration,
            remaining: duration,
            started_at: Instant::now(),
            state: TimerState::Running,
        });
        Ok(id)
    }

    pub fn pause(&self, id: TimerId) -> Result<(), StoreError> {
        let now = Instant::now();
        let mut board = self.board();
        let timer = board.find(id)?;
        if timer.state != TimerState::Running {
            return Err(StoreError::TimerNotRunning(id));
        }
        timer.remaining = timer.remaining_at(now);
        timer.state = TimerState::Paused;
        Ok(())
    }

    pub fn resume(&self, id: TimerId) -> Result<(), StoreError> {
        let mut board = self.board();
        if let Some(running) = board
            .timers
            .iter()
            .find(|t| t.state == TimerState::Running && t.id != id)
        {
            return Err(StoreError::TimerAlreadyRunning(running.id));
        }
        let timer = board.find(id)?;
        if timer.state != TimerState::Paused {
            return Err(StoreError::TimerNotPaused(id));
        }
        timer.started_at = Instant::now();
        timer.state = TimerState::Running;
        Ok(())
    }

    /// Cancel without ringing
    pub fn stop(&self, id: TimerId) -> Result<(), StoreError> {
        let mut board = self.board();
        let timer = board.find(id)?;
        timer.remaining = Duration::ZERO;
        timer.state = TimerState::Stopped;
        Ok(())
    }

    /// Mark as rung out; returns false if it was no longer running
    pub fn finish(&self, id: TimerId) -> Result<bool, StoreError> {
        let mut board = self.board();
        let timer = board.find(id)?;
        if timer.state != TimerState::Running {
            return Ok(false);
        }
        timer.remaining = Duration::ZERO;
        timer.state = TimerState::Finished;
        Ok(true)
    }

    pub fn get(&self, id: TimerId) -> Option<Timer> {
        self.board().timers.iter().find(|t| t.id == id).cloned()
    }

    pub fn list(&self) -> Vec<Timer> {
        self.board().timers.clone()
    }

    pub fn running(&self) -> Option<Timer> {
        self.board()
            .timers
            .iter()
            .find(|t| t.state == TimerState::Running)
            .cloned()
    }
}

#[async_trait]
impl TimerStarter for TimerStore {
    async fn start_timer(&self, duration_millis: u64, label: String) -> Result<TimerId> {
        Ok(self.start(duration_millis, label)?)
    }
}
