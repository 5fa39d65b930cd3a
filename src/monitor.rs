//! Timer monitor - one tokio task per started timer, reports when it rings

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::executor::{TimerId, TimerMonitor};
use crate::store::{TimerState, TimerStore};

/// Longest sleep between checks, so pauses and stops are noticed
const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Finished { id: TimerId, label: String },
}

pub struct TokioTimerMonitor {
    store: Arc<TimerStore>,
    events: flume::Sender<TimerEvent>,
}

impl TokioTimerMonitor {
    pub fn new(store: Arc<TimerStore>) -> (Self, flume::Receiver<TimerEvent>) {
        let (events, events_rx) = flume::unbounded();
        (Self { store, events }, events_rx)
    }
}

impl TimerMonitor for TokioTimerMonitor {
    /// Must be called from within a tokio runtime
    fn watch(&self, id: TimerId) {
        let store = Arc::clone(&self.store);
        let events = self.events.clone();
        tokio::spawn(run_watch(store, events, id));
    }
}

async fn run_watch(store: Arc<TimerStore>, events: flume::Sender<TimerEvent>, id: TimerId) {
    loop {
        let Some(timer) = store.get(id) else {
            warn!("Timer {} disappeared while monitored", id);
            return;
        };

        match timer.state {
            TimerState::Running => {
                let remaining = timer.remaining_at(Instant::now());
                if remaining.is_zero() {
                    if let Ok(true) = store.finish(id) {
                        info!("Timer {} finished", id);
                        let _ = events.send(TimerEvent::Finished {
                            id,
                            label: timer.label,
                        });
                    }
                    return;
                }
                tokio::time::sleep(remaining.min(POLL_INTERVAL)).await;
            }
            TimerState::Paused => tokio::time::sleep(POLL_INTERVAL).await,
            TimerState::Finished | TimerState::Stopped => {
                debug!("Timer {} no longer running, monitor exits", id);
                return;
            }
        }
    }
}
