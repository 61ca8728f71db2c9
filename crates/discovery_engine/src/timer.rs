use std::sync::Arc;
use std::time::Duration;

use discovery_core::RunId;
use discovery_logging::discovery_trace;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::EngineEvent;

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::UnboundedSender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

struct ArmedTimer {
    run_id: RunId,
    token: CancellationToken,
    task: JoinHandle<()>,
}

/// Holds at most one scheduled callback.
///
/// Arming cancels whatever was armed before, so a run can never have two
/// timers in flight. Must be used from within a tokio runtime.
#[derive(Default)]
pub struct TimerSlot {
    armed: Option<ArmedTimer>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, run_id: RunId, delay: Duration, sink: Arc<dyn EventSink>) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let task = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    sink.emit(EngineEvent::TimerFired { run_id });
                }
            }
        });

        discovery_trace!("timer armed for run {} in {:?}", run_id, delay);
        self.armed = Some(ArmedTimer {
            run_id,
            token,
            task,
        });
    }

    /// Cancels the armed callback, returning the run it belonged to if it had
    /// not fired yet.
    pub fn cancel(&mut self) -> Option<RunId> {
        let armed = self.armed.take()?;
        armed.token.cancel();
        if armed.task.is_finished() {
            None
        } else {
            discovery_trace!("timer for run {} cancelled", armed.run_id);
            Some(armed.run_id)
        }
    }

    /// Run whose callback is still pending, if any.
    pub fn pending_run(&self) -> Option<RunId> {
        self.armed
            .as_ref()
            .filter(|armed| !armed.task.is_finished())
            .map(|armed| armed.run_id)
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
