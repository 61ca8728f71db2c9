use std::sync::Arc;

use discovery_core::{update, validate_submission, AppState, Effect, Msg};
use discovery_logging::{discovery_debug, discovery_info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::timer::{ChannelEventSink, EventSink, TimerSlot};
use crate::{EngineError, EngineEvent, Notification};

/// Cloneable input side of a running [`SearchRuntime`].
#[derive(Debug, Clone)]
pub struct SearchHandle {
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl SearchHandle {
    /// Validates and submits a search. A search already in flight is cancelled
    /// and restarted from the first stage.
    pub fn submit_search<S: AsRef<str>>(
        &self,
        query: &str,
        languages: &[S],
    ) -> Result<(), EngineError> {
        let request = validate_submission(query, languages)?;
        self.send(Msg::SubmitSearch {
            query: request.query,
            languages: request.languages,
        })
    }

    pub fn new_search(&self) -> Result<(), EngineError> {
        self.send(Msg::NewSearchClicked)
    }

    pub fn send(&self, msg: Msg) -> Result<(), EngineError> {
        self.msg_tx.send(msg).map_err(|_| EngineError::Closed)
    }
}

/// Owns the search state and applies messages to it one at a time.
///
/// Timer callbacks come back in as [`EngineEvent`]s; progress and results go
/// out to the consumer as [`Notification`]s.
pub struct SearchRuntime {
    state: AppState,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    event_rx: mpsc::UnboundedReceiver<EngineEvent>,
    sink: Arc<dyn EventSink>,
    timer: TimerSlot,
    notify_tx: mpsc::UnboundedSender<Notification>,
}

impl SearchRuntime {
    pub fn new(
        state: AppState,
    ) -> (Self, SearchHandle, mpsc::UnboundedReceiver<Notification>) {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (notify_tx, notify_rx) = mpsc::unbounded_channel();

        let runtime = Self {
            state,
            msg_rx,
            event_rx,
            sink: Arc::new(ChannelEventSink::new(event_tx)),
            timer: TimerSlot::new(),
            notify_tx,
        };
        (runtime, SearchHandle { msg_tx }, notify_rx)
    }

    /// Processes messages until every [`SearchHandle`] is dropped.
    pub async fn run(mut self) {
        loop {
            let msg = tokio::select! {
                biased;
                msg = self.msg_rx.recv() => match msg {
                    Some(msg) => msg,
                    None => break,
                },
                Some(event) = self.event_rx.recv() => match event {
                    EngineEvent::TimerFired { run_id } => Msg::TimerFired { run_id },
                },
            };
            self.dispatch(msg);
        }

        self.timer.cancel();
        discovery_debug!("search runtime stopped");
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SearchRequested {
                run_id,
                query,
                languages,
            } => {
                discovery_logging::set_active_run(run_id);
                // No backend yet; the payload is only recorded.
                discovery_info!("search payload query={:?} languages={:?}", query, languages);
            }
            Effect::ScheduleTimer { run_id, delay } => {
                self.timer.arm(run_id, delay, self.sink.clone());
            }
            Effect::CancelTimer => {
                self.timer.cancel();
            }
            Effect::ProgressChanged {
                run_id,
                stage_index,
                percent,
            } => {
                let _ = self.notify_tx.send(Notification::Progress {
                    run_id,
                    stage_index,
                    percent,
                });
            }
            Effect::ResultsReady { run_id, results } => {
                let _ = self
                    .notify_tx
                    .send(Notification::Completed { run_id, results });
                discovery_logging::set_active_run(0);
            }
        }
    }
}

/// Spawns a [`SearchRuntime`] on the current tokio runtime.
pub fn spawn_runtime(
    state: AppState,
) -> (
    SearchHandle,
    mpsc::UnboundedReceiver<Notification>,
    JoinHandle<()>,
) {
    let (runtime, handle, notifications) = SearchRuntime::new(state);
    let task = tokio::spawn(runtime.run());
    (handle, notifications, task)
}
