//! Discovery engine: timer slot and async runtime executing core effects.
mod runtime;
mod timer;
mod types;

pub use runtime::{spawn_runtime, SearchHandle, SearchRuntime};
pub use timer::{ChannelEventSink, EventSink, TimerSlot};
pub use types::{EngineError, EngineEvent, Notification};
