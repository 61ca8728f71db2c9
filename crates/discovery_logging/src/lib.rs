#![deny(missing_docs)]
//! Shared logging utilities for the discovery workspace.
//!
//! This crate provides the `discovery_*` logging macros used across the
//! codebase and a minimal test initializer for the global logger. Every
//! message logged while a simulation run is active is prefixed with its run id.

use std::sync::atomic::{AtomicU64, Ordering};

#[doc(hidden)]
pub use log;

/// Run id of the simulation currently driven by the runtime; 0 when none.
static ACTIVE_RUN: AtomicU64 = AtomicU64::new(0);

/// Records the run id that subsequent log lines are attributed to.
/// Pass 0 to clear the attribution.
pub fn set_active_run(run_id: u64) {
    ACTIVE_RUN.store(run_id, Ordering::Relaxed);
}

/// Returns the run id log lines are currently attributed to (0 if none).
pub fn active_run() -> u64 {
    ACTIVE_RUN.load(Ordering::Relaxed)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __discovery_log {
    ($level:ident, $($arg:tt)*) => {{
        let run = $crate::active_run();
        if run == 0 {
            $crate::log::$level!($($arg)*);
        } else {
            $crate::log::$level!("[run {}] {}", run, format_args!($($arg)*));
        }
    }};
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! discovery_trace {
    ($($arg:tt)*) => { $crate::__discovery_log!(trace, $($arg)*) };
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! discovery_debug {
    ($($arg:tt)*) => { $crate::__discovery_log!(debug, $($arg)*) };
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! discovery_info {
    ($($arg:tt)*) => { $crate::__discovery_log!(info, $($arg)*) };
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! discovery_warn {
    ($($arg:tt)*) => { $crate::__discovery_log!(warn, $($arg)*) };
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! discovery_error {
    ($($arg:tt)*) => { $crate::__discovery_log!(error, $($arg)*) };
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
