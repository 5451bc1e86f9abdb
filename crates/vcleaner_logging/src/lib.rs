#![deny(missing_docs)]
//! Shared logging utilities for the vcleaner workspace.
//!
//! This crate provides the `vcleaner_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. The macros expand to the
//! `log` facade re-exported from here, so callers do not need their own `log`
//! dependency.

#[doc(hidden)]
pub use log as __log;

/// Logs a message at a level chosen at runtime.
#[macro_export]
macro_rules! vcleaner_log {
    ($level:expr, $($arg:tt)+) => {{
        $crate::__log::log!($level, $($arg)+);
    }};
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! vcleaner_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! vcleaner_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! vcleaner_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! vcleaner_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! vcleaner_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Initializes a simple stderr logger for use in tests.
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

    // Stdout belongs to the reports under test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    )]);
}
