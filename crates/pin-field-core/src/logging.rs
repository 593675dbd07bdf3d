//! Logging facilities for Pin Field.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Target and span name constants for filtering by subsystem
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Pin Field uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("pin_field=trace")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout Pin Field for tracing.
pub mod span_names {
    /// Widget construction span.
    pub const BUILD: &str = "pin_field::build";
    /// Layout computation span.
    pub const LAYOUT: &str = "pin_field::layout";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "pin_field_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pin_field_core::signal";
    /// Input state machine target.
    pub const ENTRY: &str = "pin_field::entry";
    /// Cell decoration target.
    pub const DECORATION: &str = "pin_field::decoration";
    /// Layout sizing target.
    pub const LAYOUT: &str = "pin_field::layout";
    /// Configuration validation target.
    pub const CONFIG: &str = "pin_field::config";
    /// Performance span target.
    pub const PERF: &str = "pin_field::perf";
}

/// A guard that records a performance span while alive.
///
/// ```
/// use pin_field_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("layout");
///     // measured work
/// }
/// ```
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Trace-level event under the core target.
#[macro_export]
macro_rules! pin_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

/// Debug-level event under the core target.
#[macro_export]
macro_rules! pin_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
