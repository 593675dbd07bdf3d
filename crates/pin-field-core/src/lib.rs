//! Core systems for Pin Field.
//!
//! This crate provides the foundational pieces the segmented entry widget is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe change notification without ownership
//!   of the listener
//! - **Logging**: `tracing` targets, span names and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use pin_field_core::Signal;
//!
//! // Create a signal that notifies when the entered value changes
//! let value_changed = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit("12".to_string());
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::SignalError;
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
