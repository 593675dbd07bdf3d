//! Prelude module for Pin Field.
//!
//! ```
//! use pin_field::prelude::*;
//! ```

// ============================================================================
// Widget
// ============================================================================

pub use crate::{FocusPolicy, PinField};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::{Color, DecorationStyle, EchoMode, Font, KeyboardHint, PinFieldConfig};

// ============================================================================
// Rendering
// ============================================================================

pub use crate::{CellLayout, CellView, CellVisual, Decoration, DirectiveBuffer, TextMeasure};

// ============================================================================
// Input and Signals
// ============================================================================

pub use crate::{ConnectionId, KeyInput, Signal};
