//! Pin Field - a segmented PIN/password entry widget.
//!
//! A row of a fixed number of single-character cells. Typing fills the next
//! empty cell and backspace clears the last filled one. The cell that will
//! receive the next character carries a pulsing indicator on its decoration.
//!
//! The widget is headless: it owns the input state and decoration policy and
//! tells the host what to render through the [`CellView`] trait.
//!
//! # Example
//!
//! ```
//! use pin_field::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PinFieldConfig::new(4)
//!         .with_decoration_style(DecorationStyle::BottomLine)
//!         .with_echo_mode(EchoMode::Password('•'));
//!     let mut field = PinField::build(config, DirectiveBuffer::new())?;
//!
//!     field.value_changed.connect(|value| {
//!         println!("entered {} characters", value.chars().count());
//!     });
//!
//!     field.insert_text("1234");
//!     assert!(field.is_full());
//!     Ok(())
//! }
//! ```

pub use pin_field_core::{ConnectionGuard, ConnectionId, PerfSpan, Signal, SignalError};

pub mod animation;
mod cell;
mod config;
mod decoration;
mod entry;
mod error;
mod field;
mod keyboard;
mod layout;
pub mod prelude;
mod view;

pub use cell::{Cell, CellVisual};
pub use config::{
    Color, DecorationStyle, EchoMode, Font, InspectorProperties, PinFieldConfig,
    DEFAULT_CAPACITY, DEFAULT_FONT_SIZE, DEFAULT_MASK_CHAR, MAX_CAPACITY,
};
pub use decoration::{Decoration, DecorationController, LineEdge};
pub use entry::EntryState;
pub use error::{Error, Result};
pub use field::{FocusPolicy, PinField};
pub use keyboard::{KeyInput, KeyboardHint};
pub use layout::{CellLayout, Rect, TextMeasure, LINE_THICKNESS};
pub use view::{CellView, Directive, DirectiveBuffer};
