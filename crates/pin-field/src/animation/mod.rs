//! Animation support for the active-cell indicator.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use pin_field::animation::IndicatorPulse;
//!
//! let pulse = IndicatorPulse::started_at(Instant::now());
//! let opacity = pulse.opacity_at(Duration::from_millis(200));
//! assert!((opacity - 0.5).abs() < 1e-4);
//! ```

mod easing;
mod pulse;

pub use easing::{ease, lerp_eased, Easing};
pub use pulse::{IndicatorPulse, INDICATOR_PERIOD};
