//! The blinking active-cell indicator.

use std::time::{Duration, Instant};

use super::easing::{lerp_eased, Easing};

/// Length of one fade-in cycle of the indicator.
pub const INDICATOR_PERIOD: Duration = Duration::from_millis(400);

/// Opacity animation of the active cell's overlay.
///
/// The opacity ramps from `0.0` to `1.0` over one period, then restarts at
/// `0.0`, repeating until the pulse is dropped. The host drives the actual
/// animation; this type lets hosts that repaint per frame sample it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPulse {
    started_at: Instant,
    period: Duration,
    easing: Easing,
    from: f32,
    to: f32,
}

impl IndicatorPulse {
    /// A pulse with the default period that started at `started_at`.
    pub fn started_at(started_at: Instant) -> Self {
        Self {
            started_at,
            period: INDICATOR_PERIOD,
            easing: Easing::Linear,
            from: 0.0,
            to: 1.0,
        }
    }

    /// Use a different cycle length.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Use a different easing curve within each cycle.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// When the pulse started.
    pub fn start_time(&self) -> Instant {
        self.started_at
    }

    /// Length of one cycle.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Opacity after `elapsed` time since the start.
    pub fn opacity_at(&self, elapsed: Duration) -> f32 {
        if self.period.is_zero() {
            return self.to;
        }
        let cycles = elapsed.as_secs_f64() / self.period.as_secs_f64();
        let progress = cycles.fract() as f32;
        lerp_eased(self.easing, self.from, self.to, progress)
    }

    /// Opacity at the given instant. Instants before the start read as the
    /// start of the first cycle.
    pub fn opacity_at_instant(&self, now: Instant) -> f32 {
        self.opacity_at(now.saturating_duration_since(self.started_at))
    }
}
