//! Easing functions for the indicator animation.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that shapes how the indicator fades in.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
}

/// Apply an easing function to a progress value.
///
/// # Example
///
/// ```
/// use pin_field::animation::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
///
/// // Ease-out: slower at end
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!((ease(easing, 0.0) - 0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((ease(easing, 1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for easing in ALL {
            assert_eq!(ease(easing, -0.5), ease(easing, 0.0));
            assert_eq!(ease(easing, 1.5), ease(easing, 1.0));
        }
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        let a = ease(Easing::EaseInOut, 0.25);
        let b = ease(Easing::EaseInOut, 0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_eased() {
        assert_eq!(lerp_eased(Easing::Linear, 0.0, 1.0, 0.25), 0.25);
        assert_eq!(lerp_eased(Easing::Linear, 1.0, 0.0, 0.25), 0.75);
    }
}
