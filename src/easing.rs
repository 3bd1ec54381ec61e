//! Easing curves for slot transitions.
//!
//! An [`Easing`] maps animation progress `t` in `[0, 1]` to an eased fraction
//! in `[0, 1]`. The default is [`Easing::AccelerateDecelerate`], a cosine
//! ease-in-ease-out that starts and ends slowly.

use serde::{Deserialize, Serialize};

/// Easing function applied to a transition's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic ease-in (slow start, fast finish).
    Accelerate,
    /// Quadratic ease-out (fast start, slow finish).
    Decelerate,
    /// Cosine ease-in-ease-out.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Applies the easing function to a progress value in `[0, 1]`.
    ///
    /// Input outside the unit range is clamped. Endpoints are exact:
    /// `apply(0.0) == 0.0` and `apply(1.0) == 1.0` for every curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Accelerate => t * t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::AccelerateDecelerate => {
                // cos((t + 1) * pi) / 2 + 0.5, exact at both endpoints
                ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::Accelerate,
        Easing::Decelerate,
        Easing::AccelerateDecelerate,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at t=0", easing);
            assert!(
                (easing.apply(1.0) - 1.0).abs() < 1e-6,
                "{:?} at t=1",
                easing
            );
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for step in 1..=100 {
                let next = easing.apply(step as f32 / 100.0);
                assert!(next >= prev - 1e-6, "{:?} not monotonic at step {}", easing, step);
                prev = next;
            }
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), easing.apply(0.0));
            assert!((easing.apply(1.5) - easing.apply(1.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn accelerate_decelerate_is_symmetric() {
        let easing = Easing::AccelerateDecelerate;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
        for step in 0..=50 {
            let t = step as f32 / 100.0;
            let a = easing.apply(t);
            let b = easing.apply(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-5);
        }
    }
}
