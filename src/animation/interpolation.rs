// Interpolation utilities for camera moves

use std::f32::consts::{PI, TAU};

/// Linear progress of an animation, clamped to `[0, 1]`.
/// A non-positive duration is complete immediately.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 || !duration_ms.is_finite() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0) as f32
}

/// Cubic ease-out: fast start, settles into the target.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// One full sine cycle over `t in [0, 1]`; zero at both ends.
pub fn oscillation(t: f32) -> f32 {
    (t * TAU).sin()
}

/// Signed azimuthal delta from `from` to `to` along the shorter way round,
/// in `(-pi, pi]`. Exactly opposite angles resolve to `+pi`.
pub fn shortest_azimuth_delta(from: f32, to: f32) -> f32 {
    let mut delta = (to - from) % TAU;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    delta
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::CubicOut => ease_out_cubic(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn ease_out_cubic_endpoints_and_monotonic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mut last = ease_out_cubic(0.0);
        for i in 1..=100 {
            let next = ease_out_cubic(i as f32 / 100.0);
            assert!(next > last, "not increasing at step {i}");
            last = next;
        }
    }

    #[test]
    fn progress_clamps() {
        assert_eq!(progress(-5.0, 1000.0), 0.0);
        assert_eq!(progress(500.0, 1000.0), 0.5);
        assert_eq!(progress(5000.0, 1000.0), 1.0);
        assert_eq!(progress(0.0, 0.0), 1.0);
        assert_eq!(progress(0.0, -10.0), 1.0);
    }

    #[test]
    fn shortest_delta_stays_within_half_turn() {
        let samples = [-7.0_f32, -PI, -3.0, -FRAC_PI_2, -0.1, 0.0, 0.1, FRAC_PI_2, 3.0, PI, 7.0, 12.5];
        for &from in &samples {
            for &to in &samples {
                let delta = shortest_azimuth_delta(from, to);
                assert!(delta > -PI - 1e-5 && delta <= PI + 1e-5, "{from} -> {to} gave {delta}");
                // Lands on the same direction as the requested target.
                let landed = from + delta;
                assert_abs_diff_eq!(landed.sin(), to.sin(), epsilon = 1e-4);
                assert_abs_diff_eq!(landed.cos(), to.cos(), epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn opposite_direction_is_consistent() {
        assert_abs_diff_eq!(shortest_azimuth_delta(0.0, PI), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(shortest_azimuth_delta(0.0, -PI), PI, epsilon = 1e-6);
    }

    #[test]
    fn three_quarter_turn_goes_the_short_way() {
        assert_abs_diff_eq!(shortest_azimuth_delta(0.0, 1.5 * PI), -FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(shortest_azimuth_delta(-FRAC_PI_2, PI), -FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn oscillation_returns_to_zero() {
        assert_abs_diff_eq!(oscillation(0.0), 0.0);
        assert_abs_diff_eq!(oscillation(0.25), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(oscillation(1.0), 0.0, epsilon = 1e-6);
    }
}
