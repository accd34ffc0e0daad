// Animation task record

use super::interpolation::{Easing, lerp, oscillation, progress, shortest_azimuth_delta};
use crate::camera::{Orientation, SphericalCoordinate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// Eased move to an authored orientation.
    Orbit {
        delta_azimuthal: f32,
        target_polar: f32,
    },
    /// Full sine sweep of the azimuth around its start value.
    IdleOscillation { range: f32 },
}

/// One in-flight camera animation. Radius is taken from `start` and never
/// changes while the task runs.
#[derive(Debug, Clone)]
pub struct AnimationTask {
    pub kind: AnimationKind,
    pub start: SphericalCoordinate,
    pub started_at_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

/// Camera pose for one frame of a task.
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrame {
    pub spherical: SphericalCoordinate,
    pub progress: f32,
    pub finished: bool,
}

impl AnimationTask {
    pub fn orbit(
        start: SphericalCoordinate,
        target: Orientation,
        duration_ms: f64,
        now_ms: f64,
    ) -> Self {
        Self {
            kind: AnimationKind::Orbit {
                delta_azimuthal: shortest_azimuth_delta(start.azimuthal, target.azimuthal),
                target_polar: target.polar,
            },
            start,
            started_at_ms: now_ms,
            duration_ms,
            easing: Easing::CubicOut,
        }
    }

    pub fn idle_oscillation(
        start: SphericalCoordinate,
        range: f32,
        duration_ms: f64,
        now_ms: f64,
    ) -> Self {
        Self {
            kind: AnimationKind::IdleOscillation { range },
            start,
            started_at_ms: now_ms,
            duration_ms,
            easing: Easing::Linear,
        }
    }

    pub fn progress(&self, now_ms: f64) -> f32 {
        progress(now_ms - self.started_at_ms, self.duration_ms)
    }

    pub fn sample(&self, now_ms: f64) -> AnimationFrame {
        let t = self.progress(now_ms);
        let eased = self.easing.apply(t);
        let spherical = match self.kind {
            AnimationKind::Orbit {
                delta_azimuthal,
                target_polar,
            } => SphericalCoordinate::new(
                self.start.radius,
                lerp(self.start.polar, target_polar, eased),
                self.start.azimuthal + delta_azimuthal * eased,
            ),
            AnimationKind::IdleOscillation { range } => SphericalCoordinate::new(
                self.start.radius,
                self.start.polar,
                self.start.azimuthal + oscillation(eased) * range,
            ),
        };
        AnimationFrame {
            spherical,
            progress: t,
            finished: t >= 1.0,
        }
    }
}
