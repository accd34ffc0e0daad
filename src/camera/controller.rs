use super::{Orientation, OrbitControls, OrbitRig, SphericalCoordinate};
use crate::animation::{AnimationFrame, AnimationTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Animating,
}

/// Drives the orbit controls through animated orientation changes while
/// keeping the viewing distance.
///
/// Every operation is a silent no-op until controls are mounted. At most one
/// animation runs at a time; starting another one discards the current task
/// without completing it.
pub struct CameraOrbitController<C: OrbitControls = OrbitRig> {
    controls: Option<C>,
    active: Option<AnimationTask>,
}

impl<C: OrbitControls> CameraOrbitController<C> {
    pub fn new() -> Self {
        Self {
            controls: None,
            active: None,
        }
    }

    pub fn with_controls(controls: C) -> Self {
        Self {
            controls: Some(controls),
            active: None,
        }
    }

    pub fn mount(&mut self, controls: C) {
        self.cancel();
        self.controls = Some(controls);
    }

    /// Cancels the pending frame and hands the controls back.
    pub fn unmount(&mut self) -> Option<C> {
        self.cancel();
        self.controls.take()
    }

    pub fn controls(&self) -> Option<&C> {
        self.controls.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.controls.is_some()
    }

    pub fn phase(&self) -> AnimationPhase {
        if self.active.is_some() {
            AnimationPhase::Animating
        } else {
            AnimationPhase::Idle
        }
    }

    pub fn active_task(&self) -> Option<&AnimationTask> {
        self.active.as_ref()
    }

    /// Drops the in-flight task, leaving the camera wherever the last frame
    /// put it.
    pub fn cancel(&mut self) {
        if let Some(task) = self.active.take() {
            log::debug!("camera animation cancelled ({:?})", task.kind);
        }
    }

    pub fn reset(&mut self) {
        let Some(controls) = self.controls.as_mut() else {
            return;
        };
        if let Some(task) = self.active.take() {
            log::debug!("camera reset cancelled {:?}", task.kind);
        }
        controls.reset();
    }

    /// Starts an eased move to `target`, radius held at the current distance.
    pub fn animate_to(&mut self, target: Orientation, duration_ms: f64, now_ms: f64) {
        let Some(controls) = self.controls.as_ref() else {
            return;
        };
        let start = SphericalCoordinate::from_points(&controls.position(), &controls.target());
        self.cancel();
        log::debug!(
            "camera move az {:.3} -> {:.3}, polar {:.3} -> {:.3} over {duration_ms}ms",
            start.azimuthal,
            target.azimuthal,
            start.polar,
            target.polar
        );
        self.active = Some(AnimationTask::orbit(start, target, duration_ms, now_ms));
    }

    /// Starts one full sine sweep of the azimuth, `range` radians either side
    /// of the current orientation.
    pub fn animate_idle_oscillation(&mut self, range: f32, duration_ms: f64, now_ms: f64) {
        let Some(controls) = self.controls.as_ref() else {
            return;
        };
        let start = SphericalCoordinate::from_points(&controls.position(), &controls.target());
        self.cancel();
        log::debug!("idle oscillation +/-{:.3} rad over {duration_ms}ms", range);
        self.active = Some(AnimationTask::idle_oscillation(start, range, duration_ms, now_ms));
    }

    /// Applies one frame of the active task. Returns the frame that was
    /// applied, or `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: f64) -> Option<AnimationFrame> {
        let controls = self.controls.as_mut()?;
        let task = self.active.as_ref()?;
        let frame = task.sample(now_ms);
        let target = controls.target();
        controls.set_position(target + frame.spherical.to_offset());
        controls.update();
        if frame.finished {
            log::trace!("camera animation finished");
            self.active = None;
        }
        Some(frame)
    }

    pub fn orbit_by(&mut self, delta_azimuthal: f32, delta_polar: f32) {
        if let Some(controls) = self.controls.as_mut() {
            controls.rotate(delta_azimuthal, delta_polar);
        }
    }

    pub fn zoom_by(&mut self, scale: f32) {
        if let Some(controls) = self.controls.as_mut() {
            controls.dolly(scale);
        }
    }
}

impl<C: OrbitControls> Default for CameraOrbitController<C> {
    fn default() -> Self {
        Self::new()
    }
}
