use super::{CameraState, SphericalCoordinate};
use nalgebra_glm as glm;
use std::f32::consts::PI;

/// Keeps the camera off the poles so `look_at` never degenerates.
const POLE_EPSILON: f32 = 1e-3;

/// Orbit-style camera controls: the primitive the orbit controller drives.
/// Writes go through `set_position` and become effective on `update`.
pub trait OrbitControls {
    fn position(&self) -> glm::Vec3;
    fn target(&self) -> glm::Vec3;
    fn set_position(&mut self, position: glm::Vec3);
    /// Commits pending changes, applying the controls' own constraints.
    fn update(&mut self);
    /// Restores the saved pose and commits it.
    fn reset(&mut self);

    /// Direct user rotation, in radians.
    fn rotate(&mut self, delta_azimuthal: f32, delta_polar: f32) {
        let mut spherical = SphericalCoordinate::from_points(&self.position(), &self.target());
        spherical.azimuthal += delta_azimuthal;
        spherical.polar = (spherical.polar + delta_polar).clamp(POLE_EPSILON, PI - POLE_EPSILON);
        self.set_position(self.target() + spherical.to_offset());
        self.update();
    }

    /// Direct user zoom; `scale < 1` moves closer.
    fn dolly(&mut self, scale: f32) {
        let mut spherical = SphericalCoordinate::from_points(&self.position(), &self.target());
        spherical.radius *= scale;
        self.set_position(self.target() + spherical.to_offset());
        self.update();
    }

    fn distance(&self) -> f32 {
        glm::distance(&self.position(), &self.target())
    }
}

/// In-crate orbit controls with a distance range, a fixed pivot and a
/// commit counter the host can poll to know the camera changed.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    state: CameraState,
    min_distance: f32,
    max_distance: f32,
    revision: u64,
}

impl OrbitRig {
    /// Builds the rig and performs the initial commit, so an authored
    /// position outside `[min_distance, max_distance]` is pulled into range
    /// straight away.
    pub fn new(state: CameraState, min_distance: f32, max_distance: f32) -> Self {
        let mut rig = Self {
            state,
            min_distance: min_distance.min(max_distance),
            max_distance: max_distance.max(min_distance),
            revision: 0,
        };
        rig.update();
        rig
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl OrbitControls for OrbitRig {
    fn position(&self) -> glm::Vec3 {
        self.state.position
    }

    fn target(&self) -> glm::Vec3 {
        self.state.target
    }

    fn set_position(&mut self, position: glm::Vec3) {
        self.state.position = position;
    }

    fn update(&mut self) {
        let mut spherical = self.state.spherical();
        spherical.radius = spherical.radius.clamp(self.min_distance, self.max_distance);
        spherical.polar = spherical.polar.clamp(POLE_EPSILON, PI - POLE_EPSILON);
        self.state.set_spherical(&spherical);
        self.revision += 1;
    }

    fn reset(&mut self) {
        self.state.reset();
        self.update();
    }
}
