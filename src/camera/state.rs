use super::SphericalCoordinate;
use nalgebra_glm as glm;

/// Camera position and pivot, plus the authored pose `reset` returns to.
#[derive(Debug, Clone)]
pub struct CameraState {
    pub position: glm::Vec3,
    pub target: glm::Vec3,
    pub default_position: glm::Vec3,
    pub default_target: glm::Vec3,
}

impl CameraState {
    pub fn new(position: glm::Vec3, target: glm::Vec3) -> Self {
        Self {
            position,
            target,
            default_position: position,
            default_target: target,
        }
    }

    pub fn reset(&mut self) {
        self.position = self.default_position;
        self.target = self.default_target;
    }

    pub fn distance(&self) -> f32 {
        glm::distance(&self.position, &self.target)
    }

    pub fn spherical(&self) -> SphericalCoordinate {
        SphericalCoordinate::from_points(&self.position, &self.target)
    }

    /// Places the camera on the sphere around the current target.
    pub fn set_spherical(&mut self, spherical: &SphericalCoordinate) {
        self.position = self.target + spherical.to_offset();
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &self.target, &glm::vec3(0.0, 1.0, 0.0))
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(glm::vec3(-15.0, 0.0, 10.0), glm::vec3(0.0, 0.0, 0.0))
    }
}
