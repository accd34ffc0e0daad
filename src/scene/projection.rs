use crate::camera::CameraState;
use crate::settings::DisplaySettings;
use nalgebra_glm as glm;

/// Perspective lens of the page camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
        }
    }

    pub fn from_settings(display: &DisplaySettings, width: u32, height: u32) -> Self {
        Self::new(
            display.fov_y_degrees.to_radians(),
            aspect_ratio(width, height),
            display.near_plane,
            display.far_plane,
        )
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn matrix(&self) -> glm::Mat4 {
        glm::perspective(self.aspect, self.fov_y, self.near, self.far)
    }

    pub fn view_proj(&self, camera: &CameraState) -> glm::Mat4 {
        self.matrix() * camera.view_matrix()
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(50.0_f32.to_radians(), 1.0, 0.1, 2000.0)
    }
}

/// Normalised device coordinates of `point`, or `None` when it sits on or
/// behind the camera plane (`w <= 0`). Depth follows the OpenGL convention:
/// `-1` at the near plane, `1` at the far plane.
pub fn project(view_proj: &glm::Mat4, point: &glm::Vec3) -> Option<glm::Vec3> {
    let clip = view_proj * glm::vec4(point.x, point.y, point.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(glm::vec3(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w))
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    // Minimised windows report zero; keep the matrix finite.
    if width == 0 || height == 0 {
        return 1.0;
    }
    width as f32 / height as f32
}
