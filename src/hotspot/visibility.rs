use crate::camera::CameraState;
use crate::product::Hotspot;
use crate::scene::{Projection, Ray, Scene, projection};
use nalgebra_glm as glm;

/// Why a hotspot is or is not drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    Visible,
    /// On or behind the camera plane; no ray was cast.
    BehindCamera,
    /// Geometry sits between the camera and the hotspot.
    Occluded { hit_distance: f32 },
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Decides per frame which hotspot markers are drawn. Stateless: the result
/// depends only on the camera and the scene geometry passed in.
#[derive(Debug, Clone, Copy)]
pub struct HotspotVisibilityEvaluator {
    epsilon: f32,
}

impl HotspotVisibilityEvaluator {
    pub const DEFAULT_EPSILON: f32 = 0.2;

    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    pub fn classify(
        &self,
        point: &glm::Vec3,
        camera: &CameraState,
        view_proj: &glm::Mat4,
        scene: &Scene,
    ) -> Visibility {
        let in_front = projection::project(view_proj, point).is_some_and(|ndc| ndc.z < 1.0);
        if !in_front {
            return Visibility::BehindCamera;
        }

        let Some(ray) = Ray::towards(&camera.position, point) else {
            return Visibility::BehindCamera;
        };
        let distance = glm::distance(&camera.position, point);
        match scene.raycast(&ray) {
            Some(hit) if hit.distance < distance - self.epsilon => Visibility::Occluded {
                hit_distance: hit.distance,
            },
            _ => Visibility::Visible,
        }
    }

    /// Recomputes every hotspot's flag for this frame.
    pub fn evaluate(
        &self,
        hotspots: &mut [Hotspot],
        camera: &CameraState,
        projection: &Projection,
        scene: &Scene,
    ) {
        let view_proj = projection.view_proj(camera);
        for hotspot in hotspots.iter_mut() {
            let visibility = self.classify(&hotspot.position, camera, &view_proj, scene);
            hotspot.set_visible(visibility.is_visible());
        }
    }
}

impl Default for HotspotVisibilityEvaluator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EPSILON)
    }
}
