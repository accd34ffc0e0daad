use super::{ContentTable, HotspotSpec};
use crate::camera::CameraState;
use crate::scene::Placement;
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Reference to the binary scene container; resolved by the host.
    pub asset: String,
    #[serde(default)]
    pub placement: Placement,
    /// Optional binary STL used for occlusion when the host has no mesh data
    /// of its own.
    #[serde(default)]
    pub collision_mesh: Option<String>,
    #[serde(default)]
    pub double_sided: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRigConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub min_distance: f32,
    pub max_distance: f32,
}

impl CameraRigConfig {
    pub fn camera_state(&self) -> CameraState {
        CameraState::new(glm::make_vec3(&self.position), glm::make_vec3(&self.target))
    }
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            position: [-15.0, 0.0, 10.0],
            target: [0.0, 0.0, 0.0],
            min_distance: 2.0,
            max_distance: 10.0,
        }
    }
}

fn default_idle_oscillation_ms() -> f64 {
    3500.0
}

/// Everything one product page needs: model placement, camera rig, hotspots
/// and their content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub id: String,
    pub name: String,
    /// Products without a route are listed but cannot be opened.
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub model: Option<ModelConfig>,
    #[serde(default)]
    pub camera: CameraRigConfig,
    #[serde(default = "default_idle_oscillation_ms")]
    pub idle_oscillation_ms: f64,
    #[serde(default)]
    pub hotspots: Vec<HotspotSpec>,
    #[serde(default)]
    pub content: ContentTable,
}

impl ProductConfig {
    pub fn is_openable(&self) -> bool {
        self.route.is_some() && self.model.is_some()
    }

    pub fn hotspot(&self, id: super::HotspotId) -> Option<&HotspotSpec> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}
