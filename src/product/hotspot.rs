use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

pub type HotspotId = u32;

/// Authored hotspot entry of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotSpec {
    pub id: HotspotId,
    pub name: String,
    pub position: [f32; 3],
}

/// Hotspot as placed on a mounted page. Visibility is recomputed every frame;
/// the previous value is only kept to report show/hide transitions.
#[derive(Debug, Clone)]
pub struct Hotspot {
    pub id: HotspotId,
    pub label: String,
    pub position: glm::Vec3,
    pub visible: bool,
    pub was_visible: bool,
}

impl Hotspot {
    pub fn new(id: HotspotId, label: impl Into<String>, position: glm::Vec3) -> Self {
        Self {
            id,
            label: label.into(),
            position,
            visible: false,
            was_visible: false,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.was_visible = self.visible;
        self.visible = visible;
    }

    pub fn transition(&self) -> Option<VisibilityTransition> {
        match (self.was_visible, self.visible) {
            (false, true) => Some(VisibilityTransition::Shown),
            (true, false) => Some(VisibilityTransition::Hidden),
            _ => None,
        }
    }
}

impl From<&HotspotSpec> for Hotspot {
    fn from(spec: &HotspotSpec) -> Self {
        Hotspot::new(spec.id, spec.name.clone(), glm::make_vec3(&spec.position))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityTransition {
    Shown,
    Hidden,
}
