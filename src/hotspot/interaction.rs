use crate::camera::{CameraOrbitController, OrbitControls};
use crate::product::{ContentPayload, ContentTable, HotspotId};

/// Turns hotspot selections into a content payload and a camera move.
///
/// Content visibility and camera animation are independent: closing the
/// content leaves a running move alone, and a new selection simply replaces
/// both the payload and the move.
#[derive(Debug, Clone)]
pub struct HotspotInteractionController {
    content: ContentTable,
    current: Option<ContentPayload>,
    move_duration_ms: f64,
}

impl HotspotInteractionController {
    pub fn new(content: ContentTable, move_duration_ms: f64) -> Self {
        Self {
            content,
            current: None,
            move_duration_ms,
        }
    }

    pub fn select_hotspot<C: OrbitControls>(
        &mut self,
        id: HotspotId,
        camera: &mut CameraOrbitController<C>,
        now_ms: f64,
    ) -> Option<&ContentPayload> {
        let Some((config, fallback)) = self.content.resolve(id) else {
            log::warn!("hotspot {id} has no content and no default entry");
            return None;
        };
        if fallback {
            log::debug!("hotspot {id} has no content entry, showing the default");
        }
        if let Some(rotation) = config.rotation {
            camera.animate_to(rotation, self.move_duration_ms, now_ms);
        }
        self.current = Some(ContentPayload::new(id, config));
        self.current.as_ref()
    }

    /// Hides the payload. Returns whether anything was showing.
    pub fn close_content(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn content(&self) -> Option<&ContentPayload> {
        self.current.as_ref()
    }

    pub fn is_showing(&self, id: HotspotId) -> bool {
        self.current.as_ref().is_some_and(|c| c.hotspot_id == id)
    }
}
