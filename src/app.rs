//! Product-page session: the one page implementation every product is
//! mounted through.

pub mod hint;
pub mod page;

pub use hint::{HintState, InteractionHint};
pub use page::{FrameOutput, HotspotMenuEntry, HotspotView, ProductPage};

use crate::product::HotspotId;
use crate::scene::Scene;

/// Input the presentation layer forwards to a mounted page.
#[derive(Debug, Clone)]
pub enum PageEvent {
    ModelLoaded(Scene),
    DismissHint,
    SelectHotspot(HotspotId),
    CloseContent,
    ResetCamera,
    ToggleHotspots,
    /// Pointer drag in pixels.
    Orbit { delta_x: f32, delta_y: f32 },
    /// Wheel or pinch; positive moves closer.
    Zoom(f32),
    Resized { width: u32, height: u32 },
    /// Closes open content; the hint only closes through `DismissHint`.
    Escape,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl EventResponse {
    pub fn repaint() -> Self {
        Self {
            repaint: true,
            exit: false,
        }
    }

    pub fn exit() -> Self {
        Self {
            repaint: false,
            exit: true,
        }
    }
}
