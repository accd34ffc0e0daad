//! Hotspot runtime: per-frame visibility and selection handling.

pub mod interaction;
pub mod visibility;

pub use interaction::HotspotInteractionController;
pub use visibility::{HotspotVisibilityEvaluator, Visibility};
