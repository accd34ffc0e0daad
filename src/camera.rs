//! Orbit camera: state, spherical view of it, the controls primitive it is
//! committed through, and the animated controller on top.

pub mod controller;
pub mod rig;
pub mod spherical;
pub mod state;

pub use controller::{AnimationPhase, CameraOrbitController};
pub use rig::{OrbitControls, OrbitRig};
pub use spherical::{Orientation, SphericalCoordinate};
pub use state::CameraState;
