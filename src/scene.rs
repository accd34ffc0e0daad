//! Occlusion geometry: mesh surfaces, ray casts against them, and the
//! perspective projection used for the behind-camera test.

pub mod mesh;
pub mod projection;
pub mod raycast;

pub use mesh::{MeshSurface, Placement, Scene, Triangle};
pub use projection::Projection;
pub use raycast::{Ray, RayHit};
