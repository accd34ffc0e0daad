//! Camera orbit, hotspot visibility and hotspot interaction for interactive
//! 3D product pages.

pub mod animation;
pub mod app;
pub mod camera;
pub mod error;
pub mod hotspot;
pub mod parser;
pub mod product;
pub mod scene;
pub mod settings;

pub const CONFY_APP_NAME: &str = "devicevis-rs";
