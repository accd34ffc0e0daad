// Camera animation: easing curves and the single in-flight task record.

pub mod interpolation;
pub mod types;

pub use interpolation::*;
pub use types::*;
