use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

/// Spherical view of an offset from the pivot, Y-up.
///
/// `polar` is measured from +Y, `azimuthal` around +Y starting at +Z and
/// turning towards +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoordinate {
    pub radius: f32,
    pub polar: f32,
    pub azimuthal: f32,
}

impl SphericalCoordinate {
    pub fn new(radius: f32, polar: f32, azimuthal: f32) -> Self {
        Self {
            radius,
            polar,
            azimuthal,
        }
    }

    pub fn from_offset(offset: &glm::Vec3) -> Self {
        let radius = glm::length(offset);
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuthal = offset.x.atan2(offset.z);
        Self::new(radius, polar, azimuthal)
    }

    pub fn from_points(position: &glm::Vec3, pivot: &glm::Vec3) -> Self {
        Self::from_offset(&(position - pivot))
    }

    pub fn to_offset(&self) -> glm::Vec3 {
        let sin_polar = self.polar.sin();
        glm::vec3(
            self.radius * sin_polar * self.azimuthal.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuthal.cos(),
        )
    }

    pub fn orientation(&self) -> Orientation {
        Orientation {
            azimuthal: self.azimuthal,
            polar: self.polar,
        }
    }
}

/// Direction to look at the pivot from, without a distance. Authored per
/// hotspot in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub azimuthal: f32,
    pub polar: f32,
}

impl Orientation {
    pub fn new(azimuthal: f32, polar: f32) -> Self {
        Self { azimuthal, polar }
    }
}
