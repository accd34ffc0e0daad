use super::{MeshSurface, Scene, Triangle};
use nalgebra_glm as glm;

const PARALLEL_EPSILON: f32 = 1e-8;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: glm::Vec3,
    /// Unit length.
    pub direction: glm::Vec3,
}

impl Ray {
    /// Ray from `from` through `to`, or `None` if the points coincide.
    pub fn towards(from: &glm::Vec3, to: &glm::Vec3) -> Option<Self> {
        let delta = to - from;
        let length = glm::length(&delta);
        if length <= f32::EPSILON {
            return None;
        }
        Some(Self {
            origin: *from,
            direction: delta / length,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub surface: usize,
    pub triangle: usize,
}

/// Möller–Trumbore. Returns the distance along the ray to the hit.
pub fn intersect_triangle(ray: &Ray, triangle: &Triangle, cull_back_faces: bool) -> Option<f32> {
    let [v0, v1, v2] = &triangle.vertices;
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = glm::cross(&ray.direction, &edge2);
    let a = glm::dot(&edge1, &h);

    // Front faces (counter-clockwise seen from the ray origin) give a > 0.
    if cull_back_faces && a < PARALLEL_EPSILON {
        return None;
    }
    if a.abs() < PARALLEL_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * glm::dot(&s, &h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = glm::cross(&s, &edge1);
    let v = f * glm::dot(&ray.direction, &q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * glm::dot(&edge2, &q);
    (t > PARALLEL_EPSILON).then_some(t)
}

impl MeshSurface {
    /// Nearest hit on this surface as `(distance, triangle index)`.
    pub fn raycast(&self, ray: &Ray) -> Option<(f32, usize)> {
        let cull = !self.double_sided;
        self.triangles
            .iter()
            .enumerate()
            .filter_map(|(i, t)| intersect_triangle(ray, t, cull).map(|d| (d, i)))
            .min_by(|a, b| a.0.total_cmp(&b.0))
    }
}

impl Scene {
    /// Nearest hit over every visible surface.
    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        self.visible_surfaces()
            .filter_map(|(surface, s)| {
                s.raycast(ray).map(|(distance, triangle)| RayHit {
                    distance,
                    surface,
                    triangle,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
