use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [glm::Vec3; 3],
}

impl Triangle {
    pub fn new(a: glm::Vec3, b: glm::Vec3, c: glm::Vec3) -> Self {
        Self { vertices: [a, b, c] }
    }
}

/// Uniform scale followed by a translation, as authored for the model on each
/// product page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub offset: [f32; 3],
    pub scale: f32,
}

impl Placement {
    pub fn apply(&self, point: &glm::Vec3) -> glm::Vec3 {
        point * self.scale + glm::vec3(self.offset[0], self.offset[1], self.offset[2])
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            offset: [0.0, 0.0, 0.0],
            scale: 1.0,
        }
    }
}

/// One drawable surface of the loaded model.
#[derive(Debug, Clone)]
pub struct MeshSurface {
    pub name: String,
    pub triangles: Vec<Triangle>,
    pub visible: bool,
    /// Single-sided surfaces are only hit from the front (counter-clockwise
    /// winding).
    pub double_sided: bool,
}

impl MeshSurface {
    pub fn new(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
            visible: true,
            double_sided: false,
        }
    }

    pub fn double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    pub fn placed(mut self, placement: &Placement) -> Self {
        for triangle in &mut self.triangles {
            for v in &mut triangle.vertices {
                *v = placement.apply(v);
            }
        }
        self
    }

    /// Axis-aligned box with outward-facing triangles.
    pub fn cuboid(name: impl Into<String>, min: glm::Vec3, max: glm::Vec3) -> Self {
        let corner = |x: bool, y: bool, z: bool| {
            glm::vec3(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };
        // Each face listed counter-clockwise seen from outside.
        let faces = [
            [corner(false, false, true), corner(true, false, true), corner(true, true, true), corner(false, true, true)],
            [corner(true, false, false), corner(false, false, false), corner(false, true, false), corner(true, true, false)],
            [corner(true, false, true), corner(true, false, false), corner(true, true, false), corner(true, true, true)],
            [corner(false, false, false), corner(false, false, true), corner(false, true, true), corner(false, true, false)],
            [corner(false, true, true), corner(true, true, true), corner(true, true, false), corner(false, true, false)],
            [corner(false, false, false), corner(true, false, false), corner(true, false, true), corner(false, false, true)],
        ];
        let triangles = faces
            .iter()
            .flat_map(|[a, b, c, d]| [Triangle::new(*a, *b, *c), Triangle::new(*a, *c, *d)])
            .collect();
        Self::new(name, triangles)
    }

    pub fn bounds(&self) -> Option<(glm::Vec3, glm::Vec3)> {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *vertices.next()?;
        Some(vertices.fold((first, first), |(min, max), v| {
            (glm::min2(&min, v), glm::max2(&max, v))
        }))
    }
}

/// The model as far as occlusion is concerned. Owned by the page once the
/// model has finished loading.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub surfaces: Vec<MeshSurface>,
}

impl Scene {
    pub fn new(surfaces: Vec<MeshSurface>) -> Self {
        Self { surfaces }
    }

    /// Visible surfaces with their index in `surfaces`.
    pub fn visible_surfaces(&self) -> impl Iterator<Item = (usize, &MeshSurface)> {
        self.surfaces.iter().enumerate().filter(|(_, s)| s.visible)
    }

    pub fn triangle_count(&self) -> usize {
        self.surfaces.iter().map(|s| s.triangles.len()).sum()
    }

    pub fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        let mut found = false;
        for surface in self.surfaces.iter_mut().filter(|s| s.name == name) {
            surface.visible = visible;
            found = true;
        }
        found
    }
}
