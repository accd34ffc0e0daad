pub mod stl;

use crate::error::DeviceVisError;
use crate::product::{Catalog, ModelConfig};
use crate::scene::Scene;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, DeviceVisError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| DeviceVisError::new("catalog-read").with_arg("path", path.display()).push_std(e))?;
    let catalog = Catalog::from_json(&json)
        .map_err(|e| DeviceVisError::new("catalog-load").with_arg("path", path.display()).push_cause(e))?;
    log::info!("loaded {} products from {}", catalog.products.len(), path.display());
    Ok(catalog)
}

/// Loads the model's collision mesh, relative to `base_dir`, with the
/// authored placement and sidedness applied.
pub fn load_collision_mesh(base_dir: &Path, model: &ModelConfig) -> Result<Scene, DeviceVisError> {
    let Some(mesh) = &model.collision_mesh else {
        return Err(DeviceVisError::new("no-collision-mesh").with_arg("asset", &model.asset));
    };
    let path = base_dir.join(mesh);
    let wrap = |e: DeviceVisError| {
        DeviceVisError::new("mesh-load")
            .with_arg("path", path.display())
            .push_cause(e)
    };

    let file = File::open(&path).map_err(|e| wrap(e.into()))?;
    let surface = stl::read_stl(&mut BufReader::new(file), mesh)
        .map_err(wrap)?
        .placed(&model.placement)
        .double_sided(model.double_sided);
    Ok(Scene::new(vec![surface]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Placement;
    use std::io::Write;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("devicevis-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn model(mesh: Option<&str>) -> ModelConfig {
        ModelConfig {
            asset: "device.glb".into(),
            placement: Placement {
                offset: [1.0, -3.0, 0.0],
                scale: 1.5,
            },
            collision_mesh: mesh.map(String::from),
            double_sided: true,
        }
    }

    #[test]
    fn collision_mesh_gets_placement() {
        let dir = temp_dir("mesh");
        let mut bytes = vec![0u8; 80];
        bytes.extend_from_slice(&1u32.to_le_bytes());
        for c in [0.0f32, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0] {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());
        File::create(dir.join("body.stl"))
            .and_then(|mut f| f.write_all(&bytes))
            .unwrap();

        let scene = load_collision_mesh(&dir, &model(Some("body.stl"))).unwrap();
        let surface = &scene.surfaces[0];
        assert!(surface.double_sided);
        assert_eq!(surface.triangles[0].vertices[0], nalgebra_glm::vec3(1.0, -3.0, 0.0));
        assert_eq!(surface.triangles[0].vertices[1], nalgebra_glm::vec3(4.0, -3.0, 0.0));
        assert_eq!(surface.triangles[0].vertices[2], nalgebra_glm::vec3(1.0, 0.0, 0.0));
    }

    #[test]
    fn missing_mesh_file_is_wrapped() {
        let dir = temp_dir("missing");
        let err = load_collision_mesh(&dir, &model(Some("nope.stl"))).unwrap_err();
        assert_eq!(err.key, "mesh-load");
        assert!(err.arg("path").is_some_and(|p| p.ends_with("nope.stl")));
    }

    #[test]
    fn model_without_mesh() {
        let err = load_collision_mesh(Path::new("."), &model(None)).unwrap_err();
        assert_eq!(err.key, "no-collision-mesh");
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/catalog.json");
        let catalog = load_catalog(path).unwrap();
        assert!(catalog.find("/sle6000").is_some());
        assert!(catalog.cards().iter().any(|c| !c.enabled));
    }
}
