//! Per-product configuration: the authored table that parameterises a
//! single page implementation.

pub mod config;
pub mod content;
pub mod hotspot;

pub use config::{CameraRigConfig, ModelConfig, ProductConfig};
pub use content::{ContentPayload, ContentTable, DEFAULT_HOTSPOT_ID, HotspotContentConfig, SpecRow};
pub use hotspot::{Hotspot, HotspotId, HotspotSpec, VisibilityTransition};

use crate::error::DeviceVisError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Card shown on the catalogue landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub route: Option<&'a str>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<ProductConfig>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, DeviceVisError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Shape checks only: unique ids and routes, unique hotspot ids, and a
    /// default content entry on every page that can be opened.
    pub fn validate(&self) -> Result<(), DeviceVisError> {
        let mut ids = HashSet::new();
        let mut routes = HashSet::new();
        for product in &self.products {
            if !ids.insert(product.id.as_str()) {
                return Err(DeviceVisError::new("duplicate-product").with_arg("id", &product.id));
            }
            if let Some(route) = &product.route {
                if !routes.insert(route.as_str()) {
                    return Err(DeviceVisError::new("duplicate-route")
                        .with_arg("id", &product.id)
                        .with_arg("route", route));
                }
            }
            let mut hotspot_ids = HashSet::new();
            for hotspot in &product.hotspots {
                if !hotspot_ids.insert(hotspot.id) {
                    return Err(DeviceVisError::new("duplicate-hotspot")
                        .with_arg("product", &product.id)
                        .with_arg("hotspot", hotspot.id));
                }
            }
            if product.is_openable() && !product.content.has_default() {
                return Err(DeviceVisError::new("missing-default-content")
                    .with_arg("product", &product.id)
                    .with_arg("hotspot", DEFAULT_HOTSPOT_ID));
            }
        }
        Ok(())
    }

    pub fn product(&self, id: &str) -> Option<&ProductConfig> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn by_route(&self, route: &str) -> Option<&ProductConfig> {
        self.products
            .iter()
            .find(|p| p.route.as_deref() == Some(route))
    }

    /// Looks `key` up as a product id first, then as a route.
    pub fn find(&self, key: &str) -> Option<&ProductConfig> {
        self.product(key).or_else(|| self.by_route(key))
    }

    pub fn cards(&self) -> Vec<ProductCard<'_>> {
        self.products
            .iter()
            .map(|p| ProductCard {
                id: &p.id,
                name: &p.name,
                route: p.route.as_deref(),
                enabled: p.is_openable(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "products": [
            {
                "id": "sle6000",
                "name": "SLE6000",
                "route": "/sle6000",
                "model": {"asset": "sle6000/model/SLE6000.glb", "placement": {"offset": [0, 0, 0], "scale": 0.75}},
                "hotspots": [
                    {"id": 1, "name": "Conventional Modes, HFO & NIV", "position": [0, 2, 0.25]},
                    {"id": 3, "name": "NCPAP, NIPPV & NIPPV Tr", "position": [0, -1.25, 0]}
                ],
                "content": {
                    "1": {"video": "v1.mp4", "title": "Conventional Modes, HFO & NIV"}
                }
            },
            {"id": "ecg-holter", "name": "ECG Holter"}
        ]
    }"#;

    #[test]
    fn lookups_by_id_and_route() {
        let catalog = Catalog::from_json(CATALOG).expect("valid");
        assert_eq!(catalog.product("sle6000").map(|p| p.name.as_str()), Some("SLE6000"));
        assert_eq!(catalog.by_route("/sle6000").map(|p| p.id.as_str()), Some("sle6000"));
        assert!(catalog.find("/sle6000").is_some());
        assert!(catalog.find("/cs750").is_none());
        let sle = catalog.product("sle6000").expect("present");
        assert_eq!(sle.idle_oscillation_ms, 3500.0);
        assert_eq!(sle.camera.max_distance, 10.0);
        assert_eq!(sle.hotspot(3).map(|h| h.position), Some([0.0, -1.25, 0.0]));
    }

    #[test]
    fn cards_mark_pages_without_route_disabled() {
        let catalog = Catalog::from_json(CATALOG).expect("valid");
        let cards = catalog.cards();
        assert_eq!(cards.len(), 2);
        assert!(cards[0].enabled);
        assert_eq!(
            cards[1],
            ProductCard {
                id: "ecg-holter",
                name: "ECG Holter",
                route: None,
                enabled: false,
            }
        );
    }

    #[test]
    fn openable_product_needs_default_content() {
        let json = CATALOG.replace("\"1\": {\"video\"", "\"2\": {\"video\"");
        let err = Catalog::from_json(&json).expect_err("no default entry");
        assert_eq!(err.key, "missing-default-content");
        assert_eq!(err.arg("product"), Some("sle6000"));
    }

    #[test]
    fn duplicate_routes_rejected() {
        let json = r#"{"products": [
            {"id": "a", "name": "A", "route": "/x"},
            {"id": "b", "name": "B", "route": "/x"}
        ]}"#;
        let err = Catalog::from_json(json).expect_err("duplicate");
        assert_eq!(err.key, "duplicate-route");
    }

    #[test]
    fn malformed_json_reports_position() {
        let err = Catalog::from_json("{\"products\": [").expect_err("truncated");
        assert_eq!(err.key, "json-error");
        assert!(err.arg("line").is_some());
    }
}
