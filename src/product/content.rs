use super::HotspotId;
use crate::camera::Orientation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hotspot whose content is shown when a selection has no entry of its own.
pub const DEFAULT_HOTSPOT_ID: HotspotId = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRow {
    pub name: String,
    pub value: String,
}

/// Static content bundle of one hotspot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotContentConfig {
    pub video: String,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: Vec<SpecRow>,
    /// Orientation the camera turns to on selection.
    #[serde(default)]
    pub rotation: Option<Orientation>,
}

/// What the presentation layer shows while a hotspot is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPayload {
    /// The hotspot that was selected, even when its content came from the
    /// default entry.
    pub hotspot_id: HotspotId,
    pub video: String,
    pub title: String,
    pub overview: Option<String>,
    pub features: Vec<String>,
    pub specifications: Vec<SpecRow>,
}

impl ContentPayload {
    pub fn new(hotspot_id: HotspotId, config: &HotspotContentConfig) -> Self {
        Self {
            hotspot_id,
            video: config.video.clone(),
            title: config.title.clone(),
            overview: config.overview.clone(),
            features: config.features.clone(),
            specifications: config.specifications.clone(),
        }
    }
}

/// Content entries of one product keyed by hotspot id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTable {
    entries: BTreeMap<HotspotId, HotspotContentConfig>,
}

impl ContentTable {
    pub fn new(entries: impl IntoIterator<Item = (HotspotId, HotspotContentConfig)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, id: HotspotId) -> Option<&HotspotContentConfig> {
        self.entries.get(&id)
    }

    /// Entry for `id`, falling back to the default entry. The flag tells
    /// whether the fallback was used.
    pub fn resolve(&self, id: HotspotId) -> Option<(&HotspotContentConfig, bool)> {
        match self.entries.get(&id) {
            Some(config) => Some((config, false)),
            None => self.entries.get(&DEFAULT_HOTSPOT_ID).map(|c| (c, true)),
        }
    }

    pub fn has_default(&self) -> bool {
        self.entries.contains_key(&DEFAULT_HOTSPOT_ID)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> HotspotContentConfig {
        HotspotContentConfig {
            video: format!("{title}.mp4"),
            title: title.into(),
            overview: None,
            features: Vec::new(),
            specifications: Vec::new(),
            rotation: None,
        }
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let table = ContentTable::new([(1, entry("Touch Display")), (3, entry("Ventilation Controls"))]);
        let (config, fallback) = table.resolve(3).expect("present");
        assert_eq!(config.title, "Ventilation Controls");
        assert!(!fallback);
        let (config, fallback) = table.resolve(42).expect("default");
        assert_eq!(config.title, "Touch Display");
        assert!(fallback);
    }

    #[test]
    fn table_without_default_resolves_nothing_unknown() {
        let table = ContentTable::new([(2, entry("Breathing Circuit"))]);
        assert!(!table.has_default());
        assert!(table.resolve(9).is_none());
    }

    #[test]
    fn deserialises_string_keys() {
        let json = r#"{
            "1": {"video": "a.mp4", "title": "A", "rotation": {"azimuthal": 1.5707964, "polar": 1.5707964}},
            "2": {"video": "b.mp4", "title": "B", "features": ["x"], "specifications": [{"name": "Modes", "value": "AC"}]}
        }"#;
        let table: ContentTable = serde_json::from_str(json).expect("valid");
        assert_eq!(table.len(), 2);
        assert!(table.get(1).and_then(|c| c.rotation).is_some());
        assert_eq!(table.get(2).map(|c| c.specifications.len()), Some(1));
    }
}
