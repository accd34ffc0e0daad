use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub fov_y_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub show_hotspots: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 50.0,
            near_plane: 0.1,
            far_plane: 2000.0,
            show_hotspots: true,
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        load_or_default("display")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Duration of the camera move triggered by a hotspot selection.
    pub hotspot_move_ms: f64,
    /// Half-width of the idle oscillation sweep.
    pub idle_range_degrees: f32,
    pub orbit_speed: f32,
    pub zoom_speed: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            hotspot_move_ms: 1000.0,
            idle_range_degrees: 20.0,
            orbit_speed: 0.01,
            zoom_speed: 0.1,
        }
    }
}

impl AnimationSettings {
    pub fn load() -> Self {
        load_or_default("animation")
    }

    pub fn idle_range(&self) -> f32 {
        self.idle_range_degrees.to_radians()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcclusionSettings {
    /// Slack subtracted from the hotspot distance before an intersection
    /// counts as occluding. Keeps surface-mounted hotspots from flickering.
    pub epsilon: f32,
}

impl Default for OcclusionSettings {
    fn default() -> Self {
        Self { epsilon: 0.2 }
    }
}

impl OcclusionSettings {
    pub fn load() -> Self {
        load_or_default("occlusion")
    }
}

fn load_or_default<T>(name: &str) -> T
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    match confy::load(CONFY_APP_NAME, name) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("settings '{name}' unreadable, using defaults: {e}");
            T::default()
        }
    }
}

// Aggregate struct for convenience
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub animation: AnimationSettings,
    pub occlusion: OcclusionSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            display: DisplaySettings::load(),
            animation: AnimationSettings::load(),
            occlusion: OcclusionSettings::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_product_pages() {
        let settings = Settings::default();
        assert_eq!(settings.animation.hotspot_move_ms, 1000.0);
        assert_relative_eq!(settings.animation.idle_range(), 20.0_f32.to_radians());
        assert_relative_eq!(settings.occlusion.epsilon, 0.2);
        assert!(settings.display.show_hotspots);
    }
}
