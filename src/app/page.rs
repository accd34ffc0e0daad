use super::{EventResponse, InteractionHint, PageEvent};
use crate::camera::{AnimationPhase, CameraOrbitController, OrbitControls, OrbitRig};
use crate::hotspot::{HotspotInteractionController, HotspotVisibilityEvaluator};
use crate::product::{ContentPayload, Hotspot, HotspotId, ProductConfig, VisibilityTransition};
use crate::scene::{Projection, Scene, projection};
use crate::settings::Settings;

/// Marker state handed to the presentation layer for one hotspot.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotView {
    pub id: HotspotId,
    pub label: String,
    pub visible: bool,
    pub transition: Option<VisibilityTransition>,
    /// Screen position in pixels, top-left origin. Only set when visible.
    pub screen: Option<[f32; 2]>,
    /// The hotspot's content is open, so its label stays shown.
    pub pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotMenuEntry {
    pub id: HotspotId,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub phase: AnimationPhase,
    pub camera_moved: bool,
    pub loading: bool,
    pub hint_visible: bool,
    pub content_open: Option<HotspotId>,
    pub hotspots: Vec<HotspotView>,
}

/// One mounted product page: camera, hotspots, content and first-run hint.
pub struct ProductPage {
    product_id: String,
    camera: CameraOrbitController,
    interaction: HotspotInteractionController,
    evaluator: HotspotVisibilityEvaluator,
    projection: Projection,
    viewport: (u32, u32),
    scene: Option<Scene>,
    hotspots: Vec<Hotspot>,
    hotspots_enabled: bool,
    hint: InteractionHint,
    idle_oscillation_ms: f64,
    idle_range: f32,
    orbit_speed: f32,
    zoom_speed: f32,
    seen_revision: u64,
}

impl ProductPage {
    pub fn mount(product: &ProductConfig, settings: &Settings, width: u32, height: u32) -> Self {
        let rig = OrbitRig::new(
            product.camera.camera_state(),
            product.camera.min_distance,
            product.camera.max_distance,
        );
        let seen_revision = rig.revision();
        log::info!(
            "mounting '{}' with {} hotspots, camera distance {:.2}",
            product.id,
            product.hotspots.len(),
            rig.distance()
        );

        Self {
            product_id: product.id.clone(),
            camera: CameraOrbitController::with_controls(rig),
            interaction: HotspotInteractionController::new(
                product.content.clone(),
                settings.animation.hotspot_move_ms,
            ),
            evaluator: HotspotVisibilityEvaluator::new(settings.occlusion.epsilon),
            projection: Projection::from_settings(&settings.display, width, height),
            viewport: (width, height),
            scene: None,
            hotspots: product.hotspots.iter().map(Hotspot::from).collect(),
            hotspots_enabled: settings.display.show_hotspots,
            hint: InteractionHint::new(),
            idle_oscillation_ms: product.idle_oscillation_ms,
            idle_range: settings.animation.idle_range(),
            orbit_speed: settings.animation.orbit_speed,
            zoom_speed: settings.animation.zoom_speed,
            seen_revision,
        }
    }

    pub fn camera(&self) -> &CameraOrbitController {
        &self.camera
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn content(&self) -> Option<&ContentPayload> {
        self.interaction.content()
    }

    pub fn hint(&self) -> &InteractionHint {
        &self.hint
    }

    pub fn is_loading(&self) -> bool {
        self.scene.is_none()
    }

    pub fn hotspots_enabled(&self) -> bool {
        self.hotspots_enabled
    }

    /// Installs the occlusion scene. The first load shows the hint; later
    /// loads (asset reloads, repeated callbacks) only replace the scene.
    pub fn on_model_loaded(&mut self, scene: Scene) -> bool {
        log::info!(
            "'{}' model ready: {} surfaces, {} triangles",
            self.product_id,
            scene.surfaces.len(),
            scene.triangle_count()
        );
        self.scene = Some(scene);
        let shown = self.hint.on_model_loaded();
        if shown {
            log::debug!("showing interaction hint");
        }
        shown
    }

    /// Closes the hint and plays the idle oscillation once.
    pub fn dismiss_hint(&mut self, now_ms: f64) -> bool {
        if !self.hint.dismiss() {
            return false;
        }
        self.camera
            .animate_idle_oscillation(self.idle_range, self.idle_oscillation_ms, now_ms);
        true
    }

    pub fn select_hotspot(&mut self, id: HotspotId, now_ms: f64) -> Option<&ContentPayload> {
        self.interaction.select_hotspot(id, &mut self.camera, now_ms)
    }

    pub fn close_content(&mut self) -> bool {
        self.interaction.close_content()
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    pub fn toggle_hotspots(&mut self) -> bool {
        self.hotspots_enabled = !self.hotspots_enabled;
        self.hotspots_enabled
    }

    pub fn hotspot_menu(&self) -> Vec<HotspotMenuEntry> {
        self.hotspots
            .iter()
            .map(|h| HotspotMenuEntry {
                id: h.id,
                label: h.label.clone(),
            })
            .collect()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.projection.set_viewport(width, height);
    }

    pub fn handle_event(&mut self, event: PageEvent, now_ms: f64) -> EventResponse {
        match event {
            PageEvent::ModelLoaded(scene) => {
                self.on_model_loaded(scene);
            }
            PageEvent::DismissHint => {
                self.dismiss_hint(now_ms);
            }
            PageEvent::SelectHotspot(id) => {
                self.select_hotspot(id, now_ms);
            }
            PageEvent::CloseContent => {
                self.close_content();
            }
            PageEvent::ResetCamera => self.reset_camera(),
            PageEvent::ToggleHotspots => {
                self.toggle_hotspots();
            }
            PageEvent::Orbit { delta_x, delta_y } => {
                // Inverted for natural rotation
                self.camera
                    .orbit_by(-delta_x * self.orbit_speed, -delta_y * self.orbit_speed);
            }
            PageEvent::Zoom(delta) => {
                let scale = (1.0 - delta * self.zoom_speed).max(0.05);
                self.camera.zoom_by(scale);
            }
            PageEvent::Resized { width, height } => self.resize(width, height),
            PageEvent::Escape => {
                if !self.close_content() {
                    return EventResponse::default();
                }
            }
            PageEvent::Back => return EventResponse::exit(),
        }
        EventResponse::repaint()
    }

    /// Advances the camera animation, then recomputes hotspot visibility.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutput {
        self.camera.tick(now_ms);

        let (camera_moved, view_proj) = match self.camera.controls() {
            Some(rig) => {
                let moved = rig.revision() != self.seen_revision;
                self.seen_revision = rig.revision();
                (moved, Some(self.projection.view_proj(rig.state())))
            }
            None => (false, None),
        };

        let active = self.hotspots_enabled && !self.is_loading();
        match (self.camera.controls(), self.scene.as_ref()) {
            (Some(rig), Some(scene)) if active => {
                self.evaluator
                    .evaluate(&mut self.hotspots, rig.state(), &self.projection, scene);
            }
            _ => {
                for hotspot in &mut self.hotspots {
                    hotspot.set_visible(false);
                }
            }
        }

        let (width, height) = self.viewport;
        let hotspots = self
            .hotspots
            .iter()
            .map(|h| {
                let screen = view_proj
                    .as_ref()
                    .filter(|_| h.visible)
                    .and_then(|vp| projection::project(vp, &h.position))
                    .map(|ndc| {
                        [
                            (ndc.x + 1.0) * 0.5 * width as f32,
                            (1.0 - ndc.y) * 0.5 * height as f32,
                        ]
                    });
                HotspotView {
                    id: h.id,
                    label: h.label.clone(),
                    visible: h.visible,
                    transition: h.transition(),
                    screen,
                    pinned: self.interaction.is_showing(h.id),
                }
            })
            .collect();

        FrameOutput {
            phase: self.camera.phase(),
            camera_moved,
            loading: self.is_loading(),
            hint_visible: self.hint.is_showing(),
            content_open: self.interaction.content().map(|c| c.hotspot_id),
            hotspots,
        }
    }

    /// Teardown: cancels any pending animation frame and releases the
    /// controls. Later calls on the page are no-ops for the camera.
    pub fn unmount(&mut self) {
        if self.camera.unmount().is_some() {
            log::debug!("'{}' unmounted", self.product_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Orientation;
    use crate::product::{CameraRigConfig, ContentTable, HotspotContentConfig, HotspotSpec, ModelConfig};
    use crate::scene::{MeshSurface, Placement};
    use approx::assert_abs_diff_eq;
    use nalgebra_glm as glm;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn entry(title: &str, rotation: Option<Orientation>) -> HotspotContentConfig {
        HotspotContentConfig {
            video: format!("{title}.mp4"),
            title: title.into(),
            overview: None,
            features: Vec::new(),
            specifications: Vec::new(),
            rotation,
        }
    }

    fn product() -> ProductConfig {
        ProductConfig {
            id: "monitor".into(),
            name: "Monitor".into(),
            route: Some("/monitor".into()),
            model: Some(ModelConfig {
                asset: "monitor.glb".into(),
                placement: Placement::default(),
                collision_mesh: None,
                double_sided: false,
            }),
            camera: CameraRigConfig::default(),
            idle_oscillation_ms: 3500.0,
            hotspots: vec![
                HotspotSpec {
                    id: 1,
                    name: "Monitor Display".into(),
                    position: [0.3, 0.2, 1.0],
                },
                HotspotSpec {
                    id: 2,
                    name: "Connection Ports".into(),
                    position: [0.3, 0.2, -1.0],
                },
            ],
            content: ContentTable::new([
                (1, entry("Monitor Display", Some(Orientation::new(0.0, FRAC_PI_2)))),
                (2, entry("Connection Ports", Some(Orientation::new(PI, FRAC_PI_2)))),
            ]),
        }
    }

    fn body() -> Scene {
        Scene::new(vec![MeshSurface::cuboid(
            "body",
            glm::vec3(-1.0, -1.0, -1.0),
            glm::vec3(1.0, 1.0, 1.0),
        )])
    }

    fn page() -> ProductPage {
        ProductPage::mount(&product(), &Settings::default(), 1280, 720)
    }

    fn azimuth(page: &ProductPage) -> f32 {
        page.camera()
            .controls()
            .map(|rig| rig.state().spherical().azimuthal)
            .unwrap_or(f32::NAN)
    }

    #[test]
    fn hotspots_hidden_while_loading() {
        let mut page = page();
        let out = page.frame(0.0);
        assert!(out.loading);
        assert!(out.hotspots.iter().all(|h| !h.visible));
    }

    #[test]
    fn hint_once_then_idle_oscillation_returns_home() {
        let mut page = page();
        assert!(page.on_model_loaded(body()));
        assert!(!page.on_model_loaded(body()));
        assert!(page.frame(10.0).hint_visible);

        let start = azimuth(&page);
        assert!(page.dismiss_hint(100.0));
        assert!(!page.dismiss_hint(120.0));
        assert_eq!(page.camera().phase(), AnimationPhase::Animating);

        let mut now = 100.0;
        while page.camera().phase() == AnimationPhase::Animating {
            now += 16.0;
            page.frame(now);
        }
        assert!(now >= 3600.0);
        assert_abs_diff_eq!(azimuth(&page), start, epsilon = 1e-4);
        assert!(!page.frame(now + 16.0).hint_visible);
    }

    #[test]
    fn selecting_back_hotspot_brings_it_into_view() {
        let mut page = page();
        page.on_model_loaded(body());
        page.select_hotspot(1, 0.0);
        page.frame(1000.0);
        let out = page.frame(1016.0);
        let front = &out.hotspots[0];
        let back = &out.hotspots[1];
        assert!(front.visible && front.pinned);
        assert!(front.screen.is_some());
        assert!(!back.visible && back.screen.is_none());

        page.select_hotspot(2, 1100.0);
        page.frame(2100.0);
        let out = page.frame(2116.0);
        assert!(!out.hotspots[0].visible);
        assert!(out.hotspots[1].visible && out.hotspots[1].pinned);
        assert_eq!(out.content_open, Some(2));
    }

    #[test]
    fn toggle_hides_every_hotspot() {
        let mut page = page();
        page.on_model_loaded(body());
        page.select_hotspot(1, 0.0);
        page.frame(1000.0);
        assert!(page.frame(1016.0).hotspots[0].visible);
        assert!(!page.toggle_hotspots());
        assert!(!page.hotspots_enabled());
        let out = page.frame(1032.0);
        assert!(out.hotspots.iter().all(|h| !h.visible));
        assert_eq!(out.hotspots[0].transition, Some(VisibilityTransition::Hidden));
        assert!(page.toggle_hotspots());
        assert!(page.frame(1048.0).hotspots[0].visible);
    }

    #[test]
    fn menu_lists_hotspots_in_authored_order() {
        let labels: Vec<_> = page().hotspot_menu().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Monitor Display", "Connection Ports"]);
    }

    #[test]
    fn escape_closes_content_then_does_nothing() {
        let mut page = page();
        page.on_model_loaded(body());
        page.handle_event(PageEvent::DismissHint, 0.0);
        page.handle_event(PageEvent::SelectHotspot(2), 10.0);
        assert!(page.content().is_some());
        assert_eq!(page.handle_event(PageEvent::Escape, 20.0), EventResponse::repaint());
        assert!(page.content().is_none());
        assert_eq!(page.handle_event(PageEvent::Escape, 30.0), EventResponse::default());
        assert_eq!(page.handle_event(PageEvent::Back, 40.0), EventResponse::exit());
    }

    #[test]
    fn escape_leaves_the_hint_to_its_own_button() {
        let mut page = page();
        page.on_model_loaded(body());
        assert_eq!(page.handle_event(PageEvent::Escape, 0.0), EventResponse::default());
        assert!(page.hint().is_showing());
        assert_eq!(page.camera().phase(), AnimationPhase::Idle);

        assert_eq!(page.handle_event(PageEvent::DismissHint, 10.0), EventResponse::repaint());
        assert!(!page.hint().is_showing());
        assert_eq!(page.camera().phase(), AnimationPhase::Animating);
    }

    #[test]
    fn user_drag_is_reported_as_camera_motion() {
        let mut page = page();
        page.frame(0.0);
        assert!(!page.frame(16.0).camera_moved);
        page.handle_event(PageEvent::Orbit { delta_x: 30.0, delta_y: 0.0 }, 20.0);
        assert!(page.frame(32.0).camera_moved);
    }

    #[test]
    fn zoom_keeps_within_rig_range() {
        let mut page = page();
        for _ in 0..50 {
            page.handle_event(PageEvent::Zoom(5.0), 0.0);
        }
        let distance = page
            .camera()
            .controls()
            .map(|rig| rig.distance())
            .unwrap_or(0.0);
        assert_abs_diff_eq!(distance, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn unmount_cancels_pending_animation() {
        let mut page = page();
        page.on_model_loaded(body());
        page.select_hotspot(2, 0.0);
        page.unmount();
        assert_eq!(page.camera().phase(), AnimationPhase::Idle);
        let out = page.frame(500.0);
        assert!(!out.camera_moved);
        assert!(out.hotspots.iter().all(|h| !h.visible));
        // Content state is independent of the camera.
        assert!(page.content().is_some());
    }
}
