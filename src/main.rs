use anyhow::{Context, Result, anyhow};
use devicevis::app::{FrameOutput, PageEvent, ProductPage};
use devicevis::camera::AnimationPhase;
use devicevis::parser;
use devicevis::scene::Scene;
use devicevis::settings::Settings;
use std::path::{Path, PathBuf};

const FRAME_MS: f64 = 1000.0 / 60.0;
const VIEWPORT: (u32, u32) = (1280, 720);

/// Runs frames until the camera settles, returning the last output.
fn settle(page: &mut ProductPage, now: &mut f64) -> FrameOutput {
    let mut out = page.frame(*now);
    while out.phase == AnimationPhase::Animating {
        *now += FRAME_MS;
        out = page.frame(*now);
    }
    out
}

fn log_frame(out: &FrameOutput) {
    for h in &out.hotspots {
        match h.screen {
            Some([x, y]) => log::info!("  #{} {:<40} visible at ({x:.0}, {y:.0})", h.id, h.label),
            None => log::info!("  #{} {:<40} hidden", h.id, h.label),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let catalog_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/catalog.json"));
    let key = args.get(2).map(String::as_str).unwrap_or("/sle6000");

    let catalog = parser::load_catalog(&catalog_path)
        .with_context(|| format!("loading catalogue {}", catalog_path.display()))?;
    for card in catalog.cards() {
        log::info!(
            "{:<32} {:<32} {}",
            card.name,
            card.route.unwrap_or("-"),
            if card.enabled { "open" } else { "coming soon" }
        );
    }

    let product = catalog
        .find(key)
        .ok_or_else(|| anyhow!("no product with id or route '{key}'"))?;
    let model = product
        .model
        .as_ref()
        .filter(|_| product.is_openable())
        .ok_or_else(|| anyhow!("'{}' has no product page", product.id))?;

    let settings = Settings::load();
    let mut page = ProductPage::mount(product, &settings, VIEWPORT.0, VIEWPORT.1);
    let mut now = 0.0;

    let base_dir = catalog_path.parent().unwrap_or(Path::new("."));
    let scene = match parser::load_collision_mesh(base_dir, model) {
        Ok(scene) => scene,
        Err(err) => {
            log::warn!("no occlusion geometry for '{}': {err}", product.id);
            Scene::default()
        }
    };
    page.handle_event(PageEvent::ModelLoaded(scene), now);
    let out = settle(&mut page, &mut now);
    log::info!("model loaded, hint visible: {}", out.hint_visible);
    log_frame(&out);

    page.handle_event(PageEvent::DismissHint, now);
    let out = settle(&mut page, &mut now);
    log::info!("idle oscillation done at {now:.0}ms");
    log_frame(&out);

    for entry in page.hotspot_menu() {
        page.handle_event(PageEvent::SelectHotspot(entry.id), now);
        if let Some(content) = page.content() {
            log::info!("selected #{}: {} ({})", entry.id, content.title, content.video);
        }
        let out = settle(&mut page, &mut now);
        log_frame(&out);
        page.handle_event(PageEvent::Escape, now);
    }

    page.handle_event(PageEvent::ResetCamera, now);
    page.unmount();
    Ok(())
}
