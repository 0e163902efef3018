// src/ui/theme.rs
use bevy::log::{info, warn};
use bevy_egui::egui;
use std::path::Path;
use std::sync::Arc;

use crate::settings::{AppSettings, ThemePreference};

const URDU_FONT_NAME: &str = "urdu_numerals";

/// Applies theme and zoom when they differ from what was last pushed to egui.
pub fn apply_preferences(
    ctx: &egui::Context,
    settings: &AppSettings,
    applied: &mut Option<(ThemePreference, u32)>,
) {
    let wanted = (settings.theme, settings.font_scale_percent);
    if *applied == Some(wanted) {
        return;
    }
    ctx.set_visuals(match settings.theme {
        ThemePreference::Light => egui::Visuals::light(),
        ThemePreference::Dark => egui::Visuals::dark(),
    });
    ctx.set_zoom_factor(settings.zoom_factor());
    info!(
        "Applied theme '{}' with font scale {}%.",
        settings.theme.as_str(),
        settings.font_scale_percent
    );
    *applied = Some(wanted);
}

/// Adds the configured font as a fallback for every family. The bundled egui
/// fonts have no Extended Arabic-Indic digits.
pub fn install_urdu_font(ctx: &egui::Context, font_path: Option<&Path>) {
    let Some(font_path) = font_path else {
        info!("No Urdu font configured; numeral glyph coverage depends on the default fonts.");
        return;
    };

    match std::fs::read(font_path) {
        Ok(font_bytes) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                URDU_FONT_NAME.to_owned(),
                Arc::new(egui::FontData::from_owned(font_bytes)),
            );
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push(URDU_FONT_NAME.to_owned());
            }
            ctx.set_fonts(fonts);
            info!("Installed Urdu numeral font from {:?}", font_path);
        }
        Err(e) => {
            warn!("Failed to read Urdu font file '{}': {}", font_path.display(), e);
        }
    }
}
