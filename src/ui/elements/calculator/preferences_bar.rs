// src/ui/elements/calculator/preferences_bar.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::analytics::AnalyticsEvent;
use crate::cross::NumeralScript;
use crate::settings::{self, AppSettings, ThemePreference, MAX_FONT_SCALE, MIN_FONT_SCALE};

const FONT_SCALE_STEP: f64 = 10.0;

pub fn show_preferences_bar(
    ui: &mut egui::Ui,
    app_settings: &mut AppSettings,
    analytics_writer: &mut EventWriter<AnalyticsEvent>,
) {
    ui.horizontal(|ui| {
        let theme_label = match app_settings.theme {
            ThemePreference::Light => "Dark mode",
            ThemePreference::Dark => "Light mode",
        };
        if ui.button(theme_label).clicked() {
            app_settings.theme = app_settings.theme.toggled();
            settings::persist(app_settings);
            analytics_writer.write(AnalyticsEvent::new("Theme", "Toggle", app_settings.theme.as_str()));
        }

        ui.separator();

        let mut scale = app_settings.font_scale_percent;
        let response = ui.add(
            egui::Slider::new(&mut scale, MIN_FONT_SCALE..=MAX_FONT_SCALE)
                .step_by(FONT_SCALE_STEP)
                .suffix("%")
                .text("Font size"),
        );
        if response.changed() {
            app_settings.set_font_scale(scale);
        }
        // Dragging changes the value every frame; persist once it settles.
        if response.drag_stopped() || (response.changed() && !response.dragged()) {
            settings::persist(app_settings);
            analytics_writer.write(AnalyticsEvent::new(
                "Font Size",
                "Change",
                app_settings.font_scale_percent.to_string(),
            ));
        }

        ui.separator();

        let before = app_settings.numeral_script;
        ui.label("Numerals:");
        for script in NumeralScript::ALL {
            let label = match script {
                NumeralScript::Western => "123",
                NumeralScript::Urdu => "۱۲۳",
            };
            ui.selectable_value(&mut app_settings.numeral_script, script, label);
        }
        if app_settings.numeral_script != before {
            settings::persist(app_settings);
            analytics_writer.write(AnalyticsEvent::new(
                "Numerals",
                "Change",
                app_settings.numeral_script.as_str(),
            ));
        }
    });
}
