// src/ui/elements/calculator/main_panel.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::analytics::AnalyticsEvent;
use crate::cross::events::{InputBlurred, RequestCalculation};
use crate::cross::resources::CrossState;
use crate::settings::AppSettings;
use crate::ui::{theme, UiFeedbackState};

use super::cross_grid::show_cross_grid;
use super::input_form::show_input_form;
use super::preferences_bar::show_preferences_bar;
use super::state::CalculatorWindowState;
use super::tabs::show_category_tabs;

pub fn calculator_ui(
    mut contexts: EguiContexts,
    mut window_state: ResMut<CalculatorWindowState>,
    mut cross_state: ResMut<CrossState>,
    mut app_settings: ResMut<AppSettings>,
    ui_feedback: Res<UiFeedbackState>,
    mut request_writer: EventWriter<RequestCalculation>,
    mut blur_writer: EventWriter<InputBlurred>,
    mut analytics_writer: EventWriter<AnalyticsEvent>,
) {
    let ctx = contexts.ctx_mut().clone();
    let window_state = &mut *window_state;

    if !window_state.fonts_installed {
        theme::install_urdu_font(&ctx, app_settings.urdu_font_path.as_deref());
        window_state.fonts_installed = true;
    }
    theme::apply_preferences(&ctx, &app_settings, &mut window_state.applied_prefs);

    if cross_state.shake_requested {
        cross_state.shake_requested = false;
        window_state.shake_started_at = Some(ctx.input(|i| i.time));
    }

    let busy = cross_state.busy;
    window_state.observe_result(cross_state.generation, cross_state.result.is_some(), busy);
    let selected = cross_state.selected;
    let script = app_settings.numeral_script;

    egui::TopBottomPanel::top("preferences_bar").show(&ctx, |ui| {
        show_preferences_bar(ui, &mut app_settings, &mut analytics_writer);
    });

    egui::CentralPanel::default().show(&ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Cross Calculator");
            ui.add_space(8.0);

            show_category_tabs(
                ui,
                selected,
                busy,
                window_state,
                &mut request_writer,
                &mut analytics_writer,
            );
            ui.add_space(8.0);

            show_input_form(
                ui,
                selected,
                busy,
                window_state,
                &mut request_writer,
                &mut blur_writer,
            );

            if !ui_feedback.last_message.is_empty() {
                let text_color = if ui_feedback.is_error {
                    egui::Color32::RED
                } else {
                    ui.style().visuals.text_color()
                };
                ui.colored_label(text_color, &ui_feedback.last_message);
            }
            ui.separator();

            show_cross_grid(ui, cross_state.result.as_ref(), script, window_state.calculated);
        });
    });

    if busy {
        ctx.request_repaint();
    }
}
