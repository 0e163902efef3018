// src/ui/elements/calculator/input_form.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::cross::events::{CalculationTrigger, InputBlurred, RequestCalculation};
use crate::cross::{Category, MIN_INPUT};

use super::state::CalculatorWindowState;

const SHAKE_DURATION_SECS: f64 = 0.4;
const SHAKE_AMPLITUDE: f32 = 8.0;
const SHAKE_FREQUENCY_HZ: f64 = 12.0;
const INPUT_WIDTH: f32 = 180.0;

/// Horizontal offset of the input while shaking, or `None` once the shake is over.
pub fn shake_offset(elapsed_secs: f64) -> Option<f32> {
    if !(0.0..SHAKE_DURATION_SECS).contains(&elapsed_secs) {
        return None;
    }
    let decay = 1.0 - elapsed_secs / SHAKE_DURATION_SECS;
    let wave = (elapsed_secs * SHAKE_FREQUENCY_HZ * std::f64::consts::TAU).sin();
    Some(SHAKE_AMPLITUDE * (wave * decay) as f32)
}

pub fn show_input_form(
    ui: &mut egui::Ui,
    selected: Category,
    busy: bool,
    window_state: &mut CalculatorWindowState,
    request_writer: &mut EventWriter<RequestCalculation>,
    blur_writer: &mut EventWriter<InputBlurred>,
) {
    let now = ui.input(|i| i.time);
    let offset = match window_state.shake_started_at {
        Some(started) => match shake_offset(now - started) {
            Some(offset) => {
                ui.ctx().request_repaint();
                offset
            }
            None => {
                window_state.shake_started_at = None;
                0.0
            }
        },
        None => 0.0,
    };

    let mut submitted = false;
    let mut blurred = false;
    ui.horizontal(|ui| {
        ui.add_space(SHAKE_AMPLITUDE + offset);
        ui.add_enabled_ui(!busy, |ui| {
            let mut text_edit = egui::TextEdit::singleline(&mut window_state.input_text)
                .hint_text(format!("Enter a number ({MIN_INPUT} or more)"))
                .desired_width(INPUT_WIDTH);
            if window_state.shake_started_at.is_some() {
                text_edit = text_edit.text_color(ui.visuals().error_fg_color);
            }
            let response = ui.add(text_edit);
            if response.changed() {
                window_state.input_edited();
            }
            if response.lost_focus() {
                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                } else {
                    blurred = true;
                }
            }
            if ui.button("Calculate").clicked() {
                submitted = true;
            }
        });
        if busy {
            ui.add(egui::Spinner::new());
        }
    });

    if busy {
        return;
    }
    if submitted {
        request_writer.write(RequestCalculation {
            input: window_state.input_text.clone(),
            category: selected,
            trigger: CalculationTrigger::Submit,
        });
    } else if blurred {
        blur_writer.write(InputBlurred {
            input: window_state.input_text.clone(),
        });
    }
}
