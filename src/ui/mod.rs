// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;
pub mod theme;

use elements::calculator::{calculator_ui, CalculatorWindowState};
use systems::handle_ui_feedback;

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// egui front end for the cross calculator.
pub struct CalculatorUiPlugin;

impl Plugin for CalculatorUiPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<UiFeedbackState>()
            .init_resource::<CalculatorWindowState>()
            .add_systems(Update, handle_ui_feedback)
            .add_systems(EguiContextPass, calculator_ui);

        info!("CalculatorUiPlugin initialized.");
    }
}
