// src/cross/plugin.rs
use bevy::prelude::*;

use super::events::{CalculationFeedback, CalculationFinished, InputBlurred, RequestCalculation};
use super::resources::CrossState;
use super::systems;
use crate::ui::systems::forward_events;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum CrossSystemSet {
    UserInput,
    ApplyResults,
}

/// Owns the calculator state and the request → delay → result flow.
pub struct CrossPlugin;

impl Plugin for CrossPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                CrossSystemSet::UserInput,
                CrossSystemSet::ApplyResults.after(CrossSystemSet::UserInput),
            ),
        );

        app.init_resource::<CrossState>();

        app.add_event::<RequestCalculation>()
            .add_event::<InputBlurred>()
            .add_event::<CalculationFinished>()
            .add_event::<CalculationFeedback>();

        app.add_systems(
            Update,
            (
                systems::handle_calculation_requests,
                systems::handle_input_blurred,
            )
                .in_set(CrossSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                forward_events::<CalculationFinished>,
                systems::apply_finished_calculations,
            )
                .chain()
                .in_set(CrossSystemSet::ApplyResults),
        );

        info!("CrossPlugin initialized.");
    }
}
