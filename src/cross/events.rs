// src/cross/events.rs
use bevy::prelude::Event;

use super::definitions::{Category, CrossResult};
use super::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationTrigger {
    /// Calculate button or Enter in the input field.
    Submit,
    /// A category tab was picked; recalculates only when the input is already valid.
    TabSelected,
}

/// Sent by the UI when the user asks for a cross.
#[derive(Event, Debug, Clone)]
pub struct RequestCalculation {
    pub input: String,
    pub category: Category,
    pub trigger: CalculationTrigger,
}

/// Sent from the delayed background task once the value is ready.
#[derive(Event, Debug, Clone)]
pub struct CalculationFinished {
    pub generation: u64,
    pub result: Result<CrossResult, ValidationError>,
}

/// Status line shown under the input.
#[derive(Event, Debug, Clone)]
pub struct CalculationFeedback {
    pub message: String,
    pub is_error: bool,
}

/// Sent when the input field loses focus without a submit.
#[derive(Event, Debug, Clone)]
pub struct InputBlurred {
    pub input: String,
}
