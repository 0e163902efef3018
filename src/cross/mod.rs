// src/cross/mod.rs

// Pure calculation core
pub mod calculator;
pub mod definitions;
pub mod error;
pub mod numerals;

// Bevy wiring around it
pub mod events;
pub mod plugin;
pub mod resources;
pub(crate) mod systems;

pub use calculator::{compute, compute_from_text, parse_input, MIN_INPUT};
pub use definitions::{Category, CrossResult, Position};
pub use error::{CrossError, ValidationError};
pub use numerals::NumeralScript;
pub use plugin::CrossPlugin;
