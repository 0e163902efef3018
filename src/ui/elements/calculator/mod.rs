// src/ui/elements/calculator/mod.rs
pub mod cross_grid;
pub mod input_form;
pub mod main_panel;
pub mod preferences_bar;
pub mod state;
pub mod tabs;

pub use main_panel::calculator_ui;
pub use state::CalculatorWindowState;
