// src/ui/elements/mod.rs

// Calculator window: tabs, input, cross grid, preferences bar
pub mod calculator;
