// src/ui/elements/calculator/state.rs
use bevy::prelude::Resource;

use crate::cross::Category;
use crate::settings::ThemePreference;

/// Widget-level state that does not belong to the calculator itself.
#[derive(Resource, Debug, Clone, Default)]
pub struct CalculatorWindowState {
    pub input_text: String,
    /// Tab highlighted by keyboard navigation; selection happens on Enter/Space.
    pub focused_tab: Option<Category>,
    /// egui time at which the current shake began.
    pub shake_started_at: Option<f64>,
    pub applied_prefs: Option<(ThemePreference, u32)>,
    pub fonts_installed: bool,
    /// Cells are highlighted until the input is edited.
    pub calculated: bool,
    seen_generation: Option<u64>,
}

impl CalculatorWindowState {
    /// Highlights a freshly arrived result once; edits and cleared results drop the highlight.
    pub fn observe_result(&mut self, generation: u64, has_result: bool, busy: bool) {
        if !has_result {
            self.calculated = false;
            return;
        }
        if !busy && self.seen_generation != Some(generation) {
            self.seen_generation = Some(generation);
            self.calculated = true;
        }
    }

    pub fn input_edited(&mut self) {
        self.calculated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_result_is_highlighted_until_edited() {
        let mut state = CalculatorWindowState::default();
        state.observe_result(1, true, false);
        assert!(state.calculated);

        state.input_edited();
        assert!(!state.calculated);

        // Same result on later frames does not bring the highlight back
        state.observe_result(1, true, false);
        assert!(!state.calculated);

        state.observe_result(2, true, false);
        assert!(state.calculated);
    }

    #[test]
    fn old_result_is_not_rehighlighted_while_loading() {
        let mut state = CalculatorWindowState::default();
        state.observe_result(1, true, false);
        state.input_edited();
        state.observe_result(2, true, true);
        assert!(!state.calculated);
        state.observe_result(2, true, false);
        assert!(state.calculated);
    }

    #[test]
    fn cleared_result_drops_the_highlight() {
        let mut state = CalculatorWindowState::default();
        state.observe_result(1, true, false);
        state.observe_result(1, false, false);
        assert!(!state.calculated);
    }
}
