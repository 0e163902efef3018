// src/cross/resources.rs
use bevy::prelude::*;

use super::calculator::parse_input;
use super::definitions::{Category, CrossResult};
use super::error::ValidationError;
use super::events::{CalculationTrigger, RequestCalculation};

/// Calculator state owned by the world. The UI reads it; only the cross systems write it.
#[derive(Resource, Debug, Default, Clone)]
pub struct CrossState {
    pub selected: Category,
    pub result: Option<CrossResult>,
    /// Set from a successful validation until the delayed result arrives.
    pub busy: bool,
    pub generation: u64,
    pub pending: Option<u64>,
    /// Consumed by the UI to start the shake animation.
    pub shake_requested: bool,
}

/// Work handed to the background runtime after a request passes validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCalculation {
    pub generation: u64,
    pub input: i64,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Another calculation is still in flight.
    Ignored,
    /// Invalid input on tab switch: cross cleared, nothing reported.
    ClearedQuietly,
    Rejected(ValidationError),
    Scheduled(ScheduledCalculation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlurOutcome {
    /// Busy, or the text is a valid number: nothing changes.
    Kept,
    /// Empty field: cross cleared without feedback.
    Cleared,
    Rejected(ValidationError),
}

impl CrossState {
    /// Applies a request to the state and decides what, if anything, to run.
    pub fn begin_calculation(&mut self, request: &RequestCalculation) -> RequestOutcome {
        if self.busy {
            return RequestOutcome::Ignored;
        }
        self.selected = request.category;

        match parse_input(&request.input) {
            Ok(input) => {
                self.generation += 1;
                self.pending = Some(self.generation);
                self.busy = true;
                RequestOutcome::Scheduled(ScheduledCalculation {
                    generation: self.generation,
                    input,
                    category: request.category,
                })
            }
            Err(err) => {
                self.result = None;
                match request.trigger {
                    CalculationTrigger::TabSelected => RequestOutcome::ClearedQuietly,
                    CalculationTrigger::Submit => {
                        self.shake_requested = true;
                        RequestOutcome::Rejected(err)
                    }
                }
            }
        }
    }

    /// Checks the field when it loses focus; invalid text clears the cross.
    pub fn input_blurred(&mut self, input: &str) -> BlurOutcome {
        if self.busy {
            return BlurOutcome::Kept;
        }
        match parse_input(input) {
            Ok(_) => BlurOutcome::Kept,
            Err(ValidationError::Empty) => {
                self.result = None;
                BlurOutcome::Cleared
            }
            Err(err) => {
                self.result = None;
                self.shake_requested = true;
                BlurOutcome::Rejected(err)
            }
        }
    }

    /// Accepts the result for the pending generation. Returns false for stale results.
    pub fn finish_calculation(
        &mut self,
        generation: u64,
        result: Result<CrossResult, ValidationError>,
    ) -> bool {
        if self.pending != Some(generation) {
            return false;
        }
        self.pending = None;
        self.busy = false;
        self.result = result.ok();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross::calculator::compute;

    fn request(input: &str, category: Category, trigger: CalculationTrigger) -> RequestCalculation {
        RequestCalculation {
            input: input.to_string(),
            category,
            trigger,
        }
    }

    #[test]
    fn valid_submit_schedules_and_marks_busy() {
        let mut state = CrossState::default();
        let outcome = state.begin_calculation(&request("11", Category::Khaki, CalculationTrigger::Submit));
        assert_eq!(
            outcome,
            RequestOutcome::Scheduled(ScheduledCalculation {
                generation: 1,
                input: 11,
                category: Category::Khaki,
            })
        );
        assert!(state.busy);
        assert_eq!(state.pending, Some(1));
        assert_eq!(state.selected, Category::Khaki);
    }

    #[test]
    fn second_request_while_busy_is_ignored() {
        let mut state = CrossState::default();
        state.begin_calculation(&request("11", Category::Naari, CalculationTrigger::Submit));
        let outcome = state.begin_calculation(&request("20", Category::Maai, CalculationTrigger::TabSelected));
        assert_eq!(outcome, RequestOutcome::Ignored);
        assert_eq!(state.generation, 1);
        assert_eq!(state.selected, Category::Naari);
    }

    #[test]
    fn invalid_submit_clears_and_shakes_without_busy() {
        let mut state = CrossState {
            result: Some(compute(9, Category::Naari).unwrap()),
            ..Default::default()
        };
        let outcome = state.begin_calculation(&request("8", Category::Naari, CalculationTrigger::Submit));
        assert_eq!(outcome, RequestOutcome::Rejected(ValidationError::BelowMinimum(8)));
        assert!(state.result.is_none());
        assert!(state.shake_requested);
        assert!(!state.busy);
        assert!(state.pending.is_none());
    }

    #[test]
    fn invalid_tab_switch_clears_quietly() {
        let mut state = CrossState {
            result: Some(compute(9, Category::Naari).unwrap()),
            ..Default::default()
        };
        let outcome = state.begin_calculation(&request("", Category::Hawaai, CalculationTrigger::TabSelected));
        assert_eq!(outcome, RequestOutcome::ClearedQuietly);
        assert!(state.result.is_none());
        assert!(!state.shake_requested);
        assert_eq!(state.selected, Category::Hawaai);
    }

    #[test]
    fn finishing_releases_busy() {
        let mut state = CrossState::default();
        state.begin_calculation(&request("10", Category::Naari, CalculationTrigger::Submit));
        let result = compute(10, Category::Naari);
        assert!(state.finish_calculation(1, result.clone()));
        assert!(!state.busy);
        assert_eq!(state.result, result.ok());
    }

    #[test]
    fn blur_with_invalid_text_clears_and_shakes() {
        let mut state = CrossState {
            result: Some(compute(11, Category::Naari).unwrap()),
            ..Default::default()
        };
        assert_eq!(state.input_blurred("5"), BlurOutcome::Rejected(ValidationError::BelowMinimum(5)));
        assert!(state.result.is_none());
        assert!(state.shake_requested);
    }

    #[test]
    fn blur_with_empty_text_clears_quietly() {
        let mut state = CrossState {
            result: Some(compute(11, Category::Naari).unwrap()),
            ..Default::default()
        };
        assert_eq!(state.input_blurred("  "), BlurOutcome::Cleared);
        assert!(state.result.is_none());
        assert!(!state.shake_requested);
    }

    #[test]
    fn blur_with_valid_text_keeps_the_cross() {
        let result = compute(11, Category::Naari).unwrap();
        let mut state = CrossState {
            result: Some(result),
            ..Default::default()
        };
        assert_eq!(state.input_blurred("20"), BlurOutcome::Kept);
        assert_eq!(state.result, Some(result));
        assert!(!state.shake_requested);
    }

    #[test]
    fn blur_while_busy_changes_nothing() {
        let mut state = CrossState::default();
        state.begin_calculation(&request("11", Category::Naari, CalculationTrigger::Submit));
        assert_eq!(state.input_blurred("abc"), BlurOutcome::Kept);
        assert!(state.busy);
        assert!(!state.shake_requested);
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut state = CrossState::default();
        state.begin_calculation(&request("10", Category::Naari, CalculationTrigger::Submit));
        assert!(!state.finish_calculation(7, compute(10, Category::Naari)));
        assert!(state.busy);
        assert!(state.result.is_none());
    }
}
