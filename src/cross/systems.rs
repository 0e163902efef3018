// src/cross/systems.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use std::time::Duration;

use super::calculator::compute;
use super::events::{CalculationFeedback, CalculationFinished, InputBlurred, RequestCalculation};
use super::resources::{BlurOutcome, CrossState, RequestOutcome, ScheduledCalculation};
use crate::analytics::AnalyticsEvent;
use crate::ui::systems::SendEvent;

/// Artificial latency so the loader is visible.
pub const CALCULATION_DELAY: Duration = Duration::from_millis(500);

pub fn handle_calculation_requests(
    mut requests: EventReader<RequestCalculation>,
    mut state: ResMut<CrossState>,
    mut feedback_writer: EventWriter<CalculationFeedback>,
    runtime: Res<TokioTasksRuntime>,
    mut commands: Commands,
) {
    for request in requests.read() {
        match state.begin_calculation(request) {
            RequestOutcome::Ignored => {
                debug!(
                    "Ignoring calculation request {:?} while generation {:?} is in flight.",
                    request, state.pending
                );
            }
            RequestOutcome::ClearedQuietly => {
                debug!(
                    "Input {:?} not valid on tab switch to '{}'; cross cleared.",
                    request.input, request.category
                );
            }
            RequestOutcome::Rejected(err) => {
                warn!("Validation failed for input {:?}: {}", request.input, err);
                feedback_writer.write(CalculationFeedback {
                    message: err.to_string(),
                    is_error: true,
                });
            }
            RequestOutcome::Scheduled(job) => {
                info!(
                    "Generating cross for number: {} (Type: {}), generation {}",
                    job.input, job.category, job.generation
                );
                schedule_delayed_calculation(&runtime, &mut commands, job);
            }
        }
    }
}

pub fn handle_input_blurred(
    mut blurred: EventReader<InputBlurred>,
    mut state: ResMut<CrossState>,
    mut feedback_writer: EventWriter<CalculationFeedback>,
) {
    for ev in blurred.read() {
        match state.input_blurred(&ev.input) {
            BlurOutcome::Kept => {}
            BlurOutcome::Cleared => {
                debug!("Input cleared; cross cleared.");
            }
            BlurOutcome::Rejected(err) => {
                warn!("Validation failed on blur for input {:?}: {}", ev.input, err);
                feedback_writer.write(CalculationFeedback {
                    message: err.to_string(),
                    is_error: true,
                });
            }
        }
    }
}

fn schedule_delayed_calculation(
    runtime: &TokioTasksRuntime,
    commands: &mut Commands,
    job: ScheduledCalculation,
) {
    let commands_entity = commands.spawn_empty().id();
    runtime.spawn_background_task(move |mut ctx| async move {
        tokio::time::sleep(CALCULATION_DELAY).await;
        let result = compute(job.input, job.category);
        ctx.run_on_main_thread(move |world_ctx| {
            world_ctx.world.commands().entity(commands_entity).insert(
                SendEvent::<CalculationFinished> {
                    event: CalculationFinished {
                        generation: job.generation,
                        result,
                    },
                },
            );
        })
        .await;
    });
}

pub fn apply_finished_calculations(
    mut finished: EventReader<CalculationFinished>,
    mut state: ResMut<CrossState>,
    mut feedback_writer: EventWriter<CalculationFeedback>,
    mut analytics_writer: EventWriter<AnalyticsEvent>,
) {
    for ev in finished.read() {
        if !state.finish_calculation(ev.generation, ev.result.clone()) {
            debug!(
                "Dropping stale calculation result for generation {} (pending: {:?}).",
                ev.generation, state.pending
            );
            continue;
        }
        match &ev.result {
            Ok(result) => {
                info!("Cross ready for {} ({}): {:?}", result.input, result.category, result.values());
                feedback_writer.write(CalculationFeedback {
                    message: format!("Calculated {} for {}.", result.category.label(), result.input),
                    is_error: false,
                });
                analytics_writer.write(AnalyticsEvent::new(
                    "Calculation",
                    "Generate",
                    result.category.as_str(),
                ));
            }
            Err(err) => {
                error!("Scheduled calculation {} failed: {}", ev.generation, err);
                feedback_writer.write(CalculationFeedback {
                    message: err.to_string(),
                    is_error: true,
                });
            }
        }
    }
}
