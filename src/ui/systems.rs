// src/ui/systems.rs
use crate::{cross::events::CalculationFeedback, ui::UiFeedbackState};
use bevy::prelude::*;
use std::any;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<CalculationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // An error wins over any success reported in the same frame
        if event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Carries an event produced off the main thread until [`forward_events`] writes it.
#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
    mut event_type_name: Local<String>,
) {
    if event_type_name.is_empty() {
        *event_type_name = any::type_name::<E>().split("::").last().unwrap_or("UnknownEvent").to_string();
    }

    let mut count = 0;
    for (entity, send_event_component) in query.iter() {
        count += 1;
        debug!("Forwarding event type '{}' #{}: {:?}", *event_type_name, count, send_event_component.event);
        writer.write(send_event_component.event.clone());
        commands.entity(entity).despawn();
    }

    if count > 0 {
        debug!("Forwarded {} instance(s) of event type '{}'.", count, *event_type_name);
    }
}
