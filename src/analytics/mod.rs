// src/analytics/mod.rs
// Analytics hook. Events are only written to the log; there is no remote sink.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(
        category: impl Into<String>,
        action: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: label.into(),
        }
    }
}

pub fn log_analytics_events(mut events: EventReader<AnalyticsEvent>) {
    for ev in events.read() {
        info!(
            target: "analytics",
            category = %ev.category,
            action = %ev.action,
            label = %ev.label,
            "Analytics Event: Category=\"{}\", Action=\"{}\", Label=\"{}\"",
            ev.category, ev.action, ev.label
        );
    }
}

pub struct AnalyticsPlugin;

impl Plugin for AnalyticsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AnalyticsEvent>()
            .add_systems(PostUpdate, log_analytics_events);
    }
}
