// src/ui/elements/calculator/tabs.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::analytics::AnalyticsEvent;
use crate::cross::events::{CalculationTrigger, RequestCalculation};
use crate::cross::Category;

use super::state::CalculatorWindowState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Next,
    Previous,
    Activate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    Focus(Category),
    Select(Category),
}

/// Arrow keys move the highlight with wraparound, starting from the selected tab.
/// Enter/Space select only a tab the arrows have highlighted.
pub fn tab_key_action(focused: Option<Category>, selected: Category, key: TabKey) -> Option<TabAction> {
    let from = focused.unwrap_or(selected);
    match key {
        TabKey::Next => Some(TabAction::Focus(from.next())),
        TabKey::Previous => Some(TabAction::Focus(from.previous())),
        TabKey::Activate => focused.map(TabAction::Select),
    }
}

fn pressed_tab_key(ctx: &egui::Context) -> Option<TabKey> {
    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowRight) {
            Some(TabKey::Next)
        } else if i.key_pressed(egui::Key::ArrowLeft) {
            Some(TabKey::Previous)
        } else if i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space) {
            Some(TabKey::Activate)
        } else {
            None
        }
    })
}

fn select_tab(
    category: Category,
    window_state: &CalculatorWindowState,
    request_writer: &mut EventWriter<RequestCalculation>,
    analytics_writer: &mut EventWriter<AnalyticsEvent>,
) {
    request_writer.write(RequestCalculation {
        input: window_state.input_text.clone(),
        category,
        trigger: CalculationTrigger::TabSelected,
    });
    analytics_writer.write(AnalyticsEvent::new("Tab", "Select", category.as_str()));
}

pub fn show_category_tabs(
    ui: &mut egui::Ui,
    selected: Category,
    busy: bool,
    window_state: &mut CalculatorWindowState,
    request_writer: &mut EventWriter<RequestCalculation>,
    analytics_writer: &mut EventWriter<AnalyticsEvent>,
) {
    if !busy && !ui.ctx().wants_keyboard_input() {
        let action = pressed_tab_key(ui.ctx())
            .and_then(|key| tab_key_action(window_state.focused_tab, selected, key));
        match action {
            Some(TabAction::Focus(next)) => window_state.focused_tab = Some(next),
            Some(TabAction::Select(category)) => {
                window_state.focused_tab = None;
                select_tab(category, window_state, request_writer, analytics_writer);
            }
            None => {}
        }
    }

    ui.add_enabled_ui(!busy, |ui| {
        ui.horizontal(|ui| {
            for category in Category::ALL {
                let mut button = egui::Button::new(category.label()).selected(category == selected);
                if window_state.focused_tab == Some(category) && category != selected {
                    button = button.stroke(ui.visuals().selection.stroke);
                }
                if ui.add(button).clicked() {
                    window_state.focused_tab = None;
                    select_tab(category, window_state, request_writer, analytics_writer);
                }
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_wrap_in_both_directions() {
        assert_eq!(
            tab_key_action(Some(Category::Khaki), Category::Naari, TabKey::Next),
            Some(TabAction::Focus(Category::Naari))
        );
        assert_eq!(
            tab_key_action(Some(Category::Naari), Category::Maai, TabKey::Previous),
            Some(TabAction::Focus(Category::Khaki))
        );
    }

    #[test]
    fn arrows_start_from_the_selected_tab() {
        assert_eq!(
            tab_key_action(None, Category::Maai, TabKey::Next),
            Some(TabAction::Focus(Category::Hawaai))
        );
    }

    #[test]
    fn activate_selects_the_focused_tab() {
        assert_eq!(
            tab_key_action(Some(Category::Hawaai), Category::Naari, TabKey::Activate),
            Some(TabAction::Select(Category::Hawaai))
        );
    }

    #[test]
    fn activate_without_a_focused_tab_does_nothing() {
        for selected in Category::ALL {
            assert_eq!(tab_key_action(None, selected, TabKey::Activate), None);
        }
    }
}
