// src/ui/elements/calculator/cross_grid.rs
use bevy_egui::egui;

use crate::cross::numerals::render_result;
use crate::cross::{CrossResult, NumeralScript, Position};

/// 3x3 placement of the five cells; corners stay empty.
pub const CROSS_LAYOUT: [[Option<Position>; 3]; 3] = [
    [None, Some(Position::Top), None],
    [Some(Position::Left), Some(Position::Center), Some(Position::Right)],
    [None, Some(Position::Bottom), None],
];

const CELL_SIZE: egui::Vec2 = egui::Vec2::new(72.0, 56.0);
const VALUE_TEXT_SIZE: f32 = 26.0;

pub fn show_cross_grid(
    ui: &mut egui::Ui,
    result: Option<&CrossResult>,
    script: NumeralScript,
    highlighted: bool,
) {
    let rendered = result.map(|r| render_result(r, script));
    egui::Grid::new("cross_grid")
        .num_columns(3)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for row in CROSS_LAYOUT {
                for cell in row {
                    match cell {
                        Some(position) => {
                            let text = rendered
                                .as_ref()
                                .and_then(|cells| cells.iter().find(|(p, _)| *p == position))
                                .map(|(_, text)| text.as_str())
                                .unwrap_or("");
                            cross_cell(ui, position, text, highlighted && rendered.is_some());
                        }
                        None => {
                            ui.allocate_space(CELL_SIZE);
                        }
                    }
                }
                ui.end_row();
            }
        });
}

fn cross_cell(ui: &mut egui::Ui, position: Position, text: &str, calculated: bool) {
    let fill = if calculated {
        ui.visuals().selection.bg_fill.gamma_multiply(0.35)
    } else {
        ui.visuals().extreme_bg_color
    };
    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.set_min_size(CELL_SIZE);
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(text).size(VALUE_TEXT_SIZE).strong())
                .on_hover_text(position.as_str());
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_each_position_once() {
        let placed: Vec<Position> = CROSS_LAYOUT.iter().flatten().flatten().copied().collect();
        assert_eq!(placed.len(), Position::ALL.len());
        for position in Position::ALL {
            assert!(placed.contains(&position));
        }
    }
}
