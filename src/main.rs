// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use clap::Parser;
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;

mod analytics;
mod cli;
mod cross;
mod settings;
mod ui;

use analytics::AnalyticsPlugin;
use cross::CrossPlugin;
use settings::AppSettings;
use ui::CalculatorUiPlugin;

fn main() {
    let args = cli::Cli::parse();
    if let Some(command) = args.command {
        if let Err(e) = cli::run(command) {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
        return;
    }

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Cross Calculator".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .init_resource::<AppSettings>()
        .add_plugins(AnalyticsPlugin)
        .add_plugins(CrossPlugin)
        .add_plugins(CalculatorUiPlugin)
        .add_systems(Startup, load_app_settings)
        .run();
}

fn load_app_settings(mut app_settings: ResMut<AppSettings>) {
    *app_settings = settings::load_or_default();
    info!(
        "Loaded settings: theme '{}', font scale {}%, numerals '{}'.",
        app_settings.theme.as_str(),
        app_settings.font_scale_percent,
        app_settings.numeral_script
    );
}
