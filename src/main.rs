use bevy::{prelude::*, window::WindowResolution};

#[cfg(test)]
mod tests;

mod controller;
mod domain;
mod resource;
mod settings;
mod simulator;
mod sound;
mod visualizer;

fn main() -> Result<(), settings::SettingsError> {
    let settings = settings::Settings::from_env()?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Treasure Hunt".into(),
                resolution: WindowResolution::new(settings.window_width, settings.window_height),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(settings)
        .add_plugins(controller::Controller)
        .add_plugins(simulator::Simulator)
        .add_plugins(visualizer::Visualizer)
        .add_plugins(sound::Sound)
        .run();

    Ok(())
}
