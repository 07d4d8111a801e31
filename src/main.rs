//! Arcade snake on a wrapping grid: the snake grows by an accelerating
//! increment per apple and dies only by running into itself.

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::Shape2dPlugin;

mod game;
mod rendering;
mod session;
mod snake;
mod ui;

use game::{AppleEaten, BACKGROUND_COLOR, SCREEN_HEIGHT, SCREEN_WIDTH, SnakeDied};
use rendering::RenderingPlugin;
use session::{Session, SessionPlugin};
use ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    title: "Snake".to_string(),
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .init_resource::<Session>()
        .add_message::<AppleEaten>()
        .add_message::<SnakeDied>()
        .add_plugins((SessionPlugin, RenderingPlugin, UiPlugin))
        .run();
}
