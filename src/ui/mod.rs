//! UI plugin - score watermark, game over labels, restart, and quit.

use bevy::prelude::*;

use crate::game::{GameOverUI, ScoreText, SnakeDied, TEXT_COLOR, Z_SCORE};
use crate::session::Session;

/// Plugin for labels and game flow.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (
                update_score_text,
                game_over_screen,
                restart_game,
                quit_on_escape,
            )
                .chain(),
        );
    }
}

/// Initial setup system - camera and the score watermark.
fn setup_system(mut commands: Commands) {
    commands.spawn(Camera2d);

    // The apples-eaten count sits behind the playfield like a watermark.
    commands.spawn((
        Text2d::new("0"),
        TextFont {
            font_size: 100.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Transform::from_xyz(0.0, 0.0, Z_SCORE),
        ScoreText,
    ));
}

/// System to keep the score text in sync with the session.
fn update_score_text(session: Res<Session>, mut query: Query<&mut Text2d, With<ScoreText>>) {
    if let Ok(mut text) = query.single_mut() {
        text.0 = session.score().to_string();
    }
}

/// System to spawn the game over labels when the snake dies.
fn game_over_screen(mut commands: Commands, mut died_reader: MessageReader<SnakeDied>) {
    if died_reader.read().next().is_some() {
        for (label, y, font_size) in [
            ("Game Over", -60.0, 20.0),
            ("SPACE to Restart", -85.0, 15.0),
            ("ESCAPE to Quit", -100.0, 15.0),
        ] {
            commands.spawn((
                Text2d::new(label),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Transform::from_xyz(0.0, y, Z_SCORE),
                GameOverUI,
            ));
        }
    }
}

/// System to restart a finished session.
fn restart_game(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<Session>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if session.game_over() && keyboard_input.just_pressed(KeyCode::Space) {
        for entity in game_over_ui.iter() {
            commands.entity(entity).despawn();
        }
        session.reset();
    }
}

/// System to quit on Escape.
fn quit_on_escape(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
