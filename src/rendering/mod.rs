//! Rendering plugin - draws the committed session state each frame and
//! plays the eaten-apple flash.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    APPLE_COLOR, APPLE_FLASH_COLOR, AppleEaten, CELL_SIZE, CORNER_RADIUS, GRID_HEIGHT, GRID_WIDTH,
    Position, PulseEffect, SNAKE_COLOR, Z_APPLE, Z_SNAKE,
};
use crate::session::Session;

/// Plugin for drawing and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                draw_snake,
                draw_apple,
                spawn_apple_eaten_effect,
                pulse_effect_system,
            )
                .chain(),
        );
    }
}

/// World-space center of a grid cell.
fn cell_center(position: Position) -> Vec2 {
    Vec2::new(
        (position.x as f32 - GRID_WIDTH as f32 / 2.0 + 0.5) * CELL_SIZE as f32,
        (position.y as f32 - GRID_HEIGHT as f32 / 2.0 + 0.5) * CELL_SIZE as f32,
    )
}

/// System to draw every snake piece as a rounded quad.
fn draw_snake(mut painter: ShapePainter, session: Res<Session>) {
    // One pixel smaller than the cell so segments read as distinct.
    let size = CELL_SIZE as f32 - 1.0;

    painter.color = SNAKE_COLOR;
    painter.corner_radii = Vec4::splat(CORNER_RADIUS / (size / 2.0));

    for &piece in session.snake().pieces() {
        painter.set_translation(cell_center(piece).extend(Z_SNAKE));
        painter.rect(Vec2::splat(size));
    }
}

/// System to draw the apple with a gentle pulse.
fn draw_apple(mut painter: ShapePainter, session: Res<Session>, time: Res<Time>) {
    let scale = 1.0 + (time.elapsed_secs() * std::f32::consts::TAU / 0.8).sin() * 0.15;

    painter.color = APPLE_COLOR;
    painter.set_translation(cell_center(session.apple()).extend(Z_APPLE));
    painter.circle(CELL_SIZE as f32 / 2.0 * scale);
}

/// System to spawn a short expanding flash where an apple was eaten.
fn spawn_apple_eaten_effect(mut commands: Commands, mut apple_reader: MessageReader<AppleEaten>) {
    for event in apple_reader.read() {
        commands.spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: APPLE_FLASH_COLOR,
                    transform: Transform::from_translation(
                        cell_center(event.position).extend(Z_APPLE + 0.5),
                    ),
                    ..ShapeConfig::default_2d()
                },
                CELL_SIZE as f32 / 2.0,
            ),
            PulseEffect {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
                start_scale: 1.0,
                end_scale: 2.5,
            },
        ));
    }
}

/// System to scale out and despawn pulse effects.
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}
