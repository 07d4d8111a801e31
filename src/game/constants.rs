//! Game constants for screen and grid size, colors, timing, and draw layers.

use bevy::prelude::*;
use std::time::Duration;

// Screen and grid dimensions. The grid is derived, never configured directly.
pub const SCREEN_WIDTH: u32 = 400;
pub const SCREEN_HEIGHT: u32 = 400;
pub const CELL_SIZE: u32 = 10;
pub const GRID_WIDTH: i32 = (SCREEN_WIDTH / CELL_SIZE) as i32;
pub const GRID_HEIGHT: i32 = (SCREEN_HEIGHT / CELL_SIZE) as i32;

// Timing: 15 simulation ticks per second.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 15);

// Snake
pub const INITIAL_SNAKE_LENGTH: usize = 5;

// Visual settings
pub const CORNER_RADIUS: f32 = 2.0;

// Colors
pub const SNAKE_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const APPLE_COLOR: Color = Color::srgba(0.0, 1.0, 0.0, 1.0);
pub const APPLE_FLASH_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const TEXT_COLOR: Color = Color::srgba(0.4, 0.4, 0.4, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);

// Z-index constants for draw order
pub const Z_SCORE: f32 = 0.5;
pub const Z_APPLE: f32 = 1.0;
pub const Z_SNAKE: f32 = 2.0;
