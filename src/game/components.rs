//! Grid vocabulary and marker components shared across the game.

use bevy::prelude::*;
use rand::Rng;

use super::{GRID_HEIGHT, GRID_WIDTH};

/// A cell on the playfield, addressed by integer column and row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// A uniformly random cell on the grid.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Position {
            x: rng.random_range(0..GRID_WIDTH),
            y: rng.random_range(0..GRID_HEIGHT),
        }
    }

    /// The cell shifted by a direction delta, without wrapping.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The cell brought back into grid bounds: one step off either edge
    /// re-enters from the opposite side.
    pub fn wrapped(self) -> Self {
        Position {
            x: (self.x + GRID_WIDTH) % GRID_WIDTH,
            y: (self.y + GRID_HEIGHT) % GRID_HEIGHT,
        }
    }
}

/// Direction of snake movement. North is up on screen.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    North,
    East,
    West,
    South,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }

    /// Unit cell delta for one tick of movement in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, -1),
        }
    }

    /// A uniformly random direction.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..4) {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::West,
            _ => Direction::South,
        }
    }
}

/// Component to mark the score display.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over label stack.
#[derive(Component)]
pub struct GameOverUI;

/// Component for entities that scale out and despawn.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}
