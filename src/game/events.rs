//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Message triggered when an apple is eaten (for visual effects).
#[derive(Message)]
pub struct AppleEaten {
    pub position: Position,
}

/// Message triggered when the snake runs into itself.
#[derive(Message)]
pub struct SnakeDied;
