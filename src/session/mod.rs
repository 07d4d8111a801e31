//! Session plugin - owns the simulation state and advances it on a fixed
//! cadence; keyboard input only ever touches the pending-direction queue.

use std::collections::VecDeque;

use bevy::prelude::*;
use bevy::time::common_conditions::on_timer;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::{AppleEaten, Direction, Position, SnakeDied, TICK_INTERVAL};
use crate::snake::Snake;

mod queue;

pub use queue::DirectionQueue;

/// Plugin for input and tick systems.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (direction_input, session_tick.run_if(on_timer(TICK_INTERVAL))).chain(),
        );
    }
}

/// What happened during one tick, for the systems that write messages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickOutcome {
    pub ate_apple: bool,
    pub died: bool,
}

/// All simulation state for one run of the game.
///
/// The session is either playing or finished: once the snake runs into
/// itself every later [`Session::update`] is a no-op, until an explicit
/// [`Session::reset`] starts a fresh run. Rendering and input layers get
/// the session by reference and only use the read accessors and the queue.
#[derive(Resource)]
pub struct Session {
    rng: StdRng,
    snake: Snake,
    apple: Position,
    score: u32,
    growth_increment: usize,
    game_over: bool,
    pending: DirectionQueue,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session::with_rng(StdRng::from_os_rng())
    }

    /// Build a session from a caller-supplied RNG, so tests can seed it.
    pub fn with_rng(mut rng: StdRng) -> Self {
        let snake = Snake::new(Position::random(&mut rng), Direction::random(&mut rng));
        let apple = random_free_cell(&mut rng, snake.pieces());
        Session {
            rng,
            snake,
            apple,
            score: 0,
            growth_increment: 1,
            game_over: false,
            pending: DirectionQueue::default(),
        }
    }

    /// Advance the world by one tick.
    pub fn update(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::default();
        }

        self.snake.advance();

        // Dequeue after moving: a turn queued this tick steers the next
        // tick's movement, not this one's.
        if let Some(direction) = self.pending.pop() {
            self.snake.turn(direction);
        }

        let ate_apple = self.check_apple_eaten();

        self.game_over = self.snake.is_dead();
        self.snake.set_alive(!self.game_over);

        TickOutcome {
            ate_apple,
            died: self.game_over,
        }
    }

    fn check_apple_eaten(&mut self) -> bool {
        if self.snake.head() != Some(self.apple) {
            return false;
        }

        self.apple = random_free_cell(&mut self.rng, self.snake.pieces());
        self.snake.grow(self.growth_increment);
        self.growth_increment += 1;
        self.score += 1;
        true
    }

    /// Append a direction change from the input layer. Applied one per
    /// tick, in arrival order.
    pub fn enqueue_direction(&self, direction: Direction) {
        self.pending.push(direction);
    }

    /// Start a fresh run with new randomization. Externally-owned resources
    /// (window, camera) are untouched.
    pub fn reset(&mut self) {
        self.snake = Snake::new(
            Position::random(&mut self.rng),
            Direction::random(&mut self.rng),
        );
        self.apple = random_free_cell(&mut self.rng, self.snake.pieces());
        self.score = 0;
        self.growth_increment = 1;
        self.game_over = false;
        self.pending.clear();
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Position {
        self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }
}

/// A uniformly random cell outside the occupied set, by rejection sampling.
/// The grid is much larger than the snake in practice, so this terminates
/// quickly.
fn random_free_cell(rng: &mut StdRng, occupied: &VecDeque<Position>) -> Position {
    loop {
        let candidate = Position::random(rng);
        if !occupied.contains(&candidate) {
            return candidate;
        }
    }
}

const KEY_BINDINGS: [(KeyCode, Direction); 8] = [
    (KeyCode::KeyW, Direction::North),
    (KeyCode::ArrowUp, Direction::North),
    (KeyCode::KeyD, Direction::East),
    (KeyCode::ArrowRight, Direction::East),
    (KeyCode::KeyA, Direction::West),
    (KeyCode::ArrowLeft, Direction::West),
    (KeyCode::KeyS, Direction::South),
    (KeyCode::ArrowDown, Direction::South),
];

/// System to turn key presses into queued direction changes.
fn direction_input(keyboard_input: Res<ButtonInput<KeyCode>>, session: Res<Session>) {
    if session.game_over() {
        return;
    }

    for (key, direction) in KEY_BINDINGS {
        if keyboard_input.just_pressed(key) {
            session.enqueue_direction(direction);
        }
    }
}

/// System to advance the session on the tick cadence.
fn session_tick(
    mut session: ResMut<Session>,
    mut apple_writer: MessageWriter<AppleEaten>,
    mut died_writer: MessageWriter<SnakeDied>,
) {
    let outcome = session.update();

    if outcome.ate_apple && let Some(head) = session.snake().head() {
        apple_writer.write(AppleEaten { position: head });
    }

    if outcome.died {
        println!("Game Over! Final score: {}", session.score());
        died_writer.write(SnakeDied);
    }
}
