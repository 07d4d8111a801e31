//! The snake itself: body pieces, heading, target length, and the
//! self-collision check.

use std::collections::VecDeque;

use crate::game::{Direction, INITIAL_SNAKE_LENGTH, Position};

/// Snake body state.
///
/// Pieces are kept in movement order: tail at the front of the deque, head
/// at the back. The body holds at least one piece from construction on, and
/// `pieces.len() <= length` after every [`Snake::advance`].
pub struct Snake {
    pieces: VecDeque<Position>,
    direction: Direction,
    length: usize,
    alive: bool,
}

impl Snake {
    /// A fresh one-cell snake that will grow into its target length as it
    /// moves.
    pub fn new(head: Position, direction: Direction) -> Self {
        Snake {
            pieces: VecDeque::from([head]),
            direction,
            length: INITIAL_SNAKE_LENGTH,
            alive: true,
        }
    }

    /// Body cells in movement order, tail first.
    pub fn pieces(&self) -> &VecDeque<Position> {
        &self.pieces
    }

    /// The head cell, the most recently appended piece.
    pub fn head(&self) -> Option<Position> {
        self.pieces.back().copied()
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Target body length. The body catches up one cell per tick.
    pub fn target_length(&self) -> usize {
        self.length
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Raise the target length. The session decides when and by how much.
    pub fn grow(&mut self, amount: usize) {
        self.length += amount;
    }

    /// Change heading, unless the request would reverse straight into the
    /// neck segment. Reversals are silently ignored.
    pub fn turn(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    /// One tick of movement: append a new head one cell along the current
    /// heading (only while alive), trim the tail down to the target length,
    /// and wrap the head back onto the grid.
    pub fn advance(&mut self) {
        if self.alive && let Some(&head) = self.pieces.back() {
            self.pieces.push_back(head.offset(self.direction.delta()));
        }

        // Dropping tail pieces as the head advances gives the illusion that
        // the whole snake is moving.
        while self.pieces.len() > self.length {
            self.pieces.pop_front();
        }

        if let Some(head) = self.pieces.back_mut() {
            *head = head.wrapped();
        }
    }

    /// True when the head occupies the same cell as any other piece.
    pub fn is_dead(&self) -> bool {
        let Some(head) = self.head() else {
            return false;
        };
        self.pieces
            .iter()
            .take(self.pieces.len() - 1)
            .any(|&piece| piece == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GRID_HEIGHT, GRID_WIDTH};

    fn snake_at(x: i32, y: i32, direction: Direction) -> Snake {
        Snake::new(Position { x, y }, direction)
    }

    #[test]
    fn fresh_snake_is_a_single_cell() {
        let snake = snake_at(5, 5, Direction::East);
        assert_eq!(snake.pieces().len(), 1);
        assert_eq!(snake.head(), Some(Position { x: 5, y: 5 }));
        assert_eq!(snake.target_length(), INITIAL_SNAKE_LENGTH);
        assert!(snake.is_alive());
    }

    #[test]
    fn grows_into_target_length_while_moving_east() {
        let mut snake = snake_at(5, 5, Direction::East);
        for _ in 0..4 {
            snake.advance();
        }

        let pieces: Vec<Position> = snake.pieces().iter().copied().collect();
        let expected: Vec<Position> = (5..=9).map(|x| Position { x, y: 5 }).collect();
        assert_eq!(pieces, expected);
    }

    #[test]
    fn body_never_exceeds_target_length() {
        let mut snake = snake_at(5, 5, Direction::East);
        for tick in 0..20 {
            // Throw in some turns to cover more than straight-line motion.
            match tick % 4 {
                0 => snake.turn(Direction::North),
                2 => snake.turn(Direction::East),
                _ => {}
            }
            snake.advance();
            assert!(snake.pieces().len() <= snake.target_length());
        }
        assert_eq!(snake.pieces().len(), INITIAL_SNAKE_LENGTH);
    }

    #[test]
    fn reversal_requests_are_ignored() {
        let mut snake = snake_at(5, 5, Direction::North);
        snake.turn(Direction::South);
        assert_eq!(snake.direction(), Direction::North);

        snake.turn(Direction::East);
        assert_eq!(snake.direction(), Direction::East);
        snake.turn(Direction::West);
        assert_eq!(snake.direction(), Direction::East);
    }

    #[test]
    fn direction_is_never_reversed_by_any_turn_sequence() {
        let requests = [
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ];
        let mut snake = snake_at(5, 5, Direction::North);
        for request in requests {
            let before = snake.direction();
            snake.turn(request);
            assert_ne!(snake.direction(), before.opposite());
        }
    }

    #[test]
    fn head_wraps_on_every_edge() {
        let mut snake = snake_at(GRID_WIDTH - 1, 3, Direction::East);
        snake.advance();
        assert_eq!(snake.head(), Some(Position { x: 0, y: 3 }));

        let mut snake = snake_at(0, 3, Direction::West);
        snake.advance();
        assert_eq!(snake.head(), Some(Position { x: GRID_WIDTH - 1, y: 3 }));

        let mut snake = snake_at(3, GRID_HEIGHT - 1, Direction::North);
        snake.advance();
        assert_eq!(snake.head(), Some(Position { x: 3, y: 0 }));

        let mut snake = snake_at(3, 0, Direction::South);
        snake.advance();
        assert_eq!(snake.head(), Some(Position { x: 3, y: GRID_HEIGHT - 1 }));
    }

    #[test]
    fn head_stays_on_the_grid_over_a_long_walk() {
        let mut snake = snake_at(0, 0, Direction::West);
        for tick in 0..200 {
            if tick % 7 == 0 {
                snake.turn(Direction::South);
            } else if tick % 5 == 0 {
                snake.turn(Direction::West);
            }
            snake.advance();
            let head = snake.head().expect("snake always has a head");
            assert!((0..GRID_WIDTH).contains(&head.x));
            assert!((0..GRID_HEIGHT).contains(&head.y));
        }
    }

    #[test]
    fn detects_self_collision() {
        let mut snake = snake_at(1, 1, Direction::North);
        snake.pieces = VecDeque::from([
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 1, y: 1 },
        ]);
        assert!(snake.is_dead());
    }

    #[test]
    fn straight_body_is_not_a_collision() {
        let mut snake = snake_at(5, 5, Direction::East);
        for _ in 0..6 {
            snake.advance();
        }
        assert!(!snake.is_dead());
    }

    #[test]
    fn is_dead_is_idempotent() {
        let mut snake = snake_at(1, 1, Direction::North);
        snake.pieces = VecDeque::from([
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 1, y: 1 },
        ]);
        assert_eq!(snake.is_dead(), snake.is_dead());

        let alive = snake_at(5, 5, Direction::East);
        assert_eq!(alive.is_dead(), alive.is_dead());
    }

    #[test]
    fn dead_snake_keeps_trimming_but_gains_no_head() {
        let mut snake = snake_at(5, 5, Direction::East);
        for _ in 0..4 {
            snake.advance();
        }
        assert_eq!(snake.pieces().len(), 5);

        snake.set_alive(false);
        snake.length = 3;
        snake.advance();

        // No new head was appended, but the tail shrank to the target.
        assert_eq!(snake.pieces().len(), 3);
        assert_eq!(snake.head(), Some(Position { x: 9, y: 5 }));
    }

    #[test]
    fn growth_defers_trimming() {
        let mut snake = snake_at(5, 5, Direction::East);
        for _ in 0..4 {
            snake.advance();
        }
        snake.grow(2);
        assert_eq!(snake.target_length(), INITIAL_SNAKE_LENGTH + 2);

        snake.advance();
        snake.advance();
        assert_eq!(snake.pieces().len(), INITIAL_SNAKE_LENGTH + 2);
        // The original tail cell is still in place.
        assert_eq!(snake.pieces().front(), Some(&Position { x: 5, y: 5 }));
    }
}
