//! Pending-direction queue.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::game::Direction;

/// Unbounded FIFO of direction changes, fed by the input layer and drained
/// one entry per tick by the session.
///
/// This is the only channel between input and simulation, so it stays
/// mutex-guarded even though Bevy runs both sides on one schedule.
#[derive(Default)]
pub struct DirectionQueue {
    inner: Mutex<VecDeque<Direction>>,
}

impl DirectionQueue {
    /// Append a direction change to the back of the queue.
    pub fn push(&self, direction: Direction) {
        self.lock().push_back(direction);
    }

    /// Take the oldest queued direction, if any.
    pub fn pop(&self) -> Option<Direction> {
        self.lock().pop_front()
    }

    /// Drop all queued directions.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Direction>> {
        // A panic elsewhere never leaves the queue in a torn state, so a
        // poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
