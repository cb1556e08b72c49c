//! Bounded conversation history

use super::turn::{Role, Turn};
use crate::core::error::DomainError;
use std::collections::VecDeque;

/// Number of turns kept by default (five user/assistant pairs)
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Ordered window over the most recent turns of a conversation
///
/// Insertion order is conversation order. The window never holds more than
/// `capacity` turns; the oldest turns are evicted first.
///
/// Eviction works per exchange: appending a user turn first makes room for
/// the whole user/assistant pair, so the window never exceeds its capacity
/// while a reply is pending and never cuts an exchange in half at the
/// boundary.
#[derive(Debug, Clone)]
pub struct History {
    turns: VecDeque<Turn>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            turns: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Create a history with a custom capacity
    ///
    /// The capacity must be even and at least 2 so it holds whole exchanges.
    pub fn with_capacity(capacity: usize) -> Result<Self, DomainError> {
        if capacity == 0 || capacity % 2 != 0 {
            return Err(DomainError::InvalidHistoryCapacity(capacity));
        }
        Ok(Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a turn, evicting the oldest turns to stay within capacity
    pub fn append(&mut self, turn: Turn) {
        let reserve = match turn.role() {
            Role::User => 2,
            Role::Assistant => 1,
        };
        while !self.turns.is_empty() && self.turns.len() + reserve > self.capacity {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.back()
    }

    /// Copy of all turns in insertion order
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
