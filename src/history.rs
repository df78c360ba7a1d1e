//! Recent results, newest first.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub formula: String,
    pub mass: f64,
}

/// Bounded list of recent results. Pushing past capacity drops the oldest.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Entry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, formula: impl Into<String>, mass: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(Entry {
            formula: formula.into(),
            mass,
        });
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&Entry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
