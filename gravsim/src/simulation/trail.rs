//! Bounded position history kept per body for display

use std::collections::VecDeque;

use super::states::NVec2;

/// FIFO of recent positions, oldest first
///
/// Holds at most `max_len` entries: new positions go in at the tail and
/// the head is evicted once the bound is exceeded
#[derive(Debug, Clone, Default)]
pub struct TrailBuffer {
    points: VecDeque<NVec2>,
    max_len: usize,
}

impl TrailBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len.min(1024)),
            max_len,
        }
    }

    /// Append `p`, evicting the oldest entry if the trail grows past `max_len`
    pub fn record(&mut self, p: NVec2) {
        self.points.push_back(p);
        // at most one entry is added per call, so a single eviction is enough
        if self.points.len() > self.max_len {
            self.points.pop_front();
        }
    }

    /// Change the bound, dropping the oldest entries if it shrinks
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len;
        while self.points.len() > self.max_len {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    /// Copy of the trail as a vector, oldest first
    pub fn to_vec(&self) -> Vec<NVec2> {
        self.points.iter().copied().collect()
    }
}
