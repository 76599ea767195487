use std::collections::VecDeque;

use crate::sim::units::TRAIL_LENGTH;
use crate::sim::vector::Vec3;

/// Bounded history of past positions, one trail per body.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    capacity: usize,
    trails: Vec<VecDeque<Vec3>>,
}

impl TrailBuffer {
    pub fn new(body_count: usize) -> TrailBuffer {
        Self::with_capacity(body_count, TRAIL_LENGTH)
    }

    pub fn with_capacity(body_count: usize, capacity: usize) -> TrailBuffer {
        TrailBuffer {
            capacity,
            trails: vec![VecDeque::with_capacity(capacity + 1); body_count],
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn body_count(&self) -> usize {
        self.trails.len()
    }

    pub fn append(&mut self, positions: &[Vec3]) {
        debug_assert_eq!(positions.len(), self.trails.len());
        for (trail, position) in self.trails.iter_mut().zip(positions.iter()) {
            trail.push_back(*position);
            while trail.len() > self.capacity {
                trail.pop_front();
            }
        }
    }

    pub fn len(&self, index: usize) -> usize {
        self.trails.get(index).map_or(0, VecDeque::len)
    }

    /// Oldest position first. Empty for an unknown body index.
    pub fn snapshot(&self, index: usize) -> Vec<Vec3> {
        self.trails
            .get(index)
            .map(|trail| trail.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn latest(&self, index: usize) -> Option<Vec3> {
        self.trails.get(index).and_then(|trail| trail.back().copied())
    }

    pub fn clear(&mut self) {
        for trail in self.trails.iter_mut() {
            trail.clear();
        }
    }
}
