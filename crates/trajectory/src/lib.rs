//! Bounded path history for launched bodies.
//!
//! Each path is a sliding window: points are appended in order and the oldest ones fall
//! off once the window is full. How wide the window is depends on the orbit regime.

use std::collections::{VecDeque, vec_deque};

use kernel_core::vector::Vector3;
use kernel_orbits::OrbitRegime;

/// Points kept for an escape trajectory; only the recent tail is worth drawing.
pub const ESCAPED_CAPACITY: usize = 1024;
/// Points kept for a closed orbit, enough to draw a full revolution.
pub const ORBIT_CAPACITY: usize = 8192;
/// Points kept for a falling trajectory.
pub const FALLING_CAPACITY: usize = 2048;

/// Window size for a trajectory of the given regime.
pub fn capacity(regime: OrbitRegime) -> usize {
    match regime {
        OrbitRegime::Escaped => ESCAPED_CAPACITY,
        OrbitRegime::Circular | OrbitRegime::Elliptical => ORBIT_CAPACITY,
        OrbitRegime::Crashed => FALLING_CAPACITY,
    }
}

/// Ordered, capacity-bounded sequence of recorded positions.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPath {
    points: VecDeque<Vector3>,
    capacity: usize,
    fixed: bool,
}

impl TrajectoryPath {
    /// Empty path sized for `regime`.
    pub fn new(regime: OrbitRegime) -> Self {
        Self::sized(capacity(regime), false)
    }

    /// Empty path with an explicit window size that `record` never replaces.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::sized(capacity, true)
    }

    fn sized(capacity: usize, fixed: bool) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(ESCAPED_CAPACITY)),
            capacity,
            fixed,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recorded points, oldest first.
    pub fn points(&self) -> vec_deque::Iter<'_, Vector3> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&Vector3> {
        self.points.back()
    }

    pub fn oldest(&self) -> Option<&Vector3> {
        self.points.front()
    }

    pub fn to_vec(&self) -> Vec<Vector3> {
        self.points.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Append `point` and evict from the front until the window for `regime` holds.
    /// Paths built with [`TrajectoryPath::with_capacity`] keep their own window.
    ///
    /// Returns the number of points evicted.
    pub fn record(&mut self, point: Vector3, regime: OrbitRegime) -> usize {
        if !self.fixed {
            self.capacity = capacity(regime);
        }
        self.points.push_back(point);

        let mut evicted = 0;
        while self.points.len() > self.capacity {
            self.points.pop_front();
            evicted += 1;
        }
        evicted
    }
}

/// Free-standing recorder for callers that keep paths themselves.
pub struct TrajectoryRecorder;

impl TrajectoryRecorder {
    /// Append `point` to `path`, keeping it within the window for `regime`.
    pub fn record(path: &mut TrajectoryPath, point: Vector3, regime: OrbitRegime) -> usize {
        path.record(point, regime)
    }
}
