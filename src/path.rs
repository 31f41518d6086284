/*
 * Path Module
 *
 * A closed loop of waypoints with a cursor. The cursor belongs to whichever
 * behavior owns the path, so two cars driving the same route keep separate
 * progress.
 */

use thiserror::Error;
use tracing::trace;

use crate::vector::Vector2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("a path needs at least one waypoint")]
    Empty,
}

/// What happened to the cursor on a call to [`Path::advance_if_reached`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Waypoint not reached yet.
    Pending,
    /// Moved on to the next waypoint.
    Advanced,
    /// Reached the last waypoint and wrapped back to the first.
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    waypoints: Vec<Vector2>,
    cursor: usize,
}

impl Path {
    pub fn new(waypoints: Vec<Vector2>) -> Result<Self, PathError> {
        if waypoints.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self { waypoints, cursor: 0 })
    }

    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, PathError> {
        Self::new(points.iter().copied().map(Vector2::from).collect())
    }

    pub fn waypoints(&self) -> &[Vector2] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The waypoint currently being driven to.
    pub fn target(&self) -> Vector2 {
        self.waypoints[self.cursor]
    }

    /// A waypoint counts as reached when `position` is inside the square of
    /// half-size `tolerance` around it (each axis checked on its own).
    pub fn is_reached(&self, position: Vector2, tolerance: f64) -> bool {
        let target = self.target();
        (position.x - target.x).abs() <= tolerance && (position.y - target.y).abs() <= tolerance
    }

    pub fn advance_if_reached(&mut self, position: Vector2, tolerance: f64) -> Progress {
        if !self.is_reached(position, tolerance) {
            return Progress::Pending;
        }

        self.cursor = (self.cursor + 1) % self.waypoints.len();
        trace!(cursor = self.cursor, target = %self.target(), "waypoint reached");

        if self.cursor == 0 {
            Progress::Completed
        } else {
            Progress::Advanced
        }
    }
}
