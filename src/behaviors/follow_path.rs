/*
 * Follow Path Behavior Module
 *
 * Loops over the waypoints of an owned path.
 */

use crate::behaviors::SteeringBehavior;
use crate::car::Car;
use crate::path::Path;
use crate::steering;
use crate::vector::Vector2;
use crate::world::World;

pub const DEFAULT_ARRIVAL_TOLERANCE: f64 = 2.0;

/// Seeks each waypoint of a closed path in turn.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowPath {
    path: Path,
    pub tolerance: f64,
}

impl FollowPath {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            tolerance: DEFAULT_ARRIVAL_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SteeringBehavior for FollowPath {
    fn calculate_steering(&mut self, car: &Car, _world: &World) -> Option<Vector2> {
        // Always check arrival first so a reached waypoint is never skipped.
        self.path.advance_if_reached(car.position(), self.tolerance);
        Some(steering::seek(car, self.path.target()))
    }

    fn name(&self) -> &'static str {
        "Follow path"
    }
}
