/*
 * Seek Behavior Module
 *
 * Full speed toward a target point.
 */

use crate::behaviors::{SteeringBehavior, Target};
use crate::car::Car;
use crate::steering;
use crate::vector::Vector2;
use crate::world::World;

/// Drives at full speed toward a target. With no target it applies no force
/// and the car coasts.
#[derive(Debug, Clone, PartialEq)]
pub struct Seek {
    pub target: Target,
}

impl Seek {
    pub fn new(target: Target) -> Self {
        Self { target }
    }
}

impl SteeringBehavior for Seek {
    fn calculate_steering(&mut self, car: &Car, world: &World) -> Option<Vector2> {
        let force = match self.target.resolve(world) {
            Some(target) => steering::seek(car, target),
            None => Vector2::ZERO,
        };
        Some(force)
    }

    fn name(&self) -> &'static str {
        "Seek"
    }
}
