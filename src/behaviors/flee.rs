/*
 * Flee Behavior Module
 *
 * Full speed away from a target, but only inside the panic radius.
 */

use crate::behaviors::{SteeringBehavior, Target};
use crate::car::Car;
use crate::steering;
use crate::vector::Vector2;
use crate::world::World;

pub const DEFAULT_PANIC_RADIUS: f64 = 300.0;

/// Runs from a target, but only once it comes within the panic radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Flee {
    pub target: Target,
    pub panic_radius: f64,
}

impl Flee {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            panic_radius: DEFAULT_PANIC_RADIUS,
        }
    }

    pub fn with_panic_radius(mut self, panic_radius: f64) -> Self {
        self.panic_radius = panic_radius;
        self
    }
}

impl SteeringBehavior for Flee {
    fn calculate_steering(&mut self, car: &Car, world: &World) -> Option<Vector2> {
        let force = match self.target.resolve(world) {
            Some(threat) => steering::flee(car, threat, self.panic_radius),
            None => Vector2::ZERO,
        };
        Some(force)
    }

    fn name(&self) -> &'static str {
        "Flee"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;
    use crate::world::{Bounds, FrameInput};

    #[test]
    fn ignores_distant_threats() {
        let cars = vec![Car::settings().max_speed(400.0).initial_speed(0.0).build().unwrap()];
        let mut flee = Flee::new(Target::Pointer).with_panic_radius(100.0);
        let bounds = Bounds::new(800.0, 600.0);

        let far = FrameInput::new(0.1, bounds).with_pointer(vec2(150.0, 0.0));
        let world = World::new(&far, 0, &cars);
        assert_eq!(flee.calculate_steering(world.current(), &world), Some(Vector2::ZERO));

        let near = FrameInput::new(0.1, bounds).with_pointer(vec2(60.0, 80.0));
        let world = World::new(&near, 0, &cars);
        assert_eq!(flee.calculate_steering(world.current(), &world), Some(vec2(-240.0, -320.0)));
    }
}
