/*
 * Arrive Behavior Module
 *
 * Seeks a target and brakes along a linear ramp inside the deceleration
 * radius, coming to rest on the target.
 */

use crate::behaviors::{SteeringBehavior, Target};
use crate::car::Car;
use crate::steering;
use crate::vector::Vector2;
use crate::world::World;

pub const DEFAULT_DECELERATION_RADIUS: f64 = 500.0;

/// Seeks a target but slows down inside the deceleration radius so the car
/// comes to rest on it instead of overshooting.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrive {
    pub target: Target,
    pub deceleration_radius: f64,
    /// Stretches the braking ramp: speed is `max * distance / (radius * ramp_scale)`.
    pub ramp_scale: f64,
}

impl Arrive {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            deceleration_radius: DEFAULT_DECELERATION_RADIUS,
            ramp_scale: 1.0,
        }
    }

    pub fn with_deceleration_radius(mut self, radius: f64) -> Self {
        self.deceleration_radius = radius;
        self
    }

    pub fn with_ramp_scale(mut self, ramp_scale: f64) -> Self {
        self.ramp_scale = ramp_scale;
        self
    }
}

impl SteeringBehavior for Arrive {
    fn calculate_steering(&mut self, car: &Car, world: &World) -> Option<Vector2> {
        let force = match self.target.resolve(world) {
            Some(target) => steering::arrive(car, target, self.deceleration_radius, self.ramp_scale),
            None => Vector2::ZERO,
        };
        Some(force)
    }

    fn name(&self) -> &'static str {
        "Arrive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;
    use crate::world::{Bounds, FrameInput};

    #[test]
    fn softer_ramp_asks_for_less_speed() {
        let cars = vec![Car::settings().max_speed(300.0).initial_speed(0.0).build().unwrap()];
        let frame = FrameInput::new(0.1, Bounds::new(800.0, 600.0)).with_pointer(vec2(250.0, 0.0));
        let world = World::new(&frame, 0, &cars);

        let mut plain = Arrive::new(Target::Pointer);
        let mut soft = Arrive::new(Target::Pointer).with_ramp_scale(3.0);

        assert_eq!(plain.calculate_steering(world.current(), &world), Some(vec2(150.0, 0.0)));
        assert_eq!(soft.calculate_steering(world.current(), &world), Some(vec2(50.0, 0.0)));
    }

    #[test]
    fn zero_radius_on_target_keeps_the_car_finite() {
        let mut cars = vec![Car::settings().position_xy(5.0, 5.0).build().unwrap()];
        let frame = FrameInput::new(0.1, Bounds::new(800.0, 600.0)).with_pointer(vec2(5.0, 5.0));
        let mut arrive = Arrive::new(Target::Pointer).with_deceleration_radius(0.0);

        for _ in 0..3 {
            let force = {
                let world = World::new(&frame, 0, &cars);
                arrive.calculate_steering(world.current(), &world)
            };
            cars[0].apply_steering(force, frame.secs, frame.bounds);
        }
        assert!(cars[0].position().is_finite());
        assert!(cars[0].velocity().is_finite());
    }
}
