/*
 * Wander Behavior Module
 */

use std::f64::consts::{PI, TAU};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::behaviors::SteeringBehavior;
use crate::car::Car;
use crate::steering;
use crate::vector::Vector2;
use crate::world::World;

/// Random roaming. A target circle is projected ahead of the car and the
/// wander angle picks a point on its rim; the angle drifts by a bounded
/// random amount every second, so the heading changes smoothly.
#[derive(Debug, Clone)]
pub struct Wander {
    angle: f64,
    pub circle_distance: f64,
    pub circle_radius: f64,
    /// Largest change of the wander angle, in radians per second.
    pub max_angle_change: f64,
    /// Below this speed the car is kicked forward instead of steered.
    pub stall_speed: f64,
    rng: SmallRng,
}

impl Wander {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Deterministic wandering, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: SmallRng) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        Self {
            angle,
            circle_distance: 50.0,
            circle_radius: 500.0,
            max_angle_change: PI,
            stall_speed: 5.0,
            rng,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_max_angle_change(mut self, radians_per_sec: f64) -> Self {
        self.max_angle_change = radians_per_sec;
        self
    }

    pub fn with_stall_speed(mut self, speed: f64) -> Self {
        self.stall_speed = speed;
        self
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl Default for Wander {
    fn default() -> Self {
        Self::new()
    }
}

impl SteeringBehavior for Wander {
    fn calculate_steering(&mut self, car: &Car, world: &World) -> Option<Vector2> {
        if car.speed() < self.stall_speed {
            return Some(Vector2::by_angle(self.angle) * (car.max_speed() / 2.0));
        }

        self.angle += self.rng.gen_range(-1.0..1.0) * self.max_angle_change * world.secs();

        let target = steering::wander_target(
            car.position(),
            car.direction(),
            self.angle,
            self.circle_distance,
            self.circle_radius,
        );
        Some(steering::seek(car, target))
    }

    fn name(&self) -> &'static str {
        "Wander"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;
    use crate::world::{Bounds, FrameInput};

    fn moving_car(speed: f64) -> Vec<Car> {
        vec![Car::settings().max_speed(150.0).initial_speed(speed).build().unwrap()]
    }

    #[test]
    fn stalled_car_gets_a_forward_kick() {
        let cars = moving_car(1.0);
        let frame = FrameInput::new(0.5, Bounds::new(800.0, 600.0));
        let world = World::new(&frame, 0, &cars);
        let mut wander = Wander::seeded(7).with_angle(PI / 2.0);

        let force = wander.calculate_steering(world.current(), &world).unwrap();
        assert_eq!(force, vec2(0.0, 75.0));
        assert_eq!(wander.angle(), PI / 2.0);
    }

    #[test]
    fn angle_drift_is_bounded_by_the_turn_rate() {
        let cars = moving_car(100.0);
        let frame = FrameInput::new(0.25, Bounds::new(800.0, 600.0));
        let world = World::new(&frame, 0, &cars);
        let mut wander = Wander::seeded(42).with_angle(0.0).with_max_angle_change(2.0);

        let mut previous = wander.angle();
        for _ in 0..100 {
            let force = wander.calculate_steering(world.current(), &world).unwrap();
            assert!(force.is_finite());
            assert!((wander.angle() - previous).abs() <= 2.0 * 0.25);
            previous = wander.angle();
        }
    }

    #[test]
    fn same_seed_wanders_the_same_way() {
        let cars = moving_car(100.0);
        let frame = FrameInput::new(0.016, Bounds::new(800.0, 600.0));
        let world = World::new(&frame, 0, &cars);
        let mut a = Wander::seeded(3);
        let mut b = Wander::seeded(3);
        for _ in 0..10 {
            assert_eq!(
                a.calculate_steering(world.current(), &world),
                b.calculate_steering(world.current(), &world)
            );
        }
    }
}
