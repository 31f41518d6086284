/*
 * Avoidance Module
 *
 * Neighbor repulsion. Every other car inside the radius pushes this car
 * directly away from it, with a strength that falls off linearly from
 * `repulsion_factor` at contact to zero at the radius. The summed push is
 * clamped to the car's max force.
 */

use crate::car::Car;
use crate::vector::Vector2;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avoidance {
    pub radius: f64,
    pub repulsion_factor: f64,
}

impl Default for Avoidance {
    fn default() -> Self {
        Self {
            radius: 75.0,
            repulsion_factor: 5000.0,
        }
    }
}

impl Avoidance {
    pub fn new(radius: f64, repulsion_factor: f64) -> Self {
        Self { radius, repulsion_factor }
    }

    /// Push strength from a neighbor `distance` away. Never negative.
    pub fn strength(&self, distance: f64) -> f64 {
        let inside = (self.radius - distance) / self.radius;
        (self.repulsion_factor * inside).max(0.0)
    }

    /// Summed repulsion on `car`. Zero, not absent, when nobody is close.
    pub fn force(&self, car: &Car, world: &World) -> Vector2 {
        let total: Vector2 = world
            .neighbors_within(self.radius)
            .into_iter()
            .map(|neighbor| {
                let displacement = car.position() - neighbor.position();
                displacement.normalize() * self.strength(displacement.size())
            })
            .sum();

        total.truncate(car.max_force())
    }
}
