/*
 * Behaviors Module
 *
 * This module defines the SteeringBehavior trait that drives every car, the
 * Target sources a behavior can aim at, and Avoiding, the wrapper that blends
 * a behavior's intent with neighbor avoidance.
 *
 * Available behaviors:
 * - Seek, Flee, Arrive: react to a target
 * - Wander: bounded random walk
 * - FollowPath: loop over fixed waypoints
 * - Patrol: loop a path, then chase another car, then loop again
 * - Cycle: switches between Seek, Flee, Arrive and Wander on request
 */

use crate::avoidance::Avoidance;
use crate::car::Car;
use crate::vector::Vector2;
use crate::world::World;

mod arrive;
mod cycle;
mod flee;
mod follow_path;
mod patrol;
mod seek;
mod wander;

pub use arrive::Arrive;
pub use cycle::{Cycle, CycleMode};
pub use flee::Flee;
pub use follow_path::FollowPath;
pub use patrol::{Patrol, PatrolState};
pub use seek::Seek;
pub use wander::Wander;

/// Weight given to avoidance over intent when the two are blended.
pub const AVOIDANCE_WEIGHT: f64 = 2.0;

/// Chooses the force a car wants to apply this tick.
///
/// `car` is the state of the car being steered, identical to `world.current()`.
/// Returning `None` passes the tick: the car neither steers nor moves.
pub trait SteeringBehavior: Send {
    fn calculate_steering(&mut self, car: &Car, world: &World) -> Option<Vector2>;

    fn name(&self) -> &'static str;

    /// Wraps this behavior so that it also steers clear of other cars.
    fn avoiding(self) -> Avoiding<Self>
    where
        Self: Sized,
    {
        Avoiding::new(self)
    }
}

/// Where a behavior gets its target point from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Point(Vector2),
    Pointer,
    Click,
    /// The last car in the neighbor list.
    LastNeighbor,
}

impl Target {
    /// `None` while the source has nothing to offer (no pointer yet, no other cars).
    pub fn resolve(&self, world: &World) -> Option<Vector2> {
        match *self {
            Target::Point(point) => Some(point),
            Target::Pointer => world.pointer_pos(),
            Target::Click => world.click_pos(),
            Target::LastNeighbor => world.neighbors().last().map(|car| car.position()),
        }
    }
}

/// Priority blend of a behavior with avoidance.
///
/// The inner force (zero when absent) is added to the avoidance force scaled
/// by the weight, and the sum is clamped to the car's max force. Avoidance wins
/// when both saturate but never fully overrides the intent.
#[derive(Debug, Clone)]
pub struct Avoiding<B> {
    inner: B,
    avoidance: Avoidance,
    weight: f64,
}

impl<B> Avoiding<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            avoidance: Avoidance::default(),
            weight: AVOIDANCE_WEIGHT,
        }
    }

    pub fn with_avoidance(mut self, avoidance: Avoidance) -> Self {
        self.avoidance = avoidance;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

impl<B: SteeringBehavior> SteeringBehavior for Avoiding<B> {
    fn calculate_steering(&mut self, car: &Car, world: &World) -> Option<Vector2> {
        let intent = self.inner.calculate_steering(car, world).unwrap_or(Vector2::ZERO);
        let avoidance = self.avoidance.force(car, world) * self.weight;
        Some((intent + avoidance).truncate(car.max_force()))
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
