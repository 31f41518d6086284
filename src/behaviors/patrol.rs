/*
 * Patrol Behavior Module
 *
 * A two-state machine: drive a lap of the path, chase another car, repeat.
 */

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::behaviors::SteeringBehavior;
use crate::car::Car;
use crate::path::{Path, Progress};
use crate::steering;
use crate::vector::Vector2;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolState {
    FollowPath,
    Chase,
}

/// Drives one lap of its path, then chases another car until it gets within
/// `catch_radius`, picks a random car to chase next time and goes back to
/// the path. Sits still (zero force) when it is the only car.
#[derive(Debug, Clone)]
pub struct Patrol {
    path: Path,
    pub tolerance: f64,
    pub catch_radius: f64,
    state: PatrolState,
    quarry: usize,
    rng: SmallRng,
}

impl Patrol {
    pub fn new(path: Path) -> Self {
        Self::with_rng(path, SmallRng::from_entropy())
    }

    pub fn seeded(path: Path, seed: u64) -> Self {
        Self::with_rng(path, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(path: Path, rng: SmallRng) -> Self {
        Self {
            path,
            tolerance: 7.0,
            catch_radius: 75.0,
            state: PatrolState::FollowPath,
            quarry: 0,
            rng,
        }
    }

    pub fn state(&self) -> PatrolState {
        self.state
    }

    /// Index into the neighbor list of the car chased next.
    pub fn quarry(&self) -> usize {
        self.quarry
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SteeringBehavior for Patrol {
    fn calculate_steering(&mut self, car: &Car, world: &World) -> Option<Vector2> {
        let neighbors = world.neighbors();
        if neighbors.is_empty() {
            return Some(Vector2::ZERO);
        }

        match self.state {
            PatrolState::FollowPath => {
                if self.path.advance_if_reached(car.position(), self.tolerance) == Progress::Completed {
                    debug!(quarry = self.quarry, "patrol lap done, starting chase");
                    self.state = PatrolState::Chase;
                }
                Some(steering::seek(car, self.path.target()))
            }
            PatrolState::Chase => {
                // The roster may have shrunk since the quarry was picked.
                let quarry = neighbors[self.quarry % neighbors.len()].position();
                let force = steering::seek(car, quarry);

                if car.distance_to(quarry) < self.catch_radius {
                    self.quarry = self.rng.gen_range(0..neighbors.len());
                    self.state = PatrolState::FollowPath;
                    debug!(next_quarry = self.quarry, "quarry caught, back to patrol");
                }
                Some(force)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self.state {
            PatrolState::FollowPath => "Patrol",
            PatrolState::Chase => "Chase",
        }
    }
}
