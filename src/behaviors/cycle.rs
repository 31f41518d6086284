/*
 * Cycle Behavior Module
 *
 * A composite car that switches between Seek, Flee, Arrive and Wander
 * whenever the host asks for it (the Space key).
 */

use std::f64::consts::PI;

use tracing::debug;

use crate::behaviors::{SteeringBehavior, Wander};
use crate::car::Car;
use crate::steering;
use crate::vector::Vector2;
use crate::world::World;

/// The behaviors a [`Cycle`] car switches between, in switching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleMode {
    Seek,
    Flee,
    Arrive,
    Wander,
}

impl CycleMode {
    pub const ALL: [CycleMode; 4] = [CycleMode::Seek, CycleMode::Flee, CycleMode::Arrive, CycleMode::Wander];

    /// The following mode, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&mode| mode == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn transition(self, triggered: bool) -> Self {
        if triggered {
            self.next()
        } else {
            self
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CycleMode::Seek => "Seek",
            CycleMode::Flee => "Flee",
            CycleMode::Arrive => "Arrive",
            CycleMode::Wander => "Wander",
        }
    }
}

/// Reacts to the pointer with one behavior at a time and moves to the next
/// whenever the world reports a cycle request. Switching keeps no state
/// besides the wander angle, so it takes effect on the same tick.
///
/// Without a pointer every mode but Wander passes the tick and the car stops
/// in place.
#[derive(Debug, Clone)]
pub struct Cycle {
    mode: CycleMode,
    pub flee_radius: f64,
    pub deceleration_radius: f64,
    wander: Wander,
}

impl Cycle {
    pub fn new() -> Self {
        Self::with_wander(Wander::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_wander(Wander::seeded(seed))
    }

    fn with_wander(wander: Wander) -> Self {
        Self {
            mode: CycleMode::Seek,
            flee_radius: f64::INFINITY,
            deceleration_radius: 400.0,
            wander: wander.with_max_angle_change(PI * 1.5).with_stall_speed(0.0),
        }
    }

    pub fn starting_in(mut self, mode: CycleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> CycleMode {
        self.mode
    }
}

impl Default for Cycle {
    fn default() -> Self {
        Self::new()
    }
}

impl SteeringBehavior for Cycle {
    fn calculate_steering(&mut self, car: &Car, world: &World) -> Option<Vector2> {
        let next = self.mode.transition(world.cycle_requested());
        if next != self.mode {
            debug!(from = self.mode.name(), to = next.name(), "behavior switched");
            self.mode = next;
        }

        let force = match self.mode {
            CycleMode::Wander => return self.wander.calculate_steering(car, world),
            CycleMode::Seek => steering::seek(car, world.pointer_pos()?),
            CycleMode::Flee => steering::flee(car, world.pointer_pos()?, self.flee_radius),
            CycleMode::Arrive => {
                steering::arrive(car, world.pointer_pos()?, self.deceleration_radius, 1.0)
            }
        };
        Some(force)
    }

    fn name(&self) -> &'static str {
        self.mode.name()
    }
}
