/*
 * Physics Module
 *
 * This module owns the roster of cars and advances it one tick at a time.
 * Cars and their behaviors live in two parallel vectors so a behavior can
 * read the whole roster while its own car is being steered.
 *
 * Two update orders are supported:
 * - Sequential: cars update in roster order, in place. Later cars see the
 *   already-moved positions of earlier ones within the same tick.
 * - Snapshot: every car steers against a copy of the roster taken before the
 *   tick, so the result does not depend on roster order. Cars are then
 *   updated in parallel.
 */

use rayon::prelude::*;
use tracing::info;

use crate::behaviors::SteeringBehavior;
use crate::car::Car;
use crate::world::{FrameInput, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    #[default]
    Sequential,
    Snapshot,
}

pub struct Simulation {
    cars: Vec<Car>,
    pilots: Vec<Box<dyn SteeringBehavior>>,
    order: UpdateOrder,
    ticks: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_order(UpdateOrder::default())
    }

    pub fn with_order(order: UpdateOrder) -> Self {
        Self {
            cars: Vec::new(),
            pilots: Vec::new(),
            order,
            ticks: 0,
        }
    }

    /// Adds a car driven by `behavior` and returns its roster index.
    pub fn spawn(&mut self, car: Car, behavior: impl SteeringBehavior + 'static) -> usize {
        self.spawn_boxed(car, Box::new(behavior))
    }

    pub fn spawn_boxed(&mut self, car: Car, behavior: Box<dyn SteeringBehavior>) -> usize {
        self.cars.push(car);
        self.pilots.push(behavior);
        self.cars.len() - 1
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, index: usize) -> Option<&Car> {
        self.cars.get(index)
    }

    pub fn behavior_name(&self, index: usize) -> Option<&'static str> {
        self.pilots.get(index).map(|pilot| pilot.name())
    }

    /// Cars paired with the name of whatever currently drives them.
    pub fn iter(&self) -> impl Iterator<Item = (&Car, &'static str)> + '_ {
        self.cars.iter().zip(self.pilots.iter().map(|pilot| pilot.name()))
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn order(&self) -> UpdateOrder {
        self.order
    }

    pub fn set_order(&mut self, order: UpdateOrder) {
        if order != self.order {
            info!(?order, "update order changed");
            self.order = order;
        }
    }

    /// Advances every car by one tick.
    pub fn step(&mut self, frame: &FrameInput) {
        match self.order {
            UpdateOrder::Sequential => {
                for index in 0..self.cars.len() {
                    self.update_agent(index, frame);
                }
            }
            UpdateOrder::Snapshot => self.step_snapshot(frame),
        }
        self.ticks += 1;
    }

    /// Updates a single car in place against the live roster.
    /// Returns false when `index` is out of range.
    pub fn update_agent(&mut self, index: usize, frame: &FrameInput) -> bool {
        if index >= self.cars.len() {
            return false;
        }

        let force = {
            let world = World::new(frame, index, &self.cars);
            self.pilots[index].calculate_steering(&self.cars[index], &world)
        };
        self.cars[index].apply_steering(force, frame.secs, frame.bounds);
        true
    }

    fn step_snapshot(&mut self, frame: &FrameInput) {
        let snapshot = self.cars.clone();

        self.cars
            .par_iter_mut()
            .zip(self.pilots.par_iter_mut())
            .enumerate()
            .for_each(|(index, (car, pilot))| {
                let world = World::new(frame, index, &snapshot);
                car.update(pilot.as_mut(), &world);
            });
    }
}
