/*
 * World Module
 *
 * This module defines the per-tick inputs the host hands to the simulation
 * (FrameInput) and the read-only World view a steering behavior receives.
 * A World is built fresh for every (car, tick) pair and never outlives the
 * behavior call it was made for.
 */

use crate::car::Car;
use crate::vector::Vector2;

/// Window size in world units. The origin sits at the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

/// Everything the host samples once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Elapsed seconds since the previous tick.
    pub secs: f64,
    pub pointer: Option<Vector2>,
    pub last_click: Option<Vector2>,
    pub bounds: Bounds,
    /// Set for exactly one tick when the "switch behavior" key was pressed.
    pub cycle_requested: bool,
}

impl FrameInput {
    pub fn new(secs: f64, bounds: Bounds) -> Self {
        Self {
            secs,
            pointer: None,
            last_click: None,
            bounds,
            cycle_requested: false,
        }
    }

    pub fn with_pointer(mut self, pointer: Vector2) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn with_click(mut self, click: Vector2) -> Self {
        self.last_click = Some(click);
        self
    }

    pub fn with_cycle(mut self) -> Self {
        self.cycle_requested = true;
        self
    }
}

/// What a steering behavior can see during one tick.
#[derive(Debug, Clone, Copy)]
pub struct World<'a> {
    frame: &'a FrameInput,
    current: usize,
    cars: &'a [Car],
}

impl<'a> World<'a> {
    /// `current` indexes into `cars`; neighbor queries never return it.
    pub fn new(frame: &'a FrameInput, current: usize, cars: &'a [Car]) -> Self {
        debug_assert!(current < cars.len(), "current car {current} out of {}", cars.len());
        Self { frame, current, cars }
    }

    pub fn secs(&self) -> f64 {
        self.frame.secs
    }

    pub fn current(&self) -> &'a Car {
        &self.cars[self.current]
    }

    pub fn pointer_pos(&self) -> Option<Vector2> {
        self.frame.pointer
    }

    pub fn click_pos(&self) -> Option<Vector2> {
        self.frame.last_click
    }

    pub fn bounds(&self) -> Bounds {
        self.frame.bounds
    }

    pub fn width(&self) -> f64 {
        self.frame.bounds.width
    }

    pub fn height(&self) -> f64 {
        self.frame.bounds.height
    }

    pub fn cycle_requested(&self) -> bool {
        self.frame.cycle_requested
    }

    /// Every other car, in roster order.
    pub fn neighbors(&self) -> Vec<&'a Car> {
        let current = self.current;
        self.cars
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != current)
            .map(|(_, car)| car)
            .collect()
    }

    /// Other cars whose position lies within `radius` (inclusive) of the current car.
    pub fn neighbors_within(&self, radius: f64) -> Vec<&'a Car> {
        let origin = self.current().position();
        let radius_sq = radius * radius;
        self.neighbors()
            .into_iter()
            .filter(|car| car.position().distance_sqr(origin) <= radius_sq)
            .collect()
    }
}
