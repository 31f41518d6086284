/*
 * Car Settings Module
 *
 * This module defines the CarSettings builder used to configure a car before
 * it joins the simulation. Values are only checked in `build`, so a car is
 * either fully valid or never created.
 */

use std::f64::consts::TAU;

use nannou::color::{rgb, Rgb};
use rand::Rng;
use thiserror::Error;

use crate::car::Car;
use crate::vector::{vec2, Vector2};
use crate::world::Bounds;

pub const MIN_MASS: f64 = 0.1;
pub const MAX_MASS: f64 = 100.0;

/// Reasons a car configuration is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SettingsError {
    #[error("mass {mass} must be greater than 0.1 and at most 100")]
    MassOutOfRange { mass: f64 },
    #[error("max force {max_force} must not be negative")]
    NegativeMaxForce { max_force: f64 },
    #[error("max speed {max_speed} must not be negative")]
    NegativeMaxSpeed { max_speed: f64 },
    #[error("initial speed {speed} must not be negative")]
    NegativeInitialSpeed { speed: f64 },
    #[error("position ({x}, {y}) must be finite")]
    NonFinitePosition { x: f64, y: f64 },
}

#[derive(Debug, Clone)]
pub struct CarSettings {
    pub(crate) color: Rgb<u8>,
    pub(crate) mass: f64,
    pub(crate) max_force: f64,
    pub(crate) max_speed: f64,
    pub(crate) position: Vector2,
    pub(crate) orientation: f64,
    pub(crate) initial_speed: f64,
}

impl Default for CarSettings {
    fn default() -> Self {
        Self {
            color: rgb(220, 220, 220),
            mass: 1.0,
            max_force: 300.0,
            max_speed: 350.0,
            position: Vector2::ZERO,
            orientation: 0.0,
            initial_speed: 1.0,
        }
        .random_color()
    }
}

impl CarSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Rgb<u8>) -> Self {
        self.color = color;
        self
    }

    pub fn rgb(self, r: u8, g: u8, b: u8) -> Self {
        self.color(rgb(r, g, b))
    }

    /// Packed `0xRRGGBB` colour.
    pub fn rgb_hex(self, hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        self.rgb(r, g, b)
    }

    /// Each channel drawn from `55..255` so cars stay visible on a light background.
    pub fn random_color(self) -> Self {
        let mut rng = rand::thread_rng();
        let r = rng.gen_range(55..255);
        let g = rng.gen_range(55..255);
        let b = rng.gen_range(55..255);
        self.rgb(r, g, b)
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn max_force(mut self, max_force: f64) -> Self {
        self.max_force = max_force;
        self
    }

    pub fn max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    pub fn position_xy(self, x: f64, y: f64) -> Self {
        self.position(vec2(x, y))
    }

    /// Random point inside the given window bounds, centred on the origin.
    pub fn random_position(self, bounds: Bounds) -> Self {
        let mut rng = rand::thread_rng();
        let hw = (bounds.half_width().floor()).max(1.0);
        let hh = (bounds.half_height().floor()).max(1.0);
        let x = rng.gen_range(-hw..hw);
        let y = rng.gen_range(-hh..hh);
        self.position_xy(x, y)
    }

    /// Initial heading in radians.
    pub fn orientation(mut self, radians: f64) -> Self {
        self.orientation = radians;
        self
    }

    pub fn orientation_degrees(self, degrees: f64) -> Self {
        self.orientation(degrees.to_radians())
    }

    pub fn random_orientation(self) -> Self {
        let angle = rand::thread_rng().gen_range(0.0..TAU);
        self.orientation(angle)
    }

    /// Length of the starting velocity. Cars start at speed 1 unless told otherwise.
    pub fn initial_speed(mut self, speed: f64) -> Self {
        self.initial_speed = speed;
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        // Written as negated ranges so NaN is rejected too.
        if !(self.mass > MIN_MASS && self.mass <= MAX_MASS) {
            return Err(SettingsError::MassOutOfRange { mass: self.mass });
        }
        if !(self.max_force >= 0.0) {
            return Err(SettingsError::NegativeMaxForce { max_force: self.max_force });
        }
        if !(self.max_speed >= 0.0) {
            return Err(SettingsError::NegativeMaxSpeed { max_speed: self.max_speed });
        }
        if !(self.initial_speed >= 0.0) {
            return Err(SettingsError::NegativeInitialSpeed { speed: self.initial_speed });
        }
        if !self.position.is_finite() {
            return Err(SettingsError::NonFinitePosition {
                x: self.position.x,
                y: self.position.y,
            });
        }
        Ok(())
    }

    pub fn build(self) -> Result<Car, SettingsError> {
        self.validate()?;
        Ok(Car::from_settings(self))
    }
}
