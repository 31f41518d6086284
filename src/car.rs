/*
 * Car Module
 *
 * This module defines the Car struct: the kinematic state of one agent and
 * the integrator that turns a steering force into motion. Each tick:
 * 1. The force is clamped to max_force and remembered as last_steering
 * 2. Force * dt / mass is added to the velocity, clamped to max_speed
 * 3. The position advances by velocity * dt
 * 4. A car that leaves the window by more than WRAP_MARGIN reappears on the
 *    opposite edge
 */

use nannou::color::Rgb;

use crate::behaviors::SteeringBehavior;
use crate::settings::CarSettings;
use crate::vector::Vector2;
use crate::world::{Bounds, World};

/// How far past the window edge a car may drive before it wraps around.
pub const WRAP_MARGIN: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct Car {
    color: Rgb<u8>,
    mass: f64,
    max_force: f64,
    max_speed: f64,
    position: Vector2,
    velocity: Vector2,
    // Most recent clamped force, kept for debug arrows only.
    last_steering: Vector2,
}

impl Car {
    /// Shorthand for `CarSettings::new()`.
    pub fn settings() -> CarSettings {
        CarSettings::new()
    }

    pub(crate) fn from_settings(settings: CarSettings) -> Self {
        Self {
            color: settings.color,
            mass: settings.mass,
            max_force: settings.max_force,
            max_speed: settings.max_speed,
            position: settings.position,
            velocity: Vector2::by_angle_size(settings.orientation, settings.initial_speed),
            last_steering: Vector2::ZERO,
        }
    }

    pub fn color(&self) -> Rgb<u8> {
        self.color
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn max_force(&self) -> f64 {
        self.max_force
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn last_steering(&self) -> Vector2 {
        self.last_steering
    }

    pub fn speed(&self) -> f64 {
        self.velocity.size()
    }

    /// Unit heading. A stopped car faces angle 0.
    pub fn direction(&self) -> Vector2 {
        if self.velocity.is_zero() {
            Vector2::by_angle(0.0)
        } else {
            self.velocity.normalize()
        }
    }

    pub fn distance(a: &Car, b: &Car) -> f64 {
        a.position.distance(b.position)
    }

    pub fn distance_to(&self, point: Vector2) -> f64 {
        self.position.distance(point)
    }

    /// Advances one tick with the force chosen by `behavior`.
    ///
    /// `world` must describe this car; in snapshot mode it points at the
    /// pre-tick copy of the roster, so `self` and `world.current()` agree.
    pub fn update(&mut self, behavior: &mut dyn SteeringBehavior, world: &World) {
        let force = behavior.calculate_steering(world.current(), world);
        self.apply_steering(force, world.secs(), world.bounds());
    }

    /// Integrates one tick. `None` means the behavior passed: the car is left
    /// exactly where it is and only `last_steering` is reset.
    pub fn apply_steering(&mut self, force: Option<Vector2>, secs: f64, bounds: Bounds) {
        let Some(force) = force else {
            self.last_steering = Vector2::ZERO;
            return;
        };

        self.last_steering = force.truncate(self.max_force);

        let impulse = self.last_steering * secs;
        let acceleration = impulse / self.mass;

        self.velocity += acceleration;
        self.velocity = self.velocity.truncate(self.max_speed);
        self.position += self.velocity * secs;

        self.wrap_edges(bounds);
    }

    /// Teleports the car to the opposite edge once it is WRAP_MARGIN past a border.
    pub fn wrap_edges(&mut self, bounds: Bounds) {
        let w = bounds.half_width();
        let h = bounds.half_height();

        if self.position.x < -(w + WRAP_MARGIN) {
            self.position.x = w;
        }
        if self.position.x > w + WRAP_MARGIN {
            self.position.x = -w;
        }
        if self.position.y < -(h + WRAP_MARGIN) {
            self.position.y = h;
        }
        if self.position.y > h + WRAP_MARGIN {
            self.position.y = -h;
        }
    }
}
