/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update.
 * The model owns the simulation plus the host-side state the cars read
 * each tick: the pointer, the last click and a pending behavior switch.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{debug, error};

use crate::debug::DebugInfo;
use crate::input::{key_pressed, mouse_moved, mouse_pressed, raw_window_event};
use crate::params::SimulationParams;
use crate::physics::Simulation;
use crate::renderer::view;
use crate::roster::demo_roster;
use crate::ui;
use crate::vector::{vec2, Vector2};
use crate::world::{Bounds, FrameInput};
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub pointer: Option<Vector2>,
    pub last_click: Option<Vector2>,
    // Set by the Space key, consumed by the next tick
    pub cycle_pending: bool,
}

impl Model {
    /// What the cars get to see on the next tick.
    pub fn frame_input(&mut self, secs: f64, bounds: Bounds) -> FrameInput {
        FrameInput {
            secs,
            pointer: self.pointer,
            last_click: self.last_click,
            bounds,
            cycle_requested: std::mem::take(&mut self.cycle_pending),
        }
    }
}

pub fn to_vector(point: Point2) -> Vector2 {
    vec2(point.x as f64, point.y as f64)
}

pub fn to_point(vector: Vector2) -> Point2 {
    pt2(vector.x as f32, vector.y as f32)
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let mut simulation = match demo_roster() {
        Ok(simulation) => simulation,
        Err(err) => {
            error!(%err, "could not build the demo roster");
            std::process::exit(1);
        }
    };

    let window_id = app
        .new_window()
        .title("Steering Cars")
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();
    simulation.set_order(params.update_order);

    Model {
        debug_info: DebugInfo {
            cars: simulation.len(),
            ..DebugInfo::default()
        },
        simulation,
        params,
        egui,
        pointer: None,
        last_click: None,
        cycle_pending: false,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let changes = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info, &model.simulation);
    if changes.any_changed {
        debug!(?changes, "parameters changed");
    }
    if changes.order_changed {
        model.simulation.set_order(model.params.update_order);
    }

    if model.params.pause_simulation {
        return;
    }

    let secs = model.params.frame_secs(update.since_last.as_secs_f64());
    let rect = app.window_rect();
    let frame = model.frame_input(secs, Bounds::new(rect.w() as f64, rect.h() as f64));
    model.simulation.step(&frame);

    model.debug_info.tick_secs = secs;
    model.debug_info.ticks = model.simulation.ticks();
    model.debug_info.cars = model.simulation.len();
}
