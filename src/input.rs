/*
 * Input Module
 *
 * This module handles user input events for the steering simulation:
 * - Mouse movement updates the pointer the cars may target
 * - Left click drops a marker (ignored when the click lands on the UI)
 * - D toggles the debug arrows, Space asks the cycling car to switch behavior
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::{to_vector, Model};

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.pointer = Some(to_vector(pos));
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }
    if let Some(pointer) = model.pointer {
        model.last_click = Some(pointer);
    }
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::D => model.params.show_debug = !model.params.show_debug,
        Key::Space => model.cycle_pending = true,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
