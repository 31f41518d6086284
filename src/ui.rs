/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for the simulation parameters, a
 * list of the cars with their current behavior, and the debug overlay.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamChanges, SimulationParams};
use crate::physics::{Simulation, UpdateOrder};

// Update the UI and report which parameters changed this frame
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    simulation: &Simulation,
) -> ParamChanges {
    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Simulation", |ui| {
                ui.add(egui::Slider::new(&mut params.time_scale, SimulationParams::get_time_scale_range()).text("Time Scale"));
                ui.add(egui::Slider::new(&mut params.max_frame_secs, SimulationParams::get_max_frame_secs_range()).text("Max Frame (s)"));

                ui.label("Update order");
                ui.radio_value(&mut params.update_order, UpdateOrder::Sequential, "Sequential (in place)");
                ui.radio_value(&mut params.update_order, UpdateOrder::Snapshot, "Snapshot (parallel)");
            });

            ui.collapsing("Cars", |ui| {
                for (index, (car, name)) in simulation.iter().enumerate() {
                    ui.label(format!(
                        "#{} {}: {:.0} / {:.0} at {}",
                        index,
                        name,
                        car.speed(),
                        car.max_speed(),
                        car.position()
                    ));
                }
            });

            ui.collapsing("Performance", |ui| {
                for line in debug_info.lines() {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Arrows (D)");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    params.detect_changes()
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let lines = debug_info.lines();

    // Background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.5));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(12);
    }
}
