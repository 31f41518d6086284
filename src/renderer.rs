/*
 * Renderer Module
 *
 * This module draws the steering simulation: the click marker, one triangle
 * per car pointing along its heading, the optional debug arrows and overlay,
 * and the help line in the bottom-left corner.
 */

use nannou::prelude::*;
use tracing::error;

use crate::app::{to_point, Model};
use crate::car::Car;
use crate::ui;
use crate::vector::Vector2;
use crate::{CAR_LENGTH, CAR_WIDTH};

// Debug arrows start this far ahead of the car's centre
const ARROW_OFFSET: f64 = 12.0;
const VELOCITY_ARROW_SCALE: f64 = 0.20;
const STEERING_ARROW_SCALE: f64 = 0.10;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(GAINSBORO);

    let window_rect = app.window_rect();

    if let Some(click) = model.last_click {
        draw.ellipse().xy(to_point(click)).radius(4.0).color(GRAY);
    }

    for (car, name) in model.simulation.iter() {
        draw_car(&draw, car);
        if model.params.show_debug {
            draw_debug_arrows(&draw, car);
            draw.text(name)
                .xy(to_point(car.position()) + vec2(0.0, CAR_LENGTH * 0.6))
                .color(DIMGRAY)
                .font_size(10);
        }
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    let help = format!(
        "Press D to turn debug arrows {}, Space to switch the yellow car",
        if model.params.show_debug { "off" } else { "on" }
    );
    draw.text(&help)
        .x_y(window_rect.left() + 200.0, window_rect.bottom() + 20.0)
        .w(380.0)
        .color(DARKGRAY)
        .font_size(10);

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(?err, "failed to draw frame");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(?err, "failed to draw ui");
    }
}

fn draw_car(draw: &Draw, car: &Car) {
    let half_length = CAR_LENGTH / 2.0;
    let half_width = CAR_WIDTH / 2.0;
    let points = [
        pt2(half_length, 0.0),
        pt2(-half_length, half_width),
        pt2(-half_length, -half_width),
    ];

    draw.polygon()
        .color(car.color())
        .points(points.iter().cloned())
        .xy(to_point(car.position()))
        .rotate(car.direction().angle() as f32);
}

fn draw_debug_arrows(draw: &Draw, car: &Car) {
    let origin = car.position() + car.direction() * ARROW_OFFSET;
    draw_arrow(draw, origin, car.velocity() * VELOCITY_ARROW_SCALE, rgba(0.0, 0.0, 1.0, 0.25));
    draw_arrow(
        draw,
        origin,
        car.last_steering() * STEERING_ARROW_SCALE,
        rgba(1.0, 69.0 / 255.0, 0.0, 0.25),
    );
}

fn draw_arrow(draw: &Draw, origin: Vector2, vector: Vector2, color: Rgba) {
    if vector.is_zero() {
        return;
    }
    draw.arrow()
        .start(to_point(origin))
        .end(to_point(origin + vector))
        .color(color)
        .stroke_weight(3.0);
}
