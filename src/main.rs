/*
 * Steering Cars
 *
 * Cars on a wrapping 2D plane, each driven by a steering behavior:
 * seek, flee, arrive, wander, path following, patrol and a cycling car
 * that switches behavior when Space is pressed.
 *
 * Move the mouse to give the pointer-driven cars a target, press D to
 * toggle the debug arrows. Set RUST_LOG to see the simulation's logs.
 */

use steering_cars::app;

fn main() {
    init_tracing();
    nannou::app(app::model).update(app::update).run();
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
