/*
 * Steering Cars - Module Definitions
 *
 * This file defines the module structure of the steering simulation.
 * The simulation core (vectors, cars, behaviors, the update loop) has no
 * window dependency; the app, input, renderer and ui modules host it in a
 * nannou window.
 */

// Re-export key components for easier access
pub use vector::{vec2, Vector2};
pub use car::Car;
pub use settings::{CarSettings, SettingsError};
pub use world::{Bounds, FrameInput, World};
pub use avoidance::Avoidance;
pub use path::{Path, PathError};
pub use physics::{Simulation, UpdateOrder};
pub use params::SimulationParams;
pub use roster::{demo_roster, RosterError};
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod vector;
pub mod car;
pub mod settings;
pub mod world;
pub mod steering;
pub mod avoidance;
pub mod path;
pub mod behaviors;
pub mod physics;
pub mod params;
pub mod roster;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Constants
pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;
pub const CAR_LENGTH: f32 = 80.0;
pub const CAR_WIDTH: f32 = 36.0;
