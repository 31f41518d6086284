/*
 * Roster Module
 *
 * Builds the demo line-up shown by the binary: eight cars, one per behavior,
 * each with its own colour, limits and starting point.
 */

use thiserror::Error;
use tracing::info;

use crate::behaviors::{Arrive, Cycle, Flee, FollowPath, Patrol, Seek, SteeringBehavior, Target, Wander};
use crate::car::Car;
use crate::path::{Path, PathError};
use crate::physics::Simulation;
use crate::settings::{CarSettings, SettingsError};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid car settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
}

/// Loop driven by the purple car.
pub const TOUR_PATH: [(f64, f64); 12] = [
    (-480.0, 330.0),
    (490.0, 330.0),
    (490.0, 10.0),
    (-490.0, 8.0),
    (-490.0, -280.0),
    (25.0, -285.0),
    (30.0, -68.0),
    (80.0, -68.0),
    (80.0, -270.0),
    (490.0, -282.0),
    (490.0, 8.0),
    (-490.0, 8.0),
];

/// Rectangle patrolled by the magenta car between chases.
pub const PATROL_PATH: [(f64, f64); 4] = [(-350.0, -200.0), (350.0, -200.0), (350.0, 220.0), (-350.0, 210.0)];

const TOUR_TOLERANCE: f64 = 2.0;

// Light cars with a lot of grip, shared by the wandering ones
fn nimble() -> CarSettings {
    Car::settings().max_force(2000.0).max_speed(150.0).mass(0.2)
}

fn add(
    simulation: &mut Simulation,
    settings: CarSettings,
    behavior: impl SteeringBehavior + 'static,
) -> Result<(), RosterError> {
    simulation.spawn(settings.random_orientation().build()?, behavior);
    Ok(())
}

/// The eight demo cars, in update order.
pub fn demo_roster() -> Result<Simulation, RosterError> {
    let mut simulation = Simulation::new();

    add(
        &mut simulation,
        Car::settings().rgb(0, 0, 255).position_xy(-100.0, -100.0).max_speed(200.0).max_force(600.0),
        Seek::new(Target::Pointer).avoiding(),
    )?;
    add(
        &mut simulation,
        Car::settings().rgb(255, 0, 0).position_xy(200.0, 300.0).max_speed(350.0).max_force(400.0),
        Seek::new(Target::LastNeighbor).avoiding(),
    )?;
    add(
        &mut simulation,
        Car::settings().rgb(0, 255, 0).position_xy(100.0, 100.0).max_speed(400.0).max_force(800.0),
        Flee::new(Target::Pointer).avoiding(),
    )?;
    add(
        &mut simulation,
        Car::settings().rgb(255, 200, 0).position_xy(-300.0, 200.0).max_speed(500.0),
        Arrive::new(Target::Pointer).with_ramp_scale(3.0).avoiding(),
    )?;
    add(
        &mut simulation,
        nimble().rgb(0, 255, 255).position_xy(-200.0, -200.0),
        Wander::new().avoiding(),
    )?;

    // The path follower ignores the others so it never leaves its track
    let tour = Path::from_points(&TOUR_PATH)?;
    add(
        &mut simulation,
        nimble().rgb(128, 0, 128).position_xy(500.0, 300.0),
        FollowPath::new(tour).with_tolerance(TOUR_TOLERANCE),
    )?;

    let beat = Path::from_points(&PATROL_PATH)?;
    add(
        &mut simulation,
        Car::settings().rgb(255, 0, 255).max_speed(200.0).max_force(300.0),
        Patrol::new(beat).avoiding(),
    )?;
    add(&mut simulation, nimble().rgb(255, 255, 0), Cycle::new())?;

    info!(cars = simulation.len(), "demo roster ready");
    Ok(simulation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;

    #[test]
    fn builds_eight_cars_in_order() {
        let simulation = demo_roster().unwrap();
        let names: Vec<_> = simulation.iter().map(|(_, name)| name).collect();
        assert_eq!(
            names,
            ["Seek", "Seek", "Flee", "Arrive", "Wander", "Follow path", "Patrol", "Seek"]
        );
    }

    #[test]
    fn cars_start_where_placed() {
        let simulation = demo_roster().unwrap();
        let cars = simulation.cars();
        assert_eq!(cars[0].position(), vec2(-100.0, -100.0));
        assert_eq!(cars[5].position(), vec2(500.0, 300.0));
        assert_eq!(cars[7].position(), vec2(0.0, 0.0));
        assert_eq!(cars[4].mass(), 0.2);
        assert_eq!(cars[2].max_force(), 800.0);
    }

    #[test]
    fn paths_are_valid() {
        assert_eq!(Path::from_points(&TOUR_PATH).unwrap().len(), 12);
        assert_eq!(Path::from_points(&PATROL_PATH).unwrap().len(), 4);
    }
}
