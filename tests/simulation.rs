use steering_cars::behaviors::{Cycle, FollowPath, Seek, SteeringBehavior, Target};
use steering_cars::car::WRAP_MARGIN;
use steering_cars::settings::MIN_MASS;
use steering_cars::{
    demo_roster, vec2, Bounds, Car, FrameInput, Path, Simulation, SettingsError, UpdateOrder, Vector2, World,
};

const WINDOW: Bounds = Bounds::new(1000.0, 800.0);

/// Always pushes with the same force.
struct Push(Vector2);

impl SteeringBehavior for Push {
    fn calculate_steering(&mut self, _car: &Car, _world: &World) -> Option<Vector2> {
        Some(self.0)
    }

    fn name(&self) -> &'static str {
        "Push"
    }
}

fn parked_at(x: f64, y: f64) -> Car {
    Car::settings().position_xy(x, y).initial_speed(0.0).build().unwrap()
}

#[test]
fn one_tick_clamps_force_and_speed() {
    let car = Car::settings()
        .mass(1.0)
        .max_force(100.0)
        .max_speed(50.0)
        .initial_speed(0.0)
        .build()
        .unwrap();
    let mut simulation = Simulation::new();
    simulation.spawn(car, Push(vec2(200.0, 0.0)));

    simulation.step(&FrameInput::new(1.0, WINDOW));

    let car = simulation.car(0).unwrap();
    assert_eq!(car.last_steering(), vec2(100.0, 0.0));
    assert_eq!(car.velocity(), vec2(50.0, 0.0));
    assert_eq!(car.position(), vec2(50.0, 0.0));
}

#[test]
fn cars_wrap_only_past_the_margin() {
    let mut simulation = Simulation::new();
    simulation.spawn(parked_at(521.0, 0.0), Push(Vector2::ZERO));
    simulation.spawn(parked_at(519.0, 0.0), Push(Vector2::ZERO));
    simulation.spawn(parked_at(0.0, -(400.0 + WRAP_MARGIN + 1.0)), Push(Vector2::ZERO));

    simulation.step(&FrameInput::new(0.1, WINDOW));

    let cars = simulation.cars();
    assert_eq!(cars[0].position(), vec2(-500.0, 0.0));
    assert_eq!(cars[1].position(), vec2(519.0, 0.0));
    assert_eq!(cars[2].position(), vec2(0.0, 400.0));
}

#[test]
fn follow_path_targets_the_next_waypoint_once_reached() {
    let path = Path::from_points(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]).unwrap();
    let mut behavior = FollowPath::new(path).with_tolerance(2.0);
    let cars = vec![parked_at(1.0, -1.0)];
    let frame = FrameInput::new(0.1, WINDOW);
    let world = World::new(&frame, 0, &cars);

    let force = behavior.calculate_steering(world.current(), &world).unwrap();
    assert_eq!(behavior.path().cursor(), 1);
    assert!(force.x > 0.0);
}

#[test]
fn cycling_car_switches_on_request_and_waits_for_a_pointer() {
    let mut simulation = Simulation::new();
    simulation.spawn(
        Car::settings().position_xy(10.0, 10.0).initial_speed(5.0).build().unwrap(),
        Cycle::seeded(3),
    );
    assert_eq!(simulation.behavior_name(0), Some("Seek"));

    // No pointer yet: the car does not move at all.
    simulation.step(&FrameInput::new(0.5, WINDOW));
    assert_eq!(simulation.car(0).unwrap().position(), vec2(10.0, 10.0));

    let frame = FrameInput::new(0.1, WINDOW).with_pointer(vec2(200.0, 10.0)).with_cycle();
    simulation.step(&frame);
    assert_eq!(simulation.behavior_name(0), Some("Flee"));
    assert!(simulation.car(0).unwrap().velocity().x < 0.0);
}

#[test]
fn avoiding_cars_push_each_other_apart() {
    let mut simulation = Simulation::new();
    simulation.spawn(parked_at(0.0, 0.0), Push(Vector2::ZERO).avoiding());
    simulation.spawn(parked_at(30.0, 0.0), Push(Vector2::ZERO).avoiding());

    for _ in 0..5 {
        simulation.step(&FrameInput::new(0.05, WINDOW));
    }

    let cars = simulation.cars();
    assert!(cars[0].position().x < 0.0);
    assert!(cars[1].position().x > 30.0);
}

#[test]
fn seekers_reach_a_clicked_point() {
    let mut simulation = Simulation::with_order(UpdateOrder::Snapshot);
    simulation.spawn(parked_at(-200.0, 0.0), Seek::new(Target::Click));

    let frame = FrameInput::new(0.05, WINDOW).with_click(vec2(200.0, 0.0));
    for _ in 0..40 {
        simulation.step(&frame);
    }
    assert!(simulation.car(0).unwrap().position().x > 0.0);
}

#[test]
fn demo_roster_keeps_running_inside_the_window() {
    let mut simulation = demo_roster().unwrap();
    assert_eq!(simulation.len(), 8);

    let bounds = Bounds::new(1024.0, 768.0);
    let pointer = vec2(120.0, -80.0);
    for tick in 0..300 {
        let mut frame = FrameInput::new(1.0 / 60.0, bounds).with_pointer(pointer);
        if tick % 100 == 50 {
            frame = frame.with_cycle();
        }
        simulation.step(&frame);
    }

    let limit_x = bounds.half_width() + WRAP_MARGIN + 10.0;
    let limit_y = bounds.half_height() + WRAP_MARGIN + 10.0;
    for car in simulation.cars() {
        let position = car.position();
        assert!(position.is_finite());
        assert!(position.x.abs() <= limit_x, "{position} left the window");
        assert!(position.y.abs() <= limit_y, "{position} left the window");
        assert!(car.speed() <= car.max_speed() + 1e-9);
    }
}

#[test]
fn invalid_settings_are_rejected() {
    assert_eq!(
        Car::settings().mass(MIN_MASS).build().unwrap_err(),
        SettingsError::MassOutOfRange { mass: MIN_MASS }
    );
    assert!(matches!(
        Car::settings().max_speed(-1.0).build(),
        Err(SettingsError::NegativeMaxSpeed { .. })
    ));
    assert!(matches!(
        Car::settings().position_xy(f64::NAN, 0.0).build(),
        Err(SettingsError::NonFinitePosition { .. })
    ));
}
