/*
 * Steering Module
 *
 * Pure steering functions. Each one takes the current car state and a target
 * and returns the desired force (before clamping), following Reynolds:
 * steering = desired velocity - current velocity.
 */

use crate::car::Car;
use crate::vector::Vector2;

/// Full speed toward `target`.
pub fn seek(car: &Car, target: Vector2) -> Vector2 {
    let desired = (target - car.position()).resize(car.max_speed());
    desired - car.velocity()
}

/// Full speed away from `target`, but only while it is within `panic_radius`.
pub fn flee(car: &Car, target: Vector2, panic_radius: f64) -> Vector2 {
    if car.position().distance(target) > panic_radius {
        return Vector2::ZERO;
    }
    let desired = (car.position() - target).resize(car.max_speed());
    desired - car.velocity()
}

/// Speed an arriving car aims for at `distance` from its target.
///
/// Outside the deceleration radius this is `max_speed`; inside it ramps
/// linearly over `deceleration_radius * ramp_scale`, reaching zero at the
/// target. A `ramp_scale` above 1 softens the ramp. A ramp of zero length
/// (zero radius or zero scale) means stopping dead inside the radius.
pub fn arrival_speed(max_speed: f64, distance: f64, deceleration_radius: f64, ramp_scale: f64) -> f64 {
    if distance > deceleration_radius {
        return max_speed;
    }
    let ramp = ramp_scale * deceleration_radius;
    if distance <= 0.0 || !(ramp > 0.0) {
        return 0.0;
    }
    max_speed * (distance / ramp)
}

pub fn arrive(car: &Car, target: Vector2, deceleration_radius: f64, ramp_scale: f64) -> Vector2 {
    let offset = target - car.position();
    let speed = arrival_speed(car.max_speed(), offset.size(), deceleration_radius, ramp_scale);
    offset.normalize() * speed - car.velocity()
}

/// Point on a circle of `circle_radius`, centred `circle_distance` ahead of
/// the car, at `wander_angle`.
pub fn wander_target(
    position: Vector2,
    direction: Vector2,
    wander_angle: f64,
    circle_distance: f64,
    circle_radius: f64,
) -> Vector2 {
    let circle_center = direction * circle_distance;
    let displacement = Vector2::by_angle_size(wander_angle, circle_radius);
    position + circle_center + displacement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;

    fn car(x: f64, y: f64, speed: f64) -> Car {
        Car::settings()
            .position_xy(x, y)
            .max_speed(100.0)
            .max_force(1000.0)
            .initial_speed(speed)
            .build()
            .unwrap()
    }

    #[test]
    fn seek_is_desired_minus_velocity() {
        let c = car(0.0, 0.0, 10.0);
        // Desired (0, 100), velocity (10, 0).
        assert_eq!(seek(&c, vec2(0.0, 40.0)), vec2(-10.0, 100.0));
    }

    #[test]
    fn flee_only_reacts_inside_the_panic_radius() {
        let c = car(0.0, 0.0, 0.0);
        assert_eq!(flee(&c, vec2(301.0, 0.0), 300.0), Vector2::ZERO);
        assert_eq!(flee(&c, vec2(299.0, 0.0), 300.0), vec2(-100.0, 0.0));
        assert_ne!(flee(&c, vec2(0.0, -1.0), 300.0), Vector2::ZERO);
    }

    #[test]
    fn arrival_speed_ramps_down_to_zero() {
        let radius = 500.0;
        let mut previous = f64::INFINITY;
        for d in [500.0, 400.0, 250.0, 100.0, 10.0, 0.5] {
            let s = arrival_speed(200.0, d, radius, 1.0);
            assert!(s < previous, "speed at {d} should be below {previous}");
            assert!(s > 0.0);
            previous = s;
        }
        assert_eq!(arrival_speed(200.0, 0.0, radius, 1.0), 0.0);
        assert_eq!(arrival_speed(200.0, 900.0, radius, 1.0), 200.0);
        assert!((arrival_speed(300.0, 500.0, radius, 3.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_ramps_stop_instead_of_producing_nan() {
        assert_eq!(arrival_speed(200.0, 0.0, 0.0, 1.0), 0.0);
        assert_eq!(arrival_speed(200.0, 50.0, 100.0, 0.0), 0.0);
        assert_eq!(arrival_speed(200.0, 150.0, 100.0, 0.0), 200.0);

        let c = car(5.0, 5.0, 10.0);
        let force = arrive(&c, vec2(5.0, 5.0), 0.0, 1.0);
        assert!(force.is_finite());
        assert_eq!(force, vec2(-10.0, 0.0));
        assert!(arrive(&c, vec2(20.0, 5.0), 100.0, 0.0).is_finite());
    }

    #[test]
    fn arrive_brakes_near_the_target() {
        let c = car(0.0, 0.0, 0.0);
        assert_eq!(arrive(&c, vec2(1000.0, 0.0), 100.0, 1.0), vec2(100.0, 0.0));
        assert_eq!(arrive(&c, vec2(50.0, 0.0), 100.0, 1.0), vec2(50.0, 0.0));
        assert_eq!(arrive(&c, Vector2::ZERO, 100.0, 1.0), Vector2::ZERO);
    }

    #[test]
    fn wander_target_sits_on_the_offset_circle() {
        let target = wander_target(vec2(10.0, 10.0), vec2(1.0, 0.0), std::f64::consts::FRAC_PI_2, 50.0, 20.0);
        assert_eq!(target, vec2(60.0, 30.0));
    }
}
