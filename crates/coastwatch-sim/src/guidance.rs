//! Guidance for attack drones.
//!
//! First-order lead prediction: the target is projected forward along its
//! current velocity for as long as the interceptor needs to cover the
//! present range.

use coastwatch_core::components::Kinematics;
use coastwatch_core::constants::SPEED_SCALE;
use coastwatch_core::types::{distance, Vec2};

/// Time for an interceptor at `speed` to cover `range` units, in ms.
pub fn time_to_intercept_ms(range: f64, speed: f64) -> f64 {
    if speed <= 0.0 {
        return f64::INFINITY;
    }
    range / (speed * SPEED_SCALE)
}

/// Predicted intercept point for an interceptor at `own_position` flying at `own_speed`.
pub fn lead_point(own_position: Vec2, own_speed: f64, target: &Kinematics) -> Vec2 {
    let range = distance(own_position, target.position);
    let tti_ms = time_to_intercept_ms(range, own_speed);
    if !tti_ms.is_finite() {
        return target.position;
    }
    target.position + target.velocity * target.speed * SPEED_SCALE * tti_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use coastwatch_core::types::heading_vector;

    fn target(x: f64, y: f64, heading: f64, speed: f64) -> Kinematics {
        Kinematics {
            position: Vec2::new(x, y),
            velocity: heading_vector(heading),
            speed,
            heading,
        }
    }

    #[test]
    fn test_tti() {
        // 15 units per 100 ms.
        assert!((time_to_intercept_ms(150.0, 15.0) - 1000.0).abs() < 1e-9);
        assert!(time_to_intercept_ms(10.0, 0.0).is_infinite());
    }

    #[test]
    fn test_lead_scales_with_target_speed_ratio() {
        // Target moving +y at 9; range 150; interceptor 15 -> lead 150 * 9/15 = 90.
        let t = target(250.0, 300.0, std::f64::consts::FRAC_PI_2, 9.0);
        let aim = lead_point(Vec2::new(100.0, 300.0), 15.0, &t);
        assert!((aim.x - 250.0).abs() < 1e-9);
        assert!((aim.y - 390.0).abs() < 1e-9);
    }

    #[test]
    fn test_stationary_target_no_lead() {
        let t = target(200.0, 200.0, 0.0, 0.0);
        assert_eq!(lead_point(Vec2::new(0.0, 0.0), 15.0, &t), t.position);
    }
}
