//! Patrol drone behavior finite state machine.
//!
//! Pure functions that compute one tick of a patrol drone: battery, state
//! transitions, steering, and integration. No ECS dependency; operates on
//! plain data. Side effects on other drones (intelligence handoff) are returned
//! as requests for the caller to resolve.

use std::f64::consts::FRAC_PI_2;

use coastwatch_core::components::{Kinematics, PatrolDrone};
use coastwatch_core::constants::*;
use coastwatch_core::enums::{DroneState, WeatherEffects};
use coastwatch_core::types::{bearing, distance, heading_vector, steer_toward, TargetId, Vec2};

use crate::battery;

/// A live enemy vessel as seen by the fleet.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub id: TargetId,
    pub position: Vec2,
    pub speed: f64,
    /// Whether any drone currently claims this vessel.
    pub claimed: bool,
}

/// Input to the drone FSM for a single drone.
pub struct DroneContext<'a> {
    pub drone: &'a PatrolDrone,
    pub kinematics: Kinematics,
    pub waypoints: &'a [Vec2],
    pub base: Vec2,
    /// Where the drone parks on landing.
    pub parking_slot: Vec2,
    pub effects: WeatherEffects,
    pub delta_ms: f64,
    /// Another drone of the same sector is in PATROL or TRACKING.
    pub sector_covered: bool,
    /// The claimed vessel, if the drone has a claim and the vessel still exists.
    pub claimed: Option<Contact>,
    /// Live enemy vessels in spawn order.
    pub enemies: &'a [Contact],
    /// Current positions of the other drones.
    pub fleet_positions: &'a [Vec2],
}

/// Something worth reporting that happened to the drone this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DroneEvent {
    /// Charged and relieving an uncovered sector.
    Launched,
    /// Claimed a new enemy vessel at `range` units.
    Detected { target: TargetId, range: f64 },
    /// Battery reserve exhausted; heading home.
    LowPower { battery: f64 },
    /// Reached the base and parked.
    Landed,
    /// Claimed vessel is outside every drone's detection range.
    ContactLost { target: TargetId },
    /// Claimed vessel no longer exists.
    TargetVanished { target: TargetId },
}

/// Output from the drone FSM.
#[derive(Debug, Clone)]
pub struct DroneUpdate {
    pub state: DroneState,
    pub kinematics: Kinematics,
    pub battery: f64,
    pub waypoint_index: usize,
    pub target: Option<TargetId>,
    pub events: Vec<DroneEvent>,
    /// Unclaimed vessels spotted while tracking, to be handed to a patrolling drone.
    pub handoffs: Vec<TargetId>,
}

impl DroneUpdate {
    fn unchanged(ctx: &DroneContext) -> Self {
        Self {
            state: ctx.drone.state,
            kinematics: ctx.kinematics,
            battery: ctx.drone.battery,
            waypoint_index: ctx.drone.waypoint_index,
            target: ctx.drone.target,
            events: Vec::new(),
            handoffs: Vec::new(),
        }
    }

    /// Turn toward `desired`, set speed, and integrate position.
    fn fly(&mut self, desired: f64, max_turn: f64, speed: f64, delta_ms: f64) {
        let k = &mut self.kinematics;
        k.heading = steer_toward(k.heading, desired, max_turn);
        k.velocity = heading_vector(k.heading);
        k.speed = speed;
        k.position += k.velocity * speed * delta_ms * SPEED_SCALE;
    }
}

/// Evaluate the FSM for one drone. Returns its updated state.
pub fn evaluate(ctx: &DroneContext) -> DroneUpdate {
    let mut update = DroneUpdate::unchanged(ctx);

    if ctx.drone.state == DroneState::Idle {
        evaluate_idle(ctx, &mut update);
        return update;
    }

    update.battery = battery::drain(ctx.drone.battery, ctx.drone.state, &ctx.effects, ctx.delta_ms);

    let to_base = distance(update.kinematics.position, ctx.base);
    if update.state != DroneState::Returning
        && battery::must_return(update.battery, to_base, &ctx.effects)
    {
        update.state = DroneState::Returning;
        update.target = None;
        update.events.push(DroneEvent::LowPower {
            battery: update.battery,
        });
    }

    let speed_factor = battery::speed_factor(update.battery, &ctx.effects);
    let turn_factor = battery::turn_factor(update.battery, &ctx.effects);

    match update.state {
        DroneState::Returning => evaluate_returning(ctx, &mut update, speed_factor, turn_factor),
        DroneState::Patrol => evaluate_patrol(ctx, &mut update, speed_factor, turn_factor),
        DroneState::Tracking => evaluate_tracking(ctx, &mut update, speed_factor, turn_factor),
        DroneState::Idle => {}
    }

    update
}

fn evaluate_idle(ctx: &DroneContext, update: &mut DroneUpdate) {
    update.battery = battery::recharge(ctx.drone.battery, ctx.delta_ms);
    if !ctx.sector_covered && update.battery >= BATTERY_READY {
        update.state = DroneState::Patrol;
        update.events.push(DroneEvent::Launched);
    }
}

fn evaluate_returning(
    ctx: &DroneContext,
    update: &mut DroneUpdate,
    speed_factor: f64,
    turn_factor: f64,
) {
    let desired = bearing(update.kinematics.position, ctx.base);
    update.fly(
        desired,
        RETURN_TURN_RATE * turn_factor,
        RETURN_SPEED * speed_factor,
        ctx.delta_ms,
    );

    if distance(update.kinematics.position, ctx.base) < BASE_ARRIVAL_RADIUS {
        update.state = DroneState::Idle;
        update.kinematics.position = ctx.parking_slot;
        update.kinematics.heading = 0.0;
        update.kinematics.velocity = heading_vector(0.0);
        update.kinematics.speed = 0.0;
        update.events.push(DroneEvent::Landed);
    }
}

fn evaluate_patrol(
    ctx: &DroneContext,
    update: &mut DroneUpdate,
    speed_factor: f64,
    turn_factor: f64,
) {
    if ctx.waypoints.is_empty() {
        return;
    }
    let index = update.waypoint_index % ctx.waypoints.len();
    let waypoint = ctx.waypoints[index];

    // The index advances on arrival; this tick still steers at the reached waypoint.
    if distance(update.kinematics.position, waypoint) < WAYPOINT_ARRIVAL_RADIUS {
        update.waypoint_index = (index + 1) % ctx.waypoints.len();
    }

    let desired = bearing(update.kinematics.position, waypoint);
    update.fly(
        desired,
        PATROL_TURN_RATE * turn_factor,
        PATROL_SPEED * speed_factor,
        ctx.delta_ms,
    );

    let position = update.kinematics.position;
    let found = ctx.enemies.iter().find(|c| {
        !c.claimed && distance(position, c.position) < ctx.effects.detection_range
    });
    if let Some(contact) = found {
        update.state = DroneState::Tracking;
        update.target = Some(contact.id);
        update.events.push(DroneEvent::Detected {
            target: contact.id,
            range: distance(position, contact.position),
        });
    }
}

fn evaluate_tracking(
    ctx: &DroneContext,
    update: &mut DroneUpdate,
    speed_factor: f64,
    turn_factor: f64,
) {
    let Some(target_id) = update.target else {
        // A tracking drone without a claim has nothing to follow.
        update.state = DroneState::Patrol;
        return;
    };

    let target = match ctx.claimed {
        Some(c) if c.id == target_id => c,
        _ => {
            update.state = DroneState::Patrol;
            update.target = None;
            update.events.push(DroneEvent::TargetVanished { target: target_id });
            return;
        }
    };

    let range = distance(update.kinematics.position, target.position);
    let mut desired = bearing(update.kinematics.position, target.position);
    if range < ORBIT_RANGE {
        desired += FRAC_PI_2;
    }
    update.fly(
        desired,
        TRACKING_TURN_RATE * turn_factor,
        target.speed * speed_factor,
        ctx.delta_ms,
    );

    let position = update.kinematics.position;
    let detection_range = ctx.effects.detection_range;

    update.handoffs = ctx
        .enemies
        .iter()
        .filter(|c| c.id != target.id && !c.claimed)
        .filter(|c| distance(position, c.position) < detection_range)
        .map(|c| c.id)
        .collect();

    let visible = distance(position, target.position) < detection_range
        || ctx
            .fleet_positions
            .iter()
            .any(|p| distance(*p, target.position) < detection_range);
    if !visible {
        update.state = DroneState::Patrol;
        update.target = None;
        update.events.push(DroneEvent::ContactLost { target: target.id });
    }
}
