//! Patrol drone AI for Coastwatch.
//!
//! Implements the patrol drone state machine (idle/recharge, sector patrol,
//! enemy tracking with intelligence sharing, forced return) and the battery
//! model that drives it.

pub mod battery;
pub mod fsm;

pub use coastwatch_core as core;
