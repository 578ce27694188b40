//! Core types and definitions for the Coastwatch patrol simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, state views, events, and constants.
//! It has no dependency on any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
