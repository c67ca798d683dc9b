//! # Aquarium - Interactive Fish Tank Simulation
//!
//! A simulation of user-created fish swimming in a bounded 2D tank. Each fish
//! carries a name and a cruising speed chosen at admission time, wanders the
//! tank until food appears, then chases the nearest piece and eats it on
//! contact. Food is dropped by the user and is consumed by at most one fish.
//!
//! The drawing interface that produces fish sprites and the classifier that
//! approves them run outside this crate; the tank only sees a sprite key, a
//! name, and a pass/fail verdict at the admission boundary.
//!
//! ## Features
//!
//! - Wander / seek / eat steering state machine per fish
//! - Deterministic nearest-food targeting (creation-order tie-break)
//! - At-most-once food consumption arbitrated by the tank
//! - Tick-boundary input queue (no mid-tick world mutation)
//! - Read-only frame snapshots for rendering
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::tank`] - Tank world and per-tick update loop
//! - [`simulation::fish`] - Fish behavior and steering states
//! - [`simulation::food`] - Food items and kinds
//! - [`simulation::events`] - Command queue and consumption arbitration

/// Core simulation logic and data structures.
pub mod simulation {
    /// Trait for tank entities with a position and a sprite.
    ///
    /// The [`entity::Entity`] trait is implemented by everything that lives
    /// in the tank and is advanced each tick (Fish, Food).
    pub mod entity;
    /// Bounded event log feeding the frontend event panel.
    pub mod event_log;
    /// Queued input commands and tick-internal simulation events.
    pub mod events;
    /// Fish entity, steering state machine, and admission inputs.
    pub mod fish;
    /// Food items dropped by the user.
    pub mod food;
    /// Geometric helpers for distances and wall handling.
    pub mod geometry;
    /// Simulation parameters.
    pub mod params;
    /// Spatial index for nearest-food queries.
    pub mod spatial;
    /// The tank world: entity collections and the tick loop.
    pub mod tank;
}
