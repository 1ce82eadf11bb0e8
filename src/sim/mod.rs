//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied tick length only
//! - Seeded RNG only
//! - Stable iteration order (by debris id)
//! - No rendering or platform dependencies

pub mod body;
pub mod debris;
pub mod gravity;
pub mod pilot;
pub mod ship;
pub mod state;
mod tick;

pub use body::{Arena, Body, Bounds, MovingBody};
pub use debris::{Debris, DriftSign, MAX_RESPAWN_SPEED};
pub use gravity::{AxisMapping, GravityField};
pub use pilot::Autopilot;
pub use ship::{Rotation, Ship, ShipTuning};
pub use state::{ControlEvent, DebrisView, GameEvent, GamePhase, World, WorldSnapshot};
