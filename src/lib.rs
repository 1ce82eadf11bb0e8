//! Delta-V - a gravity well arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, bodies, collisions, game state)
//! - `config`: World configuration and validation
//! - `error`: Configuration errors
//!
//! Rendering, assets and input devices live outside this crate. A host calls
//! [`World::update`] once per tick, feeds [`ControlEvent`]s between ticks and
//! reads [`World::snapshot`] to draw.

pub mod config;
pub mod error;
pub mod sim;

pub use config::WorldConfig;
pub use error::ConfigError;
pub use sim::{ControlEvent, GameEvent, GamePhase, World, WorldSnapshot};

/// Default game constants
pub mod consts {
    /// Screen dimensions (world units are pixels)
    pub const SCREEN_WIDTH: u32 = 1200;
    pub const SCREEN_HEIGHT: u32 = 850;

    /// Gravity scaling factor (acceleration = GRAVITY / distance²)
    pub const GRAVITY: f64 = 50000.0;
    /// Acceleration cap, keeps physics stable near the black hole
    pub const MAX_ACCEL_OF_GRAVITY: f64 = 100.0;

    /// Number of debris pieces kept in the world
    pub const NUMBER_OF_DEBRIS_PIECES: usize = 20;

    /// Ship thruster strength
    pub const THRUSTER_THRUST: f64 = 2.0;
    /// Heading change per tick while a rotation key is held (radians)
    pub const ROTATION_SPEED: f64 = std::f64::consts::PI / 64.0;

    /// Fuel tank capacity
    pub const MAX_FUEL: u32 = 500;
    /// Exclusive upper bound of fuel granted per captured debris
    pub const MAX_FUEL_PER_DEBRIS: u32 = 10;
    /// Fuel drained per tick while the ship sits in the black hole
    pub const FUEL_DRAINED_BY_BLACK_HOLE: u32 = 10;
    /// Score per captured debris
    pub const POINTS_PER_DEBRIS: u64 = 1;

    /// Black hole rectangle size, centered on screen
    pub const BLACK_HOLE_WIDTH: u32 = 50;
    pub const BLACK_HOLE_HEIGHT: u32 = 50;

    /// Default sprite sizes used for bounding boxes
    pub const SHIP_SIZE: [f64; 2] = [32.0, 32.0];
    pub const DEBRIS_SIZE: [f64; 2] = [16.0, 16.0];

    /// Debris may drift this fraction of the screen past each edge
    pub const DEBRIS_BUFFER: f64 = 0.1;

    /// Milliseconds per second, for scaling accelerations by tick length
    pub const MILLIS_PER_SECOND: f64 = 1000.0;
}

/// Heading (radians) whose thrust vector points along `dir`
///
/// Thrust uses screen coordinates (Y down): heading 0 pushes toward -Y.
#[inline]
pub fn heading_toward(dir: glam::DVec2) -> f64 {
    dir.x.atan2(-dir.y)
}

/// Wrap an angle difference into [-π, π]
///
/// Constant time for any finite input, however many turns the heading has
/// accumulated.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}
