//! Configuration errors
//!
//! The simulation itself never fails; a bad configuration is rejected when
//! the world is built.

/// A [`WorldConfig`](crate::WorldConfig) that cannot drive a simulation
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("screen dimensions must be positive, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },

    #[error("debris count must be at least 1")]
    NoDebris,

    #[error("max_fuel must be positive")]
    NoFuelCapacity,

    #[error("max_fuel_per_debris must be at least 2, got {0}")]
    FuelPerDebrisTooSmall(u32),

    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error(
        "black hole {hole_width}x{hole_height} does not fit on a {width}x{height} screen"
    )]
    BlackHoleTooLarge {
        hole_width: u32,
        hole_height: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid configuration file")]
    Parse(#[from] serde_json::Error),
}
