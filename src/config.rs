//! World configuration
//!
//! Fixed for the lifetime of a simulation. Loaded from JSON or taken from
//! the defaults in [`crate::consts`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{AxisMapping, Bounds, DriftSign};

/// Simulation constants supplied once at world construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    // === Arena ===
    pub screen_width: u32,
    pub screen_height: u32,

    // === Gravity ===
    pub gravity: f64,
    pub max_accel_of_gravity: f64,
    /// Trig-to-axis assignment when the pull is decomposed
    pub gravity_axes: AxisMapping,

    // === Bodies ===
    pub debris_count: usize,
    /// Visual size of the ship sprite (width, height)
    pub ship_size: DVec2,
    /// Visual size of a debris sprite (width, height)
    pub debris_size: DVec2,
    /// Sign rule for respawned debris velocity
    pub debris_drift: DriftSign,

    // === Ship ===
    pub thruster_thrust: f64,
    /// Radians per tick
    pub rotation_speed: f64,
    pub max_fuel: u32,

    // === Scoring / fuel economy ===
    pub max_fuel_per_debris: u32,
    pub fuel_drained_by_black_hole: u32,
    pub points_per_debris: u64,

    // === Black hole ===
    pub black_hole_width: u32,
    pub black_hole_height: u32,

    /// RNG seed for debris placement and fuel rewards
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            max_accel_of_gravity: MAX_ACCEL_OF_GRAVITY,
            gravity_axes: AxisMapping::default(),

            debris_count: NUMBER_OF_DEBRIS_PIECES,
            ship_size: DVec2::from_array(SHIP_SIZE),
            debris_size: DVec2::from_array(DEBRIS_SIZE),
            debris_drift: DriftSign::default(),

            thruster_thrust: THRUSTER_THRUST,
            rotation_speed: ROTATION_SPEED,
            max_fuel: MAX_FUEL,

            max_fuel_per_debris: MAX_FUEL_PER_DEBRIS,
            fuel_drained_by_black_hole: FUEL_DRAINED_BY_BLACK_HOLE,
            points_per_debris: POINTS_PER_DEBRIS,

            black_hole_width: BLACK_HOLE_WIDTH,
            black_hole_height: BLACK_HOLE_HEIGHT,

            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.debris_count == 0 {
            return Err(ConfigError::NoDebris);
        }
        if self.max_fuel == 0 {
            return Err(ConfigError::NoFuelCapacity);
        }
        // Fuel reward is drawn from [1, max_fuel_per_debris - 1]
        if self.max_fuel_per_debris < 2 {
            return Err(ConfigError::FuelPerDebrisTooSmall(self.max_fuel_per_debris));
        }

        positive("gravity", self.gravity)?;
        positive("max_accel_of_gravity", self.max_accel_of_gravity)?;
        positive("ship_size.x", self.ship_size.x)?;
        positive("ship_size.y", self.ship_size.y)?;
        positive("debris_size.x", self.debris_size.x)?;
        positive("debris_size.y", self.debris_size.y)?;
        finite("thruster_thrust", self.thruster_thrust)?;
        finite("rotation_speed", self.rotation_speed)?;

        if self.black_hole_width > self.screen_width
            || self.black_hole_height > self.screen_height
        {
            return Err(ConfigError::BlackHoleTooLarge {
                hole_width: self.black_hole_width,
                hole_height: self.black_hole_height,
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        Ok(())
    }

    /// Screen dimensions as a vector
    #[inline]
    pub fn screen(&self) -> DVec2 {
        DVec2::new(f64::from(self.screen_width), f64::from(self.screen_height))
    }

    /// Center of the world, where gravity pulls
    #[inline]
    pub fn center(&self) -> DVec2 {
        self.screen() * 0.5
    }

    /// The black hole rectangle, centered on screen
    ///
    /// Edges use integer halving, so odd sizes round toward the top-left.
    /// On an unvalidated config a hole larger than the screen is cut off at
    /// the top-left edges.
    pub fn black_hole(&self) -> Bounds {
        let (half_w, half_h) = (self.screen_width / 2, self.screen_height / 2);
        let (hole_w, hole_h) = (self.black_hole_width / 2, self.black_hole_height / 2);
        Bounds {
            left: f64::from(half_w.saturating_sub(hole_w)),
            right: f64::from(half_w) + f64::from(hole_w),
            top: f64::from(half_h.saturating_sub(hole_h)),
            bottom: f64::from(half_h) + f64::from(hole_h),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.center(), DVec2::new(600.0, 425.0));
    }

    #[test]
    fn test_black_hole_rect() {
        let hole = WorldConfig::default().black_hole();
        assert_eq!(hole.left, 575.0);
        assert_eq!(hole.right, 625.0);
        assert_eq!(hole.top, 400.0);
        assert_eq!(hole.bottom, 450.0);
    }

    #[test]
    fn test_black_hole_odd_sizes_use_integer_halving() {
        let config = WorldConfig {
            screen_width: 101,
            screen_height: 51,
            black_hole_width: 11,
            black_hole_height: 5,
            ..Default::default()
        };
        let hole = config.black_hole();
        assert_eq!(hole.left, 45.0);
        assert_eq!(hole.right, 55.0);
        assert_eq!(hole.top, 23.0);
        assert_eq!(hole.bottom, 27.0);
    }

    #[test]
    fn test_black_hole_of_unvalidated_oversized_config() {
        let config = WorldConfig {
            black_hole_width: 2000,
            black_hole_height: u32::MAX,
            ..Default::default()
        };
        let hole = config.black_hole();
        assert_eq!(hole.left, 0.0);
        assert_eq!(hole.right, 1600.0);
        assert_eq!(hole.top, 0.0);
        assert_eq!(hole.bottom, 425.0 + f64::from(u32::MAX / 2));
    }

    #[test]
    fn test_rejects_bad_configs() {
        let zero_width = WorldConfig {
            screen_width: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_width.validate(),
            Err(ConfigError::EmptyScreen { width: 0, .. })
        ));

        let no_debris = WorldConfig {
            debris_count: 0,
            ..Default::default()
        };
        assert!(matches!(no_debris.validate(), Err(ConfigError::NoDebris)));

        let stingy = WorldConfig {
            max_fuel_per_debris: 1,
            ..Default::default()
        };
        assert!(matches!(
            stingy.validate(),
            Err(ConfigError::FuelPerDebrisTooSmall(1))
        ));

        let no_gravity = WorldConfig {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            no_gravity.validate(),
            Err(ConfigError::NotPositive { field: "gravity", .. })
        ));

        let spinning = WorldConfig {
            rotation_speed: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            spinning.validate(),
            Err(ConfigError::NotFinite { field: "rotation_speed", .. })
        ));

        let huge_hole = WorldConfig {
            black_hole_width: 2000,
            ..Default::default()
        };
        assert!(matches!(
            huge_hole.validate(),
            Err(ConfigError::BlackHoleTooLarge { .. })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = WorldConfig::from_json(r#"{ "debris_count": 5, "seed": 42 }"#).unwrap();
        assert_eq!(config.debris_count, 5);
        assert_eq!(config.seed, 42);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.debris_drift, DriftSign::Positive);
        assert_eq!(config.gravity_axes, AxisMapping::Radial);
    }

    #[test]
    fn test_from_json_legacy_axes() {
        let config = WorldConfig::from_json(r#"{ "gravity_axes": "Legacy" }"#).unwrap();
        assert_eq!(config.gravity_axes, AxisMapping::Legacy);
    }

    #[test]
    fn test_from_json_drift_and_sizes() {
        let config = WorldConfig::from_json(
            r#"{ "debris_drift": "Either", "ship_size": [20.0, 40.0] }"#,
        )
        .unwrap();
        assert_eq!(config.debris_drift, DriftSign::Either);
        assert_eq!(config.ship_size, DVec2::new(20.0, 40.0));
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            WorldConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            WorldConfig::from_json(r#"{ "debris_count": 0 }"#),
            Err(ConfigError::NoDebris)
        ));
    }
}
