//! The player's ship
//!
//! Gravity, rotation and thrust are applied in that order each tick, then the
//! ship is stopped at the screen edges.

use glam::DVec2;

use super::body::{Arena, Body, MovingBody, over_tick};
use crate::config::WorldConfig;

/// Which way the ship is turning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Counterclockwise
    Left,
    #[default]
    None,
    /// Clockwise
    Right,
}

impl Rotation {
    /// -1, 0 or 1
    #[inline]
    pub fn direction(self) -> f64 {
        match self {
            Rotation::Left => -1.0,
            Rotation::None => 0.0,
            Rotation::Right => 1.0,
        }
    }
}

/// Ship handling constants, copied from the config at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipTuning {
    pub thrust: f64,
    pub rotation_speed: f64,
    pub max_fuel: u32,
}

impl ShipTuning {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            thrust: config.thruster_thrust,
            rotation_speed: config.rotation_speed,
            max_fuel: config.max_fuel,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub body: Body,
    /// Radians, accumulated without wrapping. 0 thrusts toward -Y.
    pub heading: f64,
    pub thrusting: bool,
    rotation: Rotation,
    left_held: bool,
    right_held: bool,
    fuel: u32,
    tuning: ShipTuning,
}

impl Ship {
    /// A ship at rest at `pos` with a full tank
    pub fn new(pos: DVec2, config: &WorldConfig) -> Self {
        let tuning = ShipTuning::new(config);
        Self {
            body: Body::new(pos, config.ship_size),
            heading: 0.0,
            thrusting: false,
            rotation: Rotation::None,
            left_held: false,
            right_held: false,
            fuel: tuning.max_fuel,
            tuning,
        }
    }

    #[inline]
    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Set the tank level directly, clamped to capacity
    pub fn set_fuel(&mut self, fuel: u32) {
        self.fuel = fuel.min(self.tuning.max_fuel);
    }

    /// Add (or drain, if negative) fuel, clamped to `[0, max_fuel]`
    pub fn add_fuel(&mut self, delta: i64) {
        let max = i64::from(self.tuning.max_fuel);
        let fuel = (i64::from(self.fuel) + delta).clamp(0, max);
        // In range by the clamp above
        self.fuel = fuel as u32;
    }

    // === Input ===

    pub fn on_press_thrust(&mut self) {
        self.thrusting = true;
    }

    pub fn on_release_thrust(&mut self) {
        self.thrusting = false;
    }

    pub fn on_press_left(&mut self) {
        self.left_held = true;
        self.rotation = Rotation::Left;
    }

    pub fn on_release_left(&mut self) {
        self.left_held = false;
        self.rotation = if self.right_held {
            Rotation::Right
        } else {
            Rotation::None
        };
    }

    pub fn on_press_right(&mut self) {
        self.right_held = true;
        self.rotation = Rotation::Right;
    }

    pub fn on_release_right(&mut self) {
        self.right_held = false;
        self.rotation = if self.left_held {
            Rotation::Left
        } else {
            Rotation::None
        };
    }

    /// Thrust acceleration for the current heading (Y points down)
    fn thrust_vector(&self) -> DVec2 {
        DVec2::new(
            self.tuning.thrust * self.heading.sin(),
            -self.tuning.thrust * self.heading.cos(),
        )
    }
}

impl MovingBody for Ship {
    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn integrate(&mut self, arena: &Arena, delta_ms: u32) {
        self.body.apply_gravity(&arena.gravity, delta_ms);

        if self.rotation != Rotation::None {
            self.heading += self.tuning.rotation_speed * self.rotation.direction();
        }

        if self.thrusting && self.fuel > 0 {
            self.fuel -= 1;
            self.body.vel += over_tick(self.thrust_vector(), delta_ms);
        }

        self.body.advance();

        let half = self.body.half_extent;
        self.body.clamp_to(half, arena.size - half);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn setup() -> (WorldConfig, Arena) {
        let config = WorldConfig::default();
        let arena = Arena::new(&config);
        (config, arena)
    }

    #[test]
    fn test_new_ship_has_full_tank() {
        let (config, _) = setup();
        let ship = Ship::new(DVec2::ZERO, &config);
        assert_eq!(ship.fuel(), config.max_fuel);
        assert_eq!(ship.heading, 0.0);
        assert_eq!(ship.body.half_extent, config.ship_size * 0.5);
    }

    #[test]
    fn test_wall_clamp_every_edge() {
        let (config, arena) = setup();
        let half = config.ship_size * 0.5;

        let mut ship = Ship::new(DVec2::new(5000.0, -3000.0), &config);
        ship.body.vel = DVec2::new(40.0, -40.0);
        ship.integrate(&arena, 16);
        assert_eq!(ship.body.pos, DVec2::new(1200.0 - half.x, half.y));
        assert_eq!(ship.body.vel, DVec2::ZERO);

        let mut ship = Ship::new(DVec2::new(-5000.0, 3000.0), &config);
        ship.body.vel = DVec2::new(-40.0, 40.0);
        ship.integrate(&arena, 16);
        assert_eq!(ship.body.pos, DVec2::new(half.x, 850.0 - half.y));
        assert_eq!(ship.body.vel, DVec2::ZERO);
    }

    #[test]
    fn test_origin_start_clamps_on_screen() {
        let (config, arena) = setup();
        let mut ship = Ship::new(DVec2::ZERO, &config);
        ship.integrate(&arena, 10);
        assert_eq!(ship.body.pos, config.ship_size * 0.5);
    }

    #[test]
    fn test_thrust_burns_fuel_and_pushes_up() {
        let (config, arena) = setup();
        // Vertically aligned with the center, above it: gravity pulls +Y only
        let mut ship = Ship::new(DVec2::new(600.0, 300.0), &config);
        let mut coasting = ship.clone();
        ship.on_press_thrust();

        ship.integrate(&arena, 1000);
        coasting.integrate(&arena, 1000);

        assert_eq!(ship.fuel(), config.max_fuel - 1);
        // Heading 0 thrusts toward -Y by exactly `thrust` per second
        assert!((coasting.body.vel.y - ship.body.vel.y - config.thruster_thrust).abs() < 1e-12);
        assert!(ship.body.vel.x.abs() < 1e-12);
    }

    #[test]
    fn test_thrust_heading_quarter_turn_pushes_right() {
        let (config, arena) = setup();
        let mut ship = Ship::new(DVec2::new(600.0, 300.0), &config);
        ship.heading = PI / 2.0;
        ship.on_press_thrust();
        ship.integrate(&arena, 1000);
        assert!((ship.body.vel.x - config.thruster_thrust).abs() < 1e-12);
    }

    #[test]
    fn test_no_thrust_without_fuel() {
        let (config, arena) = setup();
        let mut ship = Ship::new(DVec2::new(600.0, 300.0), &config);
        let mut coasting = ship.clone();
        ship.set_fuel(0);
        coasting.set_fuel(0);
        ship.on_press_thrust();

        ship.integrate(&arena, 16);
        coasting.integrate(&arena, 16);

        assert_eq!(ship.fuel(), 0);
        assert_eq!(ship.body, coasting.body);
    }

    #[test]
    fn test_heading_accumulates_without_wrapping() {
        let (config, arena) = setup();
        let mut ship = Ship::new(DVec2::new(300.0, 300.0), &config);
        ship.on_press_right();
        for _ in 0..200 {
            ship.integrate(&arena, 10);
        }
        assert!((ship.heading - 200.0 * config.rotation_speed).abs() < 1e-9);
        assert!(ship.heading > 2.0 * PI);

        ship.on_release_right();
        ship.on_press_left();
        for _ in 0..400 {
            ship.integrate(&arena, 10);
        }
        assert!((ship.heading + 200.0 * config.rotation_speed).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_keys() {
        let (config, _) = setup();
        let mut ship = Ship::new(DVec2::ZERO, &config);

        ship.on_press_left();
        assert_eq!(ship.rotation(), Rotation::Left);

        // Newest key wins while both are held
        ship.on_press_right();
        assert_eq!(ship.rotation(), Rotation::Right);

        // Releasing one key falls back to the one still held
        ship.on_release_right();
        assert_eq!(ship.rotation(), Rotation::Left);

        ship.on_press_right();
        ship.on_release_left();
        assert_eq!(ship.rotation(), Rotation::Right);

        ship.on_release_right();
        assert_eq!(ship.rotation(), Rotation::None);
    }

    #[test]
    fn test_thrust_toggle() {
        let (config, _) = setup();
        let mut ship = Ship::new(DVec2::ZERO, &config);
        ship.on_press_thrust();
        assert!(ship.thrusting);
        ship.on_release_thrust();
        assert!(!ship.thrusting);
    }

    #[test]
    fn test_add_fuel_clamps() {
        let (config, _) = setup();
        let mut ship = Ship::new(DVec2::ZERO, &config);
        ship.add_fuel(100);
        assert_eq!(ship.fuel(), config.max_fuel);
        ship.add_fuel(-10);
        assert_eq!(ship.fuel(), config.max_fuel - 10);
        ship.add_fuel(-10_000);
        assert_eq!(ship.fuel(), 0);
    }

    proptest! {
        #[test]
        fn prop_fuel_stays_in_range(deltas in prop::collection::vec(any::<i32>(), 1..50)) {
            let config = WorldConfig::default();
            let mut ship = Ship::new(DVec2::ZERO, &config);
            for delta in deltas {
                ship.add_fuel(i64::from(delta));
                prop_assert!(ship.fuel() <= config.max_fuel);
            }
        }
    }
}
