//! World state and core simulation types
//!
//! The world owns every body, the score and the RNG. Presentation code only
//! reads it between ticks.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Arena, Bounds};
use super::debris::{Debris, random_screen_point};
use super::ship::Ship;
use crate::config::WorldConfig;
use crate::error::ConfigError;

/// Current phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    /// Terminal: the ship ran dry inside the black hole
    GameOver,
}

impl GamePhase {
    #[inline]
    pub fn is_over(self) -> bool {
        self == GamePhase::GameOver
    }
}

/// Something noteworthy that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The ship scooped up a piece of debris
    DebrisCaptured { id: u32, fuel_gained: u32, points: u64 },
    /// A piece of debris fell into the black hole
    DebrisConsumed { id: u32 },
    /// The black hole drained fuel from the ship
    ShipDrained { fuel_remaining: u32 },
    GameOver { score: u64 },
}

/// Discrete press/release controls from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    PressThrust,
    ReleaseThrust,
    PressLeft,
    ReleaseLeft,
    PressRight,
    ReleaseRight,
}

/// Read-only view of a debris piece, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebrisView {
    pub id: u32,
    pub pos: DVec2,
}

/// Stable copy of everything a renderer or HUD needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub ship_pos: DVec2,
    pub ship_heading: f64,
    pub ship_thrusting: bool,
    pub fuel: u32,
    pub debris: Vec<DebrisView>,
}

/// The complete simulation: one ship, a fixed set of debris, score and phase
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) config: WorldConfig,
    pub(crate) arena: Arena,
    pub(crate) black_hole: Bounds,
    pub(crate) rng: Pcg32,
    pub(crate) ship: Ship,
    /// Sorted by id, count fixed at construction
    pub(crate) debris: Vec<Debris>,
    pub(crate) score: u64,
    pub(crate) phase: GamePhase,
    pub(crate) tick: u64,
    /// Events from the most recent tick
    pub(crate) events: Vec<GameEvent>,
}

impl World {
    /// Build a world from a validated config, seeding the RNG from `config.seed`
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let arena = Arena::new(&config);
        let mut rng = Pcg32::seed_from_u64(config.seed);

        let ship = Ship::new(DVec2::ZERO, &config);
        let debris = (0..config.debris_count)
            .map(|i| {
                let pos = random_screen_point(&mut rng, &arena);
                // Count is a config value; ids only need to be unique per slot
                Debris::new(i as u32, pos, config.debris_size)
            })
            .collect();

        log::info!(
            "World {}x{}: {} debris, seed {}",
            config.screen_width,
            config.screen_height,
            config.debris_count,
            config.seed
        );

        Ok(Self {
            black_hole: config.black_hole(),
            config,
            arena,
            rng,
            ship,
            debris,
            score: 0,
            phase: GamePhase::Running,
            tick: 0,
            events: Vec::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn black_hole(&self) -> &Bounds {
        &self.black_hole
    }

    #[inline]
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Mutable ship access for scenario setup and direct input wiring
    #[inline]
    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    #[inline]
    pub fn debris(&self) -> &[Debris] {
        &self.debris
    }

    /// Mutable debris access for scenario setup; the count cannot change
    #[inline]
    pub fn debris_mut(&mut self) -> &mut [Debris] {
        &mut self.debris
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Number of ticks actually simulated
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Events produced by the most recent [`World::update`]
    #[inline]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Route an input event to the ship; ignored once the game is over
    pub fn apply_control(&mut self, event: ControlEvent) {
        if self.phase.is_over() {
            return;
        }
        let ship = &mut self.ship;
        match event {
            ControlEvent::PressThrust => ship.on_press_thrust(),
            ControlEvent::ReleaseThrust => ship.on_release_thrust(),
            ControlEvent::PressLeft => ship.on_press_left(),
            ControlEvent::ReleaseLeft => ship.on_release_left(),
            ControlEvent::PressRight => ship.on_press_right(),
            ControlEvent::ReleaseRight => ship.on_release_right(),
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            score: self.score,
            phase: self.phase,
            ship_pos: self.ship.body.pos,
            ship_heading: self.ship.heading,
            ship_thrusting: self.ship.thrusting,
            fuel: self.ship.fuel(),
            debris: self
                .debris
                .iter()
                .map(|d| DebrisView {
                    id: d.id,
                    pos: d.body.pos,
                })
                .collect(),
        }
    }
}
