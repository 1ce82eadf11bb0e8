//! Per-tick world update
//!
//! Integrates the ship, then each debris piece, resolving captures and the
//! black hole as it goes.

use rand::Rng;

use super::body::MovingBody;
use super::state::{GameEvent, GamePhase, World};

impl World {
    /// Advance the simulation by `delta_ms` milliseconds
    ///
    /// Does nothing once the game is over.
    pub fn update(&mut self, delta_ms: u32) {
        if self.phase.is_over() {
            return;
        }

        self.events.clear();
        self.tick += 1;

        self.ship.integrate(&self.arena, delta_ms);
        let ship_bounds = self.ship.body.bounds();

        for debris in &mut self.debris {
            debris.integrate(&self.arena, delta_ms);

            if debris.body.is_bounded_by(&ship_bounds) {
                debris.respawn(&mut self.rng, &self.arena, self.config.debris_drift);
                // Reward lands in [1, max_fuel_per_debris - 1]
                let fuel_gained = self.rng.random_range(0..self.config.max_fuel_per_debris - 1) + 1;
                self.ship.add_fuel(i64::from(fuel_gained));
                self.score += self.config.points_per_debris;

                log::debug!(
                    "Captured debris {} (+{} fuel, score {})",
                    debris.id,
                    fuel_gained,
                    self.score
                );
                self.events.push(GameEvent::DebrisCaptured {
                    id: debris.id,
                    fuel_gained,
                    points: self.config.points_per_debris,
                });
            }

            // Checked independently of the capture, at the current position
            if debris.body.is_bounded_by(&self.black_hole) {
                debris.respawn(&mut self.rng, &self.arena, self.config.debris_drift);
                log::debug!("Debris {} fell into the black hole", debris.id);
                self.events.push(GameEvent::DebrisConsumed { id: debris.id });
            }
        }

        if self.ship.body.is_bounded_by(&self.black_hole) {
            self.ship
                .add_fuel(-i64::from(self.config.fuel_drained_by_black_hole));
            let fuel_remaining = self.ship.fuel();
            log::debug!("Black hole drained ship to {} fuel", fuel_remaining);
            self.events.push(GameEvent::ShipDrained { fuel_remaining });

            if fuel_remaining == 0 {
                self.phase = GamePhase::GameOver;
                log::info!("Game over after {} ticks, score {}", self.tick, self.score);
                self.events.push(GameEvent::GameOver { score: self.score });
            }
        }

        log::trace!(
            "tick {}: ship {:?} fuel {} score {}",
            self.tick,
            self.ship.body.pos,
            self.ship.fuel(),
            self.score
        );
    }
}
