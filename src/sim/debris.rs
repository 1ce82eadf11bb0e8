//! Free-floating debris
//!
//! Debris is allowed to drift a little past the screen edges before it is
//! stopped, and is recycled in place (respawned) when captured or swallowed.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Arena, Body, MovingBody};
use crate::consts::DEBRIS_BUFFER;

/// Largest speed component given to respawned debris
pub const MAX_RESPAWN_SPEED: i32 = 4;

/// How the sign of a respawned debris velocity is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DriftSign {
    /// Coin flip with a single-sided coin: every component ends up in
    /// `0..=4`, so respawned debris always drifts right and down
    #[default]
    Positive,
    /// Fair coin flip: components in `-4..=4`
    Either,
}

impl DriftSign {
    /// Draw one velocity component
    pub fn draw<R: Rng>(self, rng: &mut R) -> i32 {
        let sides = match self {
            DriftSign::Positive => 1,
            DriftSign::Either => 2,
        };
        let positive = rng.random_range(0..sides) == 0;
        let speed = rng.random_range(0..=MAX_RESPAWN_SPEED);
        if positive { speed } else { -speed }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Debris {
    /// Stable slot identity, survives respawns
    pub id: u32,
    pub body: Body,
}

impl Debris {
    pub fn new(id: u32, pos: DVec2, size: DVec2) -> Self {
        Self {
            id,
            body: Body::new(pos, size),
        }
    }

    /// Move to a random on-screen spot with a small random drift
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, arena: &Arena, drift: DriftSign) {
        self.body.pos = random_screen_point(rng, arena);
        let vx = drift.draw(rng);
        let vy = drift.draw(rng);
        self.body.vel = DVec2::new(f64::from(vx), f64::from(vy));
    }
}

/// Uniform integer point in `[0, width) x [0, height)`
pub fn random_screen_point<R: Rng>(rng: &mut R, arena: &Arena) -> DVec2 {
    // Screen sizes come from u32 config values
    let width = arena.size.x as u32;
    let height = arena.size.y as u32;
    DVec2::new(
        f64::from(rng.random_range(0..width)),
        f64::from(rng.random_range(0..height)),
    )
}

impl MovingBody for Debris {
    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn integrate(&mut self, arena: &Arena, delta_ms: u32) {
        self.body.apply_gravity(&arena.gravity, delta_ms);
        self.body.advance();

        let buffer = arena.size * DEBRIS_BUFFER;
        self.body.clamp_to(-buffer, arena.size + buffer);
    }
}
