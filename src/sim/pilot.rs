//! Demo autopilot
//!
//! Keeps the ship out of the black hole: inside a danger radius it turns to
//! face away from the center and burns once it is roughly aligned. It only
//! talks to the world through [`ControlEvent`]s, like a keyboard would.

use glam::DVec2;

use super::ship::Rotation;
use super::state::{ControlEvent, World};
use crate::{heading_toward, wrap_angle};

/// Heading error (radians) below which the autopilot stops turning and burns
const ALIGNED: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Distance from center at which the autopilot takes over
    pub danger_radius: f64,
    thrusting: bool,
    turning: Rotation,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(250.0)
    }
}

impl Autopilot {
    pub fn new(danger_radius: f64) -> Self {
        Self {
            danger_radius,
            thrusting: false,
            turning: Rotation::None,
        }
    }

    /// Controls to send before the next tick (press/release edges only)
    pub fn steer(&mut self, world: &World) -> Vec<ControlEvent> {
        let ship = world.ship();
        let away = ship.body.pos - world.arena().gravity.center;

        let (want_turn, want_thrust) = if away.length() < self.danger_radius {
            // Dead center has no "away"; climb straight up
            let away = if away == DVec2::ZERO { DVec2::NEG_Y } else { away };
            let error = wrap_angle(heading_toward(away) - ship.heading);
            let turn = if error.abs() <= ALIGNED {
                Rotation::None
            } else if error > 0.0 {
                Rotation::Right
            } else {
                Rotation::Left
            };
            (turn, error.abs() <= ALIGNED && ship.fuel() > 0)
        } else {
            (Rotation::None, false)
        };

        let mut events = Vec::new();

        if want_turn != self.turning {
            match self.turning {
                Rotation::Left => events.push(ControlEvent::ReleaseLeft),
                Rotation::Right => events.push(ControlEvent::ReleaseRight),
                Rotation::None => {}
            }
            match want_turn {
                Rotation::Left => events.push(ControlEvent::PressLeft),
                Rotation::Right => events.push(ControlEvent::PressRight),
                Rotation::None => {}
            }
            self.turning = want_turn;
        }

        if want_thrust != self.thrusting {
            events.push(if want_thrust {
                ControlEvent::PressThrust
            } else {
                ControlEvent::ReleaseThrust
            });
            self.thrusting = want_thrust;
        }

        events
    }
}
