//! Moving bodies and the shared integration step
//!
//! Velocity is kept in "pixels per tick": gravity is scaled by the tick length
//! before it is added, but the position then advances by the whole velocity
//! once per tick.

use glam::DVec2;

use super::gravity::GravityField;
use crate::config::WorldConfig;
use crate::consts::MILLIS_PER_SECOND;

/// Axis-aligned rectangle in screen coordinates (Y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Box of half-size `half_extent` around `center`
    pub fn around(center: DVec2, half_extent: DVec2) -> Self {
        Self {
            left: center.x - half_extent.x,
            right: center.x + half_extent.x,
            top: center.y - half_extent.y,
            bottom: center.y + half_extent.y,
        }
    }

    /// Half-open containment: `left < x <= right` and `top < y <= bottom`
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        point.x > self.left && point.x <= self.right && point.y > self.top && point.y <= self.bottom
    }
}

/// Everything a body needs from the world to take one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub gravity: GravityField,
    /// Screen width and height
    pub size: DVec2,
}

impl Arena {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            gravity: GravityField::new(config),
            size: config.screen(),
        }
    }
}

/// Velocity change from `accel` over a tick of `delta_ms`
///
/// Multiplies before dividing so replays stay bit-exact with `accel * ms / 1000`.
#[inline]
pub(crate) fn over_tick(accel: DVec2, delta_ms: u32) -> DVec2 {
    accel * f64::from(delta_ms) / MILLIS_PER_SECOND
}

/// Physics state shared by every entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    /// Displacement applied per tick
    pub vel: DVec2,
    /// Half the sprite size, for bounding boxes only
    pub half_extent: DVec2,
}

impl Body {
    /// A body at rest with the given sprite size
    pub fn new(pos: DVec2, size: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            half_extent: size * 0.5,
        }
    }

    /// Add the gravitational pull for a tick of `delta_ms` to the velocity
    pub fn apply_gravity(&mut self, gravity: &GravityField, delta_ms: u32) {
        self.vel += over_tick(gravity.acceleration_at(self.pos), delta_ms);
    }

    /// Move by one tick's worth of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Clamp the position into `[min, max]` per axis, stopping motion on
    /// any axis that hit a wall
    pub fn clamp_to(&mut self, min: DVec2, max: DVec2) {
        if self.pos.x < min.x {
            self.pos.x = min.x;
            self.vel.x = 0.0;
        } else if self.pos.x > max.x {
            self.pos.x = max.x;
            self.vel.x = 0.0;
        }
        if self.pos.y < min.y {
            self.pos.y = min.y;
            self.vel.y = 0.0;
        } else if self.pos.y > max.y {
            self.pos.y = max.y;
            self.vel.y = 0.0;
        }
    }

    /// Bounding box around the current position
    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.pos, self.half_extent)
    }

    /// Whether this body's position lies inside `bounds`
    #[inline]
    pub fn is_bounded_by(&self, bounds: &Bounds) -> bool {
        bounds.contains(self.pos)
    }
}

/// A physics-governed entity: ship, debris, or a bare [`Body`]
pub trait MovingBody {
    fn body_mut(&mut self) -> &mut Body;

    /// Advance one tick. The default is gravity only, with no walls.
    fn integrate(&mut self, arena: &Arena, delta_ms: u32) {
        let body = self.body_mut();
        body.apply_gravity(&arena.gravity, delta_ms);
        body.advance();
    }
}

impl MovingBody for Body {
    fn body_mut(&mut self) -> &mut Body {
        self
    }
}
