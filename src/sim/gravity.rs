//! Central gravity well
//!
//! Every body is pulled toward the middle of the screen with an inverse-square
//! falloff, capped near the center to keep the integration stable.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;

/// Squared-distance floor, avoids dividing by zero at the center
const MIN_DISTANCE_SQUARED: f64 = 0.01;

/// Which trig function feeds which axis when the pull is decomposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisMapping {
    /// X from `cos(angle)`, Y from `sin(angle)`: the pull follows the line
    /// to the center
    #[default]
    Radial,
    /// X from `sin(angle)`, Y from `cos(angle)`, as the first release of the
    /// game shipped. Agrees with `Radial` only on the diagonals; a body level
    /// with the center is pulled vertically and one above it horizontally.
    Legacy,
}

/// Stateless gravity model for a fixed world geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    pub center: DVec2,
    pub gravity: f64,
    pub max_accel: f64,
    pub axes: AxisMapping,
}

impl GravityField {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            center: config.center(),
            gravity: config.gravity,
            max_accel: config.max_accel_of_gravity,
            axes: config.gravity_axes,
        }
    }

    /// Scalar pull at `pos`, before axis decomposition
    pub fn magnitude_at(&self, pos: DVec2) -> f64 {
        let distance_squared = (self.center - pos).length_squared().max(MIN_DISTANCE_SQUARED);
        (self.gravity / distance_squared).min(self.max_accel)
    }

    /// Acceleration vector pulling a body at `pos` toward the center
    ///
    /// The magnitude is split along `atan(dy / dx)` and each axis is scaled by
    /// the screen aspect ratio, so wide screens pull harder horizontally.
    /// With [`AxisMapping::Radial`] a body vertically aligned with the center
    /// gets no horizontal pull. A body exactly at the center gets none at all.
    pub fn acceleration_at(&self, pos: DVec2) -> DVec2 {
        let delta = self.center - pos;
        if delta == DVec2::ZERO {
            return DVec2::ZERO;
        }

        let magnitude = self.magnitude_at(pos);
        let aspect = self.center.x / self.center.y;

        let (ax, ay) = match self.axes {
            AxisMapping::Radial if delta.x == 0.0 => (0.0, magnitude / aspect),
            AxisMapping::Radial => {
                let angle = (delta.y / delta.x).atan();
                (
                    magnitude * angle.cos() * aspect,
                    magnitude * angle.sin() / aspect,
                )
            }
            AxisMapping::Legacy => {
                // An infinite slope gives atan = ±π/2, never NaN
                let angle = (delta.y / delta.x).atan();
                (
                    magnitude * angle.sin() * aspect,
                    magnitude * angle.cos() / aspect,
                )
            }
        };

        DVec2::new(
            toward_center(ax, pos.x, self.center.x),
            toward_center(ay, pos.y, self.center.y),
        )
    }
}

/// Flip `component` if it points away from `center` along its axis
#[inline]
fn toward_center(component: f64, pos: f64, center: f64) -> f64 {
    if (pos > center && component > 0.0) || (pos <= center && component < 0.0) {
        -component
    } else {
        component
    }
}
