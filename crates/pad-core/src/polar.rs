//! Pointer offset -> clamped polar drive vector.
//!
//! Angles use the pad's own frame: 0° points straight up (screen -Y), values
//! grow clockwise and lie in (-180, 180]. The knob may only travel inside two
//! opposing wedges of half-width `ui_angle_max`, one around straight ahead
//! and one around straight back.

use crate::command::ControlCommand;
use crate::config::ControlLimits;
use crate::error::ConfigError;
use glam::Vec2;

/// Result of mapping one pointer offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobPose {
    /// Knob center relative to the pad center, whole pixels.
    pub knob: Vec2,
    /// Heading after the cone clamp, degrees.
    pub heading_deg: f32,
    /// Steering in percent of the UI angle limit.
    pub angle: i32,
    /// Signed speed in percent; negative drives in reverse.
    pub magnitude: i32,
}

impl KnobPose {
    pub const CENTER: KnobPose = KnobPose {
        knob: Vec2::ZERO,
        heading_deg: 0.0,
        angle: 0,
        magnitude: 0,
    };

    #[inline]
    pub fn command(&self) -> ControlCommand {
        ControlCommand {
            pct_angle: self.angle,
            magnitude: self.magnitude,
        }
    }
}

/// Raw heading of `(x, y)`: 0° up, clockwise positive, range (-180, 180].
#[inline]
pub fn heading_deg(x: f32, y: f32) -> f32 {
    if x == 0.0 {
        // atan(y/x) is undefined on the vertical axis
        if y > 0.0 {
            180.0
        } else {
            0.0
        }
    } else {
        let arctan = (y / x).atan().to_degrees();
        if x > 0.0 {
            arctan + 90.0
        } else {
            arctan - 90.0
        }
    }
}

/// Saturate a heading into the forward/rear cones.
///
/// The four wedge boundaries are mirror images across the vertical axis, so
/// the clamp works on `|heading|` against a two-row table and restores the
/// sign afterwards.
pub fn clamp_heading(heading: f32, limits: &ControlLimits) -> f32 {
    let a = limits.ui_angle_max();
    // (lower exclusive, upper, upper inclusive, saturate to)
    let wedges = [(a, 90.0, true, a), (90.0, 180.0 - a, false, 180.0 - a)];

    let mag = heading.abs();
    let clamped = wedges
        .iter()
        .find(|&&(lo, hi, hi_inclusive, _)| mag > lo && (mag < hi || (hi_inclusive && mag == hi)))
        .map_or(mag, |&(_, _, _, to)| to);
    clamped.copysign(heading)
}

/// Map a pad-local pointer offset to a knob pose.
///
/// Never fails: non-finite coordinates or a degenerate radius map to the
/// center pose.
///
/// A purely sideways offset (`y == 0`) commands zero magnitude while the knob
/// is still drawn where the cone clamp puts it, on the forward rim at
/// `±ui_angle_max`. The drawn knob and the command disagree only on that line.
pub fn map(x: f32, y: f32, max_radius: f32, limits: &ControlLimits) -> KnobPose {
    if !(x.is_finite() && y.is_finite() && max_radius.is_finite() && max_radius > 0.0) {
        return KnobPose::CENTER;
    }

    let hypot = x.hypot(y).min(max_radius);
    let heading = clamp_heading(heading_deg(x, y), limits);

    let rad = heading.to_radians();
    let knob = Vec2::new(rad.sin() * hypot, -rad.cos() * hypot).round();

    let ui_angle_max = limits.ui_angle_max();
    let speed = 100.0 * hypot / max_radius;
    let (steer, magnitude) = if heading.abs() <= 90.0 {
        (heading, speed)
    } else if heading > 90.0 {
        (180.0 - heading, -speed)
    } else {
        (-180.0 - heading, -speed)
    };
    // Pure sideways input is neither forward nor reverse.
    let magnitude = if y == 0.0 && x != 0.0 { 0.0 } else { magnitude };

    let angle = (100.0 * steer / ui_angle_max).round().clamp(-100.0, 100.0) as i32;
    KnobPose {
        knob,
        heading_deg: heading,
        angle,
        magnitude: magnitude.round().clamp(-100.0, 100.0) as i32,
    }
}

/// [`map`] with an unvalidated angle limit, as read from a host page.
pub fn try_map(x: f32, y: f32, max_radius: f32, ui_angle_max: f32) -> Result<KnobPose, ConfigError> {
    let limits = ControlLimits::new(ui_angle_max)?;
    Ok(map(x, y, max_radius, &limits))
}
