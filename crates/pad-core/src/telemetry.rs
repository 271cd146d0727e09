//! Wheel status snapshots polled from the rover, and how to draw them.

use crate::error::TelemetryError;
use glam::Vec2;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Request body the status endpoint expects.
pub const STATUS_REQUEST_BODY: &str = "all";
/// Delay before the first poll after page load.
pub const FIRST_POLL_DELAY: Duration = Duration::from_millis(1000);
/// Delay between a successful response and the next poll.
pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct WheelStatus {
    /// Steering angle, degrees clockwise.
    pub angle: f64,
    /// Signed speed, -100..100.
    pub velocity: f64,
}

/// Wheel name -> status, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TelemetrySnapshot(pub BTreeMap<String, WheelStatus>);

impl TelemetrySnapshot {
    pub fn parse(json: &str) -> Result<Self, TelemetryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WheelStatus)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Wheel drawing in a frame centered on the canvas and rotated by
/// `rotation_rad`: an outline plus a velocity bar growing up (forward) or
/// down (reverse) from the axle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGlyph {
    pub center: Vec2,
    pub rotation_rad: f32,
    pub outline: Rect,
    pub velocity_bar: Option<Rect>,
}

impl WheelGlyph {
    pub fn layout(canvas_w: f32, canvas_h: f32, status: &WheelStatus) -> Self {
        let wheel = Vec2::new(canvas_w * 0.4, canvas_h * 0.8);
        let outline = Rect {
            origin: -wheel / 2.0,
            size: wheel,
        };
        let velocity = (status.velocity as f32).clamp(-100.0, 100.0);
        let bar_h = (wheel.y / 2.0) * (velocity.abs() / 100.0);
        let velocity_bar = if velocity > 0.0 {
            Some(Rect {
                origin: Vec2::new(-wheel.x / 2.0, -bar_h),
                size: Vec2::new(wheel.x, bar_h),
            })
        } else if velocity < 0.0 {
            Some(Rect {
                origin: Vec2::new(-wheel.x / 2.0, 0.0),
                size: Vec2::new(wheel.x, bar_h),
            })
        } else {
            None
        };
        Self {
            center: Vec2::new(canvas_w / 2.0, canvas_h / 2.0),
            rotation_rad: (status.angle as f32).to_radians(),
            outline,
            velocity_bar,
        }
    }
}
