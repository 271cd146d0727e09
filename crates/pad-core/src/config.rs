//! Control limits, pad sizing and page-provided configuration.

use crate::error::ConfigError;

// Hidden page inputs rendered by the host pages. The pad needs the angle and
// command URL; telemetry and trim widgets read their own URL.
pub const UI_ANGLE_FIELD: &str = "ui_angle";
pub const COMMAND_URL_FIELD: &str = "command";
pub const STATUS_URL_FIELD: &str = "request_wheel_status";
pub const TRIM_URL_FIELD: &str = "steering_trim";

/// Maximum steerable angle magnitude, in UI degrees.
///
/// Only constructible through [`ControlLimits::new`], so every mapper input is
/// already known to lie in the open interval (0, 90).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlLimits {
    ui_angle_max: f32,
}

impl ControlLimits {
    pub fn new(ui_angle_max: f32) -> Result<Self, ConfigError> {
        if ui_angle_max.is_finite() && ui_angle_max > 0.0 && ui_angle_max < 90.0 {
            Ok(Self { ui_angle_max })
        } else {
            Err(ConfigError::AngleOutOfRange(ui_angle_max))
        }
    }

    #[inline]
    pub fn ui_angle_max(&self) -> f32 {
        self.ui_angle_max
    }
}

/// Pad and knob sizes as fractions of the square drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadLayout {
    pub pad_radius_frac: f32,
    pub knob_radius_frac: f32,
    pub max_knob_radius_frac: f32,
    pub min_pad_size: f32,
}

impl Default for PadLayout {
    fn default() -> Self {
        Self {
            pad_radius_frac: 0.85 / 2.0,
            knob_radius_frac: 0.1,
            max_knob_radius_frac: 0.425,
            min_pad_size: 300.0,
        }
    }
}

impl PadLayout {
    /// Side length actually used for a surface of `available` pixels.
    #[inline]
    pub fn pad_size(&self, available: f32) -> f32 {
        if available.is_finite() {
            available.max(self.min_pad_size)
        } else {
            self.min_pad_size
        }
    }

    pub fn geometry(&self, available: f32) -> Result<PadGeometry, ConfigError> {
        let size = self.pad_size(available);
        PadGeometry::new(
            size * self.pad_radius_frac,
            size * self.knob_radius_frac,
            size * self.max_knob_radius_frac,
        )
    }
}

/// Radii of one pad instance, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadGeometry {
    pad_radius: f32,
    knob_radius: f32,
    max_knob_radius: f32,
}

impl PadGeometry {
    pub fn new(pad_radius: f32, knob_radius: f32, max_knob_radius: f32) -> Result<Self, ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(pad_radius) && positive(knob_radius) && positive(max_knob_radius)) {
            return Err(ConfigError::Geometry(format!(
                "radii must be positive (pad {pad_radius}, knob {knob_radius}, travel {max_knob_radius})"
            )));
        }
        // Small tolerance: the default fractions are equal up to float error.
        if max_knob_radius > pad_radius * (1.0 + f32::EPSILON * 4.0) {
            return Err(ConfigError::Geometry(format!(
                "knob travel {max_knob_radius} exceeds pad radius {pad_radius}"
            )));
        }
        Ok(Self {
            pad_radius,
            knob_radius,
            max_knob_radius,
        })
    }

    #[inline]
    pub fn pad_radius(&self) -> f32 {
        self.pad_radius
    }

    #[inline]
    pub fn knob_radius(&self) -> f32 {
        self.knob_radius
    }

    #[inline]
    pub fn max_knob_radius(&self) -> f32 {
        self.max_knob_radius
    }
}

/// Everything the pad reads from its host page at start-up.
#[derive(Clone, Debug, PartialEq)]
pub struct PadConfig {
    pub limits: ControlLimits,
    pub command_url: String,
    pub layout: PadLayout,
}

impl PadConfig {
    /// Build the configuration from a field lookup (page input id -> value).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |field: &str| {
            lookup(field)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingInput(field.to_string()))
        };

        let raw_angle = required(UI_ANGLE_FIELD)?;
        let ui_angle_max = raw_angle
            .parse::<f32>()
            .map_err(|_| ConfigError::Unparsable {
                field: UI_ANGLE_FIELD.to_string(),
                value: raw_angle.clone(),
            })?;

        Ok(Self {
            limits: ControlLimits::new(ui_angle_max)?,
            command_url: required(COMMAND_URL_FIELD)?,
            layout: PadLayout::default(),
        })
    }
}
