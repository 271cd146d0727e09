// Page contract and drawing constants for the web front-end.
// Element ids must match the host page templates.

// Drive pad
pub const PAD_CANVAS_ID: &str = "controlPad";
pub const COMMAND_STATUS_ID: &str = "command_status";

// Wheel telemetry canvases are named `canvas_<wheel>`
pub const WHEEL_CANVAS_PREFIX: &str = "canvas_";
pub const TELEMETRY_STATUS_ID: &str = "telemetry_status";

// Steering trim controls
pub const TRIM_ANGLE_OUT_ID: &str = "angleOut";
pub const TRIM_CANCEL_ID: &str = "trimCancel";
pub const TRIM_ZERO_ID: &str = "trimZero";
pub const TRIM_WHEEL_SELECTOR: &str = "input[type=radio]";
pub const TRIM_ADJUST_SELECTOR: &str = ".adjust";

// Colors
pub const PAD_FILL: &str = "#0000FF";
pub const KNOB_IDLE_FILL: &str = "#FF0000";
pub const KNOB_TRACKING_FILL: &str = "#00FF00";
pub const WHEEL_VELOCITY_FILL: &str = "#008000";

// Form encoding used by every POST to the rover controller
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
