pub mod command;
pub mod config;
pub mod error;
pub mod pad;
pub mod polar;
pub mod redraw;
pub mod telemetry;
pub mod throttle;
pub mod tracker;
pub mod trim;

pub use command::*;
pub use config::*;
pub use error::*;
pub use pad::*;
pub use polar::{clamp_heading, heading_deg, map, try_map, KnobPose};
pub use redraw::*;
pub use telemetry::*;
pub use throttle::*;
pub use tracker::*;
pub use trim::*;
