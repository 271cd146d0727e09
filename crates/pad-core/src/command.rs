use std::fmt;

/// Drive command sent to the rover controller.
///
/// `pct_angle` is the steering angle as a percentage of the UI angle limit
/// (negative is left), `magnitude` the signed speed (negative is reverse).
/// Both lie in \[-100, 100\].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlCommand {
    pub pct_angle: i32,
    pub magnitude: i32,
}

impl ControlCommand {
    pub const STOP: ControlCommand = ControlCommand {
        pct_angle: 0,
        magnitude: 0,
    };

    #[inline]
    pub fn is_stop(&self) -> bool {
        self.magnitude == 0
    }

    /// `application/x-www-form-urlencoded` body; the controller reads form fields.
    pub fn form_body(&self) -> String {
        format!("pct_angle={}&magnitude={}", self.pct_angle, self.magnitude)
    }
}

/// Operator-visible feedback for the last command round trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CommandStatus {
    #[default]
    Idle,
    SentStop,
    SentMove,
    Failed(String),
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Idle => Ok(()),
            CommandStatus::SentStop => f.write_str("Sent Stop"),
            CommandStatus::SentMove => f.write_str("Sent Move"),
            CommandStatus::Failed(reason) => write!(f, "Error {reason}"),
        }
    }
}
