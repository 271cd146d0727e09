//! Outbound command rate limiting.
//!
//! Input events arrive far faster than the drive train can react, so moving
//! commands are sampled once per window. The stop command is never delayed.

use crate::command::ControlCommand;
use std::time::Duration;

pub const THROTTLE_WINDOW: Duration = Duration::from_millis(200);

/// Identifies one scheduled flush. A flush for any other window is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submit {
    /// Send `command` now. `cancelled` is the window whose timer should be
    /// cleared, if one was pending.
    Immediate {
        command: ControlCommand,
        cancelled: Option<WindowId>,
    },
    /// Start a timer; call [`CommandThrottle::flush`] with `window` when it fires.
    Scheduled { window: WindowId, delay: Duration },
    /// Superseded by whatever is current when the pending window fires.
    Coalesced,
}

pub struct CommandThrottle {
    window: Duration,
    pending: Option<WindowId>,
    latest: ControlCommand,
    next_id: u64,
}

impl Default for CommandThrottle {
    fn default() -> Self {
        Self::new(THROTTLE_WINDOW)
    }
}

impl CommandThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            latest: ControlCommand::STOP,
            next_id: 0,
        }
    }

    #[inline]
    pub fn pending(&self) -> Option<WindowId> {
        self.pending
    }

    pub fn submit(&mut self, command: ControlCommand) -> Submit {
        self.latest = command;
        if command.is_stop() {
            return Submit::Immediate {
                command,
                cancelled: self.pending.take(),
            };
        }
        if self.pending.is_some() {
            log::debug!("[throttle] coalesced {:?}", command);
            return Submit::Coalesced;
        }
        let window = WindowId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(window);
        Submit::Scheduled {
            window,
            delay: self.window,
        }
    }

    /// Timer expiry: the most recent submission, if `window` is still pending.
    pub fn flush(&mut self, window: WindowId) -> Option<ControlCommand> {
        if self.pending == Some(window) {
            self.pending = None;
            Some(self.latest)
        } else {
            log::debug!("[throttle] stale window {:?}", window);
            None
        }
    }
}
