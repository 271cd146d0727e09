//! One pad instance: tracker + throttle, expressed as host effects.
//!
//! The pad never touches timers or the network itself. Each input returns the
//! [`Effect`]s the host must execute, after it has released its borrow of the
//! pad, so callbacks can re-enter freely.

use crate::command::{CommandStatus, ControlCommand};
use crate::config::{ControlLimits, PadConfig, PadGeometry, PadLayout};
use crate::error::{ConfigError, TransportError};
use crate::redraw::RedrawFlag;
use crate::throttle::{CommandThrottle, Submit, WindowId};
use crate::tracker::{InputSource, KnobState, PointerTracker, TouchPoint, Transition};
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Send(ControlCommand),
    StartTimer { window: WindowId, delay: Duration },
    CancelTimer(WindowId),
}

pub type Effects = SmallVec<[Effect; 2]>;

pub struct Pad {
    tracker: PointerTracker,
    throttle: CommandThrottle,
    limits: ControlLimits,
    layout: PadLayout,
    size: f32,
    status: CommandStatus,
    /// A stop sent by a failure release is in flight; its reply must not
    /// replace the error shown to the operator.
    recovering: bool,
}

impl Pad {
    /// Build a pad for a square surface of `available` CSS pixels.
    pub fn new(config: &PadConfig, available: f32) -> Result<Self, ConfigError> {
        let geometry = config.layout.geometry(available)?;
        Ok(Self {
            tracker: PointerTracker::new(geometry, config.limits),
            throttle: CommandThrottle::default(),
            limits: config.limits,
            layout: config.layout,
            size: config.layout.pad_size(available),
            status: CommandStatus::Idle,
            recovering: false,
        })
    }

    #[inline]
    pub fn knob(&self) -> &KnobState {
        self.tracker.state()
    }

    #[inline]
    pub fn geometry(&self) -> &PadGeometry {
        self.tracker.geometry()
    }

    /// Side length of the square drawing surface.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn status(&self) -> &CommandStatus {
        &self.status
    }

    #[inline]
    pub fn pending_window(&self) -> Option<WindowId> {
        self.throttle.pending()
    }

    #[inline]
    pub fn redraw_mut(&mut self) -> &mut RedrawFlag {
        self.tracker.redraw_mut()
    }

    pub fn mouse_down(&mut self, p: Vec2) -> Effects {
        let t = self.tracker.start(InputSource::Mouse, p);
        self.dispatch(t)
    }

    pub fn mouse_move(&mut self, p: Vec2) -> Effects {
        let t = self.tracker.move_to(InputSource::Mouse, p);
        self.dispatch(t)
    }

    pub fn mouse_up(&mut self) -> Effects {
        let t = self.tracker.end(InputSource::Mouse);
        self.dispatch(t)
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> Effects {
        let t = self.tracker.touch_start(touches);
        self.dispatch(t)
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Effects {
        let t = self.tracker.touch_move(touches);
        self.dispatch(t)
    }

    pub fn touch_end(&mut self, touches: &[TouchPoint]) -> Effects {
        let t = self.tracker.touch_end(touches);
        self.dispatch(t)
    }

    /// The throttle timer for `window` fired.
    pub fn timer_expired(&mut self, window: WindowId) -> Effects {
        self.throttle
            .flush(window)
            .map(Effect::Send)
            .into_iter()
            .collect()
    }

    pub fn transport_succeeded(&mut self, command: ControlCommand) {
        if self.recovering && command.is_stop() {
            self.recovering = false;
            return;
        }
        self.status = if command.is_stop() {
            CommandStatus::SentStop
        } else {
            CommandStatus::SentMove
        };
    }

    /// A failed command counts as the operator letting go of the knob, so the
    /// rover is never left driving on a stale command.
    pub fn transport_failed(&mut self, err: &TransportError) -> Effects {
        log::warn!("[pad] command failed: {}", err);
        self.fail(err)
    }

    /// The wheel status poll lost the rover. Same recovery as a failed
    /// command: any drag in progress is released.
    pub fn telemetry_failed(&mut self, err: &TransportError) -> Effects {
        log::warn!("[pad] telemetry failed: {}", err);
        self.fail(err)
    }

    fn fail(&mut self, err: &TransportError) -> Effects {
        self.status = CommandStatus::Failed(err.to_string());
        let t = self.tracker.release();
        let effects = self.dispatch(t);
        self.recovering = effects.iter().any(|e| matches!(e, Effect::Send(_)));
        effects
    }

    /// Recreate the knob for a new surface size. A knob in use is released
    /// first so the rover stops.
    pub fn resize(&mut self, available: f32) -> Result<Effects, ConfigError> {
        let geometry = self.layout.geometry(available)?;
        let t = self.tracker.release();
        let effects = self.dispatch(t);
        self.tracker = PointerTracker::new(geometry, self.limits);
        self.size = self.layout.pad_size(available);
        log::info!("[pad] resized to {:.0}px", self.size);
        Ok(effects)
    }

    fn dispatch(&mut self, transition: Transition) -> Effects {
        let mut effects = Effects::new();
        let Some(command) = transition.command() else {
            return effects;
        };
        match self.throttle.submit(command) {
            Submit::Immediate { command, cancelled } => {
                if let Some(window) = cancelled {
                    effects.push(Effect::CancelTimer(window));
                }
                effects.push(Effect::Send(command));
            }
            Submit::Scheduled { window, delay } => {
                effects.push(Effect::StartTimer { window, delay });
            }
            Submit::Coalesced => {}
        }
        effects
    }
}
