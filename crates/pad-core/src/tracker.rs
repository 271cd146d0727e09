//! Knob ownership and position.
//!
//! Exactly one input source (the mouse, or one touch identifier) owns the
//! knob between an accepted `start` and its `end`. Everything else is a
//! designed no-op reported as [`Transition::Ignored`].

use crate::command::ControlCommand;
use crate::config::{ControlLimits, PadGeometry};
use crate::polar::{self, KnobPose};
use crate::redraw::RedrawFlag;
use glam::Vec2;

pub type TouchId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch(TouchId),
}

/// One changed touch, already transformed into pad-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub pos: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    /// Gesture started outside the knob's hit box.
    OutsideKnob,
    /// Another source already owns the knob.
    AlreadyTracking,
    /// Move/end while nothing is tracking.
    NotTracking,
    /// Move/end from a source that does not own the knob.
    OtherSource,
    /// None of the changed touches is the owning touch.
    TouchMismatch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Command(ControlCommand),
    Ignored(Ignored),
}

impl Transition {
    #[inline]
    pub fn command(self) -> Option<ControlCommand> {
        match self {
            Transition::Command(c) => Some(c),
            Transition::Ignored(_) => None,
        }
    }
}

/// Knob pose plus its owner. Not tracking means no owner, hence no touch id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobState {
    pub pose: KnobPose,
    owner: Option<InputSource>,
}

impl Default for KnobState {
    fn default() -> Self {
        Self {
            pose: KnobPose::CENTER,
            owner: None,
        }
    }
}

impl KnobState {
    #[inline]
    pub fn tracking(&self) -> bool {
        self.owner.is_some()
    }

    #[inline]
    pub fn owner(&self) -> Option<InputSource> {
        self.owner
    }

    pub fn active_touch(&self) -> Option<TouchId> {
        match self.owner {
            Some(InputSource::Touch(id)) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pose.knob
    }
}

pub struct PointerTracker {
    geometry: PadGeometry,
    limits: ControlLimits,
    state: KnobState,
    redraw: RedrawFlag,
}

impl PointerTracker {
    pub fn new(geometry: PadGeometry, limits: ControlLimits) -> Self {
        let mut redraw = RedrawFlag::default();
        redraw.mark();
        Self {
            geometry,
            limits,
            state: KnobState::default(),
            redraw,
        }
    }

    #[inline]
    pub fn state(&self) -> &KnobState {
        &self.state
    }

    #[inline]
    pub fn geometry(&self) -> &PadGeometry {
        &self.geometry
    }

    #[inline]
    pub fn limits(&self) -> &ControlLimits {
        &self.limits
    }

    #[inline]
    pub fn redraw_mut(&mut self) -> &mut RedrawFlag {
        &mut self.redraw
    }

    /// Axis-aligned box test against the knob, edges excluded.
    pub fn contains(&self, p: Vec2) -> bool {
        let r = self.geometry.knob_radius();
        let k = self.state.pose.knob;
        p.x > k.x - r && p.x < k.x + r && p.y > k.y - r && p.y < k.y + r
    }

    pub fn start(&mut self, source: InputSource, p: Vec2) -> Transition {
        if self.state.tracking() {
            return ignore(Ignored::AlreadyTracking, source);
        }
        if !self.contains(p) {
            return ignore(Ignored::OutsideKnob, source);
        }
        self.state.owner = Some(source);
        self.place(p)
    }

    pub fn move_to(&mut self, source: InputSource, p: Vec2) -> Transition {
        if let Err(reason) = self.check_owner(source) {
            return ignore(reason, source);
        }
        self.place(p)
    }

    pub fn end(&mut self, source: InputSource) -> Transition {
        if let Err(reason) = self.check_owner(source) {
            return ignore(reason, source);
        }
        self.recenter()
    }

    /// End tracking whoever owns the knob (transport failure, resize).
    pub fn release(&mut self) -> Transition {
        match self.state.owner {
            Some(_) => self.recenter(),
            None => Transition::Ignored(Ignored::NotTracking),
        }
    }

    /// First changed touch that lands on the knob takes ownership.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> Transition {
        if let Some(owner) = self.state.owner {
            return ignore(Ignored::AlreadyTracking, owner);
        }
        match touches.iter().find(|t| self.contains(t.pos)) {
            Some(t) => self.start(InputSource::Touch(t.id), t.pos),
            None => {
                log::debug!("[pad] touch start outside knob ({} touches)", touches.len());
                Transition::Ignored(Ignored::OutsideKnob)
            }
        }
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Transition {
        match self.owned_touch(touches) {
            Ok(t) => self.move_to(InputSource::Touch(t.id), t.pos),
            Err(reason) => Transition::Ignored(reason),
        }
    }

    pub fn touch_end(&mut self, touches: &[TouchPoint]) -> Transition {
        match self.owned_touch(touches) {
            Ok(t) => self.end(InputSource::Touch(t.id)),
            Err(reason) => Transition::Ignored(reason),
        }
    }

    fn owned_touch(&self, touches: &[TouchPoint]) -> Result<TouchPoint, Ignored> {
        let Some(active) = self.state.active_touch() else {
            let reason = if self.state.tracking() {
                Ignored::OtherSource
            } else {
                Ignored::NotTracking
            };
            log::debug!("[pad] touch ignored: {:?}", reason);
            return Err(reason);
        };
        touches.iter().copied().find(|t| t.id == active).ok_or_else(|| {
            log::debug!("[pad] touch ignored: active touch {} not among changed", active);
            Ignored::TouchMismatch
        })
    }

    fn check_owner(&self, source: InputSource) -> Result<(), Ignored> {
        match self.state.owner {
            None => Err(Ignored::NotTracking),
            Some(owner) if owner != source => Err(Ignored::OtherSource),
            Some(_) => Ok(()),
        }
    }

    fn place(&mut self, p: Vec2) -> Transition {
        self.state.pose = polar::map(p.x, p.y, self.geometry.max_knob_radius(), &self.limits);
        self.redraw.mark();
        Transition::Command(self.state.pose.command())
    }

    fn recenter(&mut self) -> Transition {
        self.state.pose = KnobPose::CENTER;
        self.state.owner = None;
        self.redraw.mark();
        Transition::Command(ControlCommand::STOP)
    }
}

fn ignore(reason: Ignored, source: InputSource) -> Transition {
    log::debug!("[pad] {:?} ignored: {:?}", source, reason);
    Transition::Ignored(reason)
}
