//! Steering trim: nudge one wheel until it sits straight, then either keep
//! the new center or go back.

use crate::error::TrimError;

/// Adjustment button, encoded in the page as `plus<N>` / `minus<N>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrimStep {
    Plus(i32),
    Minus(i32),
}

impl TrimStep {
    pub fn parse(action: &str) -> Result<Self, TrimError> {
        let unknown = || TrimError::UnknownAction(action.to_string());
        if let Some(n) = action.strip_prefix("plus") {
            n.parse().map(TrimStep::Plus).map_err(|_| unknown())
        } else if let Some(n) = action.strip_prefix("minus") {
            n.parse().map(TrimStep::Minus).map_err(|_| unknown())
        } else {
            Err(unknown())
        }
    }

    #[inline]
    pub fn delta(&self) -> i32 {
        match *self {
            TrimStep::Plus(n) => n,
            TrimStep::Minus(n) => n.saturating_neg(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrimRequest {
    /// Steer `wheel` to `angle` degrees from its current zero.
    MoveTo { wheel: String, angle: i32 },
    /// Accept `angle` as the wheel's new zero.
    SetZero { wheel: String, angle: i32 },
}

impl TrimRequest {
    pub fn form_body(&self) -> String {
        match self {
            TrimRequest::MoveTo { wheel, angle } => format!("wheel={wheel}&move_to={angle}"),
            TrimRequest::SetZero { wheel, angle } => format!("wheel={wheel}&set_zero={angle}"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TrimSession {
    selected: Option<String>,
    angle: i32,
}

impl TrimSession {
    #[inline]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Angle shown to the operator.
    #[inline]
    pub fn angle(&self) -> i32 {
        self.angle
    }

    pub fn select(&mut self, wheel: &str) {
        self.selected = Some(wheel.to_string());
    }

    pub fn adjust(&mut self, step: TrimStep) -> Result<TrimRequest, TrimError> {
        let wheel = self.selected.clone().ok_or(TrimError::NoWheelSelected)?;
        self.angle = self.angle.saturating_add(step.delta());
        Ok(TrimRequest::MoveTo {
            wheel,
            angle: self.angle,
        })
    }

    /// Return the wheel to its old zero and end the session.
    pub fn cancel(&mut self) -> Result<TrimRequest, TrimError> {
        let wheel = self.selected.take().ok_or(TrimError::NoWheelSelected)?;
        self.angle = 0;
        Ok(TrimRequest::MoveTo { wheel, angle: 0 })
    }

    /// Keep the current position as the new zero and end the session.
    pub fn commit_zero(&mut self) -> Result<TrimRequest, TrimError> {
        let wheel = self.selected.take().ok_or(TrimError::NoWheelSelected)?;
        let angle = std::mem::take(&mut self.angle);
        Ok(TrimRequest::SetZero { wheel, angle })
    }
}
