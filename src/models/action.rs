use serde::Serialize;

/// The two clock actions. Symmetric except for endpoint and user-facing copy.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ClockAction {
    In,
    Out,
}

impl ClockAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::In => "in",
            ClockAction::Out => "out",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ClockAction::In => "/attendance/clock-in",
            ClockAction::Out => "/attendance/clock-out",
        }
    }

    pub fn success_title(&self) -> &'static str {
        match self {
            ClockAction::In => "Clocked In Successfully!",
            ClockAction::Out => "Clocked Out Successfully!",
        }
    }

    pub fn success_detail(&self) -> &'static str {
        match self {
            ClockAction::In => "Have a productive day!",
            ClockAction::Out => "Great work today!",
        }
    }

    /// Copy used for the benign 409 case. Never the generic failure message.
    pub fn conflict_message(&self) -> &'static str {
        match self {
            ClockAction::In => "Already clocked in today",
            ClockAction::Out => "Already clocked out today",
        }
    }

    pub fn failure_title(&self) -> &'static str {
        match self {
            ClockAction::In => "Failed to clock in",
            ClockAction::Out => "Failed to clock out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, ClockAction::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, ClockAction::Out)
    }
}
