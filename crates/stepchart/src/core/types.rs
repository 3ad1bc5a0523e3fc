//! Flowchart primitives shared across the crate
//!
//! Flow direction and the style classes attached to start/end markers and
//! Succeed/Fail nodes.

use std::fmt;

/// Flow direction for the generated flowchart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Top to bottom (TB or TD)
    #[default]
    TopDown,
    /// Left to right (LR)
    LeftRight,
    /// Right to left (RL)
    RightLeft,
    /// Bottom to top (BT)
    BottomUp,
}

impl Direction {
    /// Parse direction from mermaid syntax (TB, TD, LR, RL, BT)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TB" | "TD" => Some(Direction::TopDown),
            "LR" => Some(Direction::LeftRight),
            "RL" => Some(Direction::RightLeft),
            "BT" => Some(Direction::BottomUp),
            _ => None,
        }
    }

    /// Returns true if this is a vertical layout (TB or BT)
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::TopDown | Direction::BottomUp)
    }

    /// Returns true if this is a horizontal layout (LR or RL)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::LeftRight | Direction::RightLeft)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TopDown => write!(f, "TB"),
            Direction::LeftRight => write!(f, "LR"),
            Direction::RightLeft => write!(f, "RL"),
            Direction::BottomUp => write!(f, "BT"),
        }
    }
}

/// Style classes declared in every emitted flowchart
///
/// `Started`/`Ended` mark the shared entry and exit nodes, `Succeed` and
/// `Fail` color the corresponding terminal state kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Started,
    Ended,
    Succeed,
    Fail,
}

impl StyleClass {
    /// All classes, in declaration order
    pub const ALL: [StyleClass; 4] = [
        StyleClass::Started,
        StyleClass::Ended,
        StyleClass::Succeed,
        StyleClass::Fail,
    ];

    /// The class name used in `:::name` annotations
    pub fn name(&self) -> &'static str {
        match self {
            StyleClass::Started => "started",
            StyleClass::Ended => "ended",
            StyleClass::Succeed => "succeed",
            StyleClass::Fail => "fail",
        }
    }

    /// Fill color for this class
    pub fn fill(&self) -> &'static str {
        match self {
            StyleClass::Started => "#008855",
            StyleClass::Ended => "#000099",
            StyleClass::Succeed => "#006600",
            StyleClass::Fail => "#880000",
        }
    }

    /// The full `classDef` declaration line
    pub fn class_def(&self) -> String {
        format!("classDef {} fill:{}, color:#fff;", self.name(), self.fill())
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
