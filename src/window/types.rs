//! Page-window marker types
//!
//! Markers are the unit of output for the windowing algorithm: an ordered
//! row a renderer can lay out verbatim, mixing numbered page buttons with
//! elision markers that navigate by a stride.

use serde::{Deserialize, Serialize};

/// Renderer hint for a page button adjacent to an elision marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpHint {
    /// Not adjacent to an elision marker
    #[default]
    None,
    /// First page button after a backward elision
    FollowsJumpBackward,
    /// Last page button before a forward elision
    PrecedesJumpForward,
}

/// One marker in the rendered pagination row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageMarker {
    /// A numbered page button
    Page {
        /// 1-based page number
        number: u32,
        /// Whether this button shows the current page
        active: bool,
        /// Styling hint for elision adjacency
        #[serde(default)]
        hint: JumpHint,
    },
    /// Elision that moves backward by the jump stride
    JumpBackward,
    /// Elision that moves forward by the jump stride
    JumpForward,
}

impl PageMarker {
    /// Create a plain page button marker
    pub fn page(number: u32, active: bool) -> Self {
        Self::Page {
            number,
            active,
            hint: JumpHint::None,
        }
    }

    /// Check if this is a page button
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page { .. })
    }

    /// Check if this is an elision marker
    pub fn is_jump(&self) -> bool {
        matches!(self, Self::JumpBackward | Self::JumpForward)
    }

    /// Page number of a page button, if this is one
    pub fn number(&self) -> Option<u32> {
        match self {
            Self::Page { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// Whether this is the active page button
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Page { active: true, .. })
    }
}
