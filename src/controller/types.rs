//! Controller state and transition types

use serde::{Deserialize, Serialize};

// ============================================================================
// Ownership
// ============================================================================

/// Who commits a piece of pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    /// The controller commits changes locally
    Owned,
    /// An external owner commits; the controller only mirrors what the
    /// configuration echoes back
    Mirrored,
}

impl Ownership {
    /// Ownership implied by the presence of a `controlled_*` config field
    pub fn from_controlled(controlled: Option<u32>) -> Self {
        if controlled.is_some() {
            Self::Mirrored
        } else {
            Self::Owned
        }
    }

    /// Check if the controller commits this field locally
    pub fn is_owned(self) -> bool {
        matches!(self, Self::Owned)
    }
}

// ============================================================================
// Quick-Jump Buffer
// ============================================================================

/// Contents of the quick-jump text box
///
/// The buffer may transiently hold values no committed page ever takes
/// (zero, negative, past the end); they are screened when a trigger fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuickJumpBuffer {
    /// The box is empty
    #[default]
    Empty,
    /// The box holds an integer
    Numeric(i64),
    /// The last input failed to parse; the box re-echoes the previous
    /// number so a later submit cannot act on garbage
    InvalidEcho(i64),
}

impl QuickJumpBuffer {
    /// Fold one round of raw text-box input into the buffer
    pub fn absorb(self, raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<i64>() {
            Ok(value) => Self::Numeric(value),
            Err(_) => match self {
                Self::Empty => Self::Empty,
                Self::Numeric(previous) | Self::InvalidEcho(previous) => {
                    Self::InvalidEcho(previous)
                }
            },
        }
    }

    /// Buffered value, if any
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Empty => None,
            Self::Numeric(value) | Self::InvalidEcho(value) => Some(value),
        }
    }

    /// Text the text box should display
    pub fn text(self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Numeric(value) | Self::InvalidEcho(value) => value.to_string(),
        }
    }

    /// Check if the most recent input failed to parse
    pub fn is_echo(self) -> bool {
        matches!(self, Self::InvalidEcho(_))
    }
}

// ============================================================================
// Quick-Jump Actions
// ============================================================================

/// Discrete triggers that act on the quick-jump buffer
///
/// `StepBack` and `StepForward` correspond to the Up and Down arrow keys
/// of the text box: Up moves one page back, Down one page forward.
/// Suppressing the keys' default caret movement is the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickJumpAction {
    /// Enter key or the "Go" button: jump to the buffered page
    Submit,
    /// Up arrow: jump to the buffered page minus one
    StepBack,
    /// Down arrow: jump to the buffered page plus one
    StepForward,
}

// ============================================================================
// Committed State
// ============================================================================

/// Committed pagination state
///
/// Fields are crate-private: renderers and embeddings read them through
/// accessors or a snapshot, and change them only through controller
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub(crate) current: u32,
    pub(crate) page_size: u32,
    pub(crate) quick_jump: QuickJumpBuffer,
}

impl PaginationState {
    /// Committed current page
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Committed page size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Quick-jump buffer contents
    pub fn quick_jump(&self) -> QuickJumpBuffer {
        self.quick_jump
    }
}

// ============================================================================
// Change Events
// ============================================================================

/// Change notification produced by a transition
///
/// In controlled mode this is the only road a change travels: the
/// controller computes it without committing, and local state catches up
/// when the owner echoes the value back through `apply_config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// The current page changed (or should change, for an external owner)
    PageChanged {
        /// Resulting page
        page: u32,
        /// Page size in effect
        page_size: u32,
    },
    /// The page size changed, along with the page it implies
    PageSizeChanged {
        /// Resulting page after any pull-back
        page: u32,
        /// New page size
        page_size: u32,
    },
}

impl ChangeEvent {
    /// Create a page-change event
    pub fn page_changed(page: u32, page_size: u32) -> Self {
        Self::PageChanged { page, page_size }
    }

    /// Create a page-size-change event
    pub fn page_size_changed(page: u32, page_size: u32) -> Self {
        Self::PageSizeChanged { page, page_size }
    }

    /// Resulting page carried by the event
    pub fn page(&self) -> u32 {
        match self {
            Self::PageChanged { page, .. } | Self::PageSizeChanged { page, .. } => *page,
        }
    }

    /// Page size carried by the event
    pub fn page_size(&self) -> u32 {
        match self {
            Self::PageChanged { page_size, .. } | Self::PageSizeChanged { page_size, .. } => {
                *page_size
            }
        }
    }

    /// Check if this is a page change
    pub fn is_page_change(&self) -> bool {
        matches!(self, Self::PageChanged { .. })
    }

    /// Check if this is a page-size change
    pub fn is_page_size_change(&self) -> bool {
        matches!(self, Self::PageSizeChanged { .. })
    }
}

// ============================================================================
// Transition Outcome
// ============================================================================

/// Result of attempting a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "in controlled mode the event must reach the owner or the control stays frozen"]
pub struct Transition {
    /// The page the caller should treat as current, even before an
    /// external owner confirms it
    pub page: u32,
    /// Notification to forward; `None` when the input was rejected
    pub event: Option<ChangeEvent>,
}

impl Transition {
    /// A rejected transition: nothing changed, nothing to forward
    pub(crate) fn rejected(current: u32) -> Self {
        Self {
            page: current,
            event: None,
        }
    }

    /// A successful transition described by its event
    pub(crate) fn changed(event: ChangeEvent) -> Self {
        Self {
            page: event.page(),
            event: Some(event),
        }
    }

    /// Check if the transition produced a change
    pub fn is_change(&self) -> bool {
        self.event.is_some()
    }
}
