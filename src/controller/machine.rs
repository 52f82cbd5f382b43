//! The pagination state machine
//!
//! One code path serves controlled and uncontrolled fields: every
//! transition computes its candidate the same way, and only the commit
//! step consults the field's `Ownership`. Notifications travel back to the
//! caller as return values, after local state has already been committed,
//! so a handler can never observe a half-applied transition.

use super::types::{
    ChangeEvent, Ownership, PaginationState, QuickJumpAction, QuickJumpBuffer, Transition,
};
use crate::config::PaginationConfig;
use crate::error::Result;
use crate::snapshot::{derive, PaginationSnapshot};

/// Headless pagination controller
///
/// Owns the committed state and the active configuration, and mediates
/// every user-driven transition.
#[derive(Debug, Clone)]
pub struct PaginationController {
    /// Active configuration
    config: PaginationConfig,
    /// Committed state
    state: PaginationState,
    /// Who commits the current page
    current_ownership: Ownership,
    /// Who commits the page size
    page_size_ownership: Ownership,
}

impl PaginationController {
    /// Create a controller from a validated configuration
    pub fn new(config: PaginationConfig) -> Result<Self> {
        config.validate()?;

        let current = config
            .controlled_current
            .unwrap_or(config.default_current);
        let page_size = config
            .controlled_page_size
            .unwrap_or(config.default_page_size);

        let state = PaginationState {
            current,
            page_size,
            quick_jump: QuickJumpBuffer::Numeric(i64::from(current)),
        };

        Ok(Self {
            current_ownership: Ownership::from_controlled(config.controlled_current),
            page_size_ownership: Ownership::from_controlled(config.controlled_page_size),
            config,
            state,
        })
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// Active configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Committed state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Committed current page
    pub fn current_page(&self) -> u32 {
        self.state.current
    }

    /// Committed page size
    pub fn page_size(&self) -> u32 {
        self.state.page_size
    }

    /// Total page count under the committed page size
    pub fn total_pages(&self) -> u32 {
        self.config.total_pages_with(self.state.page_size)
    }

    /// Who commits the current page
    pub fn current_ownership(&self) -> Ownership {
        self.current_ownership
    }

    /// Who commits the page size
    pub fn page_size_ownership(&self) -> Ownership {
        self.page_size_ownership
    }

    /// Check whether a page before the current one exists
    pub fn has_prev(&self) -> bool {
        self.state.current > 1
    }

    /// Check whether a page after the current one exists
    pub fn has_next(&self) -> bool {
        self.state.current < self.total_pages()
    }

    /// Validity of a transition target: on the page scale, and not the
    /// page already shown
    pub fn is_valid_target(&self, candidate: i64) -> bool {
        candidate >= 1 && candidate != i64::from(self.state.current)
    }

    /// Current presentation snapshot
    pub fn snapshot(&self) -> PaginationSnapshot {
        derive(&self.config, &self.state)
    }

    // ============================================================================
    // Page Transitions
    // ============================================================================

    /// Attempt a transition to `candidate`
    ///
    /// Rejected candidates (off the page scale, or the page already shown)
    /// leave the state untouched and carry no event. Valid candidates are
    /// clamped to the last page; the event fires even when the clamp lands
    /// back on the current page, since the raw candidate asked for a real
    /// change.
    pub fn go_to(&mut self, candidate: i64) -> Transition {
        if !self.is_valid_target(candidate) {
            return Transition::rejected(self.state.current);
        }

        let page = candidate.min(i64::from(self.total_pages())) as u32;

        if self.current_ownership.is_owned() {
            self.state.current = page;
            self.state.quick_jump = QuickJumpBuffer::Numeric(i64::from(page));
            tracing::debug!("Committed page {} (size {})", page, self.state.page_size);
        }

        Transition::changed(ChangeEvent::page_changed(page, self.state.page_size))
    }

    /// Move to the next page, if one exists
    pub fn next(&mut self) -> Transition {
        if self.has_next() {
            self.go_to(i64::from(self.state.current) + 1)
        } else {
            Transition::rejected(self.state.current)
        }
    }

    /// Move to the previous page, if one exists
    pub fn prev(&mut self) -> Transition {
        if self.has_prev() {
            self.go_to(i64::from(self.state.current) - 1)
        } else {
            Transition::rejected(self.state.current)
        }
    }

    /// Jump backward by the elision stride
    pub fn jump_backward(&mut self) -> Transition {
        let stride = i64::from(self.config.jump_stride());
        self.go_to((i64::from(self.state.current) - stride).max(1))
    }

    /// Jump forward by the elision stride
    pub fn jump_forward(&mut self) -> Transition {
        let stride = i64::from(self.config.jump_stride());
        let ceiling = i64::from(self.total_pages());
        self.go_to((i64::from(self.state.current) + stride).min(ceiling))
    }

    // ============================================================================
    // Page Size
    // ============================================================================

    /// Change the page size
    ///
    /// A size of 0 is not a size and is ignored outright. Otherwise the
    /// current page is pulled back when the shrunken page count leaves it
    /// past the end, each field commits per its ownership, and the event
    /// always fires: an external owner needs the computed page to decide
    /// what to commit.
    pub fn set_page_size(&mut self, new_size: u32) -> Transition {
        if new_size == 0 {
            return Transition::rejected(self.state.current);
        }

        let new_total = self.config.total_pages_with(new_size);
        let new_current = self.state.current.min(new_total);

        if self.page_size_ownership.is_owned() {
            self.state.page_size = new_size;
        }
        if self.current_ownership.is_owned() {
            self.state.current = new_current;
            self.state.quick_jump = QuickJumpBuffer::Numeric(i64::from(new_current));
        }
        tracing::debug!("Page size change to {} implies page {}", new_size, new_current);

        Transition::changed(ChangeEvent::page_size_changed(new_current, new_size))
    }

    // ============================================================================
    // Quick Jump
    // ============================================================================

    /// Replace the quick-jump buffer from raw text-box input
    ///
    /// Never navigates. Empty input clears the buffer; non-numeric input
    /// re-echoes the previous number (see `QuickJumpBuffer`).
    pub fn set_quick_jump_input(&mut self, raw: &str) {
        self.state.quick_jump = self.state.quick_jump.absorb(raw);
    }

    /// Fire a discrete trigger against the buffered quick-jump value
    ///
    /// An empty buffer rejects; everything else goes through `go_to`, so
    /// out-of-range values clamp and the not-a-change rule applies.
    pub fn apply_quick_jump(&mut self, action: QuickJumpAction) -> Transition {
        let Some(value) = self.state.quick_jump.value() else {
            return Transition::rejected(self.state.current);
        };

        let target = match action {
            QuickJumpAction::Submit => value,
            QuickJumpAction::StepBack => value.saturating_sub(1),
            QuickJumpAction::StepForward => value.saturating_add(1),
        };
        self.go_to(target)
    }

    // ============================================================================
    // External Configuration
    // ============================================================================

    /// Apply a new caller configuration
    ///
    /// Mirrored fields catch up here. A controlled current is adopted
    /// verbatim, without clamping: the owner is authoritative even when
    /// the value is out of range. A controlled page size re-clamps the
    /// pre-update current against the item total the owner saw when it
    /// chose the size. An owned current is pulled back when the new
    /// configuration shrinks the page count past it. No event fires:
    /// configuration is the owner speaking, not the user.
    pub fn apply_config(&mut self, config: PaginationConfig) {
        let previous_current = self.state.current;

        if let Some(current) = config.controlled_current {
            self.state.current = current;
            self.state.quick_jump = QuickJumpBuffer::Numeric(i64::from(current));
        }

        if let Some(size) = config.controlled_page_size {
            if size == 0 {
                tracing::warn!("Ignoring controlled page size 0");
            } else {
                let new_total = self.config.total_pages_with(size);
                let clamped = previous_current.min(new_total);
                if config.controlled_current.is_none() {
                    self.state.current = clamped;
                    self.state.quick_jump = QuickJumpBuffer::Numeric(i64::from(clamped));
                }
                self.state.page_size = size;
            }
        }

        self.current_ownership = Ownership::from_controlled(config.controlled_current);
        self.page_size_ownership = Ownership::from_controlled(config.controlled_page_size);
        self.config = config;

        let total = self.total_pages();
        match self.current_ownership {
            // An owned current never outlives the pages the new
            // configuration allows.
            Ownership::Owned if self.state.current > total => {
                self.state.current = total;
                self.state.quick_jump = QuickJumpBuffer::Numeric(i64::from(total));
                tracing::debug!("Current page pulled back to {} by new configuration", total);
            }
            Ownership::Mirrored if self.state.current > total => {
                tracing::warn!(
                    "Mirrored current page {} is out of range (total pages {})",
                    self.state.current,
                    total
                );
            }
            _ => {}
        }
    }
}
