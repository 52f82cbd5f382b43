//! Pagination controller module
//!
//! The state machine behind a pagination strip.
//!
//! # Overview
//!
//! The controller module provides:
//! - `PaginationController` - Mediates every user-driven transition
//! - `PaginationState` - The committed page, size, and quick-jump buffer
//! - `Transition` / `ChangeEvent` - What a transition did, and what to
//!   forward to an external owner
//! - `Ownership` - Per-field controlled/uncontrolled mode
//!
//! Transitions never fail. Invalid input degrades to a rejection (no state
//! change, no event) or a clamp to the last page; the only errors the
//! module produces come from constructing a controller on an unusable
//! configuration.

mod machine;
mod types;

pub use machine::PaginationController;
pub use types::{
    ChangeEvent, Ownership, PaginationState, QuickJumpAction, QuickJumpBuffer, Transition,
};
