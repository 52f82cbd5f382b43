// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # pagekit
//!
//! A headless pagination controller: the state machine, page windowing,
//! and presentation snapshots behind a pagination strip, with rendering
//! left entirely to the embedding.
//!
//! ## Features
//!
//! - **Controlled or uncontrolled**: each of current page and page size is
//!   either committed locally or mirrored from an external owner, with
//!   change events returned for the owner to act on
//! - **Windowed markers**: short and windowed regimes, elision markers
//!   with renderer hints, stable anchoring at both ends
//! - **Quick jump**: a text-box buffer with echo-on-garbage semantics and
//!   submit/step triggers
//! - **Snapshots**: serializable, read-only presentation models derived on
//!   demand
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{PaginationConfig, PaginationController, Result};
//!
//! fn main() -> Result<()> {
//!     let config = PaginationConfig::new(95);
//!     let mut pager = PaginationController::new(config)?;
//!
//!     // Walk the pages
//!     let transition = pager.next();
//!     assert_eq!(transition.page, 2);
//!
//!     // Hand the renderer a snapshot
//!     let snapshot = pager.snapshot();
//!     for marker in &snapshot.markers {
//!         // lay out page buttons and elisions
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      PaginationController                       │
//! │  go_to / next / prev / jumps    set_page_size    quick jump     │
//! │  apply_config(owner echo)    → Transition { page, event }       │
//! └───────────────┬─────────────────────────────────┬───────────────┘
//!                 │                                 │
//! ┌───────────────┴───────────────┐ ┌───────────────┴───────────────┐
//! │            Window             │ │           Snapshot            │
//! │  short / windowed regimes     │ │  markers + prev/next flags    │
//! │  elision markers and hints    │ │  item range + echo texts      │
//! └───────────────────────────────┘ └───────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Caller-supplied configuration
pub mod config;

/// The pagination state machine
pub mod controller;

/// Page-window computation
pub mod window;

/// Presentation snapshots for renderers
pub mod snapshot;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::PaginationConfig;
pub use controller::{
    ChangeEvent, Ownership, PaginationController, PaginationState, QuickJumpAction,
    QuickJumpBuffer, Transition,
};
pub use snapshot::{ItemRange, PaginationSnapshot};
pub use window::{page_window, JumpHint, PageMarker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
