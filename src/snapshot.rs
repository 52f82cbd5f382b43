//! Presentation snapshots
//!
//! `derive` turns a configuration plus committed state into the read-only
//! model a renderer consumes. It is pure and idempotent: deriving twice
//! from the same inputs yields the same snapshot, and nothing here touches
//! controller state.

use crate::config::PaginationConfig;
use crate::controller::PaginationState;
use crate::window::{page_window, PageMarker};
use serde::{Deserialize, Serialize};

/// 1-based inclusive range of the items visible on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRange {
    /// First visible item
    pub start: u64,
    /// Last visible item
    pub end: u64,
}

/// Read-only presentation model for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSnapshot {
    /// Committed current page
    pub current_page: u32,
    /// Total page count
    pub total_pages: u32,
    /// Committed page size
    pub page_size: u32,
    /// Total item count
    pub total_items: u64,
    /// Ordered marker row; empty in simple mode
    pub markers: Vec<PageMarker>,
    /// Whether a previous page exists
    pub has_prev: bool,
    /// Whether a next page exists
    pub has_next: bool,
    /// Whether the reduced prev/next-only presentation is selected
    pub simple: bool,
    /// "current/total" readout; derived on every snapshot, not just for
    /// the simple presentation
    pub simple_echo: String,
    /// Text the quick-jump box should display
    pub quick_jump_text: String,
    /// Items visible on the current page; `None` when there are none
    pub item_range: Option<ItemRange>,
    /// Page sizes offered by the size selector
    pub page_size_options: Vec<u32>,
}

/// Derive the presentation model from a configuration and committed state
pub fn derive(config: &PaginationConfig, state: &PaginationState) -> PaginationSnapshot {
    let total_pages = config.total_pages_with(state.page_size());
    let markers = if config.simple_mode {
        Vec::new()
    } else {
        page_window(state.current(), total_pages, config.buffer_size())
    };

    PaginationSnapshot {
        current_page: state.current(),
        total_pages,
        page_size: state.page_size(),
        total_items: config.total_items,
        markers,
        has_prev: state.current() > 1,
        has_next: state.current() < total_pages,
        simple: config.simple_mode,
        simple_echo: format!("{}/{}", state.current(), total_pages),
        quick_jump_text: state.quick_jump().text(),
        item_range: item_range(config.total_items, state.page_size(), state.current()),
        page_size_options: config.page_size_options.clone(),
    }
}

/// Items shown on page `current` under `page_size`, 1-based inclusive
///
/// `None` when there are no items at all or the page sits past them (a
/// mirrored current can, while an external owner is mid-update).
fn item_range(total_items: u64, page_size: u32, current: u32) -> Option<ItemRange> {
    if total_items == 0 || current == 0 {
        return None;
    }
    let size = u64::from(page_size.max(1));
    let start = u64::from(current - 1) * size + 1;
    if start > total_items {
        return None;
    }
    let end = (u64::from(current) * size).min(total_items);
    Some(ItemRange { start, end })
}
