//! Pagination configuration
//!
//! The caller-supplied side of the controller: item totals, initial values,
//! ownership declarations, and presentation toggles. A configuration is
//! replaced wholesale on each external pass (see
//! `PaginationController::apply_config`); the committed page and size live
//! in `PaginationState`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Pagination Config
// ============================================================================

/// Caller-supplied pagination configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Total number of items across all pages
    #[serde(default)]
    pub total_items: u64,

    /// Initial page for an uncontrolled control
    #[serde(default = "default_current")]
    pub default_current: u32,

    /// Initial page size for an uncontrolled control
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Shrink the marker window (buffer 2 -> 1) and the jump stride (5 -> 3)
    #[serde(default)]
    pub show_less_items: bool,

    /// Reduced prev/next-only presentation with a page readout
    #[serde(default)]
    pub simple_mode: bool,

    /// When present, the current page is owned by the caller and mirrored here
    #[serde(default)]
    pub controlled_current: Option<u32>,

    /// When present, the page size is owned by the caller and mirrored here
    #[serde(default)]
    pub controlled_page_size: Option<u32>,

    /// Page sizes offered by the size selector
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,
}

fn default_current() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

fn default_page_size_options() -> Vec<u32> {
    vec![10, 20, 30, 40]
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            default_current: default_current(),
            default_page_size: default_page_size(),
            show_less_items: false,
            simple_mode: false,
            controlled_current: None,
            controlled_page_size: None,
            page_size_options: default_page_size_options(),
        }
    }
}

impl PaginationConfig {
    /// Create a configuration for a total item count, defaults elsewhere
    pub fn new(total_items: u64) -> Self {
        Self {
            total_items,
            ..Self::default()
        }
    }

    /// Set the initial page for an uncontrolled control
    #[must_use]
    pub fn with_current(mut self, page: u32) -> Self {
        self.default_current = page;
        self
    }

    /// Set the initial page size for an uncontrolled control
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    /// Toggle the compact window/stride variant
    #[must_use]
    pub fn with_show_less_items(mut self, enabled: bool) -> Self {
        self.show_less_items = enabled;
        self
    }

    /// Toggle the reduced prev/next-only presentation
    #[must_use]
    pub fn with_simple_mode(mut self, enabled: bool) -> Self {
        self.simple_mode = enabled;
        self
    }

    /// Declare the current page externally owned
    #[must_use]
    pub fn with_controlled_current(mut self, page: u32) -> Self {
        self.controlled_current = Some(page);
        self
    }

    /// Declare the page size externally owned
    #[must_use]
    pub fn with_controlled_page_size(mut self, size: u32) -> Self {
        self.controlled_page_size = Some(size);
        self
    }

    /// Replace the page sizes offered by the size selector
    #[must_use]
    pub fn with_page_size_options(mut self, options: Vec<u32>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Marker window radius around the current page
    pub fn buffer_size(&self) -> u32 {
        if self.show_less_items {
            1
        } else {
            2
        }
    }

    /// Page stride used by the elision jump markers
    pub fn jump_stride(&self) -> u32 {
        if self.show_less_items {
            3
        } else {
            5
        }
    }

    /// Total page count for a committed page size
    ///
    /// Zero items still produce one (empty) page. A zero size is treated as
    /// 1 so the division cannot fault.
    pub fn total_pages_with(&self, page_size: u32) -> u32 {
        if self.total_items == 0 {
            return 1;
        }
        let size = u64::from(page_size.max(1));
        let pages = (self.total_items - 1) / size + 1;
        pages.min(u64::from(u32::MAX)) as u32
    }

    /// Check the configuration for values the controller cannot start from
    ///
    /// A controlled current of 0 is accepted (the owner is authoritative,
    /// even when out of range) but logged, since every transition it allows
    /// will be fighting the mirror.
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::InvalidPageSize { value: 0 });
        }
        if self.controlled_page_size == Some(0) {
            return Err(Error::InvalidPageSize { value: 0 });
        }
        if self.default_current == 0 {
            return Err(Error::InvalidInitialPage { value: 0 });
        }
        if self.controlled_current == Some(0) {
            tracing::warn!("controlled current page is 0; pages are numbered from 1");
        }
        Ok(())
    }
}
