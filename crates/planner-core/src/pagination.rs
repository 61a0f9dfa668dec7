// ABOUTME: Collapsed/expanded pagination for ordered activity lists
// ABOUTME: Exposes the first page or the whole list depending on the expansion flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::paging::DEFAULT_PAGE_SIZE;

/// Whether a list shows its first page or everything
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    /// Show only the first `page_size` items
    #[default]
    Collapsed,
    /// Show every item
    Expanded,
}

impl PageMode {
    /// Map an "expanded" flag to a mode
    #[must_use]
    pub const fn from_expanded(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    /// Whether this is the expanded mode
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// An ordered list with a "top-N / show all" view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedList<T> {
    /// Every item, in display order
    pub all: Vec<T>,

    /// Number of items shown while collapsed
    pub page_size: usize,

    /// Current view mode
    pub mode: PageMode,
}

impl<T> PagedList<T> {
    /// Create a paged list
    #[must_use]
    pub const fn new(all: Vec<T>, page_size: usize, mode: PageMode) -> Self {
        Self {
            all,
            page_size,
            mode,
        }
    }

    /// Create an empty, collapsed list with the default page size
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE, PageMode::Collapsed)
    }

    /// Items currently shown: everything when expanded, otherwise the first page
    #[must_use]
    pub fn visible(&self) -> &[T] {
        match self.mode {
            PageMode::Expanded => &self.all,
            PageMode::Collapsed => &self.all[..self.all.len().min(self.page_size)],
        }
    }

    /// Total number of items
    #[must_use]
    pub fn total(&self) -> usize {
        self.all.len()
    }

    /// Number of items hidden by the current view
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.total() - self.visible().len()
    }

    /// Whether a "show all" control would reveal more items
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.hidden_count() > 0
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self::empty()
    }
}
