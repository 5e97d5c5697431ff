//! # Pagination
//!
//! Page arithmetic over a deck. The pager never stores the deck length; every
//! query takes it as a parameter so it can't go stale when the deck is
//! replaced.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How many cards share a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardLayout {
    /// One card per page.
    #[default]
    Single,
    /// Two cards side by side.
    Paired,
}

impl CardLayout {
    pub fn per_page(self) -> usize {
        match self {
            CardLayout::Single => 1,
            CardLayout::Paired => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Zero-based page index.
    pub page: usize,
    per_page: usize,
}

impl Pager {
    pub fn new(layout: CardLayout) -> Self {
        Self {
            page: 0,
            per_page: layout.per_page(),
        }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page)
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Advance one page, stopping at the last.
    pub fn next(&mut self, len: usize) {
        let last = self.total_pages(len).saturating_sub(1);
        self.page = (self.page + 1).min(last);
    }

    /// Go back one page, stopping at the first.
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self, len: usize) -> bool {
        self.page + 1 < self.total_pages(len)
    }

    /// Deck indices shown on the current page.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = (self.page * self.per_page).min(len);
        let end = (start + self.per_page).min(len);
        start..end
    }

    /// "Page X of Y", 1-based.
    pub fn label(&self, len: usize) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages(len))
    }
}
