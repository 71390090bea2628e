//! Page navigation
//!
//! One bound rule everywhere: the lower bound is always 1, the upper
//! bound is whatever the server last reported in page metadata. Until
//! the first response arrives the upper bound is unknown and forward
//! navigation is allowed.

use marquee_core::PageMetadata;

/// Clamped page cursor.
#[derive(Debug, Clone)]
pub struct Pager {
    current: u32,
    page_count: Option<u32>,
}

impl Pager {
    /// Start at page 1 with an unknown upper bound.
    pub fn new() -> Self {
        Self {
            current: 1,
            page_count: None,
        }
    }

    /// The page currently pointed at. Always >= 1.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// The server-reported page count, if any response carried one.
    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    /// Learn the upper bound from a page envelope.
    ///
    /// If the server now reports fewer pages than we are on, the
    /// cursor snaps back to the last valid page.
    pub fn record(&mut self, metadata: &PageMetadata) {
        if metadata.page_count > 0 {
            self.page_count = Some(metadata.page_count);
            if self.current > metadata.page_count {
                self.current = metadata.page_count;
            }
        }
    }

    /// Whether a next page exists as far as we know.
    pub fn can_advance(&self) -> bool {
        match self.page_count {
            Some(count) => self.current < count,
            None => true,
        }
    }

    /// Whether a previous page exists.
    pub fn can_retreat(&self) -> bool {
        self.current > 1
    }

    /// Move forward one page. Returns false when clamped at the bound.
    pub fn advance(&mut self) -> bool {
        if self.can_advance() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamped into the known bounds.
    pub fn goto(&mut self, page: u32) {
        let mut target = page.max(1);
        if let Some(count) = self.page_count {
            target = target.min(count);
        }
        self.current = target;
    }

    /// Move back one page. Returns false when already at page 1.
    pub fn retreat(&mut self) -> bool {
        if self.can_retreat() {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
