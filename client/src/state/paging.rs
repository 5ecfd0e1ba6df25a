//! Pagination state for catalogue, favorites, and community lists.
//!
//! Page numbers are 1-based everywhere in the UI; `net` converts them for the
//! backend.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

/// Append-only list grown by "load more".
#[derive(Clone, Debug, PartialEq)]
pub struct LoadMoreList<T> {
    pub items: Vec<T>,
    next_page: u32,
    total_pages: Option<u32>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for LoadMoreList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), next_page: 1, total_pages: None, loading: false, error: None }
    }
}

impl<T> LoadMoreList<T> {
    /// Claim the next page to fetch. `None` while a fetch is pending or once
    /// every page has been loaded.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if self.loading || self.is_exhausted() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.next_page)
    }

    pub fn apply_page(&mut self, items: Vec<T>, current_page: u32, total_pages: u32) {
        self.items.extend(items);
        self.next_page = current_page.max(self.next_page) + 1;
        self.total_pages = Some(total_pages);
        self.loading = false;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn is_exhausted(&self) -> bool {
        self.total_pages.is_some_and(|total| self.next_page > total)
    }
}

/// Claim on one in-flight page load. Results carrying an outdated ticket are
/// discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTicket {
    pub page: u32,
    generation: u64,
}

/// One numbered page at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for PageView<T> {
    fn default() -> Self {
        Self { items: Vec::new(), page: 1, total_pages: 1, loading: false, error: None, generation: 0 }
    }
}

impl<T> PageView<T> {
    /// Claim `page` for loading. `None` while busy or when out of range.
    pub fn begin_load(&mut self, page: u32) -> Option<PageTicket> {
        if self.loading || page == 0 || page > self.total_pages.max(1) {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(PageTicket { page, generation: self.generation })
    }

    /// Start over (filter change, sign-out). Loads claimed before the reset
    /// can no longer apply.
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self { generation, ..Self::default() };
    }

    /// Whether a page result for `ticket` may still be shown.
    pub fn is_current(&self, ticket: PageTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn apply_page(&mut self, ticket: PageTicket, items: Vec<T>, current_page: u32, total_pages: u32) {
        if !self.is_current(ticket) {
            return;
        }
        self.items = items;
        self.page = current_page.max(1);
        self.total_pages = total_pages.max(1);
        self.loading = false;
    }

    pub fn fail(&mut self, ticket: PageTicket, message: String) {
        if !self.is_current(ticket) {
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }
}

/// Tracks the newest of a series of requests, such as detail loads keyed by a
/// route parameter that can change while one is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatestRequest(u64);

impl LatestRequest {
    /// Start a request, superseding every earlier one.
    pub fn begin(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(self, request: u64) -> bool {
        self.0 == request
    }
}

/// Up to `width` page numbers centred on `current`, clamped to `1..=total`.
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(width / 2).max(1).min(total - width + 1);
    (start..start + width).collect()
}
