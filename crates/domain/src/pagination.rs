use derive_more::{Deref, Display};

#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemsPerPage(usize);

impl ItemsPerPage {
    pub const MIN: usize = 3;
    pub const MAX: usize = 24;
    pub const STEP: usize = 3;

    pub fn new(value: usize) -> Result<Self, ItemsPerPageError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ItemsPerPageError::OutOfRange(value));
        }
        if value % Self::STEP != 0 {
            return Err(ItemsPerPageError::InvalidStep(value));
        }
        Ok(Self(value))
    }

    /// Fixed page sizes of the muscle group pages, which offer no page size control.
    #[must_use]
    pub const fn fixed(value: usize) -> Self {
        Self(if value == 0 { 1 } else { value })
    }
}

impl Default for ItemsPerPage {
    fn default() -> Self {
        Self(12)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ItemsPerPageError {
    #[error("Items per page must be between 3 and 24 ({0})")]
    OutOfRange(usize),
    #[error("Items per page must be a multiple of 3 ({0})")]
    InvalidStep(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: ItemsPerPage,
}

impl Pagination {
    #[must_use]
    pub fn new(items_per_page: ItemsPerPage) -> Self {
        Self {
            current_page: 1,
            items_per_page,
        }
    }

    /// Number of pages needed for `len` items. An empty sequence has no pages.
    #[must_use]
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(*self.items_per_page)
    }

    /// Moves the cursor into `[1, total_pages]`, or to 1 if there are no pages.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(len).max(1));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.items_per_page = items_per_page;
        self.reset();
    }

    pub fn next(&mut self, len: usize) {
        self.current_page = self.current_page.saturating_add(1);
        self.clamp(len);
    }

    pub fn previous(&mut self, len: usize) {
        self.current_page = self.current_page.saturating_sub(1);
        self.clamp(len);
    }

    #[must_use]
    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(*self.items_per_page);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(*self.items_per_page).min(items.len());
        &items[start..end]
    }

    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<&'a T> {
        Page {
            items: self.window(items).iter().collect(),
            current_page: self.current_page,
            total_pages: self.total_pages(items.len()),
            total_items: items.len(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(ItemsPerPage::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Pagination controls are only shown for non-empty results.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.total_items > 0
    }
}
