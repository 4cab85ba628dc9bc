use serde::Serialize;

/// A normalized page request.
///
/// Built with [`PageRequest::normalize`] at the service boundary; storage
/// backends use it without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub const FIRST_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 10;
    pub const MAX_PER_PAGE: u32 = 100;

    /// Clamp raw pagination input into range.
    ///
    /// `page < 1` becomes 1. A `per_page` outside `[1, 100]` becomes 10, it is
    /// not clamped to the nearest bound.
    pub fn normalize(page: i64, per_page: i64) -> Self {
        let page = if page < i64::from(Self::FIRST_PAGE) {
            Self::FIRST_PAGE
        } else {
            u32::try_from(page).unwrap_or(u32::MAX)
        };

        let per_page = u32::try_from(per_page)
            .ok()
            .filter(|pp| (1..=Self::MAX_PER_PAGE).contains(pp))
            .unwrap_or(Self::DEFAULT_PER_PAGE);

        Self { page, per_page }
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Maximum number of items on this page.
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::FIRST_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus the total number of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        let per_page = u64::from(request.per_page.max(1));

        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
            total_pages: total.div_ceil(per_page),
        }
    }

    /// Convert every item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
