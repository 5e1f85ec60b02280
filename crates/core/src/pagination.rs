//! Pagination arithmetic and the page-number range shown in page controls.
//!
//! [`PageState`] is the pure arithmetic (current page, page size, total
//! items). It works the same for a server-reported total and for an
//! in-memory collection. [`Paginator`] wraps an in-memory collection and
//! hands out the current page slice.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered to the user.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50, 100];

/// Pages shown on each side of the current page in [`page_range`].
pub const PAGE_WINDOW: usize = 2;

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// `max(1, ceil(total_items / page_size))`. A zero page size counts as 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// One entry of a compressed page-number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRangeItem {
    Page(usize),
    Ellipsis,
}

/// Compressed page-number range for page controls.
///
/// Always includes the first and last page plus every page within
/// [`PAGE_WINDOW`] of `current`. A gap of exactly one page is filled with
/// that page; a larger gap becomes a single [`PageRangeItem::Ellipsis`].
///
/// # Examples
///
/// ```
/// use histdom_core::pagination::{page_range, PageRangeItem::{Ellipsis, Page}};
/// assert_eq!(
///     page_range(10, 20),
///     vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
/// );
/// assert_eq!(page_range(1, 1), vec![Page(1)]);
/// ```
pub fn page_range(current: usize, total_pages: usize) -> Vec<PageRangeItem> {
    if total_pages <= 1 {
        return vec![PageRangeItem::Page(1)];
    }

    let low = current.saturating_sub(PAGE_WINDOW);
    let high = current.saturating_add(PAGE_WINDOW);
    let visible = (1..=total_pages).filter(|&page| {
        page == 1 || page == total_pages || (page >= low && page <= high)
    });

    let mut range = Vec::new();
    let mut previous: Option<usize> = None;
    for page in visible {
        if let Some(last) = previous {
            match page - last {
                1 => {}
                2 => range.push(PageRangeItem::Page(last + 1)),
                _ => range.push(PageRangeItem::Ellipsis),
            }
        }
        range.push(PageRangeItem::Page(page));
        previous = Some(page);
    }
    range
}

// ---------------------------------------------------------------------------
// PageState
// ---------------------------------------------------------------------------

/// Current page, page size and total item count.
///
/// Invariant: `1 <= current_page <= total_pages()` after every operation.
/// Navigation outside that range is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl PageState {
    /// Start at page 1. A zero page size is raised to 1.
    pub fn new(page_size: usize, total_items: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    /// Derive the page a server-side `skip`/`limit` window falls on.
    pub fn from_window(skip: u64, limit: u64, total_items: u64) -> Self {
        let page_size = (limit.max(1)) as usize;
        let mut state = Self::new(page_size, total_items as usize);
        let page = (skip / limit.max(1)) as usize + 1;
        state.current_page = page.clamp(1, state.total_pages());
        state
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Zero-based offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    /// Go to `page` if it is within `[1, total_pages]`. Returns whether the
    /// page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() && page != self.current_page {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.can_go_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.can_go_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self) {
        self.current_page = self.total_pages();
    }

    /// Change the page size and go back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Replace the item count and go back to page 1.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    pub fn page_range(&self) -> Vec<PageRangeItem> {
        page_range(self.current_page, self.total_pages())
    }
}

// ---------------------------------------------------------------------------
// Paginator
// ---------------------------------------------------------------------------

/// Initial settings for a [`Paginator`].
#[derive(Debug, Clone)]
pub struct PaginationOptions {
    pub initial_page: usize,
    pub initial_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            initial_page: 1,
            initial_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

/// Client-side pagination over an owned, in-memory collection.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    state: PageState,
    page_size_options: Vec<usize>,
}

impl<T> Paginator<T> {
    /// The initial page is clamped into `[1, total_pages]`.
    pub fn new(items: Vec<T>, options: PaginationOptions) -> Self {
        let mut state = PageState::new(options.initial_page_size, items.len());
        let initial = options.initial_page.clamp(1, state.total_pages());
        state.go_to_page(initial);
        Self {
            items,
            state,
            page_size_options: options.page_size_options,
        }
    }

    /// Replace the collection and go back to page 1.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.state.set_total_items(items.len());
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The slice of items on the current page.
    pub fn paginated_items(&self) -> &[T] {
        let start = self.state.offset().min(self.items.len());
        let end = (start + self.state.page_size()).min(self.items.len());
        &self.items[start..end]
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    pub fn total_items(&self) -> usize {
        self.state.total_items()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.can_go_prev()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    pub fn page_range(&self) -> Vec<PageRangeItem> {
        self.state.page_range()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.state.go_to_page(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.state.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.state.prev_page()
    }

    pub fn first_page(&mut self) {
        self.state.first_page();
    }

    pub fn last_page(&mut self) {
        self.state.last_page();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.set_page_size(page_size);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
