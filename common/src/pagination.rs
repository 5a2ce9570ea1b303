//! Abstractions for page-number pagination.

use std::num::NonZeroU32;

/// Number of the first page of any list.
pub const FIRST_PAGE: u32 = 1;

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arguments {
    /// 1-based number of the requested page.
    page: u32,

    /// Maximum number of items on the requested page.
    limit: NonZeroU32,
}

impl Arguments {
    /// Creates new [`Arguments`] requesting the provided `page`.
    ///
    /// [`None`] is returned if the `page` is `0`.
    #[must_use]
    pub fn new(page: u32, limit: NonZeroU32) -> Option<Self> {
        (page >= FIRST_PAGE).then_some(Self { page, limit })
    }

    /// Creates new [`Arguments`] requesting the first page.
    #[must_use]
    pub const fn first(limit: NonZeroU32) -> Self {
        Self {
            page: FIRST_PAGE,
            limit,
        }
    }

    /// Returns [`Arguments`] requesting the page right after this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            limit: self.limit,
        }
    }

    /// Returns the requested page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the requested page size.
    #[must_use]
    pub const fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Indicates whether these [`Arguments`] request the first page.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.page == FIRST_PAGE
    }
}

/// Information about a [`Page`], as reported by the server.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PageInfo {
    /// Number of the [`Page`] this information describes.
    pub current_page: u32,

    /// Total number of pages.
    pub total_pages: u32,

    /// Total number of items across all pages.
    pub total_count: u64,

    /// Page size the server applied.
    pub limit: u32,

    /// Indicator whether there is a page after this one.
    pub has_next_page: bool,

    /// Indicator whether there is a page before this one.
    pub has_prev_page: bool,
}

impl PageInfo {
    /// Creates a [`PageInfo`] out of totals only, deriving the neighbour
    /// indicators from the `page` and `total_pages` numbers.
    #[must_use]
    pub fn from_totals(
        page: u32,
        limit: u32,
        total_count: u64,
        total_pages: u32,
    ) -> Self {
        Self {
            current_page: page,
            total_pages,
            total_count,
            limit,
            has_next_page: page < total_pages,
            has_prev_page: page > FIRST_PAGE,
        }
    }

    /// Creates a [`PageInfo`] for a response carrying no pagination at all,
    /// which is treated as the last page.
    #[must_use]
    pub fn terminal(arguments: Arguments, count: usize) -> Self {
        Self {
            current_page: arguments.page,
            total_pages: arguments.page,
            total_count: u64::try_from(count).unwrap_or(u64::MAX),
            limit: arguments.limit.get(),
            has_next_page: false,
            has_prev_page: !arguments.is_first(),
        }
    }
}

/// A page of items.
#[derive(Clone, Debug)]
pub struct Page<I> {
    /// Items on this [`Page`] in server order.
    pub items: Vec<I>,

    /// [`PageInfo`] of this [`Page`].
    pub info: PageInfo,
}

impl<I> Page<I> {
    /// Transforms items of this [`Page`] with the provided function.
    #[must_use]
    pub fn map<T>(self, f: impl FnMut(I) -> T) -> Page<T> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            info: self.info,
        }
    }
}

/// Pagination selector.
#[derive(Clone, Debug)]
pub struct Selector<F> {
    /// Pagination [`Arguments`].
    pub arguments: Arguments,

    /// Additional filter being applied to the result.
    pub filter: F,
}

/// Accumulated view over a paginated list.
///
/// Items are the concatenation of all the [`Page`]s fetched so far, in fetch
/// order. The cursor is the number of the last applied [`Page`], or `0` if
/// nothing was applied yet.
#[derive(Clone, Debug)]
pub struct Window<I> {
    /// Accumulated items.
    items: Vec<I>,

    /// Number of the last applied [`Page`].
    cursor: u32,

    /// Indicator whether the server reported more pages.
    has_more: bool,

    /// Total number of items reported by the server.
    total_count: Option<u64>,
}

impl<I> Default for Window<I> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            has_more: false,
            total_count: None,
        }
    }
}

impl<I> Window<I> {
    /// Returns the accumulated items.
    #[must_use]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Returns the number of the last applied [`Page`].
    #[must_use]
    pub const fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Indicates whether the server reported more pages.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Returns total number of items reported by the server, if any
    /// [`Page`] was applied.
    #[must_use]
    pub const fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Indicates whether at least one [`Page`] was applied.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.cursor >= FIRST_PAGE
    }

    /// Indicates whether all the pages were applied.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.is_loaded() && !self.has_more
    }

    /// Returns [`Arguments`] of the [`Page`] to continue this [`Window`]
    /// with.
    ///
    /// [`None`] is returned if there is nothing to continue with.
    #[must_use]
    pub fn next(&self, limit: NonZeroU32) -> Option<Arguments> {
        (self.is_loaded() && self.has_more)
            .then(|| Arguments::new(self.cursor, limit))
            .flatten()
            .map(|args| args.next())
    }

    /// Replaces the whole content of this [`Window`] with the first [`Page`].
    pub fn replace(&mut self, page: Page<I>) {
        let Page { items, info } = page;
        self.items = items;
        self.cursor = FIRST_PAGE;
        self.has_more = info.has_next_page;
        self.total_count = Some(info.total_count);
    }

    /// Appends the [`Page`] fetched with the provided [`Arguments`] to this
    /// [`Window`], advancing its cursor.
    pub fn extend(&mut self, arguments: Arguments, page: Page<I>) {
        let Page { items, info } = page;
        self.items.extend(items);
        self.cursor = arguments.page;
        self.has_more = info.has_next_page;
        self.total_count = Some(info.total_count);
    }
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty, $filter:ty) => {
        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments;

        #[doc = "A [`Page`] of nodes."]
        pub type Page = $crate::pagination::Page<$node>;

        #[doc = "An information about a [`Page`]."]
        pub type PageInfo = $crate::pagination::PageInfo;

        #[doc = "[`Page`] selector."]
        pub type Selector = $crate::pagination::Selector<$filter>;

        #[doc = "Accumulated [`Page`]s of nodes."]
        pub type Window = $crate::pagination::Window<$node>;
    };
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroU32;

    use super::{Arguments, Page, PageInfo, Window};

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn page(items: std::ops::Range<u32>, has_next_page: bool) -> Page<u32> {
        Page {
            items: items.collect(),
            info: PageInfo {
                has_next_page,
                ..PageInfo::default()
            },
        }
    }

    #[test]
    fn rejects_zero_page() {
        assert!(Arguments::new(0, limit(10)).is_none());
        assert_eq!(Arguments::new(3, limit(10)).unwrap().page(), 3);
        assert!(Arguments::first(limit(5)).is_first());
        assert_eq!(Arguments::first(limit(5)).next().page(), 2);
    }

    #[test]
    fn derives_neighbours_from_totals() {
        let info = PageInfo::from_totals(1, 10, 25, 3);
        assert!(info.has_next_page);
        assert!(!info.has_prev_page);

        let info = PageInfo::from_totals(3, 10, 25, 3);
        assert!(!info.has_next_page);
        assert!(info.has_prev_page);

        let info = PageInfo::from_totals(1, 10, 0, 0);
        assert!(!info.has_next_page);
    }

    #[test]
    fn terminal_page_has_no_next() {
        let info = PageInfo::terminal(Arguments::first(limit(20)), 7);
        assert!(!info.has_next_page);
        assert_eq!(info.total_count, 7);
        assert_eq!(info.limit, 20);
    }

    #[test]
    fn empty_window_cannot_continue() {
        let window = Window::<u32>::default();
        assert_eq!(window.cursor(), 0);
        assert!(!window.is_loaded());
        assert!(!window.is_exhausted());
        assert!(window.next(limit(10)).is_none());
    }

    #[test]
    fn replace_resets_cursor() {
        let mut window = Window::default();
        window.replace(page(0..20, true));
        window.extend(Arguments::first(limit(20)).next(), page(20..40, true));
        assert_eq!(window.cursor(), 2);

        window.replace(page(100..105, false));
        assert_eq!(window.items(), &[100, 101, 102, 103, 104]);
        assert_eq!(window.cursor(), 1);
        assert!(window.is_exhausted());
    }

    #[test]
    fn extend_appends_in_fetch_order() {
        let mut window = Window::default();
        window.replace(page(0..20, true));

        let next = window.next(limit(20)).unwrap();
        assert_eq!(next.page(), 2);
        window.extend(next, page(20..40, true));

        assert_eq!(window.items().len(), 40);
        assert_eq!(window.items()[19], 19);
        assert_eq!(window.items()[20], 20);
        assert_eq!(window.cursor(), 2);
        assert_eq!(window.next(limit(20)).unwrap().page(), 3);
    }

    #[test]
    fn exhausted_window_has_no_next() {
        let mut window = Window::default();
        window.replace(page(0..3, false));

        assert!(window.is_exhausted());
        assert!(window.next(limit(20)).is_none());
    }
}
