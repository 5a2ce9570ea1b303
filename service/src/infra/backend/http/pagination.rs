//! Normalization of the pagination shapes reported by the backend.

use common::pagination::{Arguments, Page, PageInfo};
use serde::Deserialize;

/// Pagination block reported along with a list.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct Pagination {
    /// Number of the reported page.
    current_page: u32,

    /// Total number of pages.
    total_pages: u32,

    /// Total number of items.
    #[serde(alias = "totalTransactions")]
    total_count: u64,

    /// Applied page size.
    limit: u32,

    /// Indicator whether there is a next page.
    has_next_page: bool,

    /// Indicator whether there is a previous page.
    has_prev_page: bool,
}

impl From<Pagination> for PageInfo {
    fn from(p: Pagination) -> Self {
        Self {
            current_page: p.current_page,
            total_pages: p.total_pages,
            total_count: p.total_count,
            limit: p.limit,
            has_next_page: p.has_next_page,
            has_prev_page: p.has_prev_page,
        }
    }
}

/// List items along with an optional [`Pagination`] block, reported in the
/// `data` of a response.
#[derive(Debug, Deserialize)]
pub(super) struct Listed<I> {
    /// Items of the list.
    #[serde(
        alias = "jobSeekers",
        alias = "recruiters",
        alias = "campaigns",
        alias = "transactions"
    )]
    pub(super) items: Vec<I>,

    /// [`Pagination`] of the list.
    #[serde(default)]
    pub(super) pagination: Option<Pagination>,
}

/// Metadata of a response carrying a nested [`Pagination`] block.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub(super) struct Meta {
    /// [`Pagination`] of the list.
    #[serde(default)]
    pub(super) pagination: Option<Pagination>,
}

/// Metadata of a response carrying flat page totals.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Totals {
    /// Number of the reported page.
    page: u32,

    /// Applied page size.
    limit: u32,

    /// Total number of items.
    total: u64,

    /// Total number of pages.
    total_pages: u32,
}

impl From<Totals> for PageInfo {
    fn from(t: Totals) -> Self {
        Self::from_totals(t.page, t.limit, t.total, t.total_pages)
    }
}

/// Assembles a [`Page`] out of the provided `items` and the [`PageInfo`]
/// reported for them.
///
/// Missing [`PageInfo`] means the [`Page`] is the last one.
pub(super) fn page<I>(
    arguments: Arguments,
    items: Vec<I>,
    info: Option<PageInfo>,
) -> Page<I> {
    let info =
        info.unwrap_or_else(|| PageInfo::terminal(arguments, items.len()));
    Page { items, info }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroU32;

    use common::pagination::{Arguments, PageInfo};
    use serde_json::json;

    use super::{page, Listed, Meta, Totals};

    fn first() -> Arguments {
        Arguments::first(NonZeroU32::new(20).unwrap())
    }

    #[test]
    fn reads_nested_data_pagination() {
        let listed: Listed<u8> = serde_json::from_value(json!({
            "jobSeekers": [1, 2],
            "pagination": {
                "currentPage": 1,
                "totalPages": 3,
                "totalCount": 45,
                "limit": 20,
                "hasNextPage": true,
                "hasPrevPage": false,
            },
        }))
        .unwrap();

        let info = PageInfo::from(listed.pagination.unwrap());
        assert_eq!(listed.items, [1, 2]);
        assert!(info.has_next_page);
        assert_eq!(info.total_count, 45);
    }

    #[test]
    fn reads_meta_pagination_with_transactions_total() {
        let meta: Meta = serde_json::from_value(json!({
            "pagination": {
                "currentPage": 2,
                "totalPages": 2,
                "totalTransactions": 31,
                "limit": 20,
                "hasNextPage": false,
                "hasPrevPage": true,
            },
            "dateRange": null,
        }))
        .unwrap();

        let info = PageInfo::from(meta.pagination.unwrap());
        assert_eq!(info.total_count, 31);
        assert!(!info.has_next_page);
        assert!(info.has_prev_page);
    }

    #[test]
    fn derives_next_page_from_flat_totals() {
        let totals: Totals = serde_json::from_value(json!({
            "page": 1,
            "limit": 20,
            "total": 21,
            "totalPages": 2,
        }))
        .unwrap();
        assert!(PageInfo::from(totals).has_next_page);

        let totals: Totals = serde_json::from_value(json!({
            "page": 2,
            "limit": 20,
            "total": 21,
            "totalPages": 2,
        }))
        .unwrap();
        assert!(!PageInfo::from(totals).has_next_page);
    }

    #[test]
    fn missing_pagination_ends_the_list() {
        let listed: Listed<u8> =
            serde_json::from_value(json!({ "campaigns": [7] })).unwrap();
        assert!(listed.pagination.is_none());

        let page = page(first(), listed.items, None);
        assert!(!page.info.has_next_page);
        assert_eq!(page.info.total_count, 1);
    }
}
