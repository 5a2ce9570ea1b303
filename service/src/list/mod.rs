//! Paginated list synchronization.
//!
//! A [`Controller`] keeps a [`Window`] of a paginated backend list in sync
//! with the filters an administrator picks, extending it page by page while
//! the list is scrolled, and refreshing it after a confirmed mutation of its
//! rows.
//!
//! [`Window`]: common::pagination::Window

pub mod action;
pub mod actions;
pub mod controller;
pub mod debounce;
pub mod scroll;
pub mod toast;

use std::{fmt, num::NonZeroU32};

pub use self::{
    action::{Action, Confirm, Mutation, Prompt},
    controller::{Controller, Outcome},
    debounce::Debouncer,
    scroll::Scroll,
    toast::{Notifier, Toast},
};

/// Default page size of an infinitely scrolled list.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default page size of a list showing all the entities.
pub const DEFAULT_FULL_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default distance to the bottom of a list, in pixels, below which the
/// next page is loaded.
pub const DEFAULT_SCROLL_THRESHOLD: NonZeroU32 = match NonZeroU32::new(50) {
    Some(n) => n,
    None => unreachable!(),
};

/// Configuration of a single list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Title the list is shown under.
    pub title: String,

    /// Number of items requested per page.
    pub limit: NonZeroU32,

    /// Distance to the bottom of the list, in pixels, below which the next
    /// page is loaded.
    pub scroll_threshold: NonZeroU32,

    /// Label of the row shown while the first page is loading.
    pub loading_label: String,

    /// Label of the row shown while a next page is loading.
    pub loading_more_label: String,

    /// Label of the row shown instead of an empty list.
    pub empty_label: String,

    /// Label of the row shown after the last item of an exhausted list.
    pub exhausted_label: String,

    /// Text of the [`Toast`] shown when a page fails to load.
    pub failure_label: String,
}

impl Config {
    /// Creates a new [`Config`] of a list titled `title` and listing
    /// `noun`s, like `job seekers`, with labels derived from the `noun`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        noun: &str,
        limit: NonZeroU32,
    ) -> Self {
        Self {
            title: title.into(),
            limit,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            loading_label: format!("Loading {noun}..."),
            loading_more_label: "Loading more...".to_owned(),
            empty_label: format!("No {noun} found"),
            exhausted_label: format!("No more {noun}"),
            failure_label: format!("Failed to load {noun}"),
        }
    }

    /// Overrides the [`Config::scroll_threshold`].
    #[must_use]
    pub fn with_scroll_threshold(mut self, px: NonZeroU32) -> Self {
        self.scroll_threshold = px;
        self
    }

    /// Overrides the [`Config::empty_label`].
    #[must_use]
    pub fn with_empty_label(mut self, label: impl Into<String>) -> Self {
        self.empty_label = label.into();
        self
    }
}

/// Closed set of filters of a specific list.
pub trait Filter: Clone + fmt::Debug + Default {
    /// Returns the free text search of this [`Filter`], if it has any.
    fn search(&self) -> Option<&str> {
        None
    }

    /// Replaces the free text search of this [`Filter`].
    ///
    /// Lists without a free text search ignore it.
    #[must_use]
    fn with_search(self, search: Option<String>) -> Self {
        _ = search;
        self
    }
}

/// Row of a rendered list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Row<I> {
    /// First page is loading.
    Loading(String),

    /// List item.
    Item(I),

    /// Next page is loading.
    LoadingMore(String),

    /// List has no items.
    Empty(String),

    /// All the items are shown.
    Exhausted(String),
}
