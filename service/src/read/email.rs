//! Email marketing read definitions.

use crate::domain::email::template;

/// All the [`template::Category`]s.
#[derive(Clone, Debug, Default)]
pub struct TemplateCategories(pub Vec<template::Category>);

/// All the [`Template`]s matching a [`TemplateFilter`].
///
/// [`Template`]: crate::domain::email::Template
#[derive(Clone, Debug, Default)]
pub struct Templates(pub Vec<template::Template>);

/// Filter of [`Templates`].
#[derive(Clone, Debug, Default)]
pub struct TemplateFilter {
    /// [`template::Category`] value to match.
    pub category: Option<String>,

    /// Target audience to match.
    pub target_audience: Option<String>,

    /// Activity to match.
    pub is_active: Option<bool>,
}

pub mod campaigns {
    //! [`Campaign`] list definitions.

    use common::define_pagination;

    use crate::{domain::email::Campaign, list};

    define_pagination!(Node, Filter);

    /// Node in a [`Page`].
    pub type Node = Campaign;

    /// Filter for [`Selector`].
    ///
    /// [`Campaign`]s history is not filterable.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Filter;

    impl list::Filter for Filter {}
}
