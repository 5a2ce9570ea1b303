//! [`Query`] collection of the dashboard.

use common::operations::By;

use crate::{
    domain::stats::{self, DateRange},
    read,
};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries key metrics of the dashboard.
pub type Stats = BackendQuery<By<stats::Dashboard, DateRange>>;

/// Queries distribution of users across categories.
pub type UserDistribution =
    BackendQuery<By<read::dashboard::UserDistribution, DateRange>>;

/// Queries a page of recent coin transactions.
pub type Transactions = BackendQuery<
    By<
        read::dashboard::transactions::Page,
        read::dashboard::transactions::Selector,
    >,
>;
