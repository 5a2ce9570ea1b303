//! [`Query`] collection related to [`Recruiter`]s.
//!
//! [`Recruiter`]: crate::domain::Recruiter

use common::operations::By;

use crate::{
    domain::stats::{self, DateRange},
    read,
};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries key metrics of the recruiters performance.
pub type Stats = BackendQuery<By<stats::Recruiters, DateRange>>;

/// Queries a page of all recruiters.
pub type List = BackendQuery<
    By<read::recruiter::list::Page, read::recruiter::list::Selector>,
>;

/// Queries a page of recruiters activity.
pub type Activity = BackendQuery<
    By<read::recruiter::activity::Page, read::recruiter::activity::Selector>,
>;
