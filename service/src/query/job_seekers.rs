//! [`Query`] collection related to [`JobSeeker`]s.
//!
//! [`JobSeeker`]: crate::domain::JobSeeker

use common::operations::By;

use crate::{
    domain::stats::{self, DateRange},
    read,
};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries key metrics of the job seekers insights.
pub type Stats = BackendQuery<By<stats::JobSeekers, DateRange>>;

/// Queries categories of job seekers.
pub type Categories = BackendQuery<By<read::job_seeker::Categories, ()>>;

/// Queries a page of all job seekers.
pub type List = BackendQuery<
    By<read::job_seeker::list::Page, read::job_seeker::list::Selector>,
>;

/// Queries a page of top job seekers.
pub type Top = BackendQuery<
    By<read::job_seeker::top::Page, read::job_seeker::top::Selector>,
>;
