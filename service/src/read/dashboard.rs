//! Dashboard read definitions.

use crate::domain::stats::UserShare;

/// Distribution of users across categories.
#[derive(Clone, Debug, Default)]
pub struct UserDistribution(pub Vec<UserShare>);

pub mod transactions {
    //! Recent [`Transaction`] list definitions.

    use common::define_pagination;

    use crate::{
        domain::stats::{DateRange, Transaction},
        list,
    };

    define_pagination!(Node, Filter);

    /// Node in a [`Page`].
    pub type Node = Transaction;

    /// Filter for [`Selector`].
    pub type Filter = DateRange;

    impl list::Filter for DateRange {}
}
