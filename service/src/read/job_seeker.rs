//! [`JobSeeker`]-related read definitions.

#[cfg(doc)]
use crate::domain::JobSeeker;

/// Categories of [`JobSeeker`]s, used as filter options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Categories(pub Vec<String>);

pub mod list {
    //! [`JobSeeker`] list definitions.

    use common::define_pagination;

    use crate::{
        domain::{account, JobSeeker},
        list,
    };

    define_pagination!(Node, Filter);

    /// Node in a [`Page`].
    pub type Node = JobSeeker;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// Free text to search in names, phones and emails.
        pub search: Option<String>,

        /// [`account::Status`] to match.
        pub status: Option<account::Status>,

        /// [`account::BlockState`] to match.
        pub blocked: Option<account::BlockState>,

        /// Category to match.
        pub category: Option<String>,
    }

    impl list::Filter for Filter {
        fn search(&self) -> Option<&str> {
            self.search.as_deref()
        }

        fn with_search(self, search: Option<String>) -> Self {
            Self { search, ..self }
        }
    }
}

pub mod top {
    //! [`TopJobSeeker`] list definitions.

    use common::define_pagination;

    use crate::{
        domain::{stats::DateRange, TopJobSeeker},
        list,
    };

    define_pagination!(Node, Filter);

    /// Node in a [`Page`].
    pub type Node = TopJobSeeker;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Free text to search in names and skills.
        pub search: Option<String>,

        /// Category to match.
        pub category: Option<String>,

        /// [`DateRange`] of the activity.
        pub period: DateRange,
    }

    impl list::Filter for Filter {
        fn search(&self) -> Option<&str> {
            self.search.as_deref()
        }

        fn with_search(self, search: Option<String>) -> Self {
            Self { search, ..self }
        }
    }
}
