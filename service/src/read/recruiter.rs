//! [`Recruiter`]-related read definitions.

#[cfg(doc)]
use crate::domain::Recruiter;

pub mod list {
    //! [`Recruiter`] list definitions.

    use common::define_pagination;

    use crate::{
        domain::{account, Recruiter},
        list,
    };

    define_pagination!(Node, Filter);

    /// Node in a [`Page`].
    pub type Node = Recruiter;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// Free text to search in company names, names and phones.
        pub search: Option<String>,

        /// [`account::Status`] to match.
        pub status: Option<account::Status>,

        /// [`account::BlockState`] to match.
        pub blocked: Option<account::BlockState>,
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

pub mod activity {
    //! [`RecruiterActivity`] list definitions.
    //!
    //! [`RecruiterActivity`]: crate::domain::RecruiterActivity

    use common::define_pagination;

    use crate::{
        domain::{stats::DateRange, RecruiterActivity},
        list,
    };

    define_pagination!(Node, Filter);

    /// Node in a [`Page`].
    pub type Node = RecruiterActivity;

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Free text to search in company and recruiter names.
        pub search: Option<String>,

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
