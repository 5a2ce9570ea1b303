//! [`Notification`]-related read definitions.

#[cfg(doc)]
use crate::domain::Notification;

pub mod history {
    //! [`Notification`] history definitions.

    use common::define_pagination;
    use smart_default::SmartDefault;

    use crate::{
        domain::{notification, Notification},
        list,
    };

    define_pagination!(Node, Filter);

    /// Node in a [`Page`].
    pub type Node = Notification;

    /// Filter for [`Selector`].
    #[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
    pub struct Filter {
        /// [`notification::Status`] to match.
        pub status: Option<notification::Status>,

        /// [`notification::RecipientType`] to match.
        pub recipient_type: Option<notification::RecipientType>,

        /// Indicator whether only [`Notification`]s sent by administrators
        /// are listed.
        #[default(true)]
        pub admin_only: bool,
    }

    impl list::Filter for Filter {}
}
