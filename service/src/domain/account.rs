//! Definitions shared by job seeker and recruiter accounts.

use common::define_kind;

define_kind! {
    #[doc = "Lifecycle status of an account."]
    enum Status {
        #[doc = "Account is in use."]
        Active = "Active",

        #[doc = "Account is not used anymore."]
        Inactive = "Inactive",

        #[doc = "Account awaits verification."]
        Pending = "Pending",
    }
}

define_kind! {
    #[doc = "Block state of an account, as filtered by the backend."]
    enum BlockState {
        #[doc = "Account is not blocked."]
        Unblocked = "false",

        #[doc = "Account is blocked."]
        Blocked = "true",
    }
}

define_kind! {
    #[doc = "Type of a marketplace user."]
    enum UserType {
        #[doc = "User looking for a job."]
        JobSeeker = "JobSeeker",

        #[doc = "User hiring for a company."]
        Recruiter = "Recruiter",
    }
}

/// Operation blocking the account identified by `Id`.
#[derive(Clone, Debug)]
pub struct Block<Id>(pub Id);

/// Operation unblocking the account identified by `Id`.
#[derive(Clone, Debug)]
pub struct Unblock<Id>(pub Id);

/// Account which may be blocked by an administrator.
pub trait Blockable {
    /// Type of the account identifier.
    type Id: Clone;

    /// Human-readable noun of the account kind, like `user`.
    const NOUN: &'static str;

    /// Returns identifier of this account.
    fn id(&self) -> &Self::Id;

    /// Returns the name an administrator recognizes this account by.
    fn display_name(&self) -> &str;

    /// Indicates whether this account is currently blocked.
    fn is_blocked(&self) -> bool;
}
