//! Domain entities of the jobs marketplace, as seen by an administrator.

pub mod account;
pub mod email;
pub mod job_seeker;
pub mod notification;
pub mod recruiter;
pub mod stats;

use common::{unit, DateTimeOf};

pub use self::{
    job_seeker::{JobSeeker, TopJobSeeker},
    notification::Notification,
    recruiter::{Recruiter, RecruiterActivity},
};

/// [`DateTimeOf`] an entity creation.
pub type CreationDateTime = DateTimeOf<unit::Creation>;

/// [`DateTimeOf`] the last entity modification.
pub type ModificationDateTime = DateTimeOf<unit::Modification>;

/// [`DateTimeOf`] a finished delivery.
pub type DeliveryDateTime = DateTimeOf<unit::Delivery>;

/// [`DateTimeOf`] a planned delivery.
pub type ScheduleDateTime = DateTimeOf<unit::Schedule>;

/// [`DateTimeOf`] the last user activity.
pub type ActivityDateTime = DateTimeOf<unit::Activity>;

/// Defines an opaque server-assigned identifier type.
macro_rules! define_id {
    ($(#[doc = $doc:literal])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::serde::Deserialize,
            ::derive_more::Display,
            Eq,
            Hash,
            ::derive_more::Into,
            PartialEq,
            ::serde::Serialize,
        )]
        #[as_ref(str)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier if the given `raw` one is non-empty
            /// and contains no whitespace.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Option<Self> {
                let raw = raw.into();
                (!raw.is_empty() && !raw.contains(char::is_whitespace))
                    .then_some(Self(raw))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

pub(crate) use define_id;
