//! [`JobSeeker`] definitions.

use serde::Deserialize;

use super::{
    account::Blockable,
    define_id, ActivityDateTime, CreationDateTime, ModificationDateTime,
};

define_id! {
    #[doc = "ID of a [`JobSeeker`]."]
    Id
}

/// Job seeker registered on the marketplace.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeeker {
    /// ID of this [`JobSeeker`].
    #[serde(rename = "_id")]
    pub id: Id,

    /// Full name of this [`JobSeeker`], if provided.
    #[serde(default)]
    pub name: Option<String>,

    /// Phone number this [`JobSeeker`] registered with.
    pub phone: String,

    /// Email of this [`JobSeeker`], if provided.
    #[serde(default)]
    pub email: Option<String>,

    /// Gender of this [`JobSeeker`], if provided.
    #[serde(default)]
    pub gender: Option<String>,

    /// Job category this [`JobSeeker`] is looking in.
    #[serde(default)]
    pub category: String,

    /// Specialization of this [`JobSeeker`].
    #[serde(default)]
    pub specialization: String,

    /// Account status of this [`JobSeeker`], as reported by the backend.
    pub status: String,

    /// Indicator whether this [`JobSeeker`] is blocked.
    pub is_blocked: bool,

    /// URL of the profile photo.
    #[serde(default)]
    pub profile_photo: Option<String>,

    /// Number of coins on the balance.
    #[serde(default)]
    pub coin_balance: i64,

    /// [`DateTime`] this [`JobSeeker`] joined at.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] this [`JobSeeker`] was last modified at.
    ///
    /// [`DateTime`]: common::DateTime
    pub updated_at: ModificationDateTime,
}

impl Blockable for JobSeeker {
    type Id = Id;

    const NOUN: &'static str = "user";

    fn id(&self) -> &Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.phone)
    }

    fn is_blocked(&self) -> bool {
        self.is_blocked
    }
}

/// Job seeker highlighted on the insights page.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopJobSeeker {
    /// ID of this [`TopJobSeeker`].
    #[serde(rename = "_id")]
    pub id: Id,

    /// Full name.
    pub name: String,

    /// URL of the profile photo.
    #[serde(default)]
    pub profile_photo: Option<String>,

    /// Specialization.
    #[serde(default)]
    pub specialization: String,

    /// Skills listed in the profile.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Declared availability, like `Immediate`.
    #[serde(default)]
    pub availability: String,

    /// [`DateTime`] of the last activity.
    ///
    /// [`DateTime`]: common::DateTime
    pub last_active: ActivityDateTime,

    /// Hiring pipeline status, like `Shortlisted`.
    pub status: String,
}
