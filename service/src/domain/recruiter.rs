//! [`Recruiter`] definitions.

use serde::Deserialize;

use super::{
    account::Blockable, define_id, CreationDateTime, ModificationDateTime,
};

define_id! {
    #[doc = "ID of a [`Recruiter`]."]
    Id
}

/// Recruiter registered on the marketplace.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    /// ID of this [`Recruiter`].
    #[serde(rename = "_id")]
    pub id: Id,

    /// Name of the contact person.
    #[serde(default)]
    pub name: Option<String>,

    /// Name of the company this [`Recruiter`] hires for.
    #[serde(default)]
    pub company_name: Option<String>,

    /// URL of the company logo.
    #[serde(default)]
    pub company_logo: Option<String>,

    /// Phone number this [`Recruiter`] registered with.
    pub phone: String,

    /// Email of the contact person, if provided.
    #[serde(default)]
    pub email: Option<String>,

    /// Business type of the company.
    #[serde(default)]
    pub business_type: Option<String>,

    /// Account status, as reported by the backend.
    pub status: String,

    /// Indicator whether this [`Recruiter`] is blocked.
    pub is_blocked: bool,

    /// Number of coins on the balance.
    #[serde(default)]
    pub coin_balance: i64,

    /// [`DateTime`] this [`Recruiter`] joined at.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Blockable for Recruiter {
    type Id = Id;

    const NOUN: &'static str = "recruiter";

    fn id(&self) -> &Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        [self.company_name.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
            .unwrap_or(&self.phone)
    }

    fn is_blocked(&self) -> bool {
        self.is_blocked
    }
}

/// Activity snapshot of a [`Recruiter`] shown on the performance page.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterActivity {
    /// ID of the [`Recruiter`].
    #[serde(rename = "_id")]
    pub id: Id,

    /// Company name.
    pub company: String,

    /// Name of the contact person.
    pub recruiter: String,

    /// URL of the company logo.
    #[serde(default)]
    pub company_logo: Option<String>,

    /// Area the [`Recruiter`] hires in.
    #[serde(default)]
    pub focus_area: String,

    /// Number of conducted interviews.
    #[serde(default)]
    pub interviews: u64,

    /// [`DateTime`] of the last update.
    ///
    /// [`DateTime`]: common::DateTime
    pub last_updated: ModificationDateTime,

    /// Hiring status, as reported by the backend.
    pub status: String,
}
