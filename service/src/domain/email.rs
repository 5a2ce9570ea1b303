//! Email marketing definitions.

use common::define_kind;
use serde::{Deserialize, Serialize};

use super::{define_id, CreationDateTime, DeliveryDateTime, ScheduleDateTime};

pub use self::template::Template;

define_kind! {
    #[doc = "Audience of an email campaign."]
    enum RecipientType {
        #[doc = "Every registered user."]
        All = "all",

        #[doc = "Job seekers only."]
        JobSeeker = "job-seeker",

        #[doc = "Recruiters only."]
        Recruiter = "recruiter",
    }
}

/// Additional narrowing of a [`RecipientType`] audience.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientFilter {
    /// Job category of the recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Account status of the recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// State the recipients live in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// City the recipients live in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl RecipientFilter {
    /// Indicates whether this [`RecipientFilter`] narrows nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.status.is_none()
            && self.state.is_none()
            && self.city.is_none()
    }
}

/// Audience an email campaign is addressed to.
#[derive(Clone, Debug)]
pub struct Audience {
    /// [`RecipientType`] of the audience.
    pub recipient_type: RecipientType,

    /// [`RecipientFilter`] narrowing the audience.
    pub filter: RecipientFilter,
}

impl From<RecipientType> for Audience {
    fn from(recipient_type: RecipientType) -> Self {
        Self {
            recipient_type,
            filter: RecipientFilter::default(),
        }
    }
}

/// Number of recipients an email campaign would reach.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipientCount {
    /// Number of job seekers among the recipients.
    pub job_seeker_count: u64,

    /// Number of recruiters among the recipients.
    pub recruiter_count: u64,

    /// Total number of recipients.
    pub total_count: u64,
}

define_id! {
    #[doc = "ID of a [`Campaign`]."]
    CampaignId
}

define_kind! {
    #[doc = "Delivery status of a [`Campaign`]."]
    enum CampaignStatus {
        #[doc = "Campaign is not sent yet."]
        Draft = "draft",

        #[doc = "Campaign is planned for later."]
        Scheduled = "scheduled",

        #[doc = "Campaign is being delivered."]
        Sending = "sending",

        #[doc = "Campaign is delivered."]
        Completed = "completed",

        #[doc = "Campaign delivery failed."]
        Failed = "failed",
    }
}

/// Delivery statistics of a [`Campaign`].
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    /// Number of addressed recipients.
    pub total_recipients: u64,

    /// Number of successfully sent emails.
    pub sent_count: u64,

    /// Number of emails failed to be sent.
    pub failed_count: u64,

    /// Number of opened emails, if tracked.
    #[serde(default)]
    pub opened_count: Option<u64>,

    /// Number of emails with a clicked link, if tracked.
    #[serde(default)]
    pub clicked_count: Option<u64>,
}

/// Email campaign sent to an audience.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// ID of this [`Campaign`].
    #[serde(rename = "_id")]
    pub id: CampaignId,

    /// Name of this [`Campaign`].
    pub name: String,

    /// Subject of the sent emails.
    pub subject: String,

    /// Audience of this [`Campaign`], as reported by the backend.
    pub recipient_type: String,

    /// Delivery statistics.
    #[serde(default)]
    pub stats: CampaignStats,

    /// Delivery status.
    pub status: CampaignStatus,

    /// [`DateTime`] this [`Campaign`] was created at.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// [`DateTime`] the delivery completed at.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(default)]
    pub completed_at: Option<DeliveryDateTime>,
}

/// Content of an email.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Heading rendered above the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Body text.
    pub body: String,

    /// Text of the call-to-action button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,

    /// Link of the call-to-action button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
}

/// Request to render an email without sending it.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    /// Subject of the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// [`Content`] of the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// [`Template`] to render instead of the [`Content`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<template::Id>,
}

/// Rendered email.
#[derive(Clone, Debug, Deserialize)]
pub struct Preview {
    /// Rendered subject.
    pub subject: String,

    /// Rendered HTML body.
    pub html: String,
}

/// Email campaign ready to be dispatched.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Broadcast {
    /// Name of the campaign.
    pub name: String,

    /// Subject of the emails.
    pub subject: String,

    /// [`Content`] of the emails.
    pub content: Content,

    /// [`Template`] the emails are based on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<template::Id>,

    /// Audience of the campaign.
    pub recipient_type: RecipientType,

    /// Narrowing of the audience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<RecipientFilter>,

    /// [`DateTime`] to deliver the campaign at, instead of right away.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<ScheduleDateTime>,
}

/// Acknowledgement of a dispatched [`Broadcast`].
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispatch {
    /// ID of the created [`Campaign`].
    #[serde(rename = "_id")]
    pub id: CampaignId,

    /// Status of the created [`Campaign`], as reported by the backend.
    pub status: String,

    /// Number of addressed recipients, if known already.
    #[serde(default)]
    pub total_recipients: Option<u64>,
}

pub mod template {
    //! Email [`Template`] definitions.

    use serde::{Deserialize, Serialize};

    use super::{define_id, Content, CreationDateTime};

    define_id! {
        #[doc = "ID of a [`Template`]."]
        Id
    }

    /// Reusable email template.
    #[derive(Clone, Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Template {
        /// ID of this [`Template`].
        #[serde(rename = "_id")]
        pub id: Id,

        /// Name of this [`Template`].
        pub name: String,

        /// [`Category`] value of this [`Template`].
        pub category: String,

        /// Subject of the emails based on this [`Template`].
        pub subject: String,

        /// Audience this [`Template`] is meant for.
        #[serde(default)]
        pub target_audience: Option<String>,

        /// Indicator whether this [`Template`] may be used.
        pub is_active: bool,

        /// [`DateTime`] this [`Template`] was created at.
        ///
        /// [`DateTime`]: common::DateTime
        pub created_at: CreationDateTime,
    }

    /// Category of [`Template`]s.
    #[derive(Clone, Debug, Deserialize)]
    pub struct Category {
        /// Wire value.
        pub value: String,

        /// Human-readable name.
        pub label: String,

        /// Description of the [`Template`]s in this [`Category`].
        #[serde(default)]
        pub description: String,
    }

    /// [`Template`] to be created.
    #[derive(Clone, Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct New {
        /// Name of the [`Template`].
        pub name: String,

        /// [`Category`] value of the [`Template`].
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,

        /// Subject of the [`Template`].
        pub subject: String,

        /// Short text shown next to the subject in mail clients.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub preheader: Option<String>,

        /// [`Content`] of the [`Template`].
        pub content: Content,

        /// Audience the [`Template`] is meant for.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub target_audience: Option<String>,
    }
}
