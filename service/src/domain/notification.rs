//! Push [`Notification`] definitions.

use std::collections::HashMap;

use common::define_kind;
use serde::{Deserialize, Serialize};

use super::{
    account::UserType, define_id, CreationDateTime, DeliveryDateTime,
    ScheduleDateTime,
};

define_id! {
    #[doc = "ID of a [`Notification`]."]
    Id
}

define_kind! {
    #[doc = "Audience of a push [`Notification`]."]
    enum RecipientType {
        #[doc = "Every device with a registered token."]
        All = "all",

        #[doc = "Devices of job seekers."]
        JobSeekers = "jobSeekers",

        #[doc = "Devices of recruiters."]
        Recruiters = "recruiters",

        #[doc = "Devices of the explicitly listed users."]
        Specific = "specific",

        #[doc = "Devices subscribed to a topic."]
        Topic = "topic",
    }
}

define_kind! {
    #[doc = "Delivery status of a [`Notification`]."]
    enum Status {
        #[doc = "Notification is being delivered."]
        Sending = "sending",

        #[doc = "Notification is delivered."]
        Sent = "sent",

        #[doc = "Notification delivery failed."]
        Failed = "failed",

        #[doc = "Notification is planned for later."]
        Scheduled = "scheduled",
    }
}

/// Delivery statistics of a [`Notification`].
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of addressed devices.
    pub total_recipients: u64,

    /// Number of devices the [`Notification`] was delivered to.
    pub sent: u64,

    /// Number of devices the delivery failed for.
    pub failed: u64,
}

/// Push notification sent by an administrator.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// ID of this [`Notification`].
    #[serde(rename = "_id")]
    pub id: Id,

    /// Title of this [`Notification`].
    pub title: String,

    /// Body text of this [`Notification`].
    pub body: String,

    /// URL of an attached image.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Deep link opened on tap.
    #[serde(default)]
    pub link: Option<String>,

    /// Audience of this [`Notification`].
    pub recipient_type: RecipientType,

    /// Topic this [`Notification`] was sent to.
    #[serde(default)]
    pub topic: Option<String>,

    /// Delivery status.
    pub status: Status,

    /// Indicator whether this [`Notification`] was scheduled.
    #[serde(default)]
    pub is_scheduled: bool,

    /// [`DateTime`] this [`Notification`] is scheduled at.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(default)]
    pub scheduled_at: Option<ScheduleDateTime>,

    /// [`DateTime`] this [`Notification`] was sent at.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(default)]
    pub sent_at: Option<DeliveryDateTime>,

    /// [`DateTime`] this [`Notification`] was created at.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// Delivery statistics.
    #[serde(default)]
    pub stats: Option<Stats>,
}

/// User addressed by a [`RecipientType::Specific`] notification.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// ID of the user.
    pub user_id: String,

    /// [`UserType`] of the user.
    pub user_type: UserType,
}

/// Content of a push notification.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Title.
    pub title: String,

    /// Body text.
    pub body: String,

    /// URL of an attached image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Deep link opened on tap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Custom data delivered along.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, String>,
}

/// Push notification to be sent to an audience.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Broadcast {
    /// [`Content`] of the notification.
    #[serde(flatten)]
    pub content: Content,

    /// Audience of the notification.
    pub recipient_type: RecipientType,

    /// Addressed users, for a [`RecipientType::Specific`] audience.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<Recipient>,

    /// Addressed topic, for a [`RecipientType::Topic`] audience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// [`DateTime`] to deliver the notification at, instead of right away.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<ScheduleDateTime>,
}

/// Push notification to be sent to a single user.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Direct {
    /// Addressed user.
    #[serde(flatten)]
    pub recipient: Recipient,

    /// [`Content`] of the notification.
    #[serde(flatten)]
    pub content: Content,
}

/// Result of a push delivery attempt.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// Indicator whether the delivery succeeded.
    pub success: bool,

    /// Number of devices the delivery succeeded for.
    #[serde(default)]
    pub success_count: Option<u64>,

    /// Number of devices the delivery failed for.
    #[serde(default)]
    pub failure_count: Option<u64>,
}

/// Acknowledgement of a sent [`Broadcast`] or [`Direct`] notification.
#[derive(Clone, Debug, Deserialize)]
pub struct Delivery {
    /// Created [`Notification`].
    pub notification: Notification,

    /// [`Outcome`] of the delivery, if performed right away.
    #[serde(default)]
    pub result: Option<Outcome>,
}

/// Counts split by [`UserType`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct ByUserType {
    /// Count of job seekers.
    #[serde(rename = "JobSeeker", default)]
    pub job_seeker: u64,

    /// Count of recruiters.
    #[serde(rename = "Recruiter", default)]
    pub recruiter: u64,
}

/// Statistics of registered push tokens.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    /// Total number of registered tokens.
    pub total: u64,

    /// Number of tokens per [`UserType`].
    pub by_user_type: ByUserType,

    /// Number of users having at least one token, per [`UserType`].
    pub users_with_tokens: ByUserType,
}

impl TokenStats {
    /// Returns the approximate number of devices a [`Broadcast`] to the
    /// provided [`RecipientType`] reaches.
    ///
    /// [`None`] is returned for audiences not measurable by these
    /// [`TokenStats`].
    #[must_use]
    pub const fn audience(&self, to: RecipientType) -> Option<u64> {
        match to {
            RecipientType::All => Some(self.total),
            RecipientType::JobSeekers => Some(self.by_user_type.job_seeker),
            RecipientType::Recruiters => Some(self.by_user_type.recruiter),
            RecipientType::Specific | RecipientType::Topic => None,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{ByUserType, RecipientType, TokenStats};

    #[test]
    fn measures_audience_by_user_type() {
        let stats = TokenStats {
            total: 120,
            by_user_type: ByUserType {
                job_seeker: 90,
                recruiter: 30,
            },
            users_with_tokens: ByUserType::default(),
        };

        assert_eq!(stats.audience(RecipientType::All), Some(120));
        assert_eq!(stats.audience(RecipientType::JobSeekers), Some(90));
        assert_eq!(stats.audience(RecipientType::Recruiters), Some(30));
        assert_eq!(stats.audience(RecipientType::Topic), None);
    }
}
