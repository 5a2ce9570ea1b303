//! Statistics shown on the insights pages.

use common::define_kind;
use serde::{Deserialize, Serialize};

use super::define_id;

/// Single statistics card.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Measured value.
    pub count: u64,

    /// Growth of the value, in percent.
    #[serde(default)]
    pub growth: Option<f64>,

    /// Human-readable growth caption, like `vs last month`.
    #[serde(default)]
    pub growth_label: Option<String>,

    /// Human-readable caption shown instead of the growth.
    #[serde(default)]
    pub sub_label: Option<String>,
}

/// Key metrics of the dashboard.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Number of registered users.
    pub total_users: Metric,

    /// Number of registered recruiters.
    pub total_recruiters: Metric,

    /// Number of open job posts.
    pub active_jobs: Metric,
}

/// Key metrics of the job seekers insights page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekers {
    /// Number of active profiles.
    pub active_profiles: Metric,

    /// Number of scheduled interviews.
    pub interviews_scheduled: Metric,

    /// Number of extended offers.
    pub offers_extended: Metric,

    /// Number of verified skills.
    pub skills_verified: Metric,
}

/// Key metrics of the recruiters performance page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiters {
    /// Number of active recruiters.
    pub active_recruiters: Metric,

    /// Number of open positions.
    pub open_positions: Metric,

    /// Number of conducted interviews.
    pub interviews_conducted: Metric,

    /// Number of confirmed hires.
    pub hires_confirmed: Metric,
}

/// Share of users belonging to a category.
#[derive(Clone, Debug, Deserialize)]
pub struct UserShare {
    /// Category value.
    pub category: String,

    /// Number of users in the category.
    pub count: u64,

    /// Human-readable category name.
    pub label: String,
}

/// Optional date range narrowing statistics.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First day of the range, like `2024-03-01`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Last day of the range, like `2024-03-31`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

define_id! {
    #[doc = "ID of a [`Transaction`]."]
    TransactionId
}

define_kind! {
    #[doc = "Status of a [`Transaction`]."]
    enum TransactionStatus {
        #[doc = "Payment is settled."]
        Completed = "Completed",

        #[doc = "Payment is being processed."]
        Processing = "Processing",

        #[doc = "Payment failed."]
        Failed = "Failed",
    }
}

/// Coin package purchase.
#[derive(Clone, Debug, Deserialize)]
pub struct Transaction {
    /// ID of this [`Transaction`].
    #[serde(rename = "_id")]
    pub id: TransactionId,

    /// Name of the purchasing user.
    pub user: String,

    /// Name of the purchased coin package.
    pub package: String,

    /// Paid amount, formatted with a currency.
    pub amount: String,

    /// Number of purchased coins.
    pub coins: u64,

    /// Purchase date, as formatted by the backend.
    pub date: String,

    /// [`TransactionStatus`].
    pub status: TransactionStatus,
}
