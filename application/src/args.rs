//! [`Args`] definitions.

use std::num::NonZeroU32;

use clap::{Parser, Subcommand};
use common::DateTime;
use service::domain::{
    account::{self, UserType},
    email::{self, CampaignId},
    job_seeker, notification, recruiter,
    stats::DateRange,
    ScheduleDateTime,
};

/// Administration console of the jobs marketplace.
#[derive(Debug, Parser)]
#[command(name = "admin", version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Confirm every action without asking.
    #[arg(short, long)]
    pub yes: bool,

    /// Console page to open.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Console page.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Key metrics, user distribution and recent transactions.
    Dashboard {
        /// Period of the metrics.
        #[command(flatten)]
        period: Period,

        /// Number of transaction pages to load.
        #[arg(long, default_value = "1")]
        pages: NonZeroU32,
    },

    /// Job seekers insights and management.
    #[command(subcommand)]
    JobSeekers(JobSeekers),

    /// Recruiters insights and management.
    #[command(subcommand)]
    Recruiters(Recruiters),

    /// Bulk email marketing.
    #[command(subcommand)]
    Email(Email),

    /// Push notifications.
    #[command(subcommand)]
    Notifications(Notifications),
}

/// Period to narrow statistics with.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Period {
    /// Start date of the period, like `2024-03-01`.
    #[arg(long)]
    pub from: Option<String>,

    /// End date of the period, like `2024-03-31`.
    #[arg(long)]
    pub to: Option<String>,
}

impl From<Period> for DateRange {
    fn from(period: Period) -> Self {
        Self {
            start_date: period.from,
            end_date: period.to,
        }
    }
}

/// Job seekers page.
#[derive(Debug, Subcommand)]
pub enum JobSeekers {
    /// Key metrics of job seekers.
    Stats(Period),

    /// Categories job seekers are looking in.
    Categories,

    /// Top job seekers.
    Top {
        /// Free text to search in names and skills.
        #[arg(long)]
        search: Option<String>,

        /// Category to match.
        #[arg(long)]
        category: Option<String>,

        /// Period of the activity.
        #[command(flatten)]
        period: Period,

        /// Number of pages to load.
        #[arg(long, default_value = "1")]
        pages: NonZeroU32,
    },

    /// All job seekers.
    List {
        /// Free text to search in names, phones and emails.
        #[arg(long)]
        search: Option<String>,

        /// Account status to match.
        #[arg(long)]
        status: Option<account::Status>,

        /// Block state to match, `true` or `false`.
        #[arg(long)]
        blocked: Option<account::BlockState>,

        /// Category to match.
        #[arg(long)]
        category: Option<String>,

        /// Number of pages to load.
        #[arg(long, default_value = "1")]
        pages: NonZeroU32,
    },

    /// Blocks a job seeker.
    Block {
        /// ID of the job seeker.
        id: job_seeker::Id,
    },

    /// Unblocks a job seeker.
    Unblock {
        /// ID of the job seeker.
        id: job_seeker::Id,
    },
}

/// Recruiters page.
#[derive(Debug, Subcommand)]
pub enum Recruiters {
    /// Key metrics of recruiters.
    Stats(Period),

    /// Activity of recruiters.
    Activity {
        /// Free text to search in company and recruiter names.
        #[arg(long)]
        search: Option<String>,

        /// Period of the activity.
        #[command(flatten)]
        period: Period,

        /// Number of pages to load.
        #[arg(long, default_value = "1")]
        pages: NonZeroU32,
    },

    /// All recruiters.
    List {
        /// Free text to search in company names, names and phones.
        #[arg(long)]
        search: Option<String>,

        /// Account status to match.
        #[arg(long)]
        status: Option<account::Status>,

        /// Block state to match, `true` or `false`.
        #[arg(long)]
        blocked: Option<account::BlockState>,

        /// Number of pages to load.
        #[arg(long, default_value = "1")]
        pages: NonZeroU32,
    },

    /// Blocks a recruiter.
    Block {
        /// ID of the recruiter.
        id: recruiter::Id,
    },

    /// Unblocks a recruiter.
    Unblock {
        /// ID of the recruiter.
        id: recruiter::Id,
    },
}

/// Audience of an email campaign.
#[derive(Clone, Debug, clap::Args)]
pub struct Audience {
    /// Type of the recipients.
    #[arg(long = "to", default_value = "all")]
    pub recipient_type: email::RecipientType,

    /// Category of the recipients.
    #[arg(long)]
    pub category: Option<String>,

    /// Status of the recipients.
    #[arg(long)]
    pub status: Option<String>,

    /// State the recipients live in.
    #[arg(long)]
    pub state: Option<String>,

    /// City the recipients live in.
    #[arg(long)]
    pub city: Option<String>,
}

impl From<Audience> for email::Audience {
    fn from(audience: Audience) -> Self {
        let Audience {
            recipient_type,
            category,
            status,
            state,
            city,
        } = audience;
        Self {
            recipient_type,
            filter: email::RecipientFilter {
                category,
                status,
                state,
                city,
            },
        }
    }
}

/// Content of an email.
#[derive(Clone, Debug, clap::Args)]
pub struct EmailContent {
    /// Subject of the email.
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Body of the email.
    #[arg(long, default_value = "")]
    pub body: String,

    /// Heading of the email body.
    #[arg(long)]
    pub title: Option<String>,

    /// Text of the call-to-action button.
    #[arg(long)]
    pub cta_text: Option<String>,

    /// Link of the call-to-action button.
    #[arg(long)]
    pub cta_link: Option<String>,
}

impl EmailContent {
    /// Splits this [`EmailContent`] into the subject and the
    /// [`email::Content`].
    #[must_use]
    pub fn into_parts(self) -> (String, email::Content) {
        let Self {
            subject,
            body,
            title,
            cta_text,
            cta_link,
        } = self;
        let content = email::Content {
            title,
            body,
            cta_text,
            cta_link,
        };
        (subject, content)
    }
}

/// Email marketing page.
#[derive(Debug, Subcommand)]
pub enum Email {
    /// Number of recipients of an audience.
    Recipients(Audience),

    /// Categories of email templates.
    Categories,

    /// Renders an email without sending it.
    Preview {
        /// Content of the email.
        #[command(flatten)]
        content: EmailContent,

        /// ID of the template to render.
        #[arg(long)]
        template: Option<email::template::Id>,
    },

    /// Sends a bulk email campaign.
    Send {
        /// Name of the campaign.
        #[arg(long)]
        name: Option<String>,

        /// Content of the email.
        #[command(flatten)]
        content: EmailContent,

        /// ID of the template to base the email on.
        #[arg(long)]
        template: Option<email::template::Id>,

        /// Audience of the campaign.
        #[command(flatten)]
        audience: Audience,

        /// RFC 3339 date and time to send the campaign at.
        #[arg(long, value_parser = schedule)]
        at: Option<ScheduleDateTime>,
    },

    /// Sent campaigns.
    Campaigns {
        /// Number of pages to load.
        #[arg(long, default_value = "1")]
        pages: NonZeroU32,
    },

    /// Details of a single campaign.
    Campaign {
        /// ID of the campaign.
        id: CampaignId,
    },

    /// Email templates.
    Templates {
        /// Category to match.
        #[arg(long)]
        category: Option<String>,

        /// Target audience to match.
        #[arg(long)]
        audience: Option<String>,

        /// Activity to match.
        #[arg(long)]
        active: Option<bool>,
    },

    /// Creates an email template.
    CreateTemplate {
        /// Name of the template.
        #[arg(long, default_value = "")]
        name: String,

        /// Category of the template.
        #[arg(long)]
        category: Option<String>,

        /// Preview text shown after the subject.
        #[arg(long)]
        preheader: Option<String>,

        /// Target audience of the template.
        #[arg(long)]
        audience: Option<String>,

        /// Content of the template.
        #[command(flatten)]
        content: EmailContent,
    },

    /// Deletes an email template.
    DeleteTemplate {
        /// ID of the template.
        id: email::template::Id,
    },
}

/// Content of a push notification.
#[derive(Clone, Debug, clap::Args)]
pub struct PushContent {
    /// Title of the notification.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Body of the notification.
    #[arg(long, default_value = "")]
    pub body: String,

    /// URL of the image attached to the notification.
    #[arg(long)]
    pub image_url: Option<String>,

    /// Deep link opened by the notification.
    #[arg(long)]
    pub link: Option<String>,

    /// Custom data attached to the notification, as `KEY=VALUE`.
    #[arg(long = "data", value_parser = pair)]
    pub data: Vec<(String, String)>,
}

impl From<PushContent> for notification::Content {
    fn from(content: PushContent) -> Self {
        let PushContent {
            title,
            body,
            image_url,
            link,
            data,
        } = content;
        Self {
            title,
            body,
            image_url: image_url.filter(|u| !u.trim().is_empty()),
            link: link.filter(|l| !l.trim().is_empty()),
            data: data.into_iter().collect(),
        }
    }
}

/// Push notifications page.
#[derive(Debug, Subcommand)]
pub enum Notifications {
    /// Statistics of registered devices.
    Stats,

    /// History of sent notifications.
    History {
        /// Delivery status to match.
        #[arg(long)]
        status: Option<notification::Status>,

        /// Audience to match.
        #[arg(long = "to")]
        recipient_type: Option<notification::RecipientType>,

        /// List notifications sent by anyone, not only administrators.
        #[arg(long)]
        everyone: bool,

        /// Number of pages to load.
        #[arg(long, default_value = "1")]
        pages: NonZeroU32,
    },

    /// Sends a notification to an audience.
    Send {
        /// Content of the notification.
        #[command(flatten)]
        content: PushContent,

        /// Audience of the notification.
        #[arg(long = "to", default_value = "all")]
        recipient_type: notification::RecipientType,

        /// Users addressed by a `specific` notification.
        #[arg(long = "user", value_delimiter = ',')]
        users: Vec<String>,

        /// Type of the users addressed by a `specific` notification.
        #[arg(long, default_value = "JobSeeker")]
        user_type: UserType,

        /// Topic addressed by a `topic` notification.
        #[arg(long)]
        topic: Option<String>,

        /// RFC 3339 date and time to send the notification at.
        #[arg(long, value_parser = schedule)]
        at: Option<ScheduleDateTime>,
    },

    /// Sends a notification to a single user.
    SendToUser {
        /// ID of the user.
        user: String,

        /// Type of the user.
        #[arg(long, default_value = "JobSeeker")]
        user_type: UserType,

        /// Content of the notification.
        #[command(flatten)]
        content: PushContent,
    },

    /// Details of a single notification.
    Show {
        /// ID of the notification.
        id: notification::Id,
    },

    /// Deletes a notification from the history.
    Delete {
        /// ID of the notification.
        id: notification::Id,
    },
}

/// Parses a [`ScheduleDateTime`] out of an RFC 3339 string.
fn schedule(
    raw: &str,
) -> Result<ScheduleDateTime, common::datetime::ParseError> {
    DateTime::from_rfc3339(raw).map(DateTime::coerce)
}

/// Parses a `KEY=VALUE` pair.
fn pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim().to_owned(), value.to_owned()))
        .ok_or_else(|| format!("`{raw}` is not a `KEY=VALUE` pair"))
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use service::domain::{account, notification};

    use super::{Args, Command, JobSeekers, Notifications};

    #[test]
    fn parses_list_filters() {
        let args = Args::try_parse_from([
            "admin",
            "--yes",
            "job-seekers",
            "list",
            "--status",
            "Active",
            "--blocked",
            "true",
            "--pages",
            "3",
        ])
        .unwrap();

        assert!(args.yes);
        let Command::JobSeekers(JobSeekers::List {
            status,
            blocked,
            pages,
            ..
        }) = args.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(status, Some(account::Status::Active));
        assert_eq!(blocked, Some(account::BlockState::Blocked));
        assert_eq!(pages.get(), 3);
    }

    #[test]
    fn parses_push_audience() {
        let args = Args::try_parse_from([
            "admin",
            "notifications",
            "send",
            "--title",
            "Hi",
            "--body",
            "There",
            "--to",
            "specific",
            "--user",
            "u1,u2",
            "--data",
            "screen=jobs",
        ])
        .unwrap();

        let Command::Notifications(Notifications::Send {
            content,
            recipient_type,
            users,
            ..
        }) = args.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(recipient_type, notification::RecipientType::Specific);
        assert_eq!(users, ["u1", "u2"]);
        assert_eq!(content.data, [("screen".to_owned(), "jobs".to_owned())]);
    }

    #[test]
    fn rejects_unknown_kinds() {
        assert!(Args::try_parse_from([
            "admin",
            "recruiters",
            "list",
            "--status",
            "Sleeping",
        ])
        .is_err());
        assert!(Args::try_parse_from([
            "admin",
            "notifications",
            "send",
            "--data",
            "=oops",
        ])
        .is_err());
    }
}
