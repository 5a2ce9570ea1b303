//! Push notifications page.

use service::{
    command::{SendNotificationToUser, SendPushNotification},
    domain::{notification::Recipient, Notification},
    list::{
        actions::{DeleteFromHistory, SendPush, SendToUser},
        Controller,
    },
    query::notifications,
    read::notification::history,
};

use crate::{args::Notifications, render, Context, Error, Service};

use super::{browse, fetch, mutate, perform, LookupError};

/// Runs the provided [`Notifications`] page command.
pub(super) async fn run(
    ctx: &Context,
    page: Notifications,
) -> Result<(), Error> {
    match page {
        Notifications::Stats => {
            let tokens = fetch(ctx, notifications::Tokens::all()).await?;
            println!("Registered Devices");
            print!(
                "{}",
                render::fields([
                    ("Total Devices", tokens.total),
                    ("Job Seeker Devices", tokens.by_user_type.job_seeker),
                    ("Recruiter Devices", tokens.by_user_type.recruiter),
                    (
                        "Job Seekers Reachable",
                        tokens.users_with_tokens.job_seeker,
                    ),
                    (
                        "Recruiters Reachable",
                        tokens.users_with_tokens.recruiter,
                    ),
                ]),
            );
            Ok(())
        }
        Notifications::History {
            status,
            recipient_type,
            everyone,
            pages,
        } => {
            let filter = history::Filter {
                status,
                recipient_type,
                admin_only: !everyone,
            };
            browse(ctx, &history_list(ctx), filter, pages).await
        }
        Notifications::Send {
            content,
            recipient_type,
            users,
            user_type,
            topic,
            at,
        } => {
            let tokens = fetch(ctx, notifications::Tokens::all()).await?;
            let recipients = users
                .into_iter()
                .filter(|id| !id.trim().is_empty())
                .map(|user_id| Recipient { user_id, user_type })
                .collect::<Vec<_>>();
            let devices = tokens.audience(recipient_type).unwrap_or_else(|| {
                u64::try_from(recipients.len()).unwrap_or(u64::MAX)
            });
            let action = SendPush {
                notification: SendPushNotification {
                    content: content.into(),
                    recipient_type,
                    recipients,
                    topic,
                    scheduled_at: at,
                },
                devices,
            };
            mutate(ctx, &history_list(ctx), &action).await.map(drop)
        }
        Notifications::SendToUser {
            user,
            user_type,
            content,
        } => {
            let action = SendToUser(SendNotificationToUser {
                recipient: Recipient {
                    user_id: user,
                    user_type,
                },
                content: content.into(),
            });
            perform(ctx, &action).await.map(drop)
        }
        Notifications::Show { id } => {
            let notification = fetch(ctx, notifications::ById::by(id))
                .await?
                .ok_or(LookupError::NotFound)?;
            print!("{}", describe(&notification));
            Ok(())
        }
        Notifications::Delete { id } => {
            let notification = fetch(ctx, notifications::ById::by(id))
                .await?
                .ok_or(LookupError::NotFound)?;
            let action = DeleteFromHistory {
                id: notification.id,
                title: notification.title,
            };
            mutate(ctx, &history_list(ctx), &action).await.map(drop)
        }
    }
}

/// Creates the list of sent [`Notification`]s.
fn history_list(
    ctx: &Context,
) -> Controller<Service, history::Node, history::Filter> {
    ctx.controller(
        ctx.list("Notification History", "notifications", false)
            .with_empty_label("No notifications sent yet"),
    )
}

/// Renders details of the provided [`Notification`].
fn describe(notification: &Notification) -> render::Table {
    let or_none = |value: Option<String>| value.unwrap_or_else(|| "-".into());
    let stats = notification.stats.unwrap_or_default();
    render::fields([
        ("ID", notification.id.to_string()),
        ("Title", notification.title.clone()),
        ("Body", notification.body.clone()),
        ("Image", or_none(notification.image_url.clone())),
        ("Link", or_none(notification.link.clone())),
        ("Audience", notification.recipient_type.to_string()),
        ("Topic", or_none(notification.topic.clone())),
        ("Status", notification.status.to_string()),
        ("Scheduled", render::date_time(notification.scheduled_at)),
        ("Sent", render::date_time(notification.sent_at)),
        ("Created", notification.created_at.to_date_time_string()),
        ("Recipients", stats.total_recipients.to_string()),
        ("Delivered", stats.sent.to_string()),
        ("Failed", stats.failed.to_string()),
    ])
}
