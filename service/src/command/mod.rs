//! [`Command`] definition.

pub mod create_email_template;
pub mod delete_email_template;
pub mod delete_notification;
pub mod send_email_campaign;
pub mod send_notification_to_user;
pub mod send_push_notification;
pub mod set_account_blocked;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_email_template::CreateEmailTemplate,
    delete_email_template::DeleteEmailTemplate,
    delete_notification::DeleteNotification,
    send_email_campaign::SendEmailCampaign,
    send_notification_to_user::SendNotificationToUser,
    send_push_notification::SendPushNotification,
    set_account_blocked::SetAccountBlocked,
};

/// Indicates whether the provided `text` has nothing but whitespace.
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
