//! [`Command`] for sending a push [`Notification`] to a single user.

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Notification;
use crate::{
    domain::notification::{self, Content, Delivery, Recipient},
    infra::{backend, Backend},
    Service,
};

use super::{is_blank, Command};

/// [`Command`] for sending a push [`Notification`] to a single user.
#[derive(Clone, Debug)]
pub struct SendNotificationToUser {
    /// Addressed user.
    pub recipient: Recipient,

    /// [`Content`] of the [`Notification`].
    pub content: Content,
}

impl SendNotificationToUser {
    /// Checks this [`SendNotificationToUser`] may be dispatched.
    ///
    /// # Errors
    ///
    /// If the user ID, the title or the body is blank.
    pub fn validate(&self) -> Result<(), ExecutionError> {
        use ExecutionError as E;

        if is_blank(&self.recipient.user_id) {
            return Err(E::NoUser);
        }
        if is_blank(&self.content.title) {
            return Err(E::EmptyTitle);
        }
        if is_blank(&self.content.body) {
            return Err(E::EmptyBody);
        }
        Ok(())
    }
}

impl<B> Command<SendNotificationToUser> for Service<B>
where
    B: Backend<
        Insert<notification::Direct>,
        Ok = Delivery,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Delivery;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SendNotificationToUser,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        cmd.validate().map_err(tracerr::wrap!())?;

        let SendNotificationToUser { recipient, content } = cmd;
        self.backend()
            .execute(Insert(notification::Direct { recipient, content }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SendNotificationToUser`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),

    /// Addressed user is not specified.
    #[display("User ID is required")]
    #[from(ignore)]
    NoUser,

    /// Title of the [`Notification`] is blank.
    #[display("Notification title is required")]
    #[from(ignore)]
    EmptyTitle,

    /// Body of the [`Notification`] is blank.
    #[display("Notification body is required")]
    #[from(ignore)]
    EmptyBody,
}
