//! [`Command`] for deleting a [`Notification`].

use common::operations::Delete;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Notification;
use crate::{
    domain::notification,
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Notification`] from the history.
#[derive(Clone, Debug, From)]
pub struct DeleteNotification {
    /// ID of the [`Notification`] to delete.
    pub id: notification::Id,
}

impl<B> Command<DeleteNotification> for Service<B>
where
    B: Backend<
        Delete<notification::Id>,
        Ok = (),
        Err = Traced<backend::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteNotification,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.backend()
            .execute(Delete(cmd.id))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteNotification`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
