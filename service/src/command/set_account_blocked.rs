//! [`Command`] for blocking or unblocking an account.

use common::operations::Perform;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::account::{Block, Unblock},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for blocking or unblocking an account identified by `Id`.
#[derive(Clone, Debug)]
pub struct SetAccountBlocked<Id> {
    /// ID of the account to change.
    pub id: Id,

    /// Indicator whether the account should become blocked.
    pub blocked: bool,
}

impl<B, Id> Command<SetAccountBlocked<Id>> for Service<B>
where
    B: Backend<Perform<Block<Id>>, Ok = (), Err = Traced<backend::Error>>
        + Backend<Perform<Unblock<Id>>, Ok = (), Err = Traced<backend::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SetAccountBlocked<Id>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetAccountBlocked { id, blocked } = cmd;

        let res = if blocked {
            self.backend().execute(Perform(Block(id))).await
        } else {
            self.backend().execute(Perform(Unblock(id))).await
        };
        res.map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SetAccountBlocked`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
