//! [`Command`] for deleting an email [`Template`].

use common::operations::Delete;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::email::Template;
use crate::{
    domain::email::template,
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for deleting an email [`Template`].
#[derive(Clone, Debug, From)]
pub struct DeleteEmailTemplate {
    /// ID of the [`Template`] to delete.
    pub id: template::Id,
}

impl<B> Command<DeleteEmailTemplate> for Service<B>
where
    B: Backend<Delete<template::Id>, Ok = (), Err = Traced<backend::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteEmailTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.backend()
            .execute(Delete(cmd.id))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`DeleteEmailTemplate`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
