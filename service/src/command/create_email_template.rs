//! [`Command`] for creating an email [`Template`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::email::{template, Content, Template},
    infra::{backend, Backend},
    Service,
};

use super::{is_blank, Command};

/// [`Command`] for creating an email [`Template`].
#[derive(Clone, Debug)]
pub struct CreateEmailTemplate {
    /// Name of the [`Template`].
    pub name: String,

    /// [`template::Category`] value of the [`Template`].
    pub category: Option<String>,

    /// Subject of the [`Template`].
    pub subject: String,

    /// Short text shown next to the subject in mail clients.
    pub preheader: Option<String>,

    /// [`Content`] of the [`Template`].
    pub content: Content,

    /// Audience the [`Template`] is meant for.
    pub target_audience: Option<String>,
}

impl CreateEmailTemplate {
    /// Checks this [`CreateEmailTemplate`] may be dispatched.
    ///
    /// # Errors
    ///
    /// If the name, the subject or the body is blank.
    pub fn validate(&self) -> Result<(), ExecutionError> {
        use ExecutionError as E;

        if is_blank(&self.name) {
            return Err(E::EmptyName);
        }
        if is_blank(&self.subject) {
            return Err(E::EmptySubject);
        }
        if is_blank(&self.content.body) {
            return Err(E::EmptyBody);
        }
        Ok(())
    }
}

impl<B> Command<CreateEmailTemplate> for Service<B>
where
    B: Backend<
        Insert<template::New>,
        Ok = Template,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Template;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateEmailTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        cmd.validate().map_err(tracerr::wrap!())?;

        let CreateEmailTemplate {
            name,
            category,
            subject,
            preheader,
            content,
            target_audience,
        } = cmd;
        self.backend()
            .execute(Insert(template::New {
                name,
                category,
                subject,
                preheader,
                content,
                target_audience,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateEmailTemplate`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),

    /// Name of the [`Template`] is blank.
    #[display("Template name is required")]
    #[from(ignore)]
    EmptyName,

    /// Subject of the [`Template`] is blank.
    #[display("Template subject is required")]
    #[from(ignore)]
    EmptySubject,

    /// Body of the [`Template`] is blank.
    #[display("Template body is required")]
    #[from(ignore)]
    EmptyBody,
}
