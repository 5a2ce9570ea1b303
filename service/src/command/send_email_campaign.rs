//! [`Command`] for sending an email [`Campaign`].

use common::{operations::Insert, DateTime};
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::email::Campaign;
use crate::{
    domain::{
        email::{self, template, Audience, Content},
        ScheduleDateTime,
    },
    infra::{backend, Backend},
    Service,
};

use super::{is_blank, Command};

/// [`Command`] for sending an email [`Campaign`] to an [`Audience`].
#[derive(Clone, Debug)]
pub struct SendEmailCampaign {
    /// Name of the [`Campaign`].
    ///
    /// Defaults to `Campaign <date>` if blank.
    pub name: Option<String>,

    /// Subject of the emails.
    pub subject: String,

    /// [`Content`] of the emails.
    pub content: Content,

    /// [`template::Template`] the emails are based on.
    pub template_id: Option<template::Id>,

    /// [`Audience`] to send the emails to.
    pub audience: Audience,

    /// [`DateTime`] to deliver the [`Campaign`] at, instead of right away.
    pub scheduled_at: Option<ScheduleDateTime>,
}

impl SendEmailCampaign {
    /// Checks this [`SendEmailCampaign`] may be dispatched.
    ///
    /// # Errors
    ///
    /// If the subject or the body is blank.
    pub fn validate(&self) -> Result<(), ExecutionError> {
        use ExecutionError as E;

        if is_blank(&self.subject) {
            return Err(E::EmptySubject);
        }
        if is_blank(&self.content.body) {
            return Err(E::EmptyBody);
        }
        Ok(())
    }

    /// Converts this [`SendEmailCampaign`] into an [`email::Broadcast`].
    fn into_broadcast(self) -> email::Broadcast {
        let Self {
            name,
            subject,
            content,
            template_id,
            audience: Audience {
                recipient_type,
                filter,
            },
            scheduled_at,
        } = self;

        email::Broadcast {
            name: name.filter(|n| !is_blank(n)).unwrap_or_else(|| {
                format!("Campaign {}", DateTime::now().to_date_string())
            }),
            subject,
            content,
            template_id,
            recipient_type,
            filters: (!filter.is_empty()).then_some(filter),
            scheduled_at,
        }
    }
}

impl<B> Command<SendEmailCampaign> for Service<B>
where
    B: Backend<
        Insert<email::Broadcast>,
        Ok = email::Dispatch,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = email::Dispatch;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SendEmailCampaign,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        cmd.validate().map_err(tracerr::wrap!())?;

        self.backend()
            .execute(Insert(cmd.into_broadcast()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SendEmailCampaign`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),

    /// Subject of the emails is blank.
    #[display("Email subject is required")]
    #[from(ignore)]
    EmptySubject,

    /// Body of the emails is blank.
    #[display("Email body is required")]
    #[from(ignore)]
    EmptyBody,
}

#[cfg(test)]
mod spec {
    use std::cell::RefCell;

    use common::operations::Insert;
    use tracerr::Traced;

    use crate::{
        domain::email::{
            Audience, Broadcast, CampaignId, Content, Dispatch,
            RecipientFilter, RecipientType,
        },
        infra::{backend, Backend},
        Command as _, Service,
    };

    use super::{ExecutionError, SendEmailCampaign};

    #[derive(Debug, Default)]
    struct Outbox(RefCell<Vec<Broadcast>>);

    impl Backend<Insert<Broadcast>> for Outbox {
        type Ok = Dispatch;
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            Insert(broadcast): Insert<Broadcast>,
        ) -> Result<Self::Ok, Self::Err> {
            self.0.borrow_mut().push(broadcast);
            Ok(Dispatch {
                id: CampaignId::new("c1").unwrap(),
                status: "sending".into(),
                total_recipients: Some(3),
            })
        }
    }

    fn campaign(subject: &str, body: &str) -> SendEmailCampaign {
        SendEmailCampaign {
            name: None,
            subject: subject.into(),
            content: Content {
                body: body.into(),
                ..Content::default()
            },
            template_id: None,
            audience: Audience::from(RecipientType::All),
            scheduled_at: None,
        }
    }

    #[tokio::test]
    async fn rejects_blank_subject_without_sending() {
        let service = Service::new(Outbox::default());

        let err = service.execute(campaign("  ", "Body")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmptySubject));
        assert!(service.backend().0.borrow().is_empty());
    }

    #[tokio::test]
    async fn rejects_blank_body_without_sending() {
        let service = Service::new(Outbox::default());

        let err = service.execute(campaign("Hi", "\n")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmptyBody));
        assert!(service.backend().0.borrow().is_empty());
    }

    #[tokio::test]
    async fn defaults_campaign_name() {
        let service = Service::new(Outbox::default());

        let dispatch = service.execute(campaign("Hi", "Body")).await.unwrap();

        assert_eq!(dispatch.total_recipients, Some(3));
        let sent = service.backend().0.borrow();
        assert!(sent[0].name.starts_with("Campaign "));
        assert!(sent[0].filters.is_none());
    }

    #[tokio::test]
    async fn keeps_explicit_name_and_filters() {
        let service = Service::new(Outbox::default());
        let mut cmd = campaign("Hi", "Body");
        cmd.name = Some("Launch".into());
        cmd.audience = Audience {
            recipient_type: RecipientType::JobSeeker,
            filter: RecipientFilter {
                city: Some("Pune".into()),
                ..RecipientFilter::default()
            },
        };

        drop(service.execute(cmd).await.unwrap());

        let sent = service.backend().0.borrow();
        assert_eq!(sent[0].name, "Launch");
        assert_eq!(sent[0].recipient_type, RecipientType::JobSeeker);
        assert_eq!(
            sent[0].filters.as_ref().and_then(|f| f.city.as_deref()),
            Some("Pune"),
        );
    }
}
