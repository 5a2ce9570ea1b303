//! [`Command`] for sending a push [`Notification`] to an audience.

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::Notification;
use crate::{
    domain::{
        notification::{self, Content, Delivery, Recipient, RecipientType},
        ScheduleDateTime,
    },
    infra::{backend, Backend},
    Service,
};

use super::{is_blank, Command};

/// [`Command`] for sending a push [`Notification`] to an audience.
#[derive(Clone, Debug)]
pub struct SendPushNotification {
    /// [`Content`] of the [`Notification`].
    pub content: Content,

    /// Audience of the [`Notification`].
    pub recipient_type: RecipientType,

    /// Addressed users, for a [`RecipientType::Specific`] audience.
    pub recipients: Vec<Recipient>,

    /// Addressed topic, for a [`RecipientType::Topic`] audience.
    pub topic: Option<String>,

    /// [`DateTime`] to deliver the [`Notification`] at, instead of right
    /// away.
    ///
    /// [`DateTime`]: common::DateTime
    pub scheduled_at: Option<ScheduleDateTime>,
}

impl SendPushNotification {
    /// Checks this [`SendPushNotification`] may be dispatched.
    ///
    /// # Errors
    ///
    /// If the title or the body is blank, or the audience misses its
    /// addressees.
    pub fn validate(&self) -> Result<(), ExecutionError> {
        use ExecutionError as E;

        if is_blank(&self.content.title) {
            return Err(E::EmptyTitle);
        }
        if is_blank(&self.content.body) {
            return Err(E::EmptyBody);
        }
        match self.recipient_type {
            RecipientType::Topic
                if self.topic.as_deref().map_or(true, is_blank) =>
            {
                Err(E::NoTopic)
            }
            RecipientType::Specific if self.recipients.is_empty() => {
                Err(E::NoRecipients)
            }
            RecipientType::All
            | RecipientType::JobSeekers
            | RecipientType::Recruiters
            | RecipientType::Specific
            | RecipientType::Topic => Ok(()),
        }
    }
}

impl<B> Command<SendPushNotification> for Service<B>
where
    B: Backend<
        Insert<notification::Broadcast>,
        Ok = Delivery,
        Err = Traced<backend::Error>,
    >,
{
    type Ok = Delivery;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SendPushNotification,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        cmd.validate().map_err(tracerr::wrap!())?;

        let SendPushNotification {
            content,
            recipient_type,
            recipients,
            topic,
            scheduled_at,
        } = cmd;
        self.backend()
            .execute(Insert(notification::Broadcast {
                content,
                recipient_type,
                recipients,
                topic,
                scheduled_at,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`SendPushNotification`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),

    /// Title of the [`Notification`] is blank.
    #[display("Notification title is required")]
    #[from(ignore)]
    EmptyTitle,

    /// Body of the [`Notification`] is blank.
    #[display("Notification body is required")]
    #[from(ignore)]
    EmptyBody,

    /// [`RecipientType::Topic`] audience has no topic.
    #[display("Topic is required for a topic notification")]
    #[from(ignore)]
    NoTopic,

    /// [`RecipientType::Specific`] audience has no users.
    #[display("At least one recipient is required")]
    #[from(ignore)]
    NoRecipients,
}

#[cfg(test)]
mod spec {
    use std::cell::Cell;

    use common::operations::Insert;
    use tracerr::Traced;

    use crate::{
        domain::notification::{Broadcast, Content, Delivery, RecipientType},
        infra::{backend, Backend},
        Command as _, Service,
    };

    use super::{ExecutionError, SendPushNotification};

    /// Backend counting the dispatched broadcasts, failing each of them.
    #[derive(Debug, Default)]
    struct Counter(Cell<usize>);

    impl Backend<Insert<Broadcast>> for Counter {
        type Ok = Delivery;
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            _: Insert<Broadcast>,
        ) -> Result<Self::Ok, Self::Err> {
            self.0.set(self.0.get() + 1);
            Err(tracerr::new!(backend::Error::from(
                backend::http::Error::Rejected("FCM is down".into()),
            )))
        }
    }

    fn push(
        title: &str,
        body: &str,
        to: RecipientType,
    ) -> SendPushNotification {
        SendPushNotification {
            content: Content {
                title: title.into(),
                body: body.into(),
                ..Content::default()
            },
            recipient_type: to,
            recipients: vec![],
            topic: None,
            scheduled_at: None,
        }
    }

    #[tokio::test]
    async fn validates_before_dispatch() {
        let service = Service::new(Counter::default());

        let cases = [
            (push("", "b", RecipientType::All), "title"),
            (push("t", " ", RecipientType::All), "body"),
            (push("t", "b", RecipientType::Topic), "topic"),
            (push("t", "b", RecipientType::Specific), "recipients"),
        ];
        for (cmd, case) in cases {
            let err = service.execute(cmd).await.unwrap_err();
            assert!(
                !matches!(err.as_ref(), ExecutionError::Backend(_)),
                "{case}: {err}",
            );
        }
        assert_eq!(service.backend().0.get(), 0);
    }

    #[tokio::test]
    async fn surfaces_backend_failure() {
        let service = Service::new(Counter::default());

        let err = service
            .execute(push("t", "b", RecipientType::JobSeekers))
            .await
            .unwrap_err();

        let ExecutionError::Backend(e) = err.as_ref() else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(e.server_message(), Some("FCM is down"));
        assert_eq!(service.backend().0.get(), 1);
    }
}
