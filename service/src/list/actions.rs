//! [`Action`]s an administrator may perform from the console.

use crate::{
    command::{
        send_email_campaign, send_push_notification, CreateEmailTemplate,
        DeleteEmailTemplate, DeleteNotification, SendEmailCampaign,
        SendNotificationToUser, SendPushNotification, SetAccountBlocked,
    },
    domain::{
        account::Blockable,
        email::{self, template, Template},
        notification::{self, Delivery},
    },
};

use super::{
    action::{Action, Prompt},
    toast::Toast,
};

/// Title of every failure [`Toast`].
const ERROR: &str = "Error";

/// Uppercases the first letter of the provided `word`.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// [`Action`] blocking or unblocking an account.
#[derive(Clone, Debug)]
pub struct ToggleBlock<Id> {
    /// ID of the account.
    pub id: Id,

    /// Name an administrator recognizes the account by.
    pub name: String,

    /// Noun of the account kind, like `user`.
    pub noun: &'static str,

    /// Indicator whether the account is being blocked.
    pub block: bool,
}

impl<Id: Clone> ToggleBlock<Id> {
    /// Creates a new [`ToggleBlock`] flipping the block state of the
    /// provided `account`.
    #[must_use]
    pub fn of<T: Blockable<Id = Id>>(account: &T) -> Self {
        Self {
            id: account.id().clone(),
            name: account.display_name().to_owned(),
            noun: T::NOUN,
            block: !account.is_blocked(),
        }
    }

    /// Returns the verb of this [`ToggleBlock`].
    const fn verb(&self) -> &'static str {
        if self.block {
            "block"
        } else {
            "unblock"
        }
    }
}

impl<Id: Clone> Action for ToggleBlock<Id> {
    type Command = SetAccountBlocked<Id>;
    type Ok = ();

    fn prompt(&self) -> Prompt {
        let verb = self.verb();
        Prompt {
            title: format!("{} {}?", capitalize(verb), capitalize(self.noun)),
            text: format!("Are you sure you want to {verb} {}?", self.name),
            confirm: format!("Yes, {verb}"),
        }
    }

    fn command(&self) -> Self::Command {
        SetAccountBlocked {
            id: self.id.clone(),
            blocked: self.block,
        }
    }

    fn success(&self, (): &()) -> Toast {
        let (noun, verb) = (capitalize(self.noun), self.verb());
        Toast::success("Success", format!("{noun} {verb}ed successfully"))
    }

    fn failure(&self, _: &str) -> Toast {
        Toast::error(ERROR, format!("Failed to {} {}", self.verb(), self.noun))
    }
}

/// [`Action`] sending a bulk email campaign.
#[derive(Clone, Debug)]
pub struct SendCampaign {
    /// Campaign to send.
    pub campaign: SendEmailCampaign,

    /// Number of recipients the campaign addresses.
    pub recipients: u64,
}

impl Action for SendCampaign {
    type Command = SendEmailCampaign;
    type Ok = email::Dispatch;

    fn validate(&self) -> Result<(), Toast> {
        use send_email_campaign::ExecutionError as E;

        self.campaign.validate().map_err(|e| match e {
            E::EmptySubject => Toast::warning(
                "Missing Subject",
                "Please enter an email subject.",
            ),
            E::EmptyBody => Toast::warning(
                "Missing Content",
                "Please enter email body content.",
            ),
            E::Backend(e) => Toast::warning(ERROR, e.to_string()),
        })
    }

    fn prompt(&self) -> Prompt {
        Prompt {
            title: "Send Email Campaign?".into(),
            text: format!(
                "This will send emails to {} recipients. \
                 This action cannot be undone.",
                self.recipients,
            ),
            confirm: "Yes, Send".into(),
        }
    }

    fn command(&self) -> Self::Command {
        self.campaign.clone()
    }

    fn success(&self, dispatch: &email::Dispatch) -> Toast {
        let total = dispatch.total_recipients.unwrap_or(self.recipients);
        Toast::success(
            "Email Sent!",
            format!("Campaign is {} to {total} recipients", dispatch.status),
        )
    }

    fn failure(&self, reason: &str) -> Toast {
        Toast::error(ERROR, reason)
    }
}

/// [`Action`] sending a push notification to an audience.
#[derive(Clone, Debug)]
pub struct SendPush {
    /// Notification to send.
    pub notification: SendPushNotification,

    /// Approximate number of devices the notification reaches.
    pub devices: u64,
}

impl Action for SendPush {
    type Command = SendPushNotification;
    type Ok = Delivery;

    fn validate(&self) -> Result<(), Toast> {
        use send_push_notification::ExecutionError as E;

        validate_push(&self.notification.content)?;
        self.notification.validate().map_err(|e| match e {
            E::NoRecipients => Toast::warning(
                "Missing Recipients",
                "Please enter at least one user ID.",
            ),
            E::NoTopic => {
                Toast::warning("Missing Topic", "Please enter a topic.")
            }
            e @ (E::EmptyTitle | E::EmptyBody | E::Backend(_)) => {
                Toast::warning(ERROR, e.to_string())
            }
        })
    }

    fn prompt(&self) -> Prompt {
        Prompt {
            title: "Send Push Notification?".into(),
            text: format!(
                "This will send notifications to approximately {} devices. \
                 Notifications are sent immediately and cannot be undone.",
                self.devices,
            ),
            confirm: "Yes, Send".into(),
        }
    }

    fn command(&self) -> Self::Command {
        self.notification.clone()
    }

    fn success(&self, delivery: &Delivery) -> Toast {
        Toast::success("Notification Sent!", delivered(delivery))
    }

    fn failure(&self, reason: &str) -> Toast {
        Toast::error(ERROR, reason)
    }
}

/// [`Action`] sending a push notification to a single user.
#[derive(Clone, Debug)]
pub struct SendToUser(pub SendNotificationToUser);

impl Action for SendToUser {
    type Command = SendNotificationToUser;
    type Ok = Delivery;

    fn validate(&self) -> Result<(), Toast> {
        if self.0.recipient.user_id.trim().is_empty() {
            return Err(Toast::warning(
                "Missing User",
                "Please enter a user ID.",
            ));
        }
        validate_push(&self.0.content)
    }

    fn prompt(&self) -> Prompt {
        Prompt {
            title: "Send Push Notification?".into(),
            text: format!(
                "This will send a notification to {} {}.",
                self.0.recipient.user_type, self.0.recipient.user_id,
            ),
            confirm: "Yes, Send".into(),
        }
    }

    fn command(&self) -> Self::Command {
        self.0.clone()
    }

    fn success(&self, delivery: &Delivery) -> Toast {
        Toast::success("Notification Sent!", delivered(delivery))
    }

    fn failure(&self, reason: &str) -> Toast {
        Toast::error(ERROR, reason)
    }
}

/// Checks the title and the body of a push notification are filled in.
fn validate_push(content: &notification::Content) -> Result<(), Toast> {
    if content.title.trim().is_empty() {
        return Err(Toast::warning(
            "Missing Title",
            "Please enter a notification title.",
        ));
    }
    if content.body.trim().is_empty() {
        return Err(Toast::warning(
            "Missing Body",
            "Please enter notification body content.",
        ));
    }
    Ok(())
}

/// Describes the provided [`Delivery`] of a push notification.
fn delivered(delivery: &Delivery) -> String {
    match delivery.result.as_ref().and_then(|r| r.success_count) {
        Some(n) => format!("Delivered to {n} devices"),
        None => format!("Notification is {}", delivery.notification.status),
    }
}

/// [`Action`] creating an email [`Template`].
#[derive(Clone, Debug)]
pub struct CreateTemplate(pub CreateEmailTemplate);

impl Action for CreateTemplate {
    type Command = CreateEmailTemplate;
    type Ok = Template;

    fn validate(&self) -> Result<(), Toast> {
        let missing = [
            ("Missing Name", "Please enter a template name.", &self.0.name),
            (
                "Missing Subject",
                "Please enter a template subject.",
                &self.0.subject,
            ),
            (
                "Missing Content",
                "Please enter template body content.",
                &self.0.content.body,
            ),
        ]
        .into_iter()
        .find(|(_, _, value)| value.trim().is_empty());
        missing.map_or(Ok(()), |(title, text, _)| {
            Err(Toast::warning(title, text))
        })
    }

    fn prompt(&self) -> Prompt {
        Prompt {
            title: "Create Template?".into(),
            text: format!("This will create the `{}` template.", self.0.name),
            confirm: "Yes, Create".into(),
        }
    }

    fn command(&self) -> Self::Command {
        self.0.clone()
    }

    fn success(&self, template: &Template) -> Toast {
        Toast::success(
            "Template Created!",
            format!("Template `{}` is created", template.name),
        )
    }

    fn failure(&self, reason: &str) -> Toast {
        Toast::error(ERROR, reason)
    }
}

/// [`Action`] deleting an email [`Template`].
#[derive(Clone, Debug)]
pub struct DeleteTemplate {
    /// ID of the [`Template`].
    pub id: template::Id,

    /// Name of the [`Template`].
    pub name: String,
}

impl Action for DeleteTemplate {
    type Command = DeleteEmailTemplate;
    type Ok = ();

    fn prompt(&self) -> Prompt {
        Prompt {
            title: "Delete Template?".into(),
            text: format!(
                "Are you sure you want to delete {}? \
                 This action cannot be undone.",
                self.name,
            ),
            confirm: "Yes, Delete".into(),
        }
    }

    fn command(&self) -> Self::Command {
        DeleteEmailTemplate {
            id: self.id.clone(),
        }
    }

    fn success(&self, (): &()) -> Toast {
        Toast::success("Deleted!", format!("Template `{}` deleted", self.name))
    }

    fn failure(&self, _: &str) -> Toast {
        Toast::error(ERROR, "Failed to delete template")
    }
}

/// [`Action`] deleting a notification from the history.
#[derive(Clone, Debug)]
pub struct DeleteFromHistory {
    /// ID of the notification.
    pub id: notification::Id,

    /// Title of the notification.
    pub title: String,
}

impl Action for DeleteFromHistory {
    type Command = DeleteNotification;
    type Ok = ();

    fn prompt(&self) -> Prompt {
        Prompt {
            title: "Delete Notification?".into(),
            text: format!(
                "Are you sure you want to delete {} from the history?",
                self.title,
            ),
            confirm: "Yes, Delete".into(),
        }
    }

    fn command(&self) -> Self::Command {
        DeleteNotification {
            id: self.id.clone(),
        }
    }

    fn success(&self, (): &()) -> Toast {
        Toast::success(
            "Deleted!",
            format!("Notification `{}` deleted", self.title),
        )
    }

    fn failure(&self, _: &str) -> Toast {
        Toast::error(ERROR, "Failed to delete notification")
    }
}

#[cfg(test)]
mod spec {
    use std::cell::{Cell, RefCell};

    use common::operations::{Insert, Perform};
    use tracerr::Traced;

    use crate::{
        command::{SendEmailCampaign, SendPushNotification},
        domain::{
            account::{Block, Unblock},
            email::{Audience, Content, RecipientType},
            job_seeker,
            notification::{self, Delivery},
        },
        infra::{backend, Backend},
        list::{
            action::{self, Confirm, Mutation, Prompt},
            toast::{Level, Notifier, Toast},
        },
        Service,
    };

    use super::{capitalize, Action as _, SendCampaign, SendPush, ToggleBlock};

    /// Backend blocking accounts, rejecting them if asked to.
    #[derive(Debug, Default)]
    struct Accounts {
        calls: Cell<usize>,
        reject: Option<&'static str>,
    }

    impl Accounts {
        fn answer(&self) -> Result<(), Traced<backend::Error>> {
            self.calls.set(self.calls.get() + 1);
            match self.reject {
                Some(msg) => Err(tracerr::new!(backend::Error::from(
                    backend::http::Error::Rejected(msg.into()),
                ))),
                None => Ok(()),
            }
        }
    }

    impl Backend<Perform<Block<job_seeker::Id>>> for Accounts {
        type Ok = ();
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            _: Perform<Block<job_seeker::Id>>,
        ) -> Result<(), Self::Err> {
            self.answer()
        }
    }

    impl Backend<Perform<Unblock<job_seeker::Id>>> for Accounts {
        type Ok = ();
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            _: Perform<Unblock<job_seeker::Id>>,
        ) -> Result<(), Self::Err> {
            self.answer()
        }
    }

    /// Backend counting the push notifications sent through it.
    #[derive(Debug, Default)]
    struct Pushes(Cell<usize>);

    impl Backend<Insert<notification::Broadcast>> for Pushes {
        type Ok = Delivery;
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            _: Insert<notification::Broadcast>,
        ) -> Result<Delivery, Self::Err> {
            self.0.set(self.0.get() + 1);
            Err(tracerr::new!(backend::Error::from(
                backend::http::Error::Rejected("Unexpected push".into()),
            )))
        }
    }

    /// [`Confirm`] remembering whether it was asked.
    #[derive(Debug, Default)]
    struct Asked(Cell<bool>);

    impl Confirm for Asked {
        async fn confirm(&self, _: &Prompt) -> bool {
            self.0.set(true);
            true
        }
    }

    #[derive(Debug, Default)]
    struct Toasts(RefCell<Vec<Toast>>);

    impl Notifier for Toasts {
        fn notify(&self, toast: Toast) {
            self.0.borrow_mut().push(toast);
        }
    }

    fn block(name: &str) -> ToggleBlock<job_seeker::Id> {
        ToggleBlock {
            id: job_seeker::Id::new("js1").unwrap(),
            name: name.into(),
            noun: "user",
            block: true,
        }
    }

    #[test]
    fn capitalizes_words() {
        assert_eq!(capitalize("block"), "Block");
        assert_eq!(capitalize("recruiter"), "Recruiter");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn prompts_with_target_name() {
        let prompt = block("Asha").prompt();
        assert_eq!(prompt.title, "Block User?");
        assert_eq!(prompt.text, "Are you sure you want to block Asha?");
        assert_eq!(prompt.confirm, "Yes, block");

        let mut unblock = block("Asha");
        unblock.block = false;
        assert_eq!(unblock.prompt().title, "Unblock User?");
    }

    #[tokio::test]
    async fn declined_action_issues_nothing() {
        let service = Service::new(Accounts::default());
        let toasts = Toasts::default();

        let res = action::run(&service, &block("Asha"), &false, &toasts).await;

        assert_eq!(res, Mutation::Declined);
        assert_eq!(service.backend().calls.get(), 0);
        assert!(toasts.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn confirmed_action_announces_success() {
        let service = Service::new(Accounts::default());
        let toasts = Toasts::default();

        let res = action::run(&service, &block("Asha"), &true, &toasts).await;

        assert_eq!(res, Mutation::Done(()));
        assert_eq!(service.backend().calls.get(), 1);
        let toasts = toasts.0.borrow();
        assert_eq!(toasts[0].level, Level::Success);
        assert_eq!(toasts[0].text, "User blocked successfully");
    }

    #[tokio::test]
    async fn failed_action_announces_error() {
        let service = Service::new(Accounts {
            reject: Some("Account is protected"),
            ..Accounts::default()
        });
        let toasts = Toasts::default();

        let res = action::run(&service, &block("Asha"), &true, &toasts).await;

        assert_eq!(res, Mutation::Failed);
        let toasts = toasts.0.borrow();
        assert_eq!(toasts[0].level, Level::Error);
        assert_eq!(toasts[0].text, "Failed to block user");
    }

    #[test]
    fn campaign_requires_subject_and_body() {
        let mut send = SendCampaign {
            campaign: SendEmailCampaign {
                name: None,
                subject: " ".into(),
                content: Content::default(),
                template_id: None,
                audience: Audience::from(RecipientType::All),
                scheduled_at: None,
            },
            recipients: 12,
        };
        assert_eq!(send.validate().unwrap_err().title, "Missing Subject");

        send.campaign.subject = "Hi".into();
        assert_eq!(send.validate().unwrap_err().title, "Missing Content");

        send.campaign.content.body = "Body".into();
        assert!(send.validate().is_ok());
        assert_eq!(
            send.prompt().text,
            "This will send emails to 12 recipients. \
             This action cannot be undone.",
        );
    }

    fn push(recipient_type: notification::RecipientType) -> SendPush {
        SendPush {
            notification: SendPushNotification {
                content: notification::Content {
                    title: "Hi".into(),
                    body: "Body".into(),
                    ..notification::Content::default()
                },
                recipient_type,
                recipients: vec![],
                topic: None,
                scheduled_at: None,
            },
            devices: 0,
        }
    }

    #[tokio::test]
    async fn push_without_addressees_is_invalid_before_prompt() {
        use notification::RecipientType as T;

        for (to, title) in [
            (T::Specific, "Missing Recipients"),
            (T::Topic, "Missing Topic"),
        ] {
            let service = Service::new(Pushes::default());
            let (asked, toasts) = (Asked::default(), Toasts::default());

            let res = action::run(&service, &push(to), &asked, &toasts).await;

            assert_eq!(res, Mutation::Invalid);
            assert!(!asked.0.get());
            assert_eq!(service.backend().0.get(), 0);
            let toasts = toasts.0.borrow();
            assert_eq!(toasts[0].level, Level::Warning);
            assert_eq!(toasts[0].title, title);
        }
    }

    #[test]
    fn push_to_audience_needs_no_addressees() {
        assert!(push(notification::RecipientType::All).validate().is_ok());
    }
}
