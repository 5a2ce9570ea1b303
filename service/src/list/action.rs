//! Confirmed mutations of list rows.

use std::{error::Error as StdError, future::Future};

use tracerr::Traced;

use crate::{infra::backend, Command};

use super::toast::{Notifier, Toast};

/// Confirmation shown before a mutation is issued.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prompt {
    /// Question being asked, like `Block User?`.
    pub title: String,

    /// Summary naming the target or the number of recipients.
    pub text: String,

    /// Label of the confirming answer.
    pub confirm: String,
}

/// Surface asking an administrator to confirm a [`Prompt`].
pub trait Confirm {
    /// Asks to confirm the provided [`Prompt`], resolving into `true` if
    /// confirmed.
    fn confirm(&self, prompt: &Prompt) -> impl Future<Output = bool>;
}

impl Confirm for bool {
    async fn confirm(&self, _: &Prompt) -> bool {
        *self
    }
}

/// High-impact operation requiring a confirmation.
pub trait Action {
    /// [`Command`] issued once confirmed.
    type Command;

    /// Result of the issued [`Command`].
    type Ok;

    /// Checks this [`Action`] may be issued at all.
    ///
    /// # Errors
    ///
    /// With a warning [`Toast`] describing the missing input.
    fn validate(&self) -> Result<(), Toast> {
        Ok(())
    }

    /// Returns the [`Prompt`] to confirm this [`Action`] with.
    fn prompt(&self) -> Prompt;

    /// Returns the [`Command`] to issue.
    fn command(&self) -> Self::Command;

    /// Returns the [`Toast`] announcing a success.
    fn success(&self, ok: &Self::Ok) -> Toast;

    /// Returns the [`Toast`] announcing a failure for the given `reason`.
    fn failure(&self, reason: &str) -> Toast;
}

/// Outcome of running an [`Action`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mutation<T> {
    /// [`Action`] didn't pass validation, nothing was issued.
    Invalid,

    /// Administrator declined the [`Prompt`], nothing was issued.
    Declined,

    /// Issued [`Command`] failed.
    Failed,

    /// Issued [`Command`] succeeded.
    Done(T),
}

impl<T> Mutation<T> {
    /// Indicates whether the [`Command`] was issued and succeeded.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Returns the human-readable reason of the provided [`Command`] error,
/// preferring the message reported by the backend.
fn reason<E: StdError + 'static>(err: &E) -> String {
    match err.source().and_then(|e| e.downcast_ref::<backend::Error>()) {
        Some(e) => e
            .server_message()
            .map_or_else(|| e.to_string(), ToOwned::to_owned),
        None => err.to_string(),
    }
}

/// Runs the provided [`Action`]: validates it, asks to [`Confirm`] it, and
/// issues its [`Command`], announcing the result via the [`Notifier`].
///
/// Nothing is issued unless the [`Action`] is valid and confirmed.
#[tracing::instrument(skip_all, fields(action = tracing::field::Empty))]
pub async fn run<S, A, C, N, E>(
    service: &S,
    action: &A,
    confirm: &C,
    notifier: &N,
) -> Mutation<A::Ok>
where
    S: Command<A::Command, Ok = A::Ok, Err = Traced<E>>,
    E: StdError + 'static,
    A: Action + ?Sized,
    C: Confirm + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(warning) = action.validate() {
        tracing::debug!(title = %warning.title, "action is invalid");
        notifier.notify(warning);
        return Mutation::Invalid;
    }

    let prompt = action.prompt();
    _ = tracing::Span::current().record("action", prompt.title.as_str());
    if !confirm.confirm(&prompt).await {
        tracing::debug!("action is declined");
        return Mutation::Declined;
    }

    match service.execute(action.command()).await {
        Ok(ok) => {
            notifier.notify(action.success(&ok));
            Mutation::Done(ok)
        }
        Err(e) => {
            tracing::error!("action failed: {e}");
            notifier.notify(action.failure(&reason::<E>(e.as_ref())));
            Mutation::Failed
        }
    }
}

#[cfg(test)]
mod spec {
    use crate::{command::set_account_blocked::ExecutionError, infra::backend};

    use super::reason;

    #[test]
    fn prefers_server_message() {
        let err = ExecutionError::Backend(backend::Error::from(
            backend::http::Error::Rejected("Recruiter not found".into()),
        ));

        assert_eq!(reason(&err), "Recruiter not found");
    }

    #[test]
    fn falls_back_to_transport_error() {
        let err = ExecutionError::Backend(backend::Error::from(
            backend::http::Error::NoData,
        ));

        assert_eq!(reason(&err), backend::http::Error::NoData.to_string());
    }
}
