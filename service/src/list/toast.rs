//! Transient notifications shown to an administrator.

use common::define_kind;

define_kind! {
    #[doc = "Severity of a [`Toast`]."]
    enum Level {
        #[doc = "Operation succeeded."]
        Success = "success",

        #[doc = "Operation was not started because of invalid input."]
        Warning = "warning",

        #[doc = "Operation failed."]
        Error = "error",
    }
}

/// Transient notification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    /// [`Level`] of this [`Toast`].
    pub level: Level,

    /// Short title.
    pub title: String,

    /// Text explaining the title.
    pub text: String,
}

impl Toast {
    /// Creates a new [`Level::Success`] [`Toast`].
    #[must_use]
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Creates a new [`Level::Warning`] [`Toast`].
    #[must_use]
    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Creates a new [`Level::Error`] [`Toast`].
    #[must_use]
    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Surface showing [`Toast`]s.
pub trait Notifier {
    /// Shows the provided [`Toast`].
    fn notify(&self, toast: Toast);
}

/// [`Notifier`] writing [`Toast`]s into the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct Log;

impl Notifier for Log {
    fn notify(&self, toast: Toast) {
        let Toast { level, title, text } = toast;
        match level {
            Level::Success => tracing::info!(%title, %text, "toast"),
            Level::Warning => tracing::warn!(%title, %text, "toast"),
            Level::Error => tracing::error!(%title, %text, "toast"),
        }
    }
}
