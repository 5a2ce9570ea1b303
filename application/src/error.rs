//! [`Error`]-related definitions.

use std::fmt;

use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::infra::backend;
use tracerr::{Trace, Traced};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// Console [`Error`] reported to an administrator.
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an unexpected failure.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_ERROR",
            message: msg.to_string(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for backend::Error {
    fn try_as_error(&self) -> Option<Error> {
        let code = if self.is_not_found() {
            "NOT_FOUND"
        } else {
            "BACKEND_ERROR"
        };
        Some(Error {
            code,
            message: self
                .server_message()
                .map_or_else(|| self.to_string(), ToOwned::to_owned),
            backtrace: None,
        })
    }
}

#[cfg(test)]
mod spec {
    use service::infra::{backend, http};

    use super::{AsError as _, Error};

    define_error! {
        enum TestError {
            #[code = "TEST_CODE"]
            #[message = "Something went wrong"]
            Broken,
        }
    }

    #[test]
    fn defines_codes_and_messages() {
        let err = Error::from(TestError::Broken);

        assert_eq!(err.code, "TEST_CODE");
        assert_eq!(err.to_string(), "[TEST_CODE]: Something went wrong");
    }

    #[test]
    fn surfaces_server_message() {
        let err = backend::Error::from(http::Error::Rejected(
            "Job seeker not found".into(),
        ))
        .into_error();

        assert_eq!(err.code, "BACKEND_ERROR");
        assert_eq!(err.message, "Job seeker not found");
    }

    #[test]
    fn keeps_trace_of_traced_errors() {
        let err = tracerr::new!(backend::Error::from(http::Error::NoData))
            .into_error();

        assert!(err.backtrace.is_some());
    }
}
