//! [`Backend`]-related implementations.

#[cfg(feature = "http")]
pub mod http;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "http")]
pub use self::http::Http;

/// Backend operation.
pub use common::Handler as Backend;

/// [`Backend`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "http")]
    /// [`Http`] error.
    Http(http::Error),
}

impl Error {
    /// Returns the message the backend reported along with this [`Error`],
    /// if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match *self {
            #[cfg(feature = "http")]
            Self::Http(ref e) => e.server_message(),
        }
    }

    /// Indicates whether this [`Error`] means the requested entity doesn't
    /// exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match *self {
            #[cfg(feature = "http")]
            Self::Http(ref e) => e.is_not_found(),
        }
    }
}
