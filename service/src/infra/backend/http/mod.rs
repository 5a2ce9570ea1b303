//! HTTP REST [`Backend`] implementation.

mod impls;
mod pagination;

use std::time::Duration;

use derive_more::{Debug, Display, Error as StdError, From};
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use secrecy::{ExposeSecret as _, SecretString};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize,
};
use smart_default::SmartDefault;
use tracerr::Traced;

use crate::infra::backend;
#[cfg(doc)]
use crate::infra::Backend;

/// HTTP REST [`Backend`] client.
#[derive(Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base [`Url`] every request path is appended to.
    base: Url,

    /// Bearer token attached to every request.
    #[debug(skip)]
    token: Option<SecretString>,
}

/// [`Http`] client configuration.
#[derive(Debug, SmartDefault)]
pub struct Config {
    /// Base URL of the REST backend.
    #[default("http://127.0.0.1:3000".to_owned())]
    pub url: String,

    /// Timeout of a single request.
    #[default(Duration::from_secs(30))]
    pub timeout: Duration,

    /// Bearer token to authorize requests with.
    pub token: Option<SecretString>,
}

impl Http {
    /// Creates a new [`Http`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the [`Config::url`] is not a valid HTTP(S) base URL, or the
    /// underlying client fails to initialize.
    pub fn new(conf: &Config) -> Result<Self, Traced<backend::Error>> {
        Self::build(conf).map_err(tracerr::map_from)
    }

    /// Builds a new [`Http`] client out of the provided [`Config`].
    fn build(conf: &Config) -> Result<Self, Traced<Error>> {
        let base = Url::parse(&conf.url)
            .ok()
            .filter(|u| {
                matches!(u.scheme(), "http" | "https") && !u.cannot_be_a_base()
            })
            .ok_or_else(|| tracerr::new!(Error::InvalidUrl(conf.url.clone())))?;
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        Ok(Self {
            client,
            base,
            token: conf
                .token
                .as_ref()
                .map(|t| SecretString::from(t.expose_secret())),
        })
    }

    /// Starts a request with the provided [`Method`] to the endpoint at the
    /// provided path `segments`.
    fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, Traced<backend::Error>> {
        self.url(segments)
            .map(|url| {
                let req = self.client.request(method, url);
                match &self.token {
                    Some(token) => req.bearer_auth(token.expose_secret()),
                    None => req,
                }
            })
            .map_err(tracerr::map_from)
    }

    /// Builds the [`Url`] of the endpoint at the provided path `segments`.
    fn url(&self, segments: &[&str]) -> Result<Url, Traced<Error>> {
        let mut url = self.base.clone();
        _ = url
            .path_segments_mut()
            .map_err(|()| {
                tracerr::new!(Error::InvalidUrl(self.base.to_string()))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends the provided request and unwraps the [`Envelope`] of its
    /// response.
    async fn send<D, M>(
        &self,
        req: RequestBuilder,
    ) -> Result<Envelope<D, M>, Traced<backend::Error>>
    where
        D: DeserializeOwned,
        M: DeserializeOwned,
    {
        self.exchange(req).await.map_err(tracerr::map_from)
    }

    /// Sends the provided request expecting its response to carry data.
    async fn fetch<D>(
        &self,
        req: RequestBuilder,
    ) -> Result<D, Traced<backend::Error>>
    where
        D: DeserializeOwned,
    {
        self.exchange::<D, IgnoredAny>(req)
            .await
            .and_then(|env| {
                env.data.ok_or_else(|| tracerr::new!(Error::NoData))
            })
            .map_err(tracerr::map_from)
    }

    /// Sends the provided request caring only about its success.
    async fn perform(
        &self,
        req: RequestBuilder,
    ) -> Result<(), Traced<backend::Error>> {
        self.exchange::<IgnoredAny, IgnoredAny>(req)
            .await
            .map(drop)
            .map_err(tracerr::map_from)
    }

    /// Performs the provided request, checking both its status and the
    /// `success` indicator of its [`Envelope`].
    async fn exchange<D, M>(
        &self,
        req: RequestBuilder,
    ) -> Result<Envelope<D, M>, Traced<Error>>
    where
        D: DeserializeOwned,
        M: DeserializeOwned,
    {
        let resp = req
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Rejection>(&body)
                .ok()
                .and_then(|r| r.message)
                .filter(|m| !m.is_empty());
            return Err(tracerr::new!(Error::Status { status, message }));
        }

        let envelope = serde_json::from_slice::<Envelope<D, M>>(&body)
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        if envelope.success == Some(false) {
            return Err(tracerr::new!(Error::Rejected(envelope.message)));
        }
        Ok(envelope)
    }
}

/// Common envelope of every backend response.
#[derive(Debug, Deserialize)]
struct Envelope<D, M = IgnoredAny> {
    /// Indicator whether the backend served the request.
    #[serde(default)]
    success: Option<bool>,

    /// Human-readable outcome description.
    #[serde(default)]
    message: String,

    /// Payload of the response.
    data: Option<D>,

    /// Metadata of the response, like pagination.
    meta: Option<M>,
}

/// Body of a non-2xx backend response.
#[derive(Debug, Deserialize)]
struct Rejection {
    /// Human-readable failure description.
    message: Option<String>,
}

/// [`Http`] backend [`Error`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Configured base URL is unusable.
    #[display("invalid backend URL `{_0}`")]
    #[from(ignore)]
    InvalidUrl(#[error(not(source))] String),

    /// Request failed to reach the backend or timed out.
    #[display("request failed: {_0}")]
    Transport(reqwest::Error),

    /// Backend responded with a non-successful status.
    #[display("backend responded with `{status}`")]
    #[from(ignore)]
    Status {
        /// Status of the response.
        status: StatusCode,

        /// Message the backend reported, if any.
        message: Option<String>,
    },

    /// Backend reported `success: false`.
    #[display("backend rejected the request: {_0}")]
    #[from(ignore)]
    Rejected(#[error(not(source))] String),

    /// Response body is malformed.
    #[display("malformed response: {_0}")]
    Decode(serde_json::Error),

    /// Response carries no expected data.
    #[display("response carries no data")]
    #[from(ignore)]
    NoData,
}

impl Error {
    /// Returns the message the backend reported along with this [`Error`],
    /// if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Rejected(message) => {
                Some(message.as_str()).filter(|m| !m.is_empty())
            }
            Self::InvalidUrl(_)
            | Self::Transport(_)
            | Self::Decode(_)
            | Self::NoData => None,
        }
    }

    /// Indicates whether this [`Error`] is a `404 Not Found` response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Status { status, .. } if *status == StatusCode::NOT_FOUND,
        )
    }
}
