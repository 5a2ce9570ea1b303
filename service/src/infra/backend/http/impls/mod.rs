//! [`Backend`] implementations of the [`Http`] client.
//!
//! [`Backend`]: crate::infra::Backend
//! [`Http`]: super::Http

mod dashboard;
mod email;
mod job_seeker;
mod notification;
mod recruiter;

use common::pagination::Arguments;
use serde::Serialize;

/// Page-number query parameters of every list endpoint.
#[derive(Clone, Copy, Debug, Serialize)]
struct Paging {
    /// Requested page number.
    page: u32,

    /// Requested page size.
    limit: u32,
}

impl From<Arguments> for Paging {
    fn from(args: Arguments) -> Self {
        Self {
            page: args.page(),
            limit: args.limit().get(),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{
        future::IntoFuture as _,
        sync::{Arc, Mutex},
    };

    use axum::Router;
    use secrecy::SecretString;
    use tokio::net::TcpListener;

    use crate::infra::{http, Http};

    /// Requests received by a mock backend, as `METHOD /path?query`.
    pub(super) type Journal = Arc<Mutex<Vec<String>>>;

    /// Serves the provided [`Router`] on an ephemeral port and returns an
    /// [`Http`] client pointed at it.
    pub(super) async fn serve(router: Router) -> Http {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(tokio::spawn(axum::serve(listener, router).into_future()));

        Http::new(&http::Config {
            url: format!("http://{addr}/"),
            token: Some(SecretString::from("t0ken")),
            ..http::Config::default()
        })
        .unwrap()
    }

    /// Wraps the provided [`Router`] to record every request into the
    /// returned [`Journal`].
    pub(super) fn recorded(router: Router) -> (Router, Journal) {
        let journal = Journal::default();
        let log = Arc::clone(&journal);
        let router = router.layer(axum::middleware::from_fn(
            move |req: axum::extract::Request, next: axum::middleware::Next| {
                let line = format!(
                    "{} {}",
                    req.method(),
                    req.uri()
                        .path_and_query()
                        .map_or("", |p| p.as_str()),
                );
                log.lock().unwrap().push(line);
                next.run(req)
            },
        ));
        (router, journal)
    }
}
