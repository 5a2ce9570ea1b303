//! [`Notification`]-related [`Backend`] implementations.

use common::operations::{By, Delete, Insert, Select};
use reqwest::Method;
use serde::Serialize;
use tracerr::Traced;

use crate::{
    domain::{
        notification::{self, Delivery, TokenStats},
        Notification,
    },
    infra::{
        backend::{
            self,
            http::pagination::{self, Totals},
        },
        Backend, Http,
    },
    read,
};

use super::Paging;

/// Query parameters of the notifications history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryParams {
    /// Status to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<notification::Status>,

    /// Audience to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    recipient_type: Option<notification::RecipientType>,

    /// Indicator whether only notifications sent by administrators are
    /// listed.
    admin_only: bool,
}

impl Backend<Select<By<TokenStats, ()>>> for Http {
    type Ok = TokenStats;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<TokenStats, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = ["api", "notifications", "token-stats"];
        let req = self.request(Method::GET, &path)?;
        self.fetch(req).await
    }
}

impl
    Backend<
        Select<
            By<
                read::notification::history::Page,
                read::notification::history::Selector,
            >,
        >,
    > for Http
{
    type Ok = read::notification::history::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<
                read::notification::history::Page,
                read::notification::history::Selector,
            >,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::notification::history::Selector { arguments, filter } =
            by.into_inner();
        let req = self
            .request(Method::GET, &["api", "notifications", "history"])?
            .query(&Paging::from(arguments))
            .query(&HistoryParams {
                status: filter.status,
                recipient_type: filter.recipient_type,
                admin_only: filter.admin_only,
            });
        let env = self.send::<Vec<Notification>, Totals>(req).await?;
        let info = env.meta.map(Into::into);
        Ok(pagination::page(arguments, env.data.unwrap_or_default(), info))
    }
}

impl Backend<Select<By<Option<Notification>, notification::Id>>> for Http {
    type Ok = Option<Notification>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Notification>, notification::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::GET,
            &["api", "notifications", by.inner().as_ref()],
        )?;
        match self.fetch(req).await {
            Ok(n) => Ok(Some(n)),
            Err(e) if e.as_ref().is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl Backend<Insert<notification::Broadcast>> for Http {
    type Ok = Delivery;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(broadcast): Insert<notification::Broadcast>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, &["api", "notifications", "send"])?
            .json(&broadcast);
        self.fetch(req).await
    }
}

impl Backend<Insert<notification::Direct>> for Http {
    type Ok = Delivery;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(direct): Insert<notification::Direct>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, &["api", "notifications", "send-to-user"])?
            .json(&direct);
        self.fetch(req).await
    }
}

impl Backend<Delete<notification::Id>> for Http {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(id): Delete<notification::Id>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::DELETE,
            &["api", "notifications", id.as_ref()],
        )?;
        self.perform(req).await
    }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroU32;

    use axum::{
        routing::{get, post},
        Json, Router,
    };
    use common::{
        operations::{By, Insert, Select},
        pagination::Arguments,
    };
    use serde_json::{json, Value};

    use crate::{
        domain::{
            account::UserType,
            notification::{Content, Direct, Recipient, Status},
        },
        infra::Backend as _,
        read::notification::history::{Filter, Selector},
    };

    use super::super::spec::{recorded, serve};

    fn notification(id: &str) -> Value {
        json!({
            "_id": id,
            "title": "Hello",
            "body": "World",
            "recipientType": "all",
            "status": "sent",
            "isScheduled": false,
            "createdAt": "2024-03-05T10:00:00Z",
            "stats": { "totalRecipients": 3, "sent": 2, "failed": 1 },
        })
    }

    #[tokio::test]
    async fn reads_history_with_flat_totals() {
        let (router, journal) = recorded(Router::new().route(
            "/api/notifications/history",
            get(|| async {
                Json(json!({
                    "success": true,
                    "message": "ok",
                    "data": [notification("n1"), notification("n2")],
                    "meta": {
                        "page": 1,
                        "limit": 2,
                        "total": 5,
                        "totalPages": 3,
                    },
                }))
            }),
        ));
        let http = serve(router).await;

        let page = http
            .execute(Select(By::new(Selector {
                arguments: Arguments::first(NonZeroU32::new(2).unwrap()),
                filter: Filter {
                    status: Some(Status::Sent),
                    ..Filter::default()
                },
            })))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id.as_ref(), "n2");
        assert!(page.info.has_next_page);
        assert_eq!(page.info.total_count, 5);
        assert_eq!(
            journal.lock().unwrap().as_slice(),
            ["GET /api/notifications/history\
              ?page=1&limit=2&status=sent&adminOnly=true"],
        );
    }

    #[tokio::test]
    async fn sends_to_single_user() {
        let router = Router::new().route(
            "/api/notifications/send-to-user",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["userId"], "u1");
                assert_eq!(body["userType"], "Recruiter");
                assert_eq!(body["title"], "Ping");
                assert!(body.get("data").is_none());
                Json(json!({
                    "success": true,
                    "message": "sent",
                    "data": {
                        "notification": notification("n9"),
                        "result": { "success": true, "successCount": 1 },
                    },
                }))
            }),
        );
        let http = serve(router).await;

        let delivery = http
            .execute(Insert(Direct {
                recipient: Recipient {
                    user_id: "u1".into(),
                    user_type: UserType::Recruiter,
                },
                content: Content {
                    title: "Ping".into(),
                    body: "Pong".into(),
                    ..Content::default()
                },
            }))
            .await
            .unwrap();

        assert_eq!(delivery.notification.id.as_ref(), "n9");
        assert_eq!(delivery.result.unwrap().success_count, Some(1));
    }
}
