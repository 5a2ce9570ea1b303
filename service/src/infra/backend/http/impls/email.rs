//! Email marketing [`Backend`] implementations.

use common::operations::{By, Delete, Insert, Select};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracerr::Traced;

use crate::{
    domain::email::{
        self, template, Audience, Campaign, CampaignId, Preview,
        PreviewRequest, RecipientCount, RecipientType, Template,
    },
    infra::{
        backend::{
            self,
            http::pagination::{self, Listed, Meta},
        },
        Backend, Http,
    },
    read,
};

use super::Paging;

/// Query parameters of the recipient count request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipientParams {
    /// Audience to count.
    recipient_type: RecipientType,
}

/// Query parameters of the templates list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateParams<'a> {
    /// Category to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,

    /// Target audience to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    target_audience: Option<&'a str>,

    /// Activity to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    is_active: Option<bool>,
}

/// `data` carrying a single [`Campaign`].
#[derive(Debug, Deserialize)]
struct CampaignData<T> {
    /// Reported campaign.
    campaign: T,
}

/// `data` carrying a single [`Template`].
#[derive(Debug, Deserialize)]
struct TemplateData {
    /// Reported template.
    template: Template,
}

/// `data` carrying [`Template`]s.
#[derive(Debug, Deserialize)]
struct TemplatesData {
    /// Reported templates.
    templates: Vec<Template>,
}

/// `data` carrying [`template::Category`]s.
#[derive(Debug, Deserialize)]
struct CategoriesData {
    /// Reported categories.
    categories: Vec<template::Category>,
}

impl Backend<Select<By<RecipientCount, Audience>>> for Http {
    type Ok = RecipientCount;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<RecipientCount, Audience>>,
    ) -> Result<Self::Ok, Self::Err> {
        let audience = by.into_inner();
        let req = self
            .request(Method::GET, &["api", "admin", "email", "recipients"])?
            .query(&RecipientParams {
                recipient_type: audience.recipient_type,
            })
            .query(&audience.filter);
        self.fetch(req).await
    }
}

impl Backend<Select<By<Preview, PreviewRequest>>> for Http {
    type Ok = Preview;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Preview, PreviewRequest>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, &["api", "admin", "email", "preview"])?
            .json(by.inner());
        self.fetch(req).await
    }
}

impl Backend<Insert<email::Broadcast>> for Http {
    type Ok = email::Dispatch;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(broadcast): Insert<email::Broadcast>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, &["api", "admin", "email", "send"])?
            .json(&broadcast);
        Ok(self
            .fetch::<CampaignData<email::Dispatch>>(req)
            .await?
            .campaign)
    }
}

impl
    Backend<
        Select<
            By<read::email::campaigns::Page, read::email::campaigns::Selector>,
        >,
    > for Http
{
    type Ok = read::email::campaigns::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::email::campaigns::Page, read::email::campaigns::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let arguments = by.into_inner().arguments;
        let req = self
            .request(Method::GET, &["api", "admin", "email", "campaigns"])?
            .query(&Paging::from(arguments));
        let env = self.send::<Listed<Campaign>, Meta>(req).await?;
        let items = env.data.map(|d| d.items).unwrap_or_default();
        let info = env.meta.and_then(|m| m.pagination).map(Into::into);
        Ok(pagination::page(arguments, items, info))
    }
}

impl Backend<Select<By<Option<Campaign>, CampaignId>>> for Http {
    type Ok = Option<Campaign>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Campaign>, CampaignId>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::GET,
            &["api", "admin", "email", "campaigns", by.inner().as_ref()],
        )?;
        match self.fetch::<CampaignData<Campaign>>(req).await {
            Ok(data) => Ok(Some(data.campaign)),
            Err(e) if e.as_ref().is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl Backend<Select<By<read::email::Templates, read::email::TemplateFilter>>>
    for Http
{
    type Ok = read::email::Templates;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::email::Templates, read::email::TemplateFilter>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        let req = self
            .request(Method::GET, &["api", "admin", "email", "templates"])?
            .query(&TemplateParams {
                category: filter.category.as_deref(),
                target_audience: filter.target_audience.as_deref(),
                is_active: filter.is_active,
            });
        let data = self.fetch::<TemplatesData>(req).await?;
        Ok(read::email::Templates(data.templates))
    }
}

impl Backend<Select<By<read::email::TemplateCategories, ()>>> for Http {
    type Ok = read::email::TemplateCategories;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<read::email::TemplateCategories, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::GET,
            &["api", "admin", "email", "templates", "categories"],
        )?;
        let data = self.fetch::<CategoriesData>(req).await?;
        Ok(read::email::TemplateCategories(data.categories))
    }
}

impl Backend<Insert<template::New>> for Http {
    type Ok = Template;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<template::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::POST, &["api", "admin", "email", "templates"])?
            .json(&new);
        Ok(self.fetch::<TemplateData>(req).await?.template)
    }
}

impl Backend<Delete<template::Id>> for Http {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(id): Delete<template::Id>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::DELETE,
            &["api", "admin", "email", "templates", id.as_ref()],
        )?;
        self.perform(req).await
    }
}

#[cfg(test)]
mod spec {
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use common::operations::{By, Insert, Select};
    use serde_json::{json, Value};

    use crate::{
        domain::email::{
            Audience, Broadcast, Campaign, CampaignId, Content,
            RecipientCount, RecipientType,
        },
        infra::Backend as _,
    };

    use super::super::spec::{recorded, serve};

    #[tokio::test]
    async fn counts_recipients_by_type() {
        let (router, journal) = recorded(Router::new().route(
            "/api/admin/email/recipients",
            get(|| async {
                Json(json!({
                    "success": true,
                    "message": "ok",
                    "data": {
                        "jobSeekerCount": 40,
                        "recruiterCount": 0,
                        "totalCount": 40,
                    },
                }))
            }),
        ));
        let http = serve(router).await;

        let count = http
            .execute(Select(By::<RecipientCount, _>::new(Audience::from(
                RecipientType::JobSeeker,
            ))))
            .await
            .unwrap();

        assert_eq!(count.total_count, 40);
        assert_eq!(
            journal.lock().unwrap().as_slice(),
            ["GET /api/admin/email/recipients?recipientType=job-seeker"],
        );
    }

    #[tokio::test]
    async fn sends_campaign_payload() {
        let router = Router::new().route(
            "/api/admin/email/send",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["name"], "Spring");
                assert_eq!(body["recipientType"], "recruiter");
                assert_eq!(body["content"]["ctaLink"], "https://x.io");
                assert!(body.get("filters").is_none());
                Json(json!({
                    "success": true,
                    "message": "queued",
                    "data": {
                        "campaign": {
                            "_id": "c1",
                            "status": "sending",
                            "totalRecipients": 12,
                        },
                    },
                }))
            }),
        );
        let http = serve(router).await;

        let dispatch = http
            .execute(Insert(Broadcast {
                name: "Spring".into(),
                subject: "Hello".into(),
                content: Content {
                    body: "Hi there".into(),
                    cta_link: Some("https://x.io".into()),
                    ..Content::default()
                },
                template_id: None,
                recipient_type: RecipientType::Recruiter,
                filters: None,
                scheduled_at: None,
            }))
            .await
            .unwrap();

        assert_eq!(dispatch.id.as_ref(), "c1");
        assert_eq!(dispatch.total_recipients, Some(12));
    }

    #[tokio::test]
    async fn missing_campaign_is_none() {
        let router = Router::new().route(
            "/api/admin/email/campaigns/:id",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "success": false,
                        "message": "Campaign not found",
                    })),
                )
            }),
        );
        let http = serve(router).await;

        let found = http
            .execute(Select(By::<Option<Campaign>, _>::new(
                CampaignId::new("c404").unwrap(),
            )))
            .await
            .unwrap();

        assert!(found.is_none());
    }
}
