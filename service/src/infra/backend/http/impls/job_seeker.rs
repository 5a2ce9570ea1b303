//! [`JobSeeker`]-related [`Backend`] implementations.

use common::operations::{By, Perform, Select};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracerr::Traced;

use crate::{
    domain::{
        account::{self, Block, Unblock},
        job_seeker,
        stats::{self, DateRange},
        JobSeeker, TopJobSeeker,
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

/// `data` of the job seekers statistics response.
#[derive(Debug, Deserialize)]
struct Stats {
    /// Reported statistics.
    stats: stats::JobSeekers,
}

/// `data` of the job seekers categories response.
#[derive(Debug, Deserialize)]
struct Categories {
    /// Category values.
    categories: Vec<String>,
}

/// Query parameters of the all job seekers list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListParams<'a> {
    /// Free text to search for.
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,

    /// Account status to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<account::Status>,

    /// Block state to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    is_blocked: Option<account::BlockState>,

    /// Category to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

/// Query parameters of the top job seekers list.
#[derive(Debug, Serialize)]
struct TopParams<'a> {
    /// Free text to search for.
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,

    /// Category to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

impl Backend<Select<By<stats::JobSeekers, DateRange>>> for Http {
    type Ok = stats::JobSeekers;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<stats::JobSeekers, DateRange>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::GET, &["api", "admin", "job-seekers", "stats"])?
            .query(by.inner());
        Ok(self.fetch::<Stats>(req).await?.stats)
    }
}

impl Backend<Select<By<read::job_seeker::Categories, ()>>> for Http {
    type Ok = read::job_seeker::Categories;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<read::job_seeker::Categories, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::GET,
            &["api", "admin", "job-seekers", "categories"],
        )?;
        let data = self.fetch::<Categories>(req).await?;
        Ok(read::job_seeker::Categories(data.categories))
    }
}

impl
    Backend<
        Select<
            By<read::job_seeker::list::Page, read::job_seeker::list::Selector>,
        >,
    > for Http
{
    type Ok = read::job_seeker::list::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::job_seeker::list::Page, read::job_seeker::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::job_seeker::list::Selector { arguments, filter } =
            by.into_inner();
        let req = self
            .request(Method::GET, &["api", "admin", "job-seekers", "all"])?
            .query(&Paging::from(arguments))
            .query(&ListParams {
                search: filter.search.as_deref(),
                status: filter.status,
                is_blocked: filter.blocked,
                category: filter.category.as_deref(),
            });
        let data = self.fetch::<Listed<JobSeeker>>(req).await?;
        let info = data.pagination.map(Into::into);
        Ok(pagination::page(arguments, data.items, info))
    }
}

impl
    Backend<
        Select<
            By<read::job_seeker::top::Page, read::job_seeker::top::Selector>,
        >,
    > for Http
{
    type Ok = read::job_seeker::top::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::job_seeker::top::Page, read::job_seeker::top::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::job_seeker::top::Selector { arguments, filter } =
            by.into_inner();
        let req = self
            .request(Method::GET, &["api", "admin", "job-seekers", "top"])?
            .query(&Paging::from(arguments))
            .query(&TopParams {
                search: filter.search.as_deref(),
                category: filter.category.as_deref(),
            })
            .query(&filter.period);
        let env = self.send::<Listed<TopJobSeeker>, Meta>(req).await?;
        let items = env.data.map(|d| d.items).unwrap_or_default();
        let info = env.meta.and_then(|m| m.pagination).map(Into::into);
        Ok(pagination::page(arguments, items, info))
    }
}

impl Backend<Perform<Block<job_seeker::Id>>> for Http {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Perform(Block(id)): Perform<Block<job_seeker::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::POST,
            &["api", "admin", "job-seekers", id.as_ref(), "block"],
        )?;
        self.perform(req).await
    }
}

impl Backend<Perform<Unblock<job_seeker::Id>>> for Http {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Perform(Unblock(id)): Perform<Unblock<job_seeker::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::POST,
            &["api", "admin", "job-seekers", id.as_ref(), "unblock"],
        )?;
        self.perform(req).await
    }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroU32;

    use axum::{
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use common::{
        operations::{By, Perform, Select},
        pagination::Arguments,
    };
    use serde_json::{json, Value};

    use crate::{
        domain::{
            account::{Block, BlockState, Blockable as _, Status},
            job_seeker,
        },
        infra::Backend as _,
        read::job_seeker::list::{Filter, Selector},
    };

    use super::super::spec::{recorded, serve};

    fn job_seeker(id: &str, blocked: bool) -> Value {
        json!({
            "_id": id,
            "name": format!("Seeker {id}"),
            "phone": "+10000000000",
            "category": "IT",
            "specialization": "Backend",
            "status": "Active",
            "isBlocked": blocked,
            "coinBalance": 5,
            "createdAt": "2024-03-05T10:00:00Z",
            "updatedAt": "2024-03-06T10:00:00Z",
        })
    }

    #[tokio::test]
    async fn lists_job_seekers_with_filters() {
        let (router, journal) = recorded(Router::new().route(
            "/api/admin/job-seekers/all",
            get(|headers: HeaderMap| async move {
                assert_eq!(
                    headers.get("authorization").unwrap(),
                    "Bearer t0ken",
                );
                Json(json!({
                    "success": true,
                    "message": "ok",
                    "data": {
                        "jobSeekers": [job_seeker("a1", false)],
                        "pagination": {
                            "currentPage": 1,
                            "totalPages": 4,
                            "totalCount": 61,
                            "limit": 20,
                            "hasNextPage": true,
                            "hasPrevPage": false,
                        },
                    },
                }))
            }),
        ));
        let http = serve(router).await;

        let page = http
            .execute(Select(By::new(Selector {
                arguments: Arguments::first(NonZeroU32::new(20).unwrap()),
                filter: Filter {
                    search: Some("ann".into()),
                    status: Some(Status::Pending),
                    blocked: Some(BlockState::Blocked),
                    category: None,
                },
            })))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].display_name(), "Seeker a1");
        assert!(page.info.has_next_page);
        assert_eq!(
            journal.lock().unwrap().as_slice(),
            [
                "GET /api/admin/job-seekers/all\
                 ?page=1&limit=20&search=ann&status=Pending&isBlocked=true",
            ],
        );
    }

    #[tokio::test]
    async fn surfaces_rejection_message() {
        let router = Router::new().route(
            "/api/admin/job-seekers/:id/block",
            post(|| async {
                Json(json!({
                    "success": false,
                    "message": "Job seeker is already blocked",
                }))
            }),
        );
        let http = serve(router).await;

        let err = http
            .execute(Perform(Block(job_seeker::Id::new("a1").unwrap())))
            .await
            .unwrap_err();

        assert_eq!(
            err.as_ref().server_message(),
            Some("Job seeker is already blocked"),
        );
    }

    #[tokio::test]
    async fn omits_blank_rejection_message() {
        let router = Router::new().route(
            "/api/admin/job-seekers/:id/block",
            post(|| async { Json(json!({ "success": false })) }),
        );
        let http = serve(router).await;

        let err = http
            .execute(Perform(Block(job_seeker::Id::new("a1").unwrap())))
            .await
            .unwrap_err();

        assert_eq!(err.as_ref().server_message(), None);
    }

    #[tokio::test]
    async fn surfaces_error_status_message() {
        let router = Router::new().route(
            "/api/admin/job-seekers/:id/block",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Database is down" })),
                )
            }),
        );
        let http = serve(router).await;

        let err = http
            .execute(Perform(Block(job_seeker::Id::new("a1").unwrap())))
            .await
            .unwrap_err();

        assert_eq!(err.as_ref().server_message(), Some("Database is down"));
        assert!(!err.as_ref().is_not_found());
    }
}
