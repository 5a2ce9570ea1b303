//! [`Recruiter`]-related [`Backend`] implementations.

use common::operations::{By, Perform, Select};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracerr::Traced;

use crate::{
    domain::{
        account::{self, Block, Unblock},
        recruiter,
        stats::{self, DateRange},
        Recruiter, RecruiterActivity,
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

/// `data` of the recruiters statistics response.
#[derive(Debug, Deserialize)]
struct Stats {
    /// Reported statistics.
    stats: stats::Recruiters,
}

/// Query parameters of the all recruiters list.
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
}

/// Query parameters of the recruiters activity list.
#[derive(Debug, Serialize)]
struct ActivityParams<'a> {
    /// Free text to search for.
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

impl Backend<Select<By<stats::Recruiters, DateRange>>> for Http {
    type Ok = stats::Recruiters;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<stats::Recruiters, DateRange>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::GET, &["api", "admin", "recruiters", "stats"])?
            .query(by.inner());
        Ok(self.fetch::<Stats>(req).await?.stats)
    }
}

impl
    Backend<
        Select<
            By<read::recruiter::list::Page, read::recruiter::list::Selector>,
        >,
    > for Http
{
    type Ok = read::recruiter::list::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::recruiter::list::Page, read::recruiter::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::recruiter::list::Selector { arguments, filter } =
            by.into_inner();
        let req = self
            .request(Method::GET, &["api", "admin", "recruiters", "all"])?
            .query(&Paging::from(arguments))
            .query(&ListParams {
                search: filter.search.as_deref(),
                status: filter.status,
                is_blocked: filter.blocked,
            });
        let data = self.fetch::<Listed<Recruiter>>(req).await?;
        let info = data.pagination.map(Into::into);
        Ok(pagination::page(arguments, data.items, info))
    }
}

impl
    Backend<
        Select<
            By<
                read::recruiter::activity::Page,
                read::recruiter::activity::Selector,
            >,
        >,
    > for Http
{
    type Ok = read::recruiter::activity::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<
                read::recruiter::activity::Page,
                read::recruiter::activity::Selector,
            >,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::recruiter::activity::Selector { arguments, filter } =
            by.into_inner();
        let req = self
            .request(Method::GET, &["api", "admin", "recruiters", "activity"])?
            .query(&Paging::from(arguments))
            .query(&ActivityParams {
                search: filter.search.as_deref(),
            })
            .query(&filter.period);
        let env = self.send::<Listed<RecruiterActivity>, Meta>(req).await?;
        let items = env.data.map(|d| d.items).unwrap_or_default();
        let info = env.meta.and_then(|m| m.pagination).map(Into::into);
        Ok(pagination::page(arguments, items, info))
    }
}

impl Backend<Perform<Block<recruiter::Id>>> for Http {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Perform(Block(id)): Perform<Block<recruiter::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::POST,
            &["api", "admin", "recruiters", id.as_ref(), "block"],
        )?;
        self.perform(req).await
    }
}

impl Backend<Perform<Unblock<recruiter::Id>>> for Http {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Perform(Unblock(id)): Perform<Unblock<recruiter::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self.request(
            Method::POST,
            &["api", "admin", "recruiters", id.as_ref(), "unblock"],
        )?;
        self.perform(req).await
    }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroU32;

    use axum::{routing::get, Json, Router};
    use common::{
        operations::{By, Select},
        pagination::Arguments,
    };
    use serde_json::json;

    use crate::{
        infra::Backend as _,
        read::recruiter::activity::{Filter, Selector},
    };

    use super::super::spec::{recorded, serve};

    #[tokio::test]
    async fn reads_activity_meta_pagination() {
        let (router, journal) = recorded(Router::new().route(
            "/api/admin/recruiters/activity",
            get(|| async {
                Json(json!({
                    "success": true,
                    "message": "ok",
                    "data": {
                        "recruiters": [{
                            "_id": "r1",
                            "company": "Acme",
                            "recruiter": "Jane",
                            "focusArea": "Sales",
                            "interviews": 12,
                            "lastUpdated": "2024-03-05T10:00:00Z",
                            "status": "Hiring",
                        }],
                    },
                    "meta": {
                        "pagination": {
                            "currentPage": 2,
                            "totalPages": 2,
                            "totalCount": 11,
                            "limit": 10,
                            "hasNextPage": false,
                            "hasPrevPage": true,
                        },
                        "dateRange": null,
                    },
                }))
            }),
        ));
        let http = serve(router).await;

        let args = Arguments::new(2, NonZeroU32::new(10).unwrap()).unwrap();
        let page = http
            .execute(Select(By::new(Selector {
                arguments: args,
                filter: Filter::default(),
            })))
            .await
            .unwrap();

        assert_eq!(page.items[0].company, "Acme");
        assert_eq!(page.items[0].interviews, 12);
        assert!(!page.info.has_next_page);
        assert_eq!(page.info.total_count, 11);
        assert_eq!(
            journal.lock().unwrap().as_slice(),
            ["GET /api/admin/recruiters/activity?page=2&limit=10"],
        );
    }
}
