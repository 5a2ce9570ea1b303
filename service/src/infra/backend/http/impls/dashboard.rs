//! Dashboard [`Backend`] implementations.

use common::operations::{By, Select};
use reqwest::Method;
use serde::Deserialize;
use tracerr::Traced;

use crate::{
    domain::stats::{self, DateRange, Transaction, UserShare},
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

/// `data` of the dashboard statistics response.
#[derive(Debug, Deserialize)]
struct Stats {
    /// Reported statistics.
    stats: stats::Dashboard,
}

/// `data` of the user distribution response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Distribution {
    /// Shares of the users per category.
    user_mix: Vec<UserShare>,
}

impl Backend<Select<By<stats::Dashboard, DateRange>>> for Http {
    type Ok = stats::Dashboard;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<stats::Dashboard, DateRange>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::GET, &["api", "admin", "dashboard", "stats"])?
            .query(by.inner());
        Ok(self.fetch::<Stats>(req).await?.stats)
    }
}

impl Backend<Select<By<read::dashboard::UserDistribution, DateRange>>>
    for Http
{
    type Ok = read::dashboard::UserDistribution;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::dashboard::UserDistribution, DateRange>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(
                Method::GET,
                &["api", "admin", "dashboard", "user-distribution"],
            )?
            .query(by.inner());
        let data = self.fetch::<Distribution>(req).await?;
        Ok(read::dashboard::UserDistribution(data.user_mix))
    }
}

impl
    Backend<
        Select<
            By<
                read::dashboard::transactions::Page,
                read::dashboard::transactions::Selector,
            >,
        >,
    > for Http
{
    type Ok = read::dashboard::transactions::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<
                read::dashboard::transactions::Page,
                read::dashboard::transactions::Selector,
            >,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::dashboard::transactions::Selector { arguments, filter } =
            by.into_inner();
        let req = self
            .request(
                Method::GET,
                &["api", "admin", "dashboard", "recent-transactions"],
            )?
            .query(&Paging::from(arguments))
            .query(&filter);
        let env = self.send::<Listed<Transaction>, Meta>(req).await?;
        let items = env.data.map(|d| d.items).unwrap_or_default();
        let info = env.meta.and_then(|m| m.pagination).map(Into::into);
        Ok(pagination::page(arguments, items, info))
    }
}
