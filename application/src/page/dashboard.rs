//! Dashboard page.

use std::num::NonZeroU32;

use futures::future;
use service::{
    domain::stats::DateRange, list::Controller, query::dashboard,
    read::dashboard::transactions,
};

use crate::{render, Context, Error, Service};

use super::{browse, fetch};

/// Prints key metrics, distribution of users and `pages` of recent
/// transactions in the provided `period`.
pub(super) async fn show(
    ctx: &Context,
    period: DateRange,
    pages: NonZeroU32,
) -> Result<(), Error> {
    let (stats, distribution) = future::try_join(
        fetch(ctx, dashboard::Stats::by(period.clone())),
        fetch(ctx, dashboard::UserDistribution::by(period.clone())),
    )
    .await?;

    println!("Dashboard");
    print!(
        "{}",
        render::metrics([
            ("Total Users", &stats.total_users),
            ("Total Recruiters", &stats.total_recruiters),
            ("Active Jobs", &stats.active_jobs),
        ]),
    );
    println!();
    println!("User Distribution");
    print!("{}", render::shares(&distribution.0));
    println!();

    let list: Controller<Service, transactions::Node, transactions::Filter> =
        ctx.controller(ctx.list("Recent Transactions", "transactions", false));
    browse(ctx, &list, period, pages).await
}
