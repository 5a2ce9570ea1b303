//! Recruiters performance and management page.

use service::{
    domain::{account::Blockable as _, recruiter, stats::DateRange, Recruiter},
    list::{actions::ToggleBlock, Controller},
    query::recruiters,
    read::recruiter::{activity, list},
};

use crate::{args::Recruiters, render, Context, Error, Service};

use super::{browse, fetch, mutate};

/// Runs the provided [`Recruiters`] page command.
pub(super) async fn run(ctx: &Context, page: Recruiters) -> Result<(), Error> {
    match page {
        Recruiters::Stats(period) => stats(ctx, period.into()).await,
        Recruiters::Activity {
            search,
            period,
            pages,
        } => {
            let filter = activity::Filter {
                search,
                period: period.into(),
            };
            let config = ctx.list("Recruiter Activity", "recruiters", false);
            let list: Controller<Service, activity::Node, _> =
                ctx.controller(config);
            browse(ctx, &list, filter, pages).await
        }
        Recruiters::List {
            search,
            status,
            blocked,
            pages,
        } => {
            let filter = list::Filter {
                search,
                status,
                blocked,
            };
            browse(ctx, &all(ctx), filter, pages).await
        }
        Recruiters::Block { id } => toggle(ctx, id, true).await,
        Recruiters::Unblock { id } => toggle(ctx, id, false).await,
    }
}

/// Creates the list of all the [`Recruiter`]s.
fn all(ctx: &Context) -> Controller<Service, list::Node, list::Filter> {
    ctx.controller(ctx.list("All Recruiters", "recruiters", true))
}

/// Prints key metrics of recruiters.
async fn stats(ctx: &Context, period: DateRange) -> Result<(), Error> {
    let stats = fetch(ctx, recruiters::Stats::by(period)).await?;

    println!("Recruiters Performance");
    print!(
        "{}",
        render::metrics([
            ("Active Recruiters", &stats.active_recruiters),
            ("Open Positions", &stats.open_positions),
            ("Interviews Conducted", &stats.interviews_conducted),
            ("Hires Confirmed", &stats.hires_confirmed),
        ]),
    );
    Ok(())
}

/// Blocks or unblocks the [`Recruiter`] with the provided ID.
async fn toggle(
    ctx: &Context,
    id: recruiter::Id,
    block: bool,
) -> Result<(), Error> {
    let action = ToggleBlock {
        name: id.to_string(),
        id,
        noun: Recruiter::NOUN,
        block,
    };
    mutate(ctx, &all(ctx), &action).await.map(drop)
}
