//! Job seekers insights and management page.

use service::{
    domain::{account::Blockable as _, job_seeker, stats::DateRange, JobSeeker},
    list::{actions::ToggleBlock, Controller},
    query::job_seekers,
    read::job_seeker::{list, top},
};

use crate::{args::JobSeekers, render, Context, Error, Service};

use super::{browse, fetch, mutate};

/// Runs the provided [`JobSeekers`] page command.
pub(super) async fn run(ctx: &Context, page: JobSeekers) -> Result<(), Error> {
    match page {
        JobSeekers::Stats(period) => stats(ctx, period.into()).await,
        JobSeekers::Categories => categories(ctx).await,
        JobSeekers::Top {
            search,
            category,
            period,
            pages,
        } => {
            let filter = top::Filter {
                search,
                category,
                period: period.into(),
            };
            browse(ctx, &top_list(ctx), filter, pages).await
        }
        JobSeekers::List {
            search,
            status,
            blocked,
            category,
            pages,
        } => {
            let filter = list::Filter {
                search,
                status,
                blocked,
                category,
            };
            browse(ctx, &all(ctx), filter, pages).await
        }
        JobSeekers::Block { id } => toggle(ctx, id, true).await,
        JobSeekers::Unblock { id } => toggle(ctx, id, false).await,
    }
}

/// Creates the list of all the [`JobSeeker`]s.
fn all(ctx: &Context) -> Controller<Service, list::Node, list::Filter> {
    ctx.controller(ctx.list("All Users", "users", true))
}

/// Creates the list of top job seekers.
fn top_list(ctx: &Context) -> Controller<Service, top::Node, top::Filter> {
    ctx.controller(ctx.list("Top Job Seekers", "job seekers", false))
}

/// Prints key metrics of job seekers.
async fn stats(ctx: &Context, period: DateRange) -> Result<(), Error> {
    let stats = fetch(ctx, job_seekers::Stats::by(period)).await?;

    println!("Job Seekers Insights");
    print!(
        "{}",
        render::metrics([
            ("Active Profiles", &stats.active_profiles),
            ("Interviews Scheduled", &stats.interviews_scheduled),
            ("Offers Extended", &stats.offers_extended),
            ("Skills Verified", &stats.skills_verified),
        ]),
    );
    Ok(())
}

/// Prints categories job seekers are looking in.
async fn categories(ctx: &Context) -> Result<(), Error> {
    let categories = fetch(ctx, job_seekers::Categories::all()).await?;

    println!("All Categories");
    for category in &categories.0 {
        println!("{category}");
    }
    Ok(())
}

/// Blocks or unblocks the [`JobSeeker`] with the provided ID.
async fn toggle(
    ctx: &Context,
    id: job_seeker::Id,
    block: bool,
) -> Result<(), Error> {
    let action = ToggleBlock {
        name: id.to_string(),
        id,
        noun: JobSeeker::NOUN,
        block,
    };
    mutate(ctx, &all(ctx), &action).await.map(drop)
}
