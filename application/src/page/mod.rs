//! Console pages.

mod dashboard;
mod email;
mod job_seekers;
mod notifications;
mod recruiters;

use std::{error::Error as StdError, num::NonZeroU32, time::Duration};

use common::{
    operations::By,
    pagination::{Page, Selector},
};
use service::{
    infra::backend,
    list::{
        action, debounce, Action, Controller, Filter, Mutation, Outcome,
        Scroll,
    },
    query::BackendQuery,
    Query,
};
use tracerr::Traced;

use crate::{
    args::Command,
    define_error,
    render::{self, Columns},
    AsError, Context, Error, Service,
};

define_error! {
    enum ListError {
        #[code = "LIST_NOT_LOADED"]
        #[message = "Failed to load the list"]
        NotLoaded,
    }
}

define_error! {
    enum ActionError {
        #[code = "ACTION_INVALID"]
        #[message = "Action is not valid"]
        Invalid,

        #[code = "ACTION_FAILED"]
        #[message = "Action failed"]
        Failed,
    }
}

define_error! {
    enum LookupError {
        #[code = "NOT_FOUND"]
        #[message = "Requested entity doesn't exist"]
        NotFound,
    }
}

/// [`Scroll`] position at the very bottom of a list.
const BOTTOM: Scroll = Scroll {
    scroll_height: 0,
    scroll_top: 0,
    client_height: 0,
};

/// Runs the provided console [`Command`].
///
/// # Errors
///
/// Errors if the page cannot be shown, or its action failed.
pub async fn run(ctx: &Context, command: Command) -> Result<(), Error> {
    match command {
        Command::Dashboard { period, pages } => {
            dashboard::show(ctx, period.into(), pages).await
        }
        Command::JobSeekers(page) => job_seekers::run(ctx, page).await,
        Command::Recruiters(page) => recruiters::run(ctx, page).await,
        Command::Email(page) => email::run(ctx, page).await,
        Command::Notifications(page) => notifications::run(ctx, page).await,
    }
}

/// Loads `pages` of the provided list matching the `filter`, and prints
/// them.
///
/// The free text search of the `filter` settles before the first page is
/// requested.
async fn browse<N, F>(
    ctx: &Context,
    list: &Controller<Service, N, F>,
    filter: F,
    pages: NonZeroU32,
) -> Result<(), Error>
where
    Service: Query<
        BackendQuery<By<Page<N>, Selector<F>>>,
        Ok = Page<N>,
        Err = Traced<backend::Error>,
    >,
    N: Clone + Columns,
    F: Filter,
{
    let search = match filter.search() {
        Some(text) => typed(text, ctx.lists().debounce).await,
        None => None,
    };
    if list.reset(filter.with_search(search)).await == Outcome::Failed {
        return Err(ListError::NotLoaded.into());
    }

    for _ in 1..pages.get() {
        match list.on_scroll(BOTTOM).await {
            Outcome::Applied => {}
            Outcome::Failed => return Err(ListError::NotLoaded.into()),
            Outcome::Skipped | Outcome::Stale => break,
        }
    }

    print_list(list);
    Ok(())
}

/// Types the provided free text `search` in, returning it once settled.
async fn typed(search: &str, window: Duration) -> Option<String> {
    let (input, mut settled) = debounce::channel(window);
    _ = input.unbounded_send(search.to_owned());
    drop(input);
    settled.next().await.filter(|s| !s.trim().is_empty())
}

/// Prints the provided list under its title.
fn print_list<S, N, F>(list: &Controller<S, N, F>)
where
    N: Clone + Columns,
    F: Filter,
{
    let title = &list.config().title;
    match list.total_count() {
        Some(total) => println!("{title} ({total})"),
        None => println!("{title}"),
    }
    print!("{}", render::list(&list.rows()));
}

/// Runs the provided [`Action`] against a row of the provided list,
/// printing the refreshed list once it succeeds.
///
/// [`None`] is returned if the administrator declined the [`Action`].
async fn mutate<N, F, A, E>(
    ctx: &Context,
    list: &Controller<Service, N, F>,
    action: &A,
) -> Result<Option<A::Ok>, Error>
where
    Service: Query<
            BackendQuery<By<Page<N>, Selector<F>>>,
            Ok = Page<N>,
            Err = Traced<backend::Error>,
        > + service::Command<A::Command, Ok = A::Ok, Err = Traced<E>>,
    N: Clone + Columns,
    F: Filter,
    A: Action,
    E: StdError + 'static,
{
    let res = settle(list.mutate(action, ctx.console()).await)?;
    if res.is_some() {
        print_list(list);
    }
    Ok(res)
}

/// Runs the provided [`Action`] not bound to any list.
///
/// [`None`] is returned if the administrator declined the [`Action`].
async fn perform<A, E>(
    ctx: &Context,
    action: &A,
) -> Result<Option<A::Ok>, Error>
where
    Service: service::Command<A::Command, Ok = A::Ok, Err = Traced<E>>,
    A: Action,
    E: StdError + 'static,
{
    settle(
        action::run(ctx.service(), action, ctx.console(), ctx.console())
            .await,
    )
}

/// Converts the provided [`Mutation`] into a [`Result`].
fn settle<T>(mutation: Mutation<T>) -> Result<Option<T>, Error> {
    match mutation {
        Mutation::Done(ok) => Ok(Some(ok)),
        Mutation::Declined => {
            println!("Cancelled");
            Ok(None)
        }
        Mutation::Invalid => Err(ActionError::Invalid.into()),
        Mutation::Failed => Err(ActionError::Failed.into()),
    }
}

/// Fetches the provided [`BackendQuery`].
async fn fetch<Q>(
    ctx: &Context,
    query: Q,
) -> Result<<Service as Query<Q>>::Ok, Error>
where
    Service: Query<Q, Err = Traced<backend::Error>>,
{
    ctx.service()
        .execute(query)
        .await
        .map_err(AsError::into_error)
}

#[cfg(test)]
mod spec {
    use std::{num::NonZeroU32, time::Duration};

    use service::list::{self, Mutation};

    use super::{settle, typed, BOTTOM};

    #[test]
    fn bottom_is_near_bottom() {
        assert!(BOTTOM.is_near_bottom(NonZeroU32::MIN));
        assert!(BOTTOM.is_near_bottom(list::DEFAULT_SCROLL_THRESHOLD));
    }

    #[tokio::test]
    async fn settles_typed_search() {
        let window = Duration::from_millis(5);

        assert_eq!(typed("asha", window).await.as_deref(), Some("asha"));
        assert_eq!(typed("  ", window).await, None);
    }

    #[test]
    fn settles_mutations() {
        assert_eq!(settle(Mutation::Done(7)).unwrap(), Some(7));
        assert_eq!(settle(Mutation::<()>::Declined).unwrap(), None);
        assert_eq!(
            settle(Mutation::<()>::Invalid).unwrap_err().code,
            "ACTION_INVALID",
        );
        assert_eq!(
            settle(Mutation::<()>::Failed).unwrap_err().code,
            "ACTION_FAILED",
        );
    }
}
