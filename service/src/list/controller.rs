//! [`Controller`] of a paginated list.

use std::{cell::RefCell, error::Error as StdError, rc::Rc};

use common::{
    operations::By,
    pagination::{Arguments, Page, Selector, Window},
};
use derive_more::Debug;
use futures::Stream;
use tracerr::Traced;

use crate::{
    infra::backend,
    query::{BackendQuery, Query},
    Command,
};

use super::{
    action::{self, Action, Confirm, Mutation},
    debounce::Debouncer,
    scroll::Scroll,
    toast::{Notifier, Toast},
    Config, Filter, Row,
};

/// Outcome of a [`Controller`] operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Fetched [`Page`] is applied to the list.
    Applied,

    /// Nothing was fetched.
    Skipped,

    /// Fetched [`Page`] is dropped, as a newer reset superseded it.
    Stale,

    /// Fetching failed and the list is left untouched.
    Failed,
}

/// Mutable state of a [`Controller`].
#[derive(Debug)]
struct State<N, F> {
    /// Accumulated items.
    window: Window<N>,

    /// Last requested filter.
    filter: F,

    /// Filter the [`State::window`] is fetched with.
    applied: F,

    /// Generation of the latest reset.
    generation: u64,

    /// Indicator whether a first [`Page`] is being fetched.
    loading: bool,

    /// Indicator whether a next [`Page`] is being fetched.
    loading_more: bool,
}

/// Controller keeping a [`Window`] over a paginated list in sync with the
/// requested filter.
///
/// Every reset bumps a generation, and any response fetched under an older
/// generation is dropped on arrival. At most one next [`Page`] is fetched
/// at a time.
#[derive(Debug)]
pub struct Controller<S, N, F> {
    /// Service to fetch [`Page`]s from.
    service: Rc<S>,

    /// [`Config`] of the list.
    config: Config,

    /// [`Notifier`] to show failures with.
    #[debug(skip)]
    notifier: Rc<dyn Notifier>,

    /// Mutable [`State`].
    state: RefCell<State<N, F>>,
}

impl<S, N, F: Filter> Controller<S, N, F> {
    /// Creates a new empty [`Controller`].
    ///
    /// Nothing is fetched until the first [`Controller::reset()`].
    #[must_use]
    pub fn new(
        service: Rc<S>,
        config: Config,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            service,
            config,
            notifier,
            state: RefCell::new(State {
                window: Window::default(),
                filter: F::default(),
                applied: F::default(),
                generation: 0,
                loading: false,
                loading_more: false,
            }),
        }
    }

    /// Returns the [`Config`] of this [`Controller`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the last requested filter.
    #[must_use]
    pub fn filter(&self) -> F {
        self.state.borrow().filter.clone()
    }

    /// Returns the number of the last fetched [`Page`], or `0` if nothing
    /// was fetched yet.
    #[must_use]
    pub fn cursor(&self) -> u32 {
        self.state.borrow().window.cursor()
    }

    /// Indicates whether the server reported more [`Page`]s.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.state.borrow().window.has_more()
    }

    /// Returns the total number of items reported by the server.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.state.borrow().window.total_count()
    }

    /// Indicates whether a first [`Page`] is being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Indicates whether a next [`Page`] is being fetched.
    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        self.state.borrow().loading_more
    }
}

impl<S, N: Clone, F: Filter> Controller<S, N, F> {
    /// Returns the accumulated items.
    #[must_use]
    pub fn items(&self) -> Vec<N> {
        self.state.borrow().window.items().to_vec()
    }

    /// Returns the [`Row`]s to render the list with.
    #[must_use]
    pub fn rows(&self) -> Vec<Row<N>> {
        let state = self.state.borrow();
        if state.loading {
            return vec![Row::Loading(self.config.loading_label.clone())];
        }

        let items = state.window.items();
        if items.is_empty() {
            return vec![Row::Empty(self.config.empty_label.clone())];
        }

        let mut rows: Vec<_> = items.iter().cloned().map(Row::Item).collect();
        let Config {
            loading_more_label,
            exhausted_label,
            ..
        } = &self.config;
        if state.loading_more {
            rows.push(Row::LoadingMore(loading_more_label.clone()));
        } else if state.window.is_exhausted() {
            rows.push(Row::Exhausted(exhausted_label.clone()));
        }
        rows
    }
}

impl<S, N, F> Controller<S, N, F>
where
    S: Query<
        BackendQuery<By<Page<N>, Selector<F>>>,
        Ok = Page<N>,
        Err = Traced<backend::Error>,
    >,
    F: Filter,
{
    /// Replaces the list with the first [`Page`] matching the provided
    /// `filter`.
    ///
    /// On failure, the previously fetched items are kept.
    #[tracing::instrument(skip_all, fields(list = %self.config.title))]
    pub async fn reset(&self, filter: F) -> Outcome {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.filter = filter.clone();
            state.loading = true;
            state.loading_more = false;
            state.generation
        };
        tracing::debug!(generation, ?filter, "resetting");

        let res = self
            .service
            .execute(BackendQuery::by(Selector {
                arguments: Arguments::first(self.config.limit),
                filter: filter.clone(),
            }))
            .await;

        let mut state = self.state.borrow_mut();
        if state.generation != generation {
            tracing::debug!(generation, "dropping stale first page");
            return Outcome::Stale;
        }
        state.loading = false;
        match res {
            Ok(page) => {
                state.window.replace(page);
                state.applied = filter;
                tracing::debug!(
                    items = state.window.items().len(),
                    has_more = state.window.has_more(),
                    "first page applied",
                );
                Outcome::Applied
            }
            Err(e) => {
                drop(state);
                self.fail(&e);
                Outcome::Failed
            }
        }
    }

    /// Appends the next [`Page`] to the list.
    ///
    /// Skipped if any [`Page`] is being fetched already, or the server
    /// reported no more [`Page`]s.
    #[tracing::instrument(skip_all, fields(list = %self.config.title))]
    pub async fn load_more(&self) -> Outcome {
        let (generation, arguments, filter) = {
            let mut state = self.state.borrow_mut();
            if state.loading || state.loading_more {
                return Outcome::Skipped;
            }
            let Some(arguments) = state.window.next(self.config.limit) else {
                return Outcome::Skipped;
            };
            state.loading_more = true;
            (state.generation, arguments, state.applied.clone())
        };
        tracing::debug!(generation, page = arguments.page(), "loading more");

        let res = self
            .service
            .execute(BackendQuery::by(Selector { arguments, filter }))
            .await;

        let mut state = self.state.borrow_mut();
        if state.generation != generation {
            tracing::debug!(generation, "dropping stale next page");
            return Outcome::Stale;
        }
        state.loading_more = false;
        match res {
            Ok(page) => {
                state.window.extend(arguments, page);
                tracing::debug!(
                    cursor = state.window.cursor(),
                    items = state.window.items().len(),
                    "next page applied",
                );
                Outcome::Applied
            }
            Err(e) => {
                drop(state);
                self.fail(&e);
                Outcome::Failed
            }
        }
    }

    /// Re-fetches the first [`Page`] with the filter the shown items were
    /// fetched with.
    pub async fn refresh(&self) -> Outcome {
        let applied = self.state.borrow().applied.clone();
        self.reset(applied).await
    }

    /// Resets the list with the provided free text `search`, keeping the
    /// rest of the filter.
    pub async fn search(&self, search: Option<String>) -> Outcome {
        let search = search.filter(|s| !s.trim().is_empty());
        self.reset(self.filter().with_search(search)).await
    }

    /// Resets the list with the filter changed by the provided function.
    pub async fn apply(&self, change: impl FnOnce(F) -> F) -> Outcome {
        self.reset(change(self.filter())).await
    }

    /// Resets the list with every settled free text search, until the
    /// searches input is closed.
    ///
    /// Returns the [`Outcome`] of the last reset, if any.
    pub async fn follow<I>(
        &self,
        searches: &mut Debouncer<I>,
    ) -> Option<Outcome>
    where
        I: Stream<Item = Option<String>> + Unpin,
    {
        let mut last = None;
        while let Some(search) = searches.next().await {
            last = Some(self.search(search).await);
        }
        last
    }

    /// Loads the next [`Page`] if the list is scrolled close to its bottom.
    pub async fn on_scroll(&self, scroll: Scroll) -> Outcome {
        if scroll.is_near_bottom(self.config.scroll_threshold) {
            self.load_more().await
        } else {
            Outcome::Skipped
        }
    }

    /// Runs the provided [`Action`] against a row of the list, refreshing
    /// the list once it succeeds.
    pub async fn mutate<A, C, E>(
        &self,
        action: &A,
        confirm: &C,
    ) -> Mutation<A::Ok>
    where
        S: Command<A::Command, Ok = A::Ok, Err = Traced<E>>,
        A: Action + ?Sized,
        C: Confirm + ?Sized,
        E: StdError + 'static,
    {
        let res =
            action::run(&*self.service, action, confirm, &*self.notifier)
                .await;
        if res.is_done() {
            _ = self.refresh().await;
        }
        res
    }

    /// Reports the provided fetching error.
    fn fail(&self, err: &Traced<backend::Error>) {
        tracing::error!("{}: {err}", self.config.failure_label);
        let reason = err.as_ref().server_message().map_or_else(
            || self.config.failure_label.clone(),
            |msg| format!("{}: {msg}", self.config.failure_label),
        );
        self.notifier.notify(Toast::error("Error", reason));
    }
}
