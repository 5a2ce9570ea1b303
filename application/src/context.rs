//! [`Context`]-related definitions.

use std::rc::Rc;

use service::list::{self, Controller};

use crate::{config, Console, Service};

/// Application context shared by all the console pages.
#[derive(Clone, Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Rc<Service>,

    /// Lists configuration.
    lists: config::List,

    /// [`Console`] of the administrator.
    console: Rc<Console>,
}

impl Context {
    /// Creates a new [`Context`].
    #[must_use]
    pub fn new(
        service: Service,
        lists: config::List,
        console: Console,
    ) -> Self {
        Self {
            service: Rc::new(service),
            lists,
            console: Rc::new(console),
        }
    }

    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns lists configuration of this [`Context`].
    #[must_use]
    pub const fn lists(&self) -> &config::List {
        &self.lists
    }

    /// Returns [`Console`] of this [`Context`].
    #[must_use]
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Creates a new list [`Config`] titled `title` and listing `noun`s.
    ///
    /// Lists showing all the entities of a kind are `full`, and use a
    /// larger page size.
    ///
    /// [`Config`]: list::Config
    #[must_use]
    pub fn list(&self, title: &str, noun: &str, full: bool) -> list::Config {
        let config::List {
            scroll_threshold,
            page_size,
            full_page_size,
            ..
        } = self.lists;
        let limit = if full { full_page_size } else { page_size };
        list::Config::new(title, noun, limit)
            .with_scroll_threshold(scroll_threshold)
    }

    /// Creates a new list [`Controller`] with the provided [`Config`].
    ///
    /// [`Config`]: list::Config
    #[must_use]
    pub fn controller<N, F: list::Filter>(
        &self,
        config: list::Config,
    ) -> Controller<Service, N, F> {
        Controller::new(
            Rc::clone(&self.service),
            config,
            Rc::clone(&self.console),
        )
    }
}
