//! [`Query`] collection related to push [`Notification`]s.

use common::operations::By;

use crate::{
    domain::{
        notification::{self, TokenStats},
        Notification,
    },
    read,
};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries statistics of registered push tokens.
pub type Tokens = BackendQuery<By<TokenStats, ()>>;

/// Queries a page of sent [`Notification`]s.
pub type History = BackendQuery<
    By<
        read::notification::history::Page,
        read::notification::history::Selector,
    >,
>;

/// Queries a [`Notification`] by its [`notification::Id`].
pub type ById = BackendQuery<By<Option<Notification>, notification::Id>>;
