//! [`Query`] collection of the email marketing.

use common::operations::By;

use crate::{
    domain::email::{
        Audience, Campaign, CampaignId, Preview, PreviewRequest,
        RecipientCount,
    },
    read,
};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries number of recipients in an [`Audience`].
pub type Recipients = BackendQuery<By<RecipientCount, Audience>>;

/// Queries a rendered email.
pub type Render = BackendQuery<By<Preview, PreviewRequest>>;

/// Queries a page of sent [`Campaign`]s.
pub type Campaigns = BackendQuery<
    By<read::email::campaigns::Page, read::email::campaigns::Selector>,
>;

/// Queries a [`Campaign`] by its [`CampaignId`].
pub type CampaignById = BackendQuery<By<Option<Campaign>, CampaignId>>;

/// Queries email templates.
pub type Templates =
    BackendQuery<By<read::email::Templates, read::email::TemplateFilter>>;

/// Queries categories of email templates.
pub type TemplateCategories =
    BackendQuery<By<read::email::TemplateCategories, ()>>;
