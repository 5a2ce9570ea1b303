//! Email marketing page.

use service::{
    command::{CreateEmailTemplate, SendEmailCampaign},
    domain::email::{self as domain, Campaign, PreviewRequest},
    list::{
        actions::{CreateTemplate, DeleteTemplate, SendCampaign},
        Controller,
    },
    query::email,
    read::email::{campaigns, TemplateFilter},
};

use crate::{args::Email, render, Context, Error, Service};

use super::{browse, fetch, mutate, perform, LookupError};

/// Runs the provided [`Email`] page command.
pub(super) async fn run(ctx: &Context, page: Email) -> Result<(), Error> {
    match page {
        Email::Recipients(audience) => {
            let count = fetch(ctx, email::Recipients::by(audience.into()))
                .await?;
            print!(
                "{}",
                render::fields([
                    ("Job Seekers", count.job_seeker_count),
                    ("Recruiters", count.recruiter_count),
                    ("Total", count.total_count),
                ]),
            );
            Ok(())
        }
        Email::Categories => {
            let categories =
                fetch(ctx, email::TemplateCategories::all()).await?;
            let mut table = render::Table::new(["Value", "Name", "About"]);
            for c in categories.0 {
                table.push(vec![c.value, c.label, c.description]);
            }
            print!("{table}");
            Ok(())
        }
        Email::Preview { content, template } => {
            let (subject, content) = content.into_parts();
            let request = PreviewRequest {
                subject: Some(subject).filter(|s| !s.trim().is_empty()),
                content: (template.is_none()
                    || !content.body.trim().is_empty())
                .then_some(content),
                template_id: template,
            };
            let preview = fetch(ctx, email::Render::by(request)).await?;
            println!("Subject: {}", preview.subject);
            println!();
            println!("{}", preview.html);
            Ok(())
        }
        Email::Send {
            name,
            content,
            template,
            audience,
            at,
        } => {
            let audience = domain::Audience::from(audience);
            let recipients =
                fetch(ctx, email::Recipients::by(audience.clone())).await?;
            let (subject, content) = content.into_parts();
            let action = SendCampaign {
                campaign: SendEmailCampaign {
                    name,
                    subject,
                    content,
                    template_id: template,
                    audience,
                    scheduled_at: at,
                },
                recipients: recipients.total_count,
            };
            mutate(ctx, &campaigns_list(ctx), &action).await.map(drop)
        }
        Email::Campaigns { pages } => {
            browse(ctx, &campaigns_list(ctx), campaigns::Filter, pages).await
        }
        Email::Campaign { id } => {
            let campaign = fetch(ctx, email::CampaignById::by(id))
                .await?
                .ok_or(LookupError::NotFound)?;
            print!("{}", describe(&campaign));
            Ok(())
        }
        Email::Templates {
            category,
            audience,
            active,
        } => {
            templates(
                ctx,
                TemplateFilter {
                    category,
                    target_audience: audience,
                    is_active: active,
                },
            )
            .await
        }
        Email::CreateTemplate {
            name,
            category,
            preheader,
            audience,
            content,
        } => {
            let (subject, content) = content.into_parts();
            let action = CreateTemplate(CreateEmailTemplate {
                name,
                category,
                subject,
                preheader,
                content,
                target_audience: audience,
            });
            if perform(ctx, &action).await?.is_some() {
                templates(ctx, TemplateFilter::default()).await?;
            }
            Ok(())
        }
        Email::DeleteTemplate { id } => {
            let all =
                fetch(ctx, email::Templates::by(TemplateFilter::default()))
                    .await?;
            let template = all
                .0
                .into_iter()
                .find(|t| t.id == id)
                .ok_or(LookupError::NotFound)?;
            let action = DeleteTemplate {
                id: template.id,
                name: template.name,
            };
            if perform(ctx, &action).await?.is_some() {
                templates(ctx, TemplateFilter::default()).await?;
            }
            Ok(())
        }
    }
}

/// Creates the list of sent [`Campaign`]s.
fn campaigns_list(
    ctx: &Context,
) -> Controller<Service, campaigns::Node, campaigns::Filter> {
    ctx.controller(
        ctx.list("Campaign History", "campaigns", false)
            .with_empty_label("No campaigns sent yet"),
    )
}

/// Prints email templates matching the provided [`TemplateFilter`].
async fn templates(ctx: &Context, filter: TemplateFilter) -> Result<(), Error> {
    let templates = fetch(ctx, email::Templates::by(filter)).await?;

    println!("Email Templates");
    print!("{}", render::items(&templates.0, "No templates found"));
    Ok(())
}

/// Renders details of the provided [`Campaign`].
fn describe(campaign: &Campaign) -> render::Table {
    render::fields([
        ("ID", campaign.id.to_string()),
        ("Name", campaign.name.clone()),
        ("Subject", campaign.subject.clone()),
        ("Audience", campaign.recipient_type.clone()),
        ("Status", campaign.status.to_string()),
        ("Recipients", campaign.stats.total_recipients.to_string()),
        ("Sent", campaign.stats.sent_count.to_string()),
        ("Failed", campaign.stats.failed_count.to_string()),
        ("Opened", or_none(campaign.stats.opened_count)),
        ("Clicked", or_none(campaign.stats.clicked_count)),
        ("Created", campaign.created_at.to_date_time_string()),
        ("Completed", render::date_time(campaign.completed_at)),
    ])
}

/// Formats the provided optional `value`, if any.
fn or_none(value: Option<impl ToString>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}
