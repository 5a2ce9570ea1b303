//! Plain text rendering of console pages.

use std::fmt;

use common::DateTimeOf;
use itertools::Itertools as _;
use service::{
    domain::{
        email::{Campaign, Template},
        stats::{Metric, Transaction, UserShare},
        JobSeeker, Notification, Recruiter, RecruiterActivity, TopJobSeeker,
    },
    list::Row,
};

/// Separator between [`Table`] columns.
const GAP: &str = "  ";

/// Placeholder of a missing value.
const NONE: &str = "-";

/// Text table with left-aligned columns.
#[derive(Clone, Debug, Default)]
pub struct Table {
    /// Column headers.
    headers: Vec<String>,

    /// Rows of cells.
    rows: Vec<Vec<String>>,

    /// Lines printed below the rows.
    notes: Vec<String>,
}

impl Table {
    /// Creates a new empty [`Table`] with the provided column `headers`.
    #[must_use]
    pub fn new<H: ToString>(headers: impl IntoIterator<Item = H>) -> Self {
        Self {
            headers: headers.into_iter().map(|h| h.to_string()).collect(),
            rows: vec![],
            notes: vec![],
        }
    }

    /// Appends a row of `cells` to this [`Table`].
    pub fn push(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Appends a `note` below the rows of this [`Table`].
    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Returns widths of all the columns.
    fn widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain([self.headers.len()])
            .max()
            .unwrap_or_default();
        (0..columns)
            .map(|i| {
                self.rows
                    .iter()
                    .chain([&self.headers])
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or_default()
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(widths.iter().copied())
                .map(|(cell, width)| format!("{cell:width$}"))
                .join(GAP)
                .trim_end()
                .to_owned()
        };

        if !self.rows.is_empty() {
            writeln!(f, "{}", line(&self.headers))?;
            writeln!(
                f,
                "{}",
                widths.iter().map(|w| "-".repeat(*w)).join(GAP),
            )?;
            for row in &self.rows {
                writeln!(f, "{}", line(row))?;
            }
        }
        for note in &self.notes {
            writeln!(f, "{note}")?;
        }
        Ok(())
    }
}

/// Item shown as a [`Table`] row.
pub trait Columns {
    /// Column headers.
    const HEADERS: &'static [&'static str];

    /// Returns cells of this item, one per header.
    fn cells(&self) -> Vec<String>;
}

/// Renders the provided list [`Row`]s into a [`Table`].
#[must_use]
pub fn list<N: Columns>(rows: &[Row<N>]) -> Table {
    let mut table = Table::new(N::HEADERS.iter().copied());
    for row in rows {
        match row {
            Row::Item(item) => table.push(item.cells()),
            Row::Loading(label)
            | Row::LoadingMore(label)
            | Row::Empty(label)
            | Row::Exhausted(label) => table.note(label.clone()),
        }
    }
    table
}

/// Renders the provided `items` into a [`Table`], noting the `empty` label
/// instead of an empty one.
#[must_use]
pub fn items<N: Columns>(items: &[N], empty: &str) -> Table {
    let mut table = Table::new(N::HEADERS.iter().copied());
    for item in items {
        table.push(item.cells());
    }
    if items.is_empty() {
        table.note(empty);
    }
    table
}

/// Renders `(field, value)` pairs into a [`Table`].
#[must_use]
pub fn fields<V: ToString>(
    fields: impl IntoIterator<Item = (&'static str, V)>,
) -> Table {
    let mut table = Table::new(["Field", "Value"]);
    for (field, value) in fields {
        table.push(vec![field.to_owned(), value.to_string()]);
    }
    table
}

/// Renders labeled [`Metric`]s into a [`Table`].
#[must_use]
pub fn metrics<'m>(
    metrics: impl IntoIterator<Item = (&'static str, &'m Metric)>,
) -> Table {
    let mut table = Table::new(["Metric", "Value", "Change"]);
    for (label, metric) in metrics {
        table.push(vec![
            label.to_owned(),
            metric.count.to_string(),
            change(metric),
        ]);
    }
    table
}

/// Renders [`UserShare`]s into a [`Table`].
#[must_use]
pub fn shares(shares: &[UserShare]) -> Table {
    let total: u64 = shares.iter().map(|s| s.count).sum();
    let mut table = Table::new(["Category", "Users", "Share"]);
    for share in shares {
        table.push(vec![
            share.label.clone(),
            share.count.to_string(),
            percent(share.count, total),
        ]);
    }
    if shares.is_empty() {
        table.note("No users found");
    }
    table
}

/// Formats the change of the provided [`Metric`].
fn change(metric: &Metric) -> String {
    match (metric.growth, &metric.growth_label, &metric.sub_label) {
        (Some(growth), Some(label), _) => format!("{growth:+.1}% {label}"),
        (Some(growth), None, _) => format!("{growth:+.1}%"),
        (None, _, Some(sub)) => sub.clone(),
        (None, _, None) => NONE.to_owned(),
    }
}

/// Formats `part` of the `total` in percent.
fn percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_owned();
    }
    #[expect(clippy::cast_precision_loss, reason = "display only")]
    let share = part as f64 * 100.0 / total as f64;
    format!("{share:.1}%")
}

/// Formats the provided optional [`DateTimeOf`] or a placeholder.
#[must_use]
pub fn date_time<Of: ?Sized>(at: Option<DateTimeOf<Of>>) -> String {
    at.map_or_else(|| NONE.to_owned(), |at| at.to_date_time_string())
}

/// Returns the provided optional `text` or a placeholder.
fn or_none(text: Option<&str>) -> String {
    text.filter(|t| !t.trim().is_empty())
        .unwrap_or(NONE)
        .to_owned()
}

/// Formats a block indicator.
fn blocked(is_blocked: bool) -> String {
    if is_blocked { "blocked" } else { "active" }.to_owned()
}

impl Columns for JobSeeker {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Name", "Phone", "Email", "Category", "Status", "Access",
        "Joined",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_none(self.name.as_deref()),
            self.phone.clone(),
            or_none(self.email.as_deref()),
            or_none(Some(self.category.as_str())),
            self.status.clone(),
            blocked(self.is_blocked),
            self.created_at.to_date_string(),
        ]
    }
}

impl Columns for TopJobSeeker {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Specialization",
        "Skills",
        "Availability",
        "Last Active",
        "Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            or_none(Some(self.specialization.as_str())),
            or_none(Some(self.skills.join(", ").as_str())),
            or_none(Some(self.availability.as_str())),
            self.last_active.to_date_string(),
            self.status.clone(),
        ]
    }
}

impl Columns for Recruiter {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Company", "Name", "Phone", "Email", "Status", "Access",
        "Joined",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_none(self.company_name.as_deref()),
            or_none(self.name.as_deref()),
            self.phone.clone(),
            or_none(self.email.as_deref()),
            self.status.clone(),
            blocked(self.is_blocked),
            self.created_at.to_date_string(),
        ]
    }
}

impl Columns for RecruiterActivity {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Company",
        "Recruiter",
        "Focus Area",
        "Interviews",
        "Last Updated",
        "Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.company.clone(),
            self.recruiter.clone(),
            or_none(Some(self.focus_area.as_str())),
            self.interviews.to_string(),
            self.last_updated.to_date_string(),
            self.status.clone(),
        ]
    }
}

impl Columns for Transaction {
    const HEADERS: &'static [&'static str] =
        &["ID", "User", "Package", "Amount", "Coins", "Date", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.user.clone(),
            self.package.clone(),
            self.amount.clone(),
            self.coins.to_string(),
            self.date.clone(),
            self.status.to_string(),
        ]
    }
}

impl Columns for Campaign {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Subject",
        "Audience",
        "Sent",
        "Failed",
        "Status",
        "Created",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.subject.clone(),
            self.recipient_type.clone(),
            format!(
                "{}/{}",
                self.stats.sent_count, self.stats.total_recipients,
            ),
            self.stats.failed_count.to_string(),
            self.status.to_string(),
            self.created_at.to_date_string(),
        ]
    }
}

impl Columns for Notification {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Title", "Audience", "Sent", "Failed", "Status", "Created",
    ];

    fn cells(&self) -> Vec<String> {
        let audience = match &self.topic {
            Some(topic) => format!("{} ({topic})", self.recipient_type),
            None => self.recipient_type.to_string(),
        };
        let (sent, failed) = self.stats.map_or_else(
            || (NONE.to_owned(), NONE.to_owned()),
            |s| {
                let sent = format!("{}/{}", s.sent, s.total_recipients);
                (sent, s.failed.to_string())
            },
        );
        vec![
            self.id.to_string(),
            self.title.clone(),
            audience,
            sent,
            failed,
            self.status.to_string(),
            self.created_at.to_date_time_string(),
        ]
    }
}

impl Columns for Template {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Name", "Category", "Subject", "Audience", "Active", "Created",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.clone(),
            self.subject.clone(),
            or_none(self.target_audience.as_deref()),
            if self.is_active { "yes" } else { "no" }.to_owned(),
            self.created_at.to_date_string(),
        ]
    }
}

#[cfg(test)]
mod spec {
    use service::{domain::stats::Metric, list::Row};

    use super::{change, list, percent, Columns, Table};

    #[derive(Clone, Debug)]
    struct Pair(&'static str, u32);

    impl Columns for Pair {
        const HEADERS: &'static [&'static str] = &["Name", "Count"];

        fn cells(&self) -> Vec<String> {
            vec![self.0.to_owned(), self.1.to_string()]
        }
    }

    #[test]
    fn aligns_columns() {
        let mut table = Table::new(["Name", "Count"]);
        table.push(vec!["Asha".into(), "12".into()]);
        table.push(vec!["Bo".into(), "3".into()]);

        assert_eq!(
            table.to_string(),
            "Name  Count\n\
             ----  -----\n\
             Asha  12\n\
             Bo    3\n",
        );
    }

    #[test]
    fn renders_list_rows_and_notes() {
        let rows = [
            Row::Item(Pair("Asha", 12)),
            Row::Exhausted("No more users".to_owned()),
        ];

        assert_eq!(
            list(&rows).to_string(),
            "Name  Count\n\
             ----  -----\n\
             Asha  12\n\
             No more users\n",
        );
    }

    #[test]
    fn renders_empty_list_as_note_only() {
        let rows = [Row::<Pair>::Empty("No users found".to_owned())];

        assert_eq!(list(&rows).to_string(), "No users found\n");
    }

    #[test]
    fn formats_metric_change() {
        let metric = Metric {
            count: 10,
            growth: Some(12.5),
            growth_label: Some("vs last month".into()),
            sub_label: None,
        };
        assert_eq!(change(&metric), "+12.5% vs last month");

        let metric = Metric {
            growth: None,
            sub_label: Some("Across 4 cities".into()),
            ..metric
        };
        assert_eq!(change(&metric), "Across 4 cities");

        assert_eq!(change(&Metric::default()), "-");
    }

    #[test]
    fn formats_shares() {
        assert_eq!(percent(1, 4), "25.0%");
        assert_eq!(percent(3, 0), "0%");
    }
}
