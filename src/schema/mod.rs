//! Schema registry: which columns each dataset exports.
//!
//! Every [`DatasetKind`] maps to exactly one ordered list of [`ColumnSpec`]s.
//! The same list drives both the CSV and the PDF output, so the two artifacts
//! can never disagree on column set or order.
//!
//! Adding a dataset is a data change: add a variant and a table in
//! `registry.rs`.

mod registry;

use log::warn;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::config::{FALLBACK_COUNT, FALLBACK_TEXT};

pub use registry::column_specs;

/// The kind of records being exported.
///
/// Tokens are the lowercase variant names (`users`, `orders`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    EnumIter,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DatasetKind {
    Users,
    #[default]
    Orders,
    Chats,
    Transactions,
    Products,
    Services,
    Stores,
    Subscriptions,
    Promotions,
    Support,
    Disputes,
    Ratings,
    Notifications,
    Banners,
    Withdrawals,
}

impl DatasetKind {
    /// Parses a kind token, ignoring surrounding whitespace and ASCII case.
    ///
    /// Returns `None` for unrecognized tokens; use [`DatasetKind::resolve`]
    /// when a kind is required.
    pub fn parse_token(token: &str) -> Option<Self> {
        token.trim().to_ascii_lowercase().parse().ok()
    }

    /// Resolves a loosely-typed kind token.
    ///
    /// Unrecognized tokens fall back to [`DatasetKind::Orders`] with a warning;
    /// this never fails.
    pub fn resolve(token: &str) -> Self {
        Self::parse_token(token).unwrap_or_else(|| {
            warn!(
                "Unrecognized dataset kind {:?}, exporting with the {} columns",
                token,
                DatasetKind::default()
            );
            DatasetKind::default()
        })
    }

    /// Heading of the printable report, e.g. `"Withdrawals Report"`.
    pub fn report_title(&self) -> String {
        let token = self.as_ref();
        let mut chars = token.chars();
        match chars.next() {
            Some(first) => format!("{}{} Report", first.to_ascii_uppercase(), chars.as_str()),
            None => "Report".to_string(),
        }
    }
}

/// Location of a value inside a record.
///
/// Either a flat key (`user_name`) or a dotted path into nested objects
/// (`dispute_chat.buyer.name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        FieldPath(path)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Path segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.0.split('.')
    }
}

/// How a resolved value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Display the value as-is
    Identity,
    /// `₦` followed by the thousands-grouped amount; strings pass through
    Currency,
    /// Like `Currency`, but a currency code stored under the given record key
    /// replaces the symbol when it names another currency
    CurrencyFromField(&'static str),
    /// Truthiness mapped to a pair of labels
    BooleanLabel {
        true_text: &'static str,
        false_text: &'static str,
    },
    /// Dates arrive pre-formatted from the API and pass through
    DateOrRaw,
    /// First character upper-cased, the remainder lower-cased
    TitleCase { replace_underscore_with_space: bool },
    /// Numbers render as `"{n} Days"`
    DurationDays,
    /// Numbers render as `"{n}%"`
    Percentage,
    /// Numeric counter; missing values become `0`
    Count,
}

/// Value used when no resolver yields a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Text(&'static str),
    Zero,
}

impl Fallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fallback::Text(text) => text,
            Fallback::Zero => FALLBACK_COUNT,
        }
    }
}

/// One output column of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Label shown in the CSV header row and the report header row
    pub header: &'static str,
    paths: &'static [&'static str],
    pub formatter: FormatRule,
    pub fallback: Fallback,
}

impl ColumnSpec {
    /// A text column falling back to `"N/A"`.
    pub const fn new(
        header: &'static str,
        paths: &'static [&'static str],
        formatter: FormatRule,
    ) -> Self {
        ColumnSpec {
            header,
            paths,
            formatter,
            fallback: Fallback::Text(FALLBACK_TEXT),
        }
    }

    /// A count column falling back to `0`.
    pub const fn count(header: &'static str, paths: &'static [&'static str]) -> Self {
        ColumnSpec {
            header,
            paths,
            formatter: FormatRule::Count,
            fallback: Fallback::Zero,
        }
    }

    /// Candidate locations, tried in order; the first one holding a value wins.
    pub fn resolvers(&self) -> impl Iterator<Item = FieldPath> {
        self.paths.iter().copied().map(FieldPath::new)
    }

    pub fn resolver_count(&self) -> usize {
        self.paths.len()
    }
}

/// Column specs for a loosely-typed kind token (unknown tokens use `orders`).
pub fn column_specs_for(token: &str) -> &'static [ColumnSpec] {
    column_specs(DatasetKind::resolve(token))
}

/// Headers of a kind, in column order.
pub fn headers(kind: DatasetKind) -> Vec<&'static str> {
    column_specs(kind).iter().map(|spec| spec.header).collect()
}
