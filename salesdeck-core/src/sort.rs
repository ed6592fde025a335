//! Comparator registry
//!
//! Per-field comparison with lexical, numeric, date and rank-table
//! orderings. Null handling is a dedicated branch that runs before the
//! direction is applied and is never negated: nulls sort last in both
//! directions.

use crate::field::{Entity, FieldValue};
use crate::rank::RankTable;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// Sort direction, applied as a final sign on non-null comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Current sort field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortSpec<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// How a sortable field is compared.
#[derive(Clone, Copy)]
pub enum ComparatorKind {
    /// Case-insensitive comparison of the display string, raw bytes as tiebreak.
    Lexical,
    /// Numeric comparison; non-numeric text counts as null.
    Numeric,
    /// Point in time; unparseable dates count as null.
    Date,
    /// Business order from a rank table. Unranked labels follow ranked ones.
    Rank(&'static RankTable),
}

impl ComparatorKind {
    /// Direction used when a column is first chosen: most recent first for
    /// dates, ascending otherwise.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            ComparatorKind::Date => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

impl fmt::Debug for ComparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorKind::Lexical => write!(f, "Lexical"),
            ComparatorKind::Numeric => write!(f, "Numeric"),
            ComparatorKind::Date => write!(f, "Date"),
            ComparatorKind::Rank(table) => write!(f, "Rank({})", table.name()),
        }
    }
}

impl PartialEq for ComparatorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ComparatorKind::Rank(a), ComparatorKind::Rank(b)) => std::ptr::eq(*a, *b),
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

/// Parse a date-string as a UTC timestamp. Accepts RFC 3339, `YYYY-MM-DD
/// HH:MM[:SS]` and bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Precomputed comparison key of one field value. `None` keys are nulls.
#[derive(Debug, Clone)]
pub(crate) enum SortKey {
    Text { folded: String, raw: String },
    Number(f64),
    Rank(usize, String),
}

pub(crate) fn sort_key(value: &FieldValue<'_>, kind: ComparatorKind) -> Option<SortKey> {
    if value.is_null() {
        return None;
    }
    match kind {
        ComparatorKind::Lexical => {
            let raw = value.to_display_string();
            Some(SortKey::Text {
                folded: raw.to_lowercase(),
                raw,
            })
        }
        ComparatorKind::Numeric => match value {
            FieldValue::Number(n) if !n.is_nan() => Some(SortKey::Number(*n)),
            FieldValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| !n.is_nan())
                .map(SortKey::Number),
            _ => None,
        },
        ComparatorKind::Date => value
            .as_text()
            .and_then(parse_timestamp)
            .map(|ts| SortKey::Number(ts.timestamp_millis() as f64)),
        ComparatorKind::Rank(table) => {
            let label = value.to_display_string();
            let rank = table.rank(&label).unwrap_or(table.len());
            Some(SortKey::Rank(rank, label))
        }
    }
}

fn compare_lexical(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (
            SortKey::Text { folded: fa, raw: ra },
            SortKey::Text { folded: fb, raw: rb },
        ) => fa.cmp(fb).then_with(|| ra.cmp(rb)),
        (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
        (SortKey::Rank(ra, la), SortKey::Rank(rb, lb)) => {
            ra.cmp(rb).then_with(|| compare_lexical(la, lb))
        }
        // A comparator produces one key shape for every record.
        _ => Ordering::Equal,
    }
}

/// Null branch first, never negated; direction only touches real values.
pub(crate) fn compare_sort_keys(
    a: Option<&SortKey>,
    b: Option<&SortKey>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(compare_keys(a, b)),
    }
}

/// Compare two field values. Null (or unparseable for the comparator) sorts
/// after any value regardless of `direction`.
pub fn compare_values(
    a: &FieldValue<'_>,
    b: &FieldValue<'_>,
    kind: ComparatorKind,
    direction: SortDirection,
) -> Ordering {
    compare_sort_keys(
        sort_key(a, kind).as_ref(),
        sort_key(b, kind).as_ref(),
        direction,
    )
}

/// Compare two records on `field`.
pub fn compare_records<E: Entity>(
    a: &E,
    b: &E,
    field: E::Field,
    kind: ComparatorKind,
    direction: SortDirection,
) -> Ordering {
    compare_values(&a.value(field), &b.value(field), kind, direction)
}
