//! Filter predicate set
//!
//! Pure predicates evaluating one record against the active filter state:
//! free-text search over declared fields, single-select, multi-select and
//! array-membership filters. All active predicates are AND-ed. An unset
//! single filter or an empty selection set is no constraint at all.

use crate::error::{ListError, ListResult};
use crate::field::{Entity, FieldValue};
use std::collections::BTreeSet;

/// How a filterable field is matched against its selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Field equals the one selected value.
    Single,
    /// Field value is a member of the selected set.
    Multi,
    /// Any element of a multi-valued field is in the selected set.
    ArrayMembership,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Single => "single-select",
            FilterKind::Multi => "multi-select",
            FilterKind::ArrayMembership => "array-membership",
        }
    }
}

/// Where a filter's selectable options come from.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOptions {
    /// A fixed list, usually a rank table's labels.
    Fixed(Vec<&'static str>),
    /// Distinct non-null values present in the source collection.
    FromData,
}

/// Declaration of one filterable field on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec<F> {
    pub field: F,
    pub label: &'static str,
    pub kind: FilterKind,
    pub options: FilterOptions,
}

impl<F: Copy> FilterSpec<F> {
    /// Selectable options for this filter over `source`.
    pub fn options_for<E>(&self, source: &[E]) -> Vec<String>
    where
        E: Entity<Field = F>,
    {
        match &self.options {
            FilterOptions::Fixed(labels) => labels.iter().map(|l| (*l).to_string()).collect(),
            FilterOptions::FromData => {
                let mut distinct = BTreeSet::new();
                for record in source {
                    match record.value(self.field) {
                        FieldValue::Null => {}
                        FieldValue::List(items) => {
                            distinct.extend(items.into_iter().map(str::to_string));
                        }
                        other => {
                            distinct.insert(other.to_display_string());
                        }
                    }
                }
                distinct.into_iter().collect()
            }
        }
    }
}

/// Current selection of one filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    Single(Option<String>),
    Set(BTreeSet<String>),
}

impl FilterSelection {
    fn empty_for(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Single => FilterSelection::Single(None),
            FilterKind::Multi | FilterKind::ArrayMembership => {
                FilterSelection::Set(BTreeSet::new())
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FilterSelection::Single(value) => value.is_none(),
            FilterSelection::Set(values) => values.is_empty(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            FilterSelection::Single(selected) => selected.as_deref() == Some(value),
            FilterSelection::Set(values) => values.contains(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveFilter<F> {
    field: F,
    kind: FilterKind,
    selection: FilterSelection,
}

/// Search text plus one selection per declared filter. Owned by a single
/// page instance; nothing here is shared across pages.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<F> {
    search: String,
    filters: Vec<ActiveFilter<F>>,
}

impl<F: Copy + Eq + std::fmt::Debug> FilterState<F> {
    /// Empty state for the declared filters.
    pub fn new(specs: &[FilterSpec<F>]) -> Self {
        Self {
            search: String::new(),
            filters: specs
                .iter()
                .map(|spec| ActiveFilter {
                    field: spec.field,
                    kind: spec.kind,
                    selection: FilterSelection::empty_for(spec.kind),
                })
                .collect(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns whether the search text changed.
    pub fn set_search(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search {
            return false;
        }
        self.search = text;
        true
    }

    pub fn selection(&self, field: F) -> Option<&FilterSelection> {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .map(|f| &f.selection)
    }

    /// Set or unset a single-select filter. Returns whether it changed.
    pub fn set_single(&mut self, field: F, value: Option<String>) -> ListResult<bool> {
        let filter = self.filter_mut(field)?;
        if filter.kind != FilterKind::Single {
            return Err(mismatch(field, filter.kind, FilterKind::Single));
        }
        let next = FilterSelection::Single(value);
        if filter.selection == next {
            return Ok(false);
        }
        filter.selection = next;
        Ok(true)
    }

    /// Toggle one value. On a single-select filter this selects the value, or
    /// unsets the filter when the value was already selected.
    pub fn toggle_value(&mut self, field: F, value: &str) -> ListResult<bool> {
        let filter = self.filter_mut(field)?;
        match &mut filter.selection {
            FilterSelection::Single(selected) => {
                if selected.as_deref() == Some(value) {
                    *selected = None;
                } else {
                    *selected = Some(value.to_string());
                }
            }
            FilterSelection::Set(values) => {
                if !values.remove(value) {
                    values.insert(value.to_string());
                }
            }
        }
        Ok(true)
    }

    /// Replace a set filter's selection. Returns whether it changed.
    pub fn set_values<I, S>(&mut self, field: F, values: I) -> ListResult<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let filter = self.filter_mut(field)?;
        if filter.kind == FilterKind::Single {
            return Err(mismatch(field, filter.kind, FilterKind::Multi));
        }
        let next = FilterSelection::Set(values.into_iter().map(Into::into).collect());
        if filter.selection == next {
            return Ok(false);
        }
        filter.selection = next;
        Ok(true)
    }

    /// Clear search text and every selection. Returns whether anything changed.
    pub fn clear(&mut self) -> bool {
        let was_empty = self.is_empty();
        self.search.clear();
        for filter in &mut self.filters {
            filter.selection = FilterSelection::empty_for(filter.kind);
        }
        !was_empty
    }

    /// No search text and no active selection.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.filters.iter().all(|f| f.selection.is_empty())
    }

    /// Number of filters with an active selection (search excluded).
    pub fn active_count(&self) -> usize {
        self.filters.iter().filter(|f| !f.selection.is_empty()).count()
    }

    /// Evaluate every predicate against `record`.
    pub fn matches<E>(&self, record: &E, searchable: &[F]) -> bool
    where
        E: Entity<Field = F>,
    {
        matches_search(record, searchable, &self.search)
            && self
                .filters
                .iter()
                .all(|f| matches_selection(&record.value(f.field), f.kind, &f.selection))
    }

    fn filter_mut(&mut self, field: F) -> ListResult<&mut ActiveFilter<F>> {
        self.filters
            .iter_mut()
            .find(|f| f.field == field)
            .ok_or_else(|| ListError::UndeclaredFilter {
                field: format!("{:?}", field),
            })
    }
}

fn mismatch<F: std::fmt::Debug>(field: F, declared: FilterKind, attempted: FilterKind) -> ListError {
    ListError::FilterKindMismatch {
        field: format!("{:?}", field),
        declared: declared.as_str(),
        attempted: attempted.as_str(),
    }
}

/// Case-insensitive substring search over the declared fields. A blank query
/// matches everything.
pub fn matches_search<E: Entity>(record: &E, searchable: &[E::Field], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    searchable.iter().any(|field| match record.value(*field) {
        FieldValue::Null => false,
        FieldValue::Text(text) => text.to_lowercase().contains(&needle),
        FieldValue::List(items) => items
            .iter()
            .any(|item| item.to_lowercase().contains(&needle)),
        number @ FieldValue::Number(_) => number.to_display_string().contains(&needle),
    })
}

/// Evaluate one filter selection against one field value. A null value never
/// satisfies an active selection; an empty selection accepts everything.
pub fn matches_selection(value: &FieldValue<'_>, kind: FilterKind, selection: &FilterSelection) -> bool {
    if selection.is_empty() {
        return true;
    }
    match (kind, value) {
        (_, FieldValue::Null) => false,
        (_, FieldValue::List(items)) => items.iter().any(|item| selection.contains(item)),
        (_, FieldValue::Text(text)) => selection.contains(text),
        (_, number @ FieldValue::Number(_)) => selection.contains(&number.to_display_string()),
    }
}
