//! Per-page list configuration
//!
//! The only thing a new entity page supplies to reuse the list engine:
//! searchable fields, filter declarations, comparator overrides, the default
//! sort and the columns to render.

use crate::filter::{FilterKind, FilterOptions, FilterSpec};
use crate::sort::{ComparatorKind, SortDirection, SortSpec};
use std::collections::HashMap;
use std::hash::Hash;

/// Rows per page used when a configuration does not set one.
pub const DEFAULT_ROWS_PER_PAGE: usize = 25;

/// One rendered table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<F> {
    pub field: F,
    pub title: &'static str,
    /// Relative width, as a percentage of the table.
    pub width: u16,
    pub sortable: bool,
}

#[derive(Debug, Clone)]
pub struct ListConfig<F> {
    name: &'static str,
    searchable: Vec<F>,
    filters: Vec<FilterSpec<F>>,
    comparators: HashMap<F, ComparatorKind>,
    directions: HashMap<F, SortDirection>,
    default_sort: SortSpec<F>,
    columns: Vec<Column<F>>,
    rows_per_page: usize,
}

impl<F: Copy + Eq + Hash> ListConfig<F> {
    /// Start a configuration sorted by `default_sort_field` in that field's
    /// default direction.
    pub fn builder(name: &'static str, default_sort_field: F) -> ListConfigBuilder<F> {
        ListConfigBuilder {
            name,
            searchable: Vec::new(),
            filters: Vec::new(),
            comparators: HashMap::new(),
            directions: HashMap::new(),
            default_sort_field,
            default_sort_direction: None,
            columns: Vec::new(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn searchable(&self) -> &[F] {
        &self.searchable
    }

    pub fn filters(&self) -> &[FilterSpec<F>] {
        &self.filters
    }

    pub fn filter_spec(&self, field: F) -> Option<&FilterSpec<F>> {
        self.filters.iter().find(|spec| spec.field == field)
    }

    /// Comparator for `field`; lexical unless overridden.
    pub fn comparator_for(&self, field: F) -> ComparatorKind {
        self.comparators
            .get(&field)
            .copied()
            .unwrap_or(ComparatorKind::Lexical)
    }

    /// Direction applied when the user switches the sort to `field`.
    pub fn default_direction_for(&self, field: F) -> SortDirection {
        self.directions
            .get(&field)
            .copied()
            .unwrap_or_else(|| self.comparator_for(field).default_direction())
    }

    pub fn default_sort(&self) -> SortSpec<F> {
        self.default_sort
    }

    pub fn columns(&self) -> &[Column<F>] {
        &self.columns
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }
}

pub struct ListConfigBuilder<F> {
    name: &'static str,
    searchable: Vec<F>,
    filters: Vec<FilterSpec<F>>,
    comparators: HashMap<F, ComparatorKind>,
    directions: HashMap<F, SortDirection>,
    default_sort_field: F,
    default_sort_direction: Option<SortDirection>,
    columns: Vec<Column<F>>,
    rows_per_page: usize,
}

impl<F: Copy + Eq + Hash> ListConfigBuilder<F> {
    pub fn search(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        self.searchable.extend(fields);
        self
    }

    pub fn filter(mut self, spec: FilterSpec<F>) -> Self {
        self.filters.retain(|existing| existing.field != spec.field);
        self.filters.push(spec);
        self
    }

    /// Single-select filter whose options come from the data.
    pub fn single_filter(self, field: F, label: &'static str) -> Self {
        self.filter(FilterSpec {
            field,
            label,
            kind: FilterKind::Single,
            options: FilterOptions::FromData,
        })
    }

    pub fn multi_filter(self, field: F, label: &'static str, options: FilterOptions) -> Self {
        self.filter(FilterSpec {
            field,
            label,
            kind: FilterKind::Multi,
            options,
        })
    }

    pub fn array_filter(self, field: F, label: &'static str, options: FilterOptions) -> Self {
        self.filter(FilterSpec {
            field,
            label,
            kind: FilterKind::ArrayMembership,
            options,
        })
    }

    pub fn comparator(mut self, field: F, kind: ComparatorKind) -> Self {
        self.comparators.insert(field, kind);
        self
    }

    /// Override the direction used when switching the sort to `field`.
    pub fn default_direction(mut self, field: F, direction: SortDirection) -> Self {
        self.directions.insert(field, direction);
        self
    }

    /// Initial direction of the default sort.
    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.default_sort_direction = Some(direction);
        self
    }

    pub fn column(mut self, field: F, title: &'static str, width: u16) -> Self {
        self.columns.push(Column {
            field,
            title,
            width,
            sortable: true,
        });
        self
    }

    /// A rendered column the user cannot sort by.
    pub fn static_column(mut self, field: F, title: &'static str, width: u16) -> Self {
        self.columns.push(Column {
            field,
            title,
            width,
            sortable: false,
        });
        self
    }

    /// Initial rows per page. Zero is ignored.
    pub fn rows_per_page(mut self, rows: usize) -> Self {
        if rows > 0 {
            self.rows_per_page = rows;
        }
        self
    }

    pub fn build(self) -> ListConfig<F> {
        let mut config = ListConfig {
            name: self.name,
            searchable: self.searchable,
            filters: self.filters,
            comparators: self.comparators,
            directions: self.directions,
            default_sort: SortSpec::new(self.default_sort_field, SortDirection::Ascending),
            columns: self.columns,
            rows_per_page: self.rows_per_page,
        };
        let direction = self
            .default_sort_direction
            .unwrap_or_else(|| config.default_direction_for(self.default_sort_field));
        config.default_sort.direction = direction;
        config
    }
}
