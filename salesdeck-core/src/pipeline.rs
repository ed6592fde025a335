//! List pipeline: filter -> stable sort -> paginate.
//!
//! The pipeline always starts from the full source collection. The filtered
//! and sorted order is memoized as indices into the source and recomputed
//! only when the source, the search text, a filter selection or the sort
//! actually changes. Paging is a slice over that order and never triggers a
//! recompute.
//!
//! Reset rules: changing search text, any filter selection or rows per page
//! sends the page back to 0; changing the sort keeps the page. The page is
//! clamped into range after every recompute.

use crate::config::ListConfig;
use crate::error::ListResult;
use crate::field::Entity;
use crate::filter::FilterState;
use crate::pagination::Pagination;
use crate::rank::RankTable;
use crate::sort::{compare_sort_keys, sort_key, SortDirection, SortSpec};
use std::sync::Arc;
use tracing::debug;

/// One rendered page of a list.
#[derive(Debug)]
pub struct PageView<'a, E> {
    pub rows: Vec<&'a E>,
    pub page: usize,
    /// `ceil(filtered_count / rows_per_page)`; zero for an empty result.
    pub total_pages: usize,
    pub rows_per_page: usize,
    pub filtered_count: usize,
    pub total_count: usize,
}

impl<E> PageView<'_, E> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Page count for display; at least 1 so an empty result reads "1 of 1".
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }
}

/// Records sharing one value of a grouping field, e.g. one board column.
#[derive(Debug)]
pub struct Group<'a, E> {
    pub label: String,
    pub records: Vec<&'a E>,
}

/// Label of the group collecting records whose grouping field is null.
pub const UNGROUPED_LABEL: &str = "(none)";

pub struct ListPipeline<E: Entity> {
    config: ListConfig<E::Field>,
    source: Arc<[E]>,
    filters: FilterState<E::Field>,
    sort: SortSpec<E::Field>,
    pagination: Pagination,
    ordered: Vec<usize>,
    recompute_count: u64,
}

impl<E: Entity> ListPipeline<E> {
    /// Pipeline over `source` in the configuration's default state.
    pub fn new(config: ListConfig<E::Field>, source: impl Into<Arc<[E]>>) -> Self {
        let filters = FilterState::new(config.filters());
        let sort = config.default_sort();
        let pagination = Pagination::at_least_one_row(config.rows_per_page());
        let mut pipeline = Self {
            config,
            source: source.into(),
            filters,
            sort,
            pagination,
            ordered: Vec::new(),
            recompute_count: 0,
        };
        pipeline.recompute();
        pipeline
    }

    pub fn config(&self) -> &ListConfig<E::Field> {
        &self.config
    }

    /// The full, unfiltered source collection.
    pub fn source(&self) -> &[E] {
        &self.source
    }

    /// Look a record up in the full source, ignoring filters and paging.
    pub fn find(&self, id: &str) -> Option<&E> {
        self.source.iter().find(|record| record.id() == id)
    }

    pub fn filters(&self) -> &FilterState<E::Field> {
        &self.filters
    }

    pub fn sort(&self) -> SortSpec<E::Field> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn rows_per_page(&self) -> usize {
        self.pagination.rows_per_page()
    }

    pub fn total_count(&self) -> usize {
        self.source.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.ordered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.ordered.len())
    }

    /// How many times filter+sort has actually run.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Replace the source collection. Keeps filters, sort and page (clamped).
    pub fn set_source(&mut self, source: impl Into<Arc<[E]>>) {
        let source = source.into();
        if Arc::ptr_eq(&source, &self.source) {
            return;
        }
        self.source = source;
        self.recompute();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        if self.filters.set_search(text) {
            self.filters_changed();
        }
    }

    pub fn set_single(&mut self, field: E::Field, value: Option<String>) -> ListResult<()> {
        if self.filters.set_single(field, value)? {
            self.filters_changed();
        }
        Ok(())
    }

    pub fn toggle_filter_value(&mut self, field: E::Field, value: &str) -> ListResult<()> {
        if self.filters.toggle_value(field, value)? {
            self.filters_changed();
        }
        Ok(())
    }

    pub fn set_filter_values<I, S>(&mut self, field: E::Field, values: I) -> ListResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.filters.set_values(field, values)? {
            self.filters_changed();
        }
        Ok(())
    }

    /// Clear search text and every filter selection.
    pub fn clear_filters(&mut self) {
        if self.filters.clear() {
            self.filters_changed();
        }
    }

    /// Header click: flip the direction of the active field, or switch to a
    /// new field in that field's default direction. The page is kept.
    pub fn toggle_sort(&mut self, field: E::Field) {
        let next = if field == self.sort.field {
            SortSpec::new(field, self.sort.direction.toggle())
        } else {
            SortSpec::new(field, self.config.default_direction_for(field))
        };
        self.set_sort(next);
    }

    pub fn set_sort(&mut self, sort: SortSpec<E::Field>) {
        if sort == self.sort {
            return;
        }
        self.sort = sort;
        self.recompute();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page, self.ordered.len());
    }

    pub fn next_page(&mut self) {
        if self.pagination.has_next(self.ordered.len()) {
            self.set_page(self.page() + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.pagination.has_prev() {
            self.set_page(self.page() - 1);
        }
    }

    /// Change rows per page; the page goes back to 0.
    pub fn set_rows_per_page(&mut self, rows: usize) -> ListResult<()> {
        self.pagination.set_rows_per_page(rows)
    }

    // ------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------

    /// The full filtered and sorted collection, across all pages.
    pub fn ordered(&self) -> impl Iterator<Item = &E> + '_ {
        self.ordered.iter().map(move |&index| &self.source[index])
    }

    /// The current page.
    pub fn view(&self) -> PageView<'_, E> {
        let count = self.ordered.len();
        let range = self.pagination.slice_range(count);
        PageView {
            rows: self.ordered[range]
                .iter()
                .map(|&index| &self.source[index])
                .collect(),
            page: self.pagination.page(),
            total_pages: self.pagination.total_pages(count),
            rows_per_page: self.pagination.rows_per_page(),
            filtered_count: count,
            total_count: self.source.len(),
        }
    }

    /// Group the filtered and sorted collection (all pages) by `field`, one
    /// group per rank-table label in rank order, empty groups included.
    /// Labels missing from the table follow in first-seen order, then a
    /// trailing group for null values when there are any.
    pub fn grouped_by(&self, field: E::Field, table: &RankTable) -> Vec<Group<'_, E>> {
        let mut groups: Vec<Group<'_, E>> = table
            .labels()
            .iter()
            .map(|label| Group {
                label: (*label).to_string(),
                records: Vec::new(),
            })
            .collect();
        let mut nulls = Vec::new();
        for record in self.ordered() {
            let value = record.value(field);
            if value.is_null() {
                nulls.push(record);
                continue;
            }
            let label = value.to_display_string();
            let position = match table.rank(&label) {
                Some(rank) => Some(rank),
                None => groups.iter().position(|g| g.label == label),
            };
            match position {
                Some(index) => groups[index].records.push(record),
                None => groups.push(Group {
                    label,
                    records: vec![record],
                }),
            }
        }
        if !nulls.is_empty() {
            groups.push(Group {
                label: UNGROUPED_LABEL.to_string(),
                records: nulls,
            });
        }
        groups
    }

    fn filters_changed(&mut self) {
        self.pagination.reset();
        self.recompute();
    }

    fn recompute(&mut self) {
        let searchable = self.config.searchable();
        let field = self.sort.field;
        let direction: SortDirection = self.sort.direction;
        let kind = self.config.comparator_for(field);

        let mut keyed: Vec<(usize, _)> = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filters.matches(*record, searchable))
            .map(|(index, record)| (index, sort_key(&record.value(field), kind)))
            .collect();
        // Vec::sort_by is stable: ties keep their filtered-list order.
        keyed.sort_by(|(_, a), (_, b)| compare_sort_keys(a.as_ref(), b.as_ref(), direction));

        self.ordered = keyed.into_iter().map(|(index, _)| index).collect();
        self.recompute_count += 1;
        let clamped = self.pagination.clamp(self.ordered.len());

        debug!(
            page = self.config.name(),
            total = self.source.len(),
            filtered = self.ordered.len(),
            sort_field = ?field,
            ?direction,
            clamped,
            "list recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Deal, DealField};
    use crate::enums::DealStage;
    use crate::pages;
    use crate::rank::DEAL_STAGE_RANK;

    fn deal(id: &str, name: &str, stage: DealStage, close_date: Option<&str>) -> Deal {
        Deal {
            id: id.to_string(),
            name: name.to_string(),
            company_id: None,
            company_name: Some("Acme".to_string()),
            stage_name: stage,
            amount: None,
            close_date: close_date.map(str::to_string),
            owner: None,
            next_step: None,
        }
    }

    fn many(count: usize) -> Vec<Deal> {
        (0..count)
            .map(|i| deal(&format!("d-{i:03}"), &format!("Deal {i:03}"), DealStage::Discovery, None))
            .collect()
    }

    fn ids<'a>(rows: impl IntoIterator<Item = &'a Deal>) -> Vec<&'a str> {
        rows.into_iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn default_view_sorts_deals_by_stage_rank() {
        let source = vec![
            deal("won", "Zeta", DealStage::ClosedWon, None),
            deal("first", "Alpha", DealStage::FirstMeetingScheduled, None),
            deal("demo", "Mid", DealStage::Demo, None),
        ];
        let pipeline = ListPipeline::new(pages::deals(), source);
        assert_eq!(ids(pipeline.view().rows), vec!["first", "demo", "won"]);
        assert_eq!(pipeline.recompute_count(), 1);
    }

    #[test]
    fn paging_does_not_recompute() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(60));
        pipeline.next_page();
        pipeline.next_page();
        pipeline.set_page(0);
        let _ = pipeline.view();
        assert_eq!(pipeline.recompute_count(), 1);
    }

    #[test]
    fn unchanged_inputs_do_not_recompute() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(5));
        pipeline.set_search("");
        pipeline.set_sort(pipeline.config().default_sort());
        pipeline.clear_filters();
        assert_eq!(pipeline.recompute_count(), 1);
        pipeline.set_search("deal 001");
        assert_eq!(pipeline.recompute_count(), 2);
        assert_eq!(pipeline.filtered_count(), 1);
    }

    #[test]
    fn search_resets_page_but_sort_keeps_it() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(60));
        pipeline.set_page(2);
        assert_eq!(pipeline.page(), 2);

        pipeline.toggle_sort(DealField::Name);
        assert_eq!(pipeline.page(), 2);

        pipeline.set_search("deal");
        assert_eq!(pipeline.page(), 0);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(60));
        pipeline.set_page(1);
        pipeline
            .toggle_filter_value(DealField::Stage, "Discovery")
            .unwrap();
        assert_eq!(pipeline.page(), 0);
        assert_eq!(pipeline.filtered_count(), 60);
    }

    #[test]
    fn undeclared_filter_is_an_error() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(3));
        assert!(pipeline
            .set_single(DealField::Owner, Some("Sam".to_string()))
            .is_err());
        assert_eq!(pipeline.recompute_count(), 1);
    }

    #[test]
    fn rows_per_page_change_resets_page() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(60));
        pipeline.set_page(2);
        pipeline.set_rows_per_page(10).unwrap();
        assert_eq!(pipeline.page(), 0);
        assert_eq!(pipeline.total_pages(), 6);
        assert_eq!(pipeline.recompute_count(), 1);
    }

    #[test]
    fn shrinking_source_clamps_page() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(60));
        pipeline.set_page(2);
        pipeline.set_source(many(30));
        assert_eq!(pipeline.page(), 1);
        assert_eq!(pipeline.view().rows.len(), 5);
    }

    #[test]
    fn same_source_arc_is_not_recomputed() {
        let source: Arc<[Deal]> = many(4).into();
        let mut pipeline = ListPipeline::new(pages::deals(), Arc::clone(&source));
        pipeline.set_source(Arc::clone(&source));
        assert_eq!(pipeline.recompute_count(), 1);
    }

    #[test]
    fn header_toggle_flips_then_switches_with_field_default() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(3));
        pipeline.toggle_sort(DealField::Stage);
        assert_eq!(pipeline.sort().direction, SortDirection::Descending);
        pipeline.toggle_sort(DealField::CloseDate);
        assert_eq!(
            pipeline.sort(),
            SortSpec::new(DealField::CloseDate, SortDirection::Descending)
        );
    }

    #[test]
    fn null_close_dates_stay_last_both_ways() {
        let source = vec![
            deal("none", "A", DealStage::Demo, None),
            deal("old", "B", DealStage::Demo, Some("2024-01-10")),
            deal("new", "C", DealStage::Demo, Some("2024-06-01")),
        ];
        let mut pipeline = ListPipeline::new(pages::deals(), source);
        pipeline.set_sort(SortSpec::new(DealField::CloseDate, SortDirection::Descending));
        assert_eq!(ids(pipeline.ordered()), vec!["new", "old", "none"]);
        pipeline.toggle_sort(DealField::CloseDate);
        assert_eq!(ids(pipeline.ordered()), vec!["old", "new", "none"]);
    }

    #[test]
    fn empty_result_reads_page_one_of_one() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(3));
        pipeline.set_search("nothing matches this");
        let view = pipeline.view();
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.display_total_pages(), 1);
        assert_eq!(view.page, 0);
    }

    #[test]
    fn find_ignores_filters() {
        let mut pipeline = ListPipeline::new(pages::deals(), many(3));
        pipeline.set_search("deal 000");
        assert!(pipeline.find("d-002").is_some());
        assert!(pipeline.find("missing").is_none());
    }

    #[test]
    fn grouping_keeps_empty_stages_in_rank_order() {
        let source = vec![
            deal("a", "A", DealStage::Negotiation, None),
            deal("b", "B", DealStage::Discovery, None),
            deal("c", "C", DealStage::Negotiation, None),
        ];
        let pipeline = ListPipeline::new(pages::deals(), source);
        let groups = pipeline.grouped_by(DealField::Stage, &DEAL_STAGE_RANK);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, DEAL_STAGE_RANK.labels().to_vec());
        let negotiation = groups
            .iter()
            .find(|g| g.label == "Negotiation")
            .unwrap();
        assert_eq!(ids(negotiation.records.iter().copied()), vec!["a", "c"]);
        assert!(groups[0].records.is_empty());
    }

    #[test]
    fn grouping_appends_unranked_and_null_groups() {
        let source = vec![
            deal("a", "A", DealStage::Demo, None),
            deal("b", "B", DealStage::Demo, None),
        ];
        let pipeline = ListPipeline::new(pages::deals(), source);
        let groups = pipeline.grouped_by(DealField::CompanyName, &DEAL_STAGE_RANK);
        assert_eq!(groups.last().map(|g| g.label.as_str()), Some("Acme"));
        assert_eq!(groups.last().map(|g| g.records.len()), Some(2));

        let groups = pipeline.grouped_by(DealField::CloseDate, &DEAL_STAGE_RANK);
        assert_eq!(groups.last().map(|g| g.label.as_str()), Some(UNGROUPED_LABEL));
    }
}
