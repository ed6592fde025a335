use salesdeck_core::{
    pages, CompanyField, DealField, History, ListPage, ListPipeline, Location,
    SelectionController, SortDirection, SortSpec, UrlSelectionStore,
};
use salesdeck_test_utils::assertions::{assert_ids, assert_nulls_last};
use salesdeck_test_utils::fixtures::{company, numbered_companies, shuffled_stage_deals};
use salesdeck_test_utils::{Company, RankedEnum};
use std::rc::Rc;

fn url_page(companies: Vec<Company>, start: &str) -> (History, ListPage<Company>) {
    let history = History::new(Location::parse(start));
    let store = UrlSelectionStore::new(history.clone(), "company");
    let page = ListPage::new(
        ListPipeline::new(pages::companies(), companies),
        SelectionController::new("companies", Rc::new(store)),
    );
    (history, page)
}

#[test]
fn deal_stages_sort_in_pipeline_order_not_alphabetically() {
    let mut pipeline = ListPipeline::new(pages::deals(), shuffled_stage_deals());
    pipeline.set_sort(SortSpec::new(DealField::Stage, SortDirection::Ascending));

    let stages: Vec<&str> = pipeline.ordered().map(|d| d.stage_name.label()).collect();
    assert_eq!(stages, vec!["First meeting scheduled", "Demo", "Closed Won"]);
}

#[test]
fn narrowing_search_resets_to_the_only_remaining_page() {
    let mut companies = numbered_companies(30);
    companies[3].name = "Zenith Labs".to_string();
    companies[17].name = "Zenith Corp".to_string();

    let mut pipeline = ListPipeline::new(pages::companies(), companies);
    assert_eq!(pipeline.total_pages(), 2);
    pipeline.set_page(1);
    assert_eq!(pipeline.page(), 1);

    pipeline.set_search("zenith");
    assert_eq!(pipeline.page(), 0);
    assert_eq!(pipeline.total_pages(), 1);
    assert_eq!(pipeline.filtered_count(), 2);

    pipeline.set_page(1);
    assert_eq!(pipeline.page(), 0);
    pipeline.next_page();
    assert_eq!(pipeline.page(), 0);
}

#[test]
fn missing_last_meeting_sorts_last_in_both_directions() {
    let companies = vec![
        company("c-1", "Never met", None),
        company("c-2", "Met early", Some("2024-01-15")),
        company("c-3", "Met late", Some("2024-06-30")),
    ];
    let mut pipeline = ListPipeline::new(pages::companies(), companies);

    pipeline.set_sort(SortSpec::new(CompanyField::LastMeeting, SortDirection::Ascending));
    assert_ids(pipeline.ordered(), &["c-2", "c-3", "c-1"]);

    pipeline.set_sort(SortSpec::new(CompanyField::LastMeeting, SortDirection::Descending));
    assert_ids(pipeline.ordered(), &["c-3", "c-2", "c-1"]);
    assert_nulls_last(pipeline.ordered(), |c: &Company| c.last_meeting.is_none());
}

#[test]
fn deep_linked_selection_shows_detail_after_clearing_filters() {
    let mut companies = numbered_companies(50);
    companies.push(company("c-42", "Answer Corp", None));
    let (_history, mut page) = url_page(companies, "/companies?company=c-42");

    page.update(|p| p.set_search("company 00"));
    assert!(page.rows().rows.iter().all(|c| c.id != "c-42"));
    assert_eq!(page.detail().map(|c| c.id.as_str()), Some("c-42"));

    page.update(|p| p.clear_filters());
    assert_eq!(page.detail().map(|c| c.id.as_str()), Some("c-42"));
}

#[test]
fn deep_link_to_unknown_id_renders_no_detail() {
    let (_history, mut page) = url_page(numbered_companies(10), "/companies?company=c-42");
    page.update(|p| p.clear_filters());
    assert!(page.detail().is_none());
    assert_eq!(page.selection().selected().as_deref(), Some("c-42"));
}

#[test]
fn closing_detail_pushes_location_without_the_parameter() {
    let (history, mut page) = url_page(numbered_companies(5), "/companies?company=c-001");
    assert!(page.detail().is_some());

    page.close_detail();
    assert_eq!(history.current().to_string(), "/companies");
    page.close_detail();
    assert_eq!(history.len(), 2);

    history.back();
    assert_eq!(page.detail().map(|c| c.id.as_str()), Some("c-001"));
}

#[test]
fn row_clicks_push_history_and_back_restores_prior_selection() {
    let (history, mut page) = url_page(numbered_companies(5), "/companies");
    page.click_row(0);
    page.click_row(2);
    assert_eq!(history.current().to_string(), "/companies?company=c-002");

    history.back();
    assert_eq!(page.detail().map(|c| c.id.as_str()), Some("c-000"));
    history.back();
    assert!(page.detail().is_none());
}

#[test]
fn empty_result_reads_page_one_of_one() {
    let (_history, mut page) = url_page(numbered_companies(5), "/companies");
    page.update(|p| p.set_search("no such company"));
    assert!(page.is_empty_state());
    let view = page.rows();
    assert_eq!(view.display_total_pages(), 1);
    assert_eq!(view.page, 0);
    page.move_cursor(1);
    assert_eq!(page.cursor(), 0);
    assert!(!page.open_cursor());
}
