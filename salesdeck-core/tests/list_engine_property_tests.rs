use proptest::prelude::*;
use salesdeck_core::{
    pages, Company, CompanyField, DealField, DiscoveryQuestionField, ListPage, ListPipeline,
    RankTable, SelectionController, SortDirection, SortSpec, DEAL_STAGE_RANK,
};
use salesdeck_test_utils::fixtures::company;
use salesdeck_test_utils::generators::*;
use salesdeck_test_utils::{id_for, Deal, DealStage, Entity, RankedEnum, PROFILES};
use std::collections::BTreeSet;

fn ids<'a, E: Entity + 'a>(records: impl IntoIterator<Item = &'a E>) -> Vec<String> {
    records.into_iter().map(|r| r.id().to_string()).collect()
}

fn id_set<'a, E: Entity + 'a>(records: impl IntoIterator<Item = &'a E>) -> BTreeSet<String> {
    records.into_iter().map(|r| r.id().to_string()).collect()
}

/// Companies whose `last_meeting` dates are all distinct, followed by
/// `nulls` companies without one, in shuffled order.
fn arb_companies_with_distinct_dates() -> impl Strategy<Value = Vec<Company>> {
    (prop::collection::btree_set(0i64..3650, 0..30), 0usize..5)
        .prop_map(|(days, nulls)| {
            let mut records: Vec<Company> = days
                .into_iter()
                .enumerate()
                .map(|(i, day)| {
                    let date = chrono::DateTime::from_timestamp(1_577_836_800 + day * 86_400, 0)
                        .map(|ts| ts.format("%Y-%m-%d").to_string());
                    company(&id_for("c", i), &format!("Company {i:03}"), date.as_deref())
                })
                .collect();
            let offset = records.len();
            records.extend(
                (0..nulls).map(|i| company(&id_for("c", offset + i), "No meetings", None)),
            );
            records
        })
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ========================================================================
    // Adding predicates never widens the result set
    // ========================================================================

    #[test]
    fn prop_adding_a_stage_filter_never_widens(
        deals in arb_deals(60),
        query in arb_query(),
        stages in prop::collection::vec(arb_deal_stage(), 1..4),
    ) {
        let mut pipeline = ListPipeline::new(pages::deals(), deals.clone());
        pipeline.set_search(query.clone());
        let searched = id_set(pipeline.ordered());

        pipeline
            .set_filter_values(DealField::Stage, stages.iter().map(|s| s.label()))
            .unwrap();
        let narrowed = id_set(pipeline.ordered());

        prop_assert!(narrowed.is_subset(&searched));
        let unfiltered = id_set(deals.iter());
        prop_assert!(searched.is_subset(&unfiltered));
    }

    #[test]
    fn prop_adding_search_to_membership_filter_never_widens(
        questions in arb_discovery_questions(40),
        profiles in prop::collection::btree_set(prop::sample::select(PROFILES), 1..3),
        query in arb_query(),
    ) {
        let mut pipeline = ListPipeline::new(pages::discovery_questions(), questions);
        pipeline
            .set_filter_values(DiscoveryQuestionField::RelevantFor, profiles.iter().copied())
            .unwrap();
        let filtered = id_set(pipeline.ordered());
        for question in pipeline.ordered() {
            prop_assert!(question
                .typically_relevant_for
                .iter()
                .any(|p| profiles.contains(p.as_str())));
        }

        pipeline.set_search(query);
        prop_assert!(id_set(pipeline.ordered()).is_subset(&filtered));
    }

    // ========================================================================
    // Cleared filters return the full source
    // ========================================================================

    #[test]
    fn prop_cleared_filters_return_every_record(
        companies in arb_companies(50),
        query in arb_query(),
        profile in arb_profile(),
    ) {
        let mut pipeline = ListPipeline::new(pages::companies(), companies.clone());
        pipeline.set_search(query);
        pipeline.set_single(CompanyField::CustomerProfile, Some(profile)).unwrap();
        pipeline.clear_filters();

        prop_assert!(pipeline.filters().is_empty());
        prop_assert_eq!(pipeline.filtered_count(), companies.len());
        prop_assert_eq!(id_set(pipeline.ordered()), id_set(companies.iter()));
    }

    // ========================================================================
    // Sorting is deterministic; reversing keeps nulls last
    // ========================================================================

    #[test]
    fn prop_sorting_twice_gives_identical_order(
        deals in arb_deals(60),
        ascending in any::<bool>(),
    ) {
        let direction = if ascending { SortDirection::Ascending } else { SortDirection::Descending };
        let sort = SortSpec::new(DealField::CloseDate, direction);

        let mut first = ListPipeline::new(pages::deals(), deals.clone());
        first.set_sort(sort);
        let mut second = ListPipeline::new(pages::deals(), deals);
        second.set_sort(sort);

        prop_assert_eq!(ids(first.ordered()), ids(second.ordered()));
    }

    #[test]
    fn prop_reversed_direction_is_exact_reverse_except_nulls(
        companies in arb_companies_with_distinct_dates(),
    ) {
        let mut pipeline = ListPipeline::new(pages::companies(), companies.clone());
        pipeline.set_sort(SortSpec::new(CompanyField::LastMeeting, SortDirection::Ascending));
        let ascending: Vec<&Company> = pipeline.ordered().collect();
        let split = ascending.iter().position(|c| c.last_meeting.is_none()).unwrap_or(ascending.len());
        let (dated_asc, nulls_asc) = ascending.split_at(split);
        prop_assert!(nulls_asc.iter().all(|c| c.last_meeting.is_none()));

        let mut reversed = ListPipeline::new(pages::companies(), companies.clone());
        reversed.set_sort(SortSpec::new(CompanyField::LastMeeting, SortDirection::Descending));
        let descending: Vec<&Company> = reversed.ordered().collect();
        let (dated_desc, nulls_desc) = descending.split_at(split);

        let expected: Vec<&str> = dated_asc.iter().rev().map(|c| c.id.as_str()).collect();
        let actual: Vec<&str> = dated_desc.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(nulls_desc.iter().all(|c| c.last_meeting.is_none()));

        // Nulls compare equal, so they keep their source order either way.
        let source_nulls: Vec<&str> = companies
            .iter()
            .filter(|c| c.last_meeting.is_none())
            .map(|c| c.id.as_str())
            .collect();
        let asc_nulls: Vec<&str> = nulls_asc.iter().map(|c| c.id.as_str()).collect();
        let desc_nulls: Vec<&str> = nulls_desc.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(&asc_nulls, &source_nulls);
        prop_assert_eq!(&desc_nulls, &source_nulls);
    }

    // ========================================================================
    // Pages cover the ordered collection exactly once
    // ========================================================================

    #[test]
    fn prop_pages_concatenate_to_the_ordered_collection(
        deals in arb_deals(80),
        rows_per_page in 1usize..30,
        query in prop::option::of(arb_query()),
    ) {
        let mut pipeline = ListPipeline::new(pages::deals(), deals);
        if let Some(query) = query {
            pipeline.set_search(query);
        }
        pipeline.set_rows_per_page(rows_per_page).unwrap();
        let expected = ids(pipeline.ordered());
        let recomputed = pipeline.recompute_count();

        let mut concatenated = Vec::new();
        for page in 0..pipeline.total_pages() {
            pipeline.set_page(page);
            let view = pipeline.view();
            prop_assert_eq!(view.page, page);
            prop_assert!(view.rows.len() <= rows_per_page);
            if page + 1 < view.total_pages {
                prop_assert_eq!(view.rows.len(), rows_per_page);
            }
            concatenated.extend(ids(view.rows));
        }

        prop_assert_eq!(concatenated, expected);
        prop_assert_eq!(pipeline.recompute_count(), recomputed);
    }

    // ========================================================================
    // Selection survives filtering
    // ========================================================================

    #[test]
    fn prop_selection_survives_any_filter(
        companies in arb_companies(40).prop_filter("need a record", |c| !c.is_empty()),
        pick in any::<prop::sample::Index>(),
        query in arb_query(),
        profile in arb_profile(),
    ) {
        let target = companies[pick.index(companies.len())].id.clone();
        let mut page = ListPage::new(
            ListPipeline::new(pages::companies(), companies),
            SelectionController::in_memory("companies"),
        );
        page.selection().select(&target);

        page.update(|p| p.set_search(query));
        page.update(|p| p.set_single(CompanyField::CustomerProfile, Some(profile))).unwrap();
        page.update(|p| p.toggle_sort(CompanyField::LastMeeting));

        prop_assert_eq!(page.detail().map(|c| c.id.clone()), Some(target.clone()));
        page.close_detail();
        prop_assert!(page.detail().is_none());
    }

    // ========================================================================
    // Rank-table fields sort in declared order
    // ========================================================================

    #[test]
    fn prop_stage_sort_follows_rank_table(
        stages in Just(DealStage::ORDER.to_vec()).prop_shuffle(),
    ) {
        let deals: Vec<Deal> = stages
            .iter()
            .enumerate()
            .map(|(i, stage)| salesdeck_test_utils::fixtures::deal(&id_for("d", i), "Deal", *stage))
            .collect();
        let pipeline = ListPipeline::new(pages::deals(), deals);
        let order: Vec<&str> = pipeline.ordered().map(|d| d.stage_name.label()).collect();
        prop_assert_eq!(order, DEAL_STAGE_RANK.labels().to_vec());
    }

    #[test]
    fn prop_stage_sort_is_non_decreasing_in_rank(deals in arb_deals(60)) {
        let table: &RankTable = &DEAL_STAGE_RANK;
        let pipeline = ListPipeline::new(pages::deals(), deals);
        let ranks: Vec<usize> = pipeline
            .ordered()
            .filter_map(|d| table.rank(d.stage_name.label()))
            .collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }
}
