use criterion::{criterion_group, criterion_main, Criterion};
use salesdeck_core::{pages, Deal, DealField, DealStage, ListPipeline, RankedEnum, SortDirection, SortSpec};
use std::hint::black_box;
use std::sync::Arc;

fn bench_deals(count: usize) -> Arc<[Deal]> {
    (0..count)
        .map(|i| Deal {
            id: format!("d-{i:05}"),
            name: format!("Opportunity {}", count - i),
            company_id: None,
            company_name: Some(format!("Company {}", i % 97)),
            stage_name: DealStage::ORDER[i % DealStage::ORDER.len()],
            amount: Some((i * 37 % 10_000) as f64),
            close_date: (i % 5 != 0).then(|| format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1)),
            owner: Some(["Avery", "Jordan", "Sam"][i % 3].to_string()),
            next_step: None,
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let deals = bench_deals(10_000);

    c.bench_function("pipeline/search_recompute_10k", |b| {
        let mut pipeline = ListPipeline::new(pages::deals(), Arc::clone(&deals));
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            pipeline.set_search(if flip { "company 4" } else { "opportunity" });
            black_box(pipeline.filtered_count());
        });
    });

    c.bench_function("pipeline/date_sort_toggle_10k", |b| {
        let mut pipeline = ListPipeline::new(pages::deals(), Arc::clone(&deals));
        pipeline.set_sort(SortSpec::new(DealField::CloseDate, SortDirection::Descending));
        b.iter(|| {
            pipeline.toggle_sort(DealField::CloseDate);
            black_box(pipeline.view().rows.len());
        });
    });

    c.bench_function("pipeline/page_view_10k", |b| {
        let mut pipeline = ListPipeline::new(pages::deals(), Arc::clone(&deals));
        let mut page = 0;
        b.iter(|| {
            page = (page + 1) % pipeline.total_pages().max(1);
            pipeline.set_page(page);
            black_box(pipeline.view().rows.len());
        });
    });
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
