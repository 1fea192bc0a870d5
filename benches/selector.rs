use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pv_forecast::{select_next_index, DayRelation, ForecastSeries, TimeOfDay, ViewModel};

/// One day at 15-minute resolution.
fn quarter_hour_day() -> ForecastSeries {
    let stamps = (0..96)
        .filter_map(|i| TimeOfDay::from_hms(i / 4, (i % 4) * 15, 0))
        .collect::<Vec<_>>();
    let values = (0..stamps.len()).map(|i| Some(i as f64 * 0.25)).collect();
    ForecastSeries::from_columns(stamps, values)
}

fn bench_selector(c: &mut Criterion) {
    let series = quarter_hour_day();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let evening = TimeOfDay::from_hms(23, 59, 0).unwrap();
    let noon = TimeOfDay::from_hms(12, 7, 30).unwrap();

    c.bench_function("select_next_index_noon", |b| {
        b.iter(|| select_next_index(black_box(&series), black_box(noon), DayRelation::Today))
    });
    c.bench_function("select_next_index_elapsed_day", |b| {
        b.iter(|| {
            let relation = DayRelation::between(black_box("2024-06-01"), today);
            select_next_index(black_box(&series), black_box(evening), relation)
        })
    });
    c.bench_function("build_view_model", |b| {
        b.iter(|| ViewModel::build(black_box(series.clone()), Some(48), "MW"))
    });
}

criterion_group!(benches, bench_selector);
criterion_main!(benches);
