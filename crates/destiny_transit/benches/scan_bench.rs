use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use destiny_core::{Body, FnOracle, Longitude, OracleError};
use destiny_transit::{TransitConfig, key_events, scan_from};
use destiny_zodiac::{ZodiacIndex, sign_of};

fn mean_motion(body: Body, date: NaiveDate) -> Result<Longitude, OracleError> {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid epoch");
    let days = (date - epoch).num_days() as f64;
    let rate = match body {
        Body::Jupiter => 0.083_09,
        _ => 0.033_46,
    };
    Ok(Longitude::degrees(34.4 + days * rate))
}

fn zodiac_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("zodiac");
    group.bench_function("sign_of", |b| {
        b.iter(|| sign_of(black_box(-1234.567)).expect("finite"))
    });
    group.finish();
}

fn scan_bench(c: &mut Criterion) {
    let start = Utc
        .with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
        .single()
        .expect("valid start");
    let oracle = FnOracle(mean_motion);
    let natal = ZodiacIndex::new(3).expect("valid index");
    let config = TransitConfig::new(20.0);

    let mut group = c.benchmark_group("transit_scan");
    group.bench_function("scan_20y", |b| {
        b.iter(|| {
            scan_from(black_box(start), black_box(&config), natal, &oracle)
                .expect("scan should succeed")
        })
    });
    let series = scan_from(start, &config, natal, &oracle).expect("scan should succeed");
    group.bench_function("key_events_20y", |b| b.iter(|| key_events(black_box(&series))));
    group.finish();
}

criterion_group!(benches, zodiac_bench, scan_bench);
criterion_main!(benches);
