use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mesonet_wind::{aggregate, clean, AsosField, ObservationRow, WIND_ONLY_FIELDS};

fn synthetic_rows(n: usize) -> Vec<ObservationRow> {
    let start = Utc.with_ymd_and_hms(2023, 8, 9, 0, 53, 0).unwrap();
    (0..n)
        .map(|i| {
            let mut row = ObservationRow::new("OAK", start + Duration::minutes(20 * i as i64));
            row.wind_speed = Some((i % 17) as f64);
            row.wind_direction_deg = Some(((i * 37) % 360) as f64);
            row.temperature = Some(60.0 + (i % 9) as f64);
            row.sky_cover[0] = Some(["FEW", "SCT", "BKN"][i % 3].to_string());
            row
        })
        .collect()
}

fn synthetic_report(n: usize) -> String {
    let mut raw = "#DEBUG\n#DEBUG\n#DEBUG\n#DEBUG\n#DEBUG\nstation,valid,lon,lat,drct,sped\n".to_string();
    for row in synthetic_rows(n) {
        raw.push_str(&format!(
            "OAK,{},-122.2208,37.7214,{:.2},{:.2}\n",
            row.timestamp.format("%Y-%m-%d %H:%M"),
            row.wind_direction_deg.unwrap_or_default(),
            row.wind_speed.unwrap_or_default()
        ));
    }
    raw
}

fn bench_aggregate(c: &mut Criterion) {
    let rows = synthetic_rows(2_000);
    let raw = synthetic_report(2_000);
    let schema = AsosField::response_schema(WIND_ONLY_FIELDS);

    c.bench_function("aggregate", |b| b.iter(|| aggregate(black_box("OAK"), black_box(&rows))));
    c.bench_function("clean", |b| b.iter(|| clean(black_box(&raw), black_box(&schema))));
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
