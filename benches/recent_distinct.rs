use std::hint::black_box;

use chrono::DateTime;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mini_pokedex::SearchEntry;
use mini_pokedex::history::{HistoryStore, SqliteHistoryStore, recent_distinct};
use serde_json::json;

/// Synthetic history: `num_entries` searches over 150 distinct names, timestamps
/// not in write order
fn generate_entries(num_entries: usize) -> Vec<SearchEntry> {
    (0..num_entries)
        .map(|i| SearchEntry {
            query: format!("creature-{}", i % 150),
            timestamp: DateTime::from_timestamp(((i * 7919) % 100_000) as i64, 0).unwrap(),
            payload: json!({ "name": format!("creature-{}", i % 150), "types": ["normal"] }),
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("recent_distinct_memory");

    for size in [100, 1_000, 10_000].iter() {
        let entries = generate_entries(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| recent_distinct(black_box(&entries)));
        });
    }

    group.finish();
}

fn bench_sqlite(c: &mut Criterion) {
    let mut group = c.benchmark_group("recent_distinct_sqlite");

    for size in [100, 1_000, 10_000].iter() {
        let mut store = SqliteHistoryStore::open_in_memory().unwrap();
        for entry in generate_entries(*size) {
            store.record_at(&entry.query, &entry.payload, entry.timestamp).unwrap();
        }

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(&store).recent_distinct().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_sqlite);
criterion_main!(benches);
