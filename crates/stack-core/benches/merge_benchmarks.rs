use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};
use stack_core::context::{ContextResolver, ContextStore, merge};
use std::fs;
use tempfile::tempdir;

fn wide_context(width: usize) -> Value {
    let entries: serde_json::Map<String, Value> = (0..width)
        .map(|i| {
            (
                format!("key{i}"),
                json!({"timeout": i, "retries": 3, "tags": ["a", "b"], "nested": {"depth": i}}),
            )
        })
        .collect();
    Value::Object(entries)
}

fn merge_benchmark(c: &mut Criterion) {
    let base = wide_context(200);
    let overlay = wide_context(50);

    c.bench_function("merge (200 keys <- 50 keys)", |b| {
        b.iter(|| merge(black_box(Some(&base)), black_box(&overlay)))
    });
}

fn resolve_benchmark(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("env")).unwrap();
    fs::write(dir.path().join("extra.json"), wide_context(100).to_string()).unwrap();
    fs::write(dir.path().join("env/prd.json"), wide_context(20).to_string()).unwrap();
    let resolver = ContextResolver::for_root(dir.path());

    c.bench_function("ContextResolver::resolve (extra + stage)", |b| {
        b.iter(|| {
            let mut store = ContextStore::from_value(json!({
                "stage": "prd",
                "extraContexts": ["extra.json"]
            }))
            .unwrap();
            resolver.resolve(black_box(&mut store)).unwrap();
        })
    });
}

criterion_group!(benches, merge_benchmark, resolve_benchmark);
criterion_main!(benches);
