//! Benchmarks for store and session operations.
//!
//! Run with: cargo bench --bench store_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jot::domain::NoteId;
use jot::session::{Controller, Session};
use jot::store::{NoteStore, SqliteStore};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::runtime::Runtime;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Sample words for generating realistic note content
const WORDS: &[&str] = &[
    "architecture",
    "design",
    "pattern",
    "system",
    "component",
    "interface",
    "module",
    "function",
    "testing",
    "performance",
];

fn generate_note_content(index: usize) -> String {
    let word_count = 50 + (index * 37) % 400;
    (0..word_count)
        .map(|i| WORDS[(index + i * 7) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build runtime")
}

/// Creates a file-backed store seeded with `count` notes, every tenth one
/// deleted.
fn setup_store_with_notes(
    rt: &Runtime,
    count: usize,
) -> (Arc<SqliteStore>, Vec<NoteId>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SqliteStore::open(&temp_dir.path().join("jot.db"), temp_dir.path())
        .expect("Failed to open store");

    let ids = rt.block_on(async {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let title = format!("Note {i} {}", WORDS[i % WORDS.len()]);
            let note = store
                .create(&title, &generate_note_content(i))
                .await
                .expect("Failed to create note");
            if i % 10 == 9 {
                store.soft_delete(note.id()).await.expect("Failed to delete note");
            }
            ids.push(note.id().clone());
        }
        ids
    });

    (Arc::new(store), ids, temp_dir)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_create(c: &mut Criterion) {
    let rt = runtime();
    let (store, _ids, _temp) = setup_store_with_notes(&rt, 0);
    let content = generate_note_content(3);
    let (store, content) = (&store, content.as_str());

    c.bench_function("create_note", |b| {
        b.to_async(&rt)
            .iter(move || async move { store.create("Benchmark note", content).await.unwrap() });
    });
}

fn bench_list(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("list");

    for size in [100, 1000] {
        let (store, _ids, _temp) = setup_store_with_notes(&rt, size);
        let store = &store;
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("live", size), &size, |b, _| {
            b.to_async(&rt)
                .iter(move || async move { store.list(false).await.unwrap() });
        });
        group.bench_with_input(BenchmarkId::new("with_deleted", size), &size, |b, _| {
            b.to_async(&rt)
                .iter(move || async move { store.list(true).await.unwrap() });
        });
    }

    group.finish();
}

fn bench_fetch_one(c: &mut Criterion) {
    let rt = runtime();
    let (store, ids, _temp) = setup_store_with_notes(&rt, 500);
    let (store, id) = (&store, &ids[4]);

    c.bench_function("fetch_one", |b| {
        b.to_async(&rt)
            .iter(move || async move { store.fetch_one(id).await.unwrap() });
    });
}

fn bench_search_titles(c: &mut Criterion) {
    let rt = runtime();
    let (store, _ids, _temp) = setup_store_with_notes(&rt, 1000);
    let store = &store;
    let mut group = c.benchmark_group("search_titles");

    group.bench_function("common_term", |b| {
        b.to_async(&rt)
            .iter(move || async move { store.search_titles("design", false).await.unwrap() });
    });
    group.bench_function("rare_term", |b| {
        b.to_async(&rt)
            .iter(move || async move { store.search_titles("Note 99", true).await.unwrap() });
    });

    group.finish();
}

fn bench_session_select_and_save(c: &mut Criterion) {
    let rt = runtime();
    let (store, ids, _temp) = setup_store_with_notes(&rt, 200);
    let controller = Controller::new(Session::new(Arc::clone(&store)));
    let (controller, id) = (&controller, &ids[0]);

    c.bench_function("session_select_and_save", |b| {
        let mut toggle = false;
        b.to_async(&rt).iter(move || {
            toggle = !toggle;
            let content = if toggle { "first version" } else { "second version" };
            async move {
                controller.on_note_clicked(id).await;
                controller.on_save_clicked("Benchmark", content).await
            }
        });
    });
}

criterion_group!(
    benches,
    bench_create,
    bench_list,
    bench_fetch_one,
    bench_search_titles,
    bench_session_select_and_save,
);
criterion_main!(benches);
