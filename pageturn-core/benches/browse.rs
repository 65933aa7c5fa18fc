//! Browse filter benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use pageturn_core::{BrowseState, Catalog};

fn browse_benchmark(c: &mut Criterion) {
    let catalog = Catalog::seeded();
    let search = BrowseState::new().with_search("the");
    let genre = BrowseState::new().with_genre("Science Fiction");

    c.bench_function("browse_search", |b| {
        b.iter(|| std::hint::black_box(search.apply(&catalog).len()))
    });
    c.bench_function("browse_genre", |b| {
        b.iter(|| std::hint::black_box(genre.apply(&catalog).len()))
    });
}

criterion_group!(benches, browse_benchmark);
criterion_main!(benches);
