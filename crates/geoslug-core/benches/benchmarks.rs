use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use geoslug_core::{slugify, GeoRegistry, Lang};

fn bench_slugify(c: &mut Criterion) {
    c.bench_function("slugify_city", |b| {
        b.iter(|| slugify(black_box("Запоріжжя")))
    });
    c.bench_function("slugify_region", |b| {
        b.iter(|| slugify(black_box("Дніпропетровська область")))
    });
}

fn bench_resolution(c: &mut Criterion) {
    let registry = GeoRegistry::load().unwrap();

    c.bench_function("resolve_city_ua", |b| {
        b.iter(|| registry.resolve_city_by_slug(black_box("cherkasy"), Lang::Ua))
    });
    // The interesting one: RU resolution recomputes every candidate slug.
    c.bench_function("resolve_city_ru", |b| {
        b.iter(|| registry.resolve_city_by_slug(black_box("kharkov"), Lang::Ru))
    });
}

criterion_group!(benches, bench_slugify, bench_resolution);
criterion_main!(benches);
