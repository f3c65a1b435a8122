use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use inflecto::{Inflections, parameterize, transliterate};
use std::hint::black_box;
use std::time::Duration;

const NOUNS: &[&str] = &[
    "person", "category", "status", "octopus", "sheep", "matrix", "half", "bus", "quiz", "comment",
];

const IDENTIFIERS: &[&str] = &[
    "device_type",
    "active_record/errors",
    "my_http_server",
    "raw_scaled_scorer",
    "restful_controller",
];

// ═══════════════════════════════════════════════════════════════════════════
// RULE APPLICATION
// ═══════════════════════════════════════════════════════════════════════════

fn bench_nouns(c: &mut Criterion) {
    let inf = Inflections::english("en_US");
    let mut group = c.benchmark_group("nouns");

    for &word in NOUNS {
        group.bench_with_input(BenchmarkId::new("pluralize", word), word, |b, w| {
            b.iter(|| inf.pluralize(black_box(w)))
        });
        let plural = inf.pluralize(word);
        group.bench_with_input(BenchmarkId::new("singularize", &plural), &plural, |b, w| {
            b.iter(|| inf.singularize(black_box(w)))
        });
    }
    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// CASE TRANSFORMS (acronym patterns are warm after the first call)
// ═══════════════════════════════════════════════════════════════════════════

fn bench_case(c: &mut Criterion) {
    let inf = Inflections::english("en_US");
    let mut group = c.benchmark_group("case");

    for &ident in IDENTIFIERS {
        let camel = inf.camelize(ident, true);
        group.bench_with_input(BenchmarkId::new("camelize", ident), ident, |b, s| {
            b.iter(|| inf.camelize(black_box(s), true))
        });
        group.bench_with_input(BenchmarkId::new("underscore", &camel), &camel, |b, s| {
            b.iter(|| inf.underscore(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("titleize", ident), ident, |b, s| {
            b.iter(|| inf.titleize(black_box(s), false))
        });
    }
    group.finish();
}

fn bench_acronym_rebuild(c: &mut Criterion) {
    c.bench_function("acronym/rebuild_after_insert", |b| {
        b.iter_batched(
            || {
                let mut inf = Inflections::english("en_US");
                inf.acronym(["HTML"]);
                inf
            },
            |inf| inf.underscore(black_box("MyHTMLParser")),
            BatchSize::SmallInput,
        )
    });
}

// ═══════════════════════════════════════════════════════════════════════════
// SLUGS
// ═══════════════════════════════════════════════════════════════════════════

fn bench_slugs(c: &mut Criterion) {
    let mut group = c.benchmark_group("slugs");
    for text in ["Donald E. Knuth", "Crème Brûlée à la carte", "plain ascii text"] {
        group.bench_with_input(BenchmarkId::new("transliterate", text), text, |b, s| {
            b.iter(|| transliterate(black_box(s)).into_owned())
        });
        group.bench_with_input(BenchmarkId::new("parameterize", text), text, |b, s| {
            b.iter(|| parameterize(black_box(s), "-", false))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_millis(500));
    targets = bench_nouns, bench_case, bench_acronym_rebuild, bench_slugs
}
criterion_main!(benches);
