// Criterion benchmarks for lexgloss-en.
//
// Uses the built-in tables and the chapter fixture from tests/fixtures.
//
// Run:
//   cargo bench -p lexgloss-en

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use lexgloss_en::markup::parse_document;
use lexgloss_en::{AnnotationState, Annotator, tokenizer};

fn load_chapter() -> String {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/chapter.html");
    std::fs::read_to_string(&path).expect("failed to read chapter fixture")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_classify_words(c: &mut Criterion) {
    let annotator = Annotator::builtin().expect("built-in tables");
    let chapter = load_chapter();
    let words: Vec<&str> = tokenizer::words(&chapter).map(|w| w.text).collect();

    c.bench_function("classify_words", |b| {
        b.iter(|| {
            let text = annotator.text_annotator();
            let state = AnnotationState::new();
            for word in &words {
                black_box(text.classify(black_box(word), &state));
            }
        })
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let chapter = load_chapter();
    c.bench_function("tokenize_chapter", |b| {
        b.iter(|| tokenizer::segments(black_box(&chapter)).count())
    });
}

fn bench_parse_serialize(c: &mut Criterion) {
    let chapter = load_chapter();
    c.bench_function("parse_serialize_chapter", |b| {
        b.iter(|| {
            let doc = parse_document(black_box(&chapter)).expect("fixture parses");
            black_box(doc.to_html())
        })
    });
}

fn bench_annotate_chapter(c: &mut Criterion) {
    let annotator = Annotator::builtin().expect("built-in tables");
    let chapter = load_chapter();
    c.bench_function("annotate_chapter", |b| {
        b.iter(|| annotator.annotate_html(black_box(&chapter)).expect("annotates"))
    });
}

criterion_group!(
    benches,
    bench_classify_words,
    bench_tokenize,
    bench_parse_serialize,
    bench_annotate_chapter
);
criterion_main!(benches);
