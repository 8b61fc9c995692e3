use criterion::{black_box, criterion_group, criterion_main, Criterion};
use friendly_words::{build, IngestOptions, WordCollection, WordFile};

fn generate_words(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let len = 1 + (i * 7) % 15;
            (0..len)
                .map(|j| (b'a' + ((i + j) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn bench_collection(c: &mut Criterion) {
    let words = generate_words(50_000);

    c.bench_function("collection_build_50k", |b| {
        b.iter(|| WordCollection::new(black_box(words.iter().cloned())))
    });

    let collection = WordCollection::new(words.iter().cloned());
    c.bench_function("collection_of_length", |b| {
        b.iter(|| collection.of_length(black_box(8)).len())
    });
    c.bench_function("collection_iterate", |b| {
        b.iter(|| collection.iter().count())
    });
}

fn bench_ingest(c: &mut Criterion) {
    let files: Vec<WordFile> = (0..16)
        .map(|i| {
            let name: String = std::iter::repeat('w').take(i + 1).collect();
            WordFile::from_lines(name, generate_words(5_000))
        })
        .collect();

    c.bench_function("build_16_sources", |b| {
        b.iter(|| build(black_box(files.clone()), IngestOptions::default()))
    });
}

criterion_group!(benches, bench_collection, bench_ingest);
criterion_main!(benches);
