use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use yt8m::domain::{ClassId, LabelScore, NameTable, PredictionResult, VideoInfo, rank};

/// Size of the YouTube-8M vocabulary.
const VOCABULARY_SIZE: ClassId = 4716;

fn make_table() -> NameTable {
    (0..VOCABULARY_SIZE)
        .map(|id| {
            (
                id,
                VideoInfo {
                    name: format!("class-{id}"),
                    wiki_url: format!("https://en.wikipedia.org/wiki/Class_{id}"),
                    category: "Games".to_string(),
                },
            )
        })
        .collect()
}

fn make_result(n: usize) -> PredictionResult {
    PredictionResult {
        subject_id: "bench".to_string(),
        entries: (0..n)
            .map(|i| LabelScore {
                label: (i as ClassId * 7919) % VOCABULARY_SIZE,
                score: ((i * 31) % 1000) as f32 / 1000.0,
            })
            .collect(),
    }
}

fn bench_rank(c: &mut Criterion) {
    let table = make_table();
    let mut group = c.benchmark_group("rank_top5");

    for n in [20, 500, VOCABULARY_SIZE as usize] {
        let result = make_result(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &result, |b, result| {
            b.iter(|| rank(black_box(result), black_box(&table), 5));
        });
    }

    group.finish();
}

fn bench_load_table(c: &mut Criterion) {
    let mut csv = String::from("Index,TrainVideoCount,KnowledgeGraphId,Name,WikiUrl,Vertical1\n");
    for id in 0..VOCABULARY_SIZE {
        csv.push_str(&format!(
            "{id},1000,/m/{id:x},class-{id},https://en.wikipedia.org/wiki/Class_{id},Games\n"
        ));
    }

    c.bench_function("load_vocabulary", |b| {
        b.iter(|| NameTable::from_reader(black_box(csv.as_bytes())));
    });
}

criterion_group!(benches, bench_rank, bench_load_table);
criterion_main!(benches);
