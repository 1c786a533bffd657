// Criterion benchmarks for PetTalk Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pettalk_match::core::{area_matches, tag_matches, Matcher};
use pettalk_match::models::TrainerRecord;
use pettalk_match::services::MemoryStore;
use uuid::Uuid;

const TAG_POOL: [&str; 6] = ["분리불안", "배변훈련", "사회화", "공격성", "짖음", "산책교육"];
const AREA_POOL: [&str; 5] = ["서울 강남, 서초", "서울 종로", "부산 해운대", "경기 수지, 기흥", "대전 유성"];

fn create_trainer(id: usize) -> TrainerRecord {
    TrainerRecord {
        trainer_id: Uuid::new_v4(),
        nickname: format!("trainer{}", id),
        title: None,
        introduction: None,
        representative_career: None,
        tags: vec![
            TAG_POOL[id % TAG_POOL.len()].to_string(),
            TAG_POOL[(id + 2) % TAG_POOL.len()].to_string(),
        ],
        visiting_areas: AREA_POOL[id % AREA_POOL.len()].to_string(),
        experience_years: (id % 20) as u8,
        profile_image_url: None,
        created_at: None,
    }
}

fn bench_tag_matches(c: &mut Criterion) {
    let trainer_tags = vec!["배변".to_string(), "훈련".to_string()];

    c.bench_function("tag_matches", |b| {
        b.iter(|| tag_matches(black_box(&trainer_tags), black_box("배변훈련")));
    });
}

fn bench_area_matches(c: &mut Criterion) {
    c.bench_function("area_matches", |b| {
        b.iter(|| area_matches(black_box("서울 강남, 서초"), black_box("강남구")));
    });
}

fn bench_tiered_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiered_search");

    for size in [100, 1_000, 10_000] {
        let trainers: Vec<TrainerRecord> = (0..size).map(create_trainer).collect();
        let store = MemoryStore::new(trainers);
        let matcher = Matcher::new(4);
        let tags = vec!["분리불안".to_string()];
        let areas = vec!["강남구".to_string()];

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                matcher
                    .search(black_box(&store), black_box(&tags), black_box(&areas))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tag_matches, bench_area_matches, bench_tiered_search);
criterion_main!(benches);
