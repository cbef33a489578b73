use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yt_bench::gen_hands;
use yt_core::{scores_for_held, Category, Rules, ScoreBoard};

fn bench_scores_for_held(c: &mut Criterion) {
    let mut g = c.benchmark_group("yt_core_scoring");
    for &n in &[256usize, 4096usize] {
        let samples = gen_hands(n);
        g.bench_with_input(BenchmarkId::new("scores_for_held_batch", n), &samples, |b, s| {
            b.iter(|| {
                for dice in s.iter() {
                    black_box(scores_for_held(black_box(dice)));
                }
            })
        });
    }
    g.finish();
}

fn bench_board_preview(c: &mut Criterion) {
    let samples = gen_hands(4096);
    let mut board = ScoreBoard::new(&Rules::default());
    for cat in [Category::Threes, Category::FullHouse, Category::Yacht] {
        let _ = board.commit(cat, &[3, 3, 3, 2, 2], 5);
    }
    c.bench_function("yt_core_board_preview_4096", |b| {
        b.iter(|| {
            for dice in samples.iter() {
                // Held prefixes of every length, as the player picks dice one by one.
                for k in 0..=dice.len() {
                    black_box(board.preview_scores(black_box(&dice[..k])));
                }
            }
        })
    });
}

criterion_group!(benches, bench_scores_for_held, bench_board_preview);
criterion_main!(benches);
