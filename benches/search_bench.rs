use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use red_blue_nim::core::{GameConfig, GameState, RuleVariant};
use red_blue_nim::rules::VariantMoves;
use red_blue_nim::search::{MinimaxSearch, SearchConfig};

fn bench_unbounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("unbounded_search");

    for (red, blue) in [(4, 4), (6, 5), (7, 7)] {
        for variant in [RuleVariant::Standard, RuleVariant::Misere] {
            for pruning in [true, false] {
                let id = format!(
                    "{variant}/{red}x{blue}/{}",
                    if pruning { "alphabeta" } else { "minimax" }
                );
                let config = GameConfig::new(red, blue).with_variant(variant);

                group.bench_function(BenchmarkId::from_parameter(id), |b| {
                    let mut state = GameState::new(&config).unwrap();
                    let mut search = MinimaxSearch::new(
                        VariantMoves,
                        SearchConfig::default().with_pruning(pruning),
                    );
                    b.iter(|| black_box(search.select_best_move(&mut state).unwrap()));
                });
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_unbounded);
criterion_main!(benches);
