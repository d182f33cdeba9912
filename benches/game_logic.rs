use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mini_tetris::core::{EngineConfig, GameEngine, Grid, ScriptedShapes};
use mini_tetris::types::{Intent, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut engine = GameEngine::new(EngineConfig::default().with_seed(12345));

    c.bench_function("game_tick_33ms", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine = GameEngine::new(EngineConfig::default().with_seed(12345));
            }
            engine.tick(black_box(33));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(16, 16);
            for y in 12..16 {
                for x in 0..16 {
                    grid.set(x, y, true);
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut engine = GameEngine::new(EngineConfig::default().with_seed(12345));

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(engine.spawn());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut engine = GameEngine::with_source(
        EngineConfig::default(),
        ScriptedShapes::repeat(ShapeKind::T),
    );

    c.bench_function("try_move", |b| {
        b.iter(|| {
            engine.try_move(black_box(1), 0);
            engine.try_move(black_box(-1), 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut engine = GameEngine::new(EngineConfig::default().with_seed(12345));

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            black_box(engine.handle_intent(Intent::Rotate));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let engine = GameEngine::new(EngineConfig::default().with_seed(12345));
    let mut snap = engine.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot_into
);
criterion_main!(benches);
