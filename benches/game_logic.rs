use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::{Command, GameConfig, GameSession, Playfield, ShapeKind};

fn fresh_session(seed: u32) -> GameSession {
    GameSession::new(GameConfig::default(), seed).expect("default config is valid")
}

fn bench_tick(c: &mut Criterion) {
    let mut session = fresh_session(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| session.apply(Command::Tick(black_box(16))))
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_4_full_rows", |b| {
        b.iter(|| {
            let mut board = Playfield::new(20, 10);
            for row in 16..20 {
                for col in 0..10 {
                    board.set(col, row, Some(ShapeKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = fresh_session(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if session.game_over() {
                session = fresh_session(12345);
            }
            session.apply(Command::HardDrop)
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut session = fresh_session(12345);

    c.bench_function("shift", |b| b.iter(|| session.apply(Command::MoveLeft)));
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = fresh_session(12345);

    c.bench_function("rotate", |b| b.iter(|| session.apply(Command::Rotate)));
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_rows,
    bench_hard_drop,
    bench_shift,
    bench_rotate
);
criterion_main!(benches);
