use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{Board, GameSession, Shape};
use gridfall::types::{Cell, Command, Direction, ShapeColor, ShapeKind, CELL_SIZE, GRID_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.tick();
            black_box(session.score());
        })
    });
}

fn bench_clear_lines(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 28..32 {
                for x in 0..GRID_WIDTH {
                    board.set_cell(
                        x,
                        y,
                        Cell::new(ShapeColor::Red, x * CELL_SIZE, y * CELL_SIZE, true, true),
                    );
                }
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_valid_move(c: &mut Criterion) {
    let board = Board::new();
    let mut shape = Shape::spawn(ShapeKind::L, ShapeColor::Orange);
    shape.translate(0, 10);

    c.bench_function("is_valid_move_down", |b| {
        b.iter(|| black_box(board.is_valid_move(black_box(&shape), Direction::Down)))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("apply_move_right", |b| {
        b.iter(|| black_box(session.apply(Command::MoveRight)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("apply_rotate", |b| {
        b.iter(|| black_box(session.apply(Command::Rotate)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_lines,
    bench_valid_move,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
