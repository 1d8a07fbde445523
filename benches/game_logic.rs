use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_puzzle::core::line_clear::clear_lines;
use grid_puzzle::core::{apply_move, slide_and_merge, GameSession, Grid, SimpleRng};
use grid_puzzle::types::{Direction, FallingCell, Input, PieceColor, Variant};

fn bench_tick(c: &mut Criterion) {
    let session = GameSession::new(Variant::FallingBlock, SimpleRng::new(12345)).step(Input::Restart);

    c.bench_function("session_tick", |b| {
        b.iter(|| black_box(session.step(black_box(Input::Tick))))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let session = GameSession::new(Variant::FallingBlock, SimpleRng::new(12345)).step(Input::Restart);

    c.bench_function("session_hard_drop", |b| {
        b.iter(|| black_box(session.step(Input::HardDrop)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board: Grid<FallingCell> = Grid::new(10, 20);
    for y in 16..20 {
        for x in 0..10 {
            board = board.set(x, y, Some(PieceColor::Cyan)).unwrap();
        }
    }

    c.bench_function("clear_4_lines", |b| b.iter(|| black_box(clear_lines(&board))));
}

fn bench_slide_line(c: &mut Criterion) {
    c.bench_function("slide_and_merge", |b| {
        b.iter(|| black_box(slide_and_merge(black_box(&[2, 2, 4, 0]))))
    });
}

fn bench_board_move(c: &mut Criterion) {
    let board = Grid::from_rows(vec![
        vec![2, 2, 4, 8],
        vec![0, 4, 4, 0],
        vec![16, 0, 16, 2],
        vec![2, 0, 0, 2],
    ])
    .unwrap();

    c.bench_function("apply_move_left", |b| {
        b.iter(|| black_box(apply_move(&board, black_box(Direction::Left))))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop,
    bench_line_clear,
    bench_slide_line,
    bench_board_move
);
criterion_main!(benches);
