use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazecore::{AStar, DepthFirstSearch, Dims, ProgressHandle};

const SIZE: Dims = Dims(100, 100);

pub fn depth_first_search(c: &mut Criterion) {
    c.bench_function("depth_first_search", |b| {
        b.iter(|| {
            DepthFirstSearch::generate(
                black_box(SIZE.0),
                black_box(SIZE.1),
                Some(1),
                &ProgressHandle::new(),
            )
            .unwrap()
        })
    });
}

pub fn a_star(c: &mut Criterion) {
    let grid = DepthFirstSearch::generate(SIZE.0, SIZE.1, Some(1), &ProgressHandle::new()).unwrap();
    let goal = SIZE - Dims(1, 1);

    c.bench_function("a_star_corner_to_corner", |b| {
        b.iter(|| AStar::solve(black_box(&grid), Dims::ZERO, black_box(goal)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = depth_first_search, a_star}
criterion_main!(benches);
