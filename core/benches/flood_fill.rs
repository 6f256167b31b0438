use clearfield_core::{BoardEngine, MineField};
use criterion::{criterion_group, criterion_main, Criterion};

/// One mine in a corner, reveal from the far corner: the cascade has to
/// open almost the entire board.
fn flood_fill(c: &mut Criterion) {
    let field = MineField::from_mine_coords((200, 200), &[(0, 0)]).unwrap();

    c.bench_function("flood 200x200", |b| {
        b.iter(|| {
            let mut engine = BoardEngine::new(field.clone());
            engine.reveal((199, 199))
        })
    });
}

criterion_group!(benches, flood_fill);
criterion_main!(benches);
