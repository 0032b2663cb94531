use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    SamplingMode
};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use sudoku_rush::Grid;
use sudoku_rush::generator::Generator;

use std::time::Duration;

// Explanation of benchmark classes:
//
// fill: Completing an empty grid with the randomized backtracking search.
// generate puzzle: A full generation, i.e. fill plus carving 45 cells.

const MEASUREMENT_TIME_SECS: u64 = 10;
const SAMPLE_SIZE: usize = 100;

fn benchmark_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(0));
    group.bench_function("empty grid", |b| b.iter(|| {
        let mut grid = Grid::new();
        generator.fill(&mut grid).unwrap();
        grid
    }));
}

fn benchmark_generate_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate puzzle");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(0));
    group.bench_function("default carve count", |b| b.iter(||
        generator.generate_puzzle().unwrap()));
}

criterion_group!(benches, benchmark_fill, benchmark_generate_puzzle);
criterion_main!(benches);
