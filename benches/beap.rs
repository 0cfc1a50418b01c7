use beap::Beap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_ELEMENTS: usize = 100_000;

fn random_values(count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count).map(|_| rng.gen_range(0..(count as u64 * 4))).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let values = random_values(NUM_ELEMENTS);
    let beap: Beap<usize, u64> = Beap::from_vec(values.clone()).expect("bulk load");

    c.bench_function("search", |b| {
        let mut probes = values.iter().cycle();
        b.iter(|| beap.search(black_box(probes.next().unwrap())))
    });

    c.bench_function("insert", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter_batched(
            || (beap.clone(), rng.gen_range(0..(NUM_ELEMENTS as u64 * 4))),
            |(mut beap, value)| beap.insert(black_box(value)),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("remove", |b| {
        let mut probes = values.iter().cycle();
        b.iter_batched(
            || (beap.clone(), *probes.next().unwrap()),
            |(mut beap, value)| beap.remove(black_box(&value)),
            BatchSize::LargeInput,
        )
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = criterion_benchmark
}
criterion_main!(benches);
