use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use synodic::epoch::Epoch;
use synodic::frame::Equinox;
use synodic::planet::Planet;

/// Uniform random epoch in roughly 1900..2100.
#[inline]
fn rand_epoch(rng: &mut StdRng) -> Epoch {
    let offset = rng.random_range(-36525.0..36525.0);
    Epoch::from_jde(2_451_545.0 + offset)
}

fn bench_series(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    for planet in [Planet::Venus, Planet::Saturn] {
        c.bench_function(&format!("heliocentric/{planet:?}"), |b| {
            b.iter_batched(
                || (0..samples).map(|_| rand_epoch(&mut rng)).collect::<Vec<_>>(),
                |epochs| {
                    for epoch in epochs {
                        let pos = planet
                            .heliocentric_position(black_box(epoch), Equinox::MeanOfDate);
                        black_box(pos);
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
}

fn bench_geocentric(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 1_000usize;

    c.bench_function("geocentric/Venus", |b| {
        b.iter_batched(
            || (0..samples).map(|_| rand_epoch(&mut rng)).collect::<Vec<_>>(),
            |epochs| {
                for epoch in epochs {
                    let geometry = Planet::Venus.geocentric(black_box(epoch)).unwrap();
                    black_box(geometry);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_opposition_search(c: &mut Criterion) {
    let guess = Epoch::from_gregorian(2018, 4, 1.0);

    c.bench_function("events/saturn_opposition", |b| {
        b.iter(|| {
            let found = Planet::Saturn.opposition(black_box(guess)).unwrap();
            black_box(found);
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_series, bench_geocentric, bench_opposition_search
);
criterion_main!(benches);
