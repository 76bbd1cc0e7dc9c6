use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use quatre_leptons::{
    numeric::{floats::consts::PI, Charge, Float},
    pair_masses, quad_mass, reconstruct, Kinematics, PairFinder,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;

/// Lepton columns of one event
struct Columns {
    pt: [Float; 4],
    eta: [Float; 4],
    phi: [Float; 4],
    mass: [Float; 4],
    charge: [Charge; 4],
}

/// Generate 2μ+ 2μ- events, as left over by the muon selection
fn generate_events(n: usize) -> Vec<Columns> {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    (0..n)
        .map(|_| Columns {
            pt: std::array::from_fn(|_| rng.gen_range(5. ..100.)),
            eta: std::array::from_fn(|_| rng.gen_range(-2.4..2.4)),
            phi: std::array::from_fn(|_| rng.gen_range(-PI..PI)),
            mass: [0.105_658; 4],
            charge: [1, -1, 1, -1],
        })
        .collect()
}

fn bench_reconstruction(c: &mut Criterion) {
    const NUM_EVENTS: usize = 10_000;
    let events = generate_events(NUM_EVENTS);
    let finder = PairFinder::default();

    let mut group = c.benchmark_group("per_event");
    group.throughput(Throughput::Elements(NUM_EVENTS as u64));

    group.bench_function("find_best_pair", |b| {
        b.iter(|| {
            for ev in &events {
                let kin = Kinematics::new(&ev.pt, &ev.eta, &ev.phi, &ev.mass).unwrap();
                black_box(finder.find(&kin, &ev.charge).unwrap());
            }
        })
    });

    group.bench_function("pair_and_quad_masses", |b| {
        b.iter_batched(
            || {
                events
                    .iter()
                    .map(|ev| {
                        let kin = Kinematics::new(&ev.pt, &ev.eta, &ev.phi, &ev.mass).unwrap();
                        (kin, finder.find(&kin, &ev.charge).unwrap())
                    })
                    .collect::<Vec<_>>()
            },
            |found| {
                for (kin, ordering) in &found {
                    black_box(pair_masses(ordering, kin));
                    black_box(quad_mass(kin));
                }
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("reconstruct", |b| {
        b.iter(|| {
            for ev in &events {
                let kin = Kinematics::new(&ev.pt, &ev.eta, &ev.phi, &ev.mass).unwrap();
                black_box(reconstruct(&finder, &kin, &ev.charge).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_reconstruction);
criterion_main!(benches);
