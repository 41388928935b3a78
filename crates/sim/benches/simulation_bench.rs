use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kwtree_sim::base::{seeded_rng, ContinuousDistribution};
use kwtree_sim::evolution::BirthDeathImmigration;
use kwtree_sim::simulation::SimulationBuilder;
use kwtree_sim::storage::to_newick;
use kwtree_sim::tree::{assign_branch_lengths, generate_random_topology};

fn bench_topology(c: &mut Criterion) {
    let mut group = c.benchmark_group("topology");

    for species in [16usize, 256, 4096] {
        group.throughput(Throughput::Elements(species as u64));
        group.bench_with_input(BenchmarkId::new("random", species), &species, |b, &s| {
            let mut rng = seeded_rng(1);
            b.iter(|| black_box(generate_random_topology(s, 0, &mut rng).unwrap()))
        });
    }

    group.finish();
}

fn bench_branch_lengths(c: &mut Criterion) {
    let mut rng = seeded_rng(2);
    let mut tree = generate_random_topology(1024, 0, &mut rng).unwrap();
    let dist = ContinuousDistribution::Uniform {
        lower: 0.1,
        upper: 1.0,
    }
    .sampler()
    .unwrap();

    c.bench_function("assign_branch_lengths_1024", |b| {
        b.iter(|| assign_branch_lengths(black_box(&mut tree), &dist, &mut rng))
    });
}

fn bench_ctmc(c: &mut Criterion) {
    let mut group = c.benchmark_group("ctmc");
    let model = BirthDeathImmigration::new(0.2, 0.5, 2.0);

    for time in [1.0, 10.0, 100.0] {
        group.bench_with_input(BenchmarkId::new("simulate", time), &time, |b, &t| {
            let mut rng = seeded_rng(3);
            b.iter(|| black_box(model.simulate(black_box(7), t, &mut rng).unwrap()))
        });
    }

    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    group.sample_size(20);

    group.bench_function("species_32_sites_50", |b| {
        b.iter_batched(
            || {
                SimulationBuilder::new()
                    .species(32)
                    .sites(50)
                    .branch_lengths(ContinuousDistribution::Uniform {
                        lower: 0.1,
                        upper: 1.0,
                    })
                    .rates(0.2, 0.5, 2.0)
                    .burn_in(500, 100.0)
                    .seed(4)
                    .build()
                    .unwrap()
            },
            |mut sim| black_box(sim.next_sample()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_newick(c: &mut Criterion) {
    let tree = generate_random_topology(4096, 0, &mut seeded_rng(5)).unwrap();
    c.bench_function("newick_4096", |b| b.iter(|| black_box(to_newick(&tree))));
}

criterion_group!(
    benches,
    bench_topology,
    bench_branch_lengths,
    bench_ctmc,
    bench_sample,
    bench_newick
);
criterion_main!(benches);
