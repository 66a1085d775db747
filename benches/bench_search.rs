use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use salesman::{
    city::{City, CityCatalogue},
    cost::Euclidean,
    rng::{RandomNumberGenerator, SeedPolicy},
    search::{neighborhood, Construction, Incumbent, RandomTourGenerator, SearchOptions, Worker},
};

fn catalogue(len: u32) -> CityCatalogue {
    let mut rng = RandomNumberGenerator::from_seed(len as u64);
    CityCatalogue::new(
        (0..len)
            .map(|k| City::new(k, rng.index(10_000) as f64, rng.index(10_000) as f64))
            .collect(),
    )
    .unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for size in [100usize, 1000, 10000].iter() {
        for construction in [Construction::RejectionSampling, Construction::Shuffle] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", construction), size),
                size,
                |b, &size| {
                    let mut generator = RandomTourGenerator::new(size);
                    let mut rng = RandomNumberGenerator::from_seed(1);
                    let mut out = Vec::with_capacity(size);
                    b.iter(|| generator.generate(black_box(construction), &mut rng, &mut out))
                },
            );
        }
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood_scan");
    for size in [50u32, 200].iter() {
        let catalogue = catalogue(*size);
        let base: Vec<usize> = (0..*size as usize).collect();

        for (label, threshold) in [("sequential", usize::MAX), ("parallel", 0)] {
            group.bench_with_input(BenchmarkId::new(label, size), &base, |b, base| {
                let mut scratch = Vec::new();
                b.iter(|| {
                    let mut incumbent = Incumbent::new();
                    neighborhood::scan(
                        &catalogue,
                        &Euclidean,
                        black_box(base),
                        &mut incumbent,
                        &mut scratch,
                        threshold,
                    )
                })
            });
        }
    }
    group.finish();
}

fn bench_worker(c: &mut Criterion) {
    let catalogue = catalogue(100);
    c.bench_function("worker_100_cities_5_iterations", |b| {
        b.iter(|| {
            let options = SearchOptions::builder()
                .iterations(5)
                .seed_policy(SeedPolicy::Fixed(3))
                .build();
            let mut worker = Worker::new(catalogue.clone(), options, 0, 1).unwrap();
            worker.run();
            black_box(worker.incumbent().cost())
        })
    });
}

criterion_group!(benches, bench_construction, bench_scan, bench_worker);
criterion_main!(benches);
