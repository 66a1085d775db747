use salesman::{
    city::{City, CityCatalogue},
    cost::{CostFunction, Euclidean},
    error::TourError,
    rng::{RandomNumberGenerator, SeedPolicy},
    search::{
        neighborhood, search, Construction, Incumbent, RandomTourGenerator, SearchOptions, Worker,
    },
    tour::Tour,
};

fn scattered(len: u32) -> CityCatalogue {
    CityCatalogue::new(
        (0..len)
            .map(|k| {
                let x = ((k * 37) % 101) as f64 * 0.7;
                let y = ((k * 53) % 89) as f64 * 1.3;
                City::new(k + 100, x, y)
            })
            .collect(),
    )
    .unwrap()
}

fn unit_square() -> CityCatalogue {
    CityCatalogue::new(vec![
        City::new(1, 0.0, 0.0),
        City::new(2, 1.0, 0.0),
        City::new(3, 1.0, 1.0),
        City::new(4, 0.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn test_generated_tours_are_permutations() {
    let catalogue = scattered(40);
    let mut rng = RandomNumberGenerator::from_seed(17);

    for construction in [Construction::RejectionSampling, Construction::Shuffle] {
        let mut generator = RandomTourGenerator::new(catalogue.len());
        let mut order = Vec::new();
        for _ in 0..20 {
            generator.generate(construction, &mut rng, &mut order);
            let tour = Tour::from_order(order.clone(), catalogue.len()).unwrap();

            let mut ids = tour.city_ids(&catalogue);
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), catalogue.len());
        }
    }
}

#[test]
fn test_neighborhood_offers_every_candidate_in_order() {
    let catalogue = scattered(11);
    let base: Vec<usize> = (0..11).collect();
    let mut offered = Vec::new();
    let mut scratch = Vec::new();
    for (i, j) in neighborhood::moves(11) {
        neighborhood::apply_reversal(&base, i, j, &mut scratch);
        assert!(Tour::from_order(scratch.clone(), 11).is_ok());
        offered.push((i, j));
    }
    assert_eq!(offered.len(), 11 * 10 / 2);
    assert_eq!(offered.first(), Some(&(1, 1)));
    assert_eq!(offered.last(), Some(&(10, 10)));

    let mut incumbent = Incumbent::new();
    let outcome = neighborhood::scan(
        &catalogue,
        &Euclidean,
        &base,
        &mut incumbent,
        &mut scratch,
        usize::MAX,
    );
    assert_eq!(outcome.candidates, 55);
}

#[test]
fn test_incumbent_never_worse_than_any_candidate() {
    let catalogue = scattered(15);
    let mut rng = RandomNumberGenerator::from_seed(3);
    let mut generator = RandomTourGenerator::new(15);
    let mut base = Vec::new();
    generator.generate(Construction::RejectionSampling, &mut rng, &mut base);

    let mut incumbent = Incumbent::new();
    let mut scratch = Vec::new();
    neighborhood::scan(&catalogue, &Euclidean, &base, &mut incumbent, &mut scratch, usize::MAX);

    let best = incumbent.cost().unwrap();
    let mut candidate = Vec::new();
    for (i, j) in neighborhood::moves(15) {
        neighborhood::apply_reversal(&base, i, j, &mut candidate);
        assert!(best <= Euclidean.cost(&catalogue, &candidate));
    }
    assert_eq!(
        best,
        Euclidean.cost(&catalogue, incumbent.tour().unwrap().as_slice())
    );
}

#[test]
fn test_perimeter_base_tour_is_retained() {
    // A base tour already in perimeter order is optimal; no reversal may replace it.
    let catalogue = unit_square();
    let base = [0, 1, 2, 3];
    let mut incumbent = Incumbent::new();
    incumbent.offer(&Tour::identity(4), Euclidean.cost(&catalogue, &base));

    let mut scratch = Vec::new();
    let outcome = neighborhood::scan(
        &catalogue,
        &Euclidean,
        &base,
        &mut incumbent,
        &mut scratch,
        usize::MAX,
    );

    assert_eq!(outcome.improvements, 0);
    assert_eq!(incumbent.cost(), Some(4.0));
    assert_eq!(incumbent.tour().unwrap().as_slice(), &base);
}

#[test]
fn test_search_improves_over_iterations() {
    let catalogue = scattered(30);
    let one = SearchOptions::builder()
        .iterations(1)
        .seed_policy(SeedPolicy::Fixed(8))
        .build();
    let many = SearchOptions::builder()
        .iterations(10)
        .seed_policy(SeedPolicy::Fixed(8))
        .build();

    let first = search(&catalogue, &one, 0, 1).unwrap().cost().unwrap();
    let later = search(&catalogue, &many, 0, 1).unwrap().cost().unwrap();
    assert!(later <= first);
}

#[test]
fn test_worker_result_is_a_valid_tour() {
    let catalogue = scattered(25);
    let options = SearchOptions::builder()
        .iterations(3)
        .construction(Construction::Shuffle)
        .parallel_threshold(1)
        .build();
    let mut worker = Worker::new(catalogue.clone(), options, 2, 4).unwrap();
    worker.run();

    let incumbent = worker.incumbent();
    let tour = incumbent.tour().unwrap();
    assert!(tour.is_permutation_of(25));
    assert_eq!(
        incumbent.cost().unwrap(),
        Euclidean.cost(&catalogue, tour.as_slice())
    );
    assert_eq!(worker.stats().candidates_evaluated, 3 * (1 + 25 * 24 / 2));
}

#[test]
fn test_search_with_zero_iterations_fails() {
    let result = search(&unit_square(), &SearchOptions::new(0), 0, 1);
    match result {
        Err(TourError::Configuration(msg)) => assert!(msg.contains("iterations")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_custom_cost_function() {
    #[derive(Clone, Copy)]
    struct Manhattan;

    impl CostFunction for Manhattan {
        fn cost(&self, catalogue: &CityCatalogue, order: &[usize]) -> f64 {
            let n = order.len();
            (0..n)
                .map(|k| {
                    let a = &catalogue[order[k]];
                    let b = &catalogue[order[(k + 1) % n]];
                    (a.x - b.x).abs() + (a.y - b.y).abs()
                })
                .sum()
        }
    }

    let options = SearchOptions::builder()
        .iterations(2)
        .seed_policy(SeedPolicy::Fixed(4))
        .build();
    let mut worker = Worker::with_cost_function(unit_square(), options, 0, 1, Manhattan).unwrap();
    worker.run();
    assert_eq!(worker.incumbent().cost(), Some(4.0));
}
