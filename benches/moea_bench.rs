//! Criterion benchmarks for u-moea.
//!
//! Uses the synthetic ZDT1 problem to measure engine overhead independent
//! of any real evaluator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_moea::error::Result;
use u_moea::moea::{MoeaConfig, MoeaRunner};
use u_moea::pareto::{non_dominated_sort, Population};
use u_moea::problem::Problem;
use u_moea::random::create_rng;
use u_moea::solution::{Domain, Solution};
use u_moea::variation::{Compound, DifferentialEvolution, Pm, Sbx, Spx, Um, Variation};

// ===========================================================================
// ZDT1: f1 = x1, f2 = g · (1 − sqrt(x1 / g))
// ===========================================================================

struct Zdt1 {
    domains: Vec<Domain>,
}

impl Zdt1 {
    fn new(dim: usize) -> Self {
        Self {
            domains: vec![Domain::real(0.0, 1.0); dim],
        }
    }
}

impl Problem for Zdt1 {
    fn domains(&self) -> &[Domain] {
        &self.domains
    }

    fn num_objectives(&self) -> usize {
        2
    }

    fn evaluate(&self, solution: &mut Solution) -> Result<()> {
        let x: Vec<f64> = solution
            .variables()
            .iter()
            .map(|v| v.as_real().unwrap_or(0.0))
            .collect();
        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (x.len() - 1) as f64;
        let f1 = x[0];
        let f2 = g * (1.0 - (f1 / g).sqrt());
        solution.set_evaluation(&[f1, f2], &[])
    }
}

fn roster() -> Vec<Box<dyn Variation>> {
    vec![
        Box::new(Compound::new(Sbx::default(), Pm::default()).unwrap()),
        Box::new(Compound::new(DifferentialEvolution::default(), Pm::default()).unwrap()),
        Box::new(Compound::new(Spx::default(), Pm::default()).unwrap()),
        Box::new(Um::default()),
    ]
}

fn random_solutions(n: usize, seed: u64) -> Vec<Solution> {
    let mut rng = create_rng(seed);
    (0..n)
        .map(|_| {
            let f1: f64 = rng.random_range(0.0..1.0);
            let f2: f64 = rng.random_range(0.0..1.0);
            Solution::evaluated(vec![], vec![f1, f2], vec![])
        })
        .collect()
}

fn bench_zdt1(c: &mut Criterion) {
    let mut group = c.benchmark_group("moea_zdt1");
    group.sample_size(10);

    for &dim in &[10, 30] {
        let problem = Zdt1::new(dim);
        let config = MoeaConfig::default()
            .with_population_size(100)
            .with_max_evaluations(5_000)
            .with_parallel(false)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = MoeaRunner::new(black_box(p), roster(), c.clone())
                    .and_then(|mut runner| runner.run());
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_non_dominated_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_dominated_sort");

    for &n in &[100, 400] {
        let solutions = random_solutions(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &solutions, |b, s| {
            b.iter(|| black_box(non_dominated_sort(black_box(s))))
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_merge");

    for &capacity in &[100, 200] {
        let mut base = Population::new(capacity);
        base.merge(random_solutions(capacity, 1)).unwrap();
        let incoming = random_solutions(2, 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &(base, incoming),
            |b, (pop, inc)| {
                b.iter(|| {
                    let mut pop = pop.clone();
                    black_box(pop.merge(inc.clone()))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_zdt1, bench_non_dominated_sort, bench_merge);
criterion_main!(benches);
