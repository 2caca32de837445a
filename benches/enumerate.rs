use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use dicedist::{DicePool, reduced_sum};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn gen_outcomes(n: usize, dice: usize, sides: u32) -> Vec<Vec<u32>> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n)
        .map(|_| (0..dice).map(|_| rng.random_range(1..=sides)).collect())
        .collect()
}

fn bench_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution");
    for notation in ["3d6", "4d6dl1", "5d6dl2", "2d20kh1", "4d10dl1", "6d6dl3"] {
        let pool: DicePool = notation.parse().unwrap();
        group.throughput(Throughput::Elements(pool.total_outcomes().unwrap()));
        group.bench_function(notation, |b| {
            b.iter(|| black_box(pool.distribution().unwrap()));
        });
    }
    group.finish();
}

fn bench_reduced_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduced_sum");
    const OUTCOMES: usize = 1024;

    for &dice in &[2usize, 4, 8, 10] {
        let outcomes = gen_outcomes(OUTCOMES, dice, 20);
        group.throughput(Throughput::Elements(OUTCOMES as u64));
        group.bench_function(format!("dice={dice}"), |b| {
            let mut scratch = Vec::with_capacity(dice);
            b.iter(|| {
                let mut s = 0u64;
                for o in &outcomes {
                    s += reduced_sum(black_box(o), dice / 2, &mut scratch);
                }
                black_box(s)
            });
        });
    }
    group.finish();
}

criterion_group!(enumerate, bench_distribution, bench_reduced_sum);
criterion_main!(enumerate);
