use criterion::measurement::WallTime;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion};
use rand::distributions::uniform::SampleUniform;
use rand::{distributions::Uniform, Rng};
use std::ops::Range;
use std::time::{Duration, Instant};

use double_wide::{bits, div, u256, Limb, U128, U256};

fn rng() -> rand_pcg::Pcg64 {
    let t = Instant::now().elapsed().as_nanos();
    rand_pcg::Pcg64::new(0xcafef00dd15ea5e5 ^ t, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

struct Bench<'a, 'b, T> {
    group: &'a mut BenchmarkGroup<'b, WallTime>,
    items: Vec<T>,
}

impl<'a, 'b, T> Bench<'a, 'b, T> {
    fn with<R, F>(
        group: &'a mut BenchmarkGroup<'b, WallTime>,
        len: usize,
        range: Range<R>,
        f: F,
    ) -> Self
    where
        R: SampleUniform,
        F: FnMut(R) -> T,
    {
        let distr = Uniform::from(range);
        let mut rng = rng();

        let items = (0..len).map(|_| rng.sample(&distr)).map(f).collect::<Vec<_>>();

        Bench { group, items }
    }

    fn register(&mut self, name: &str, param: usize, mut f: impl FnMut(&T) -> u64) {
        self.group
            .bench_with_input(BenchmarkId::new(name, param), &self.items, |b, items| {
                b.iter(|| {
                    let mut sum = 0_u64;
                    for item in items.iter() {
                        sum = sum.wrapping_add(f(item));
                    }
                    sum
                })
            });
    }
}

fn configure(group: &mut BenchmarkGroup<'_, WallTime>) {
    group
        .warm_up_time(Duration::from_millis(350))
        .measurement_time(Duration::from_secs(2));
}

pub fn bench_mul_u128(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_u128");
    configure(&mut group);

    for width in [32, 64, 127] {
        let input_range = 0..1_u128 << width;

        let mut bench =
            Bench::with(&mut group, 1000, input_range, |n| (n, n.rotate_left(17)));

        bench.register("wide", width, |&(a, b)| {
            let p = U128::wrapping_from(a).wrapping_mul(&U128::wrapping_from(b));
            p.word(0)
        });

        bench.register("std", width, |&(a, b)| a.wrapping_mul(b) as u64);
    }

    group.finish();
}

pub fn bench_mul_u256(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_u256");
    configure(&mut group);

    for high_words in [0, 1, 2] {
        let mut bench = Bench::with(&mut group, 1000, 0..u64::MAX, |n| {
            let word = |k: usize| {
                if k < 2 + high_words {
                    n.rotate_left(7 * k as u32 + 5)
                } else {
                    0
                }
            };
            let a = u256([n, n.rotate_left(13), 0, 0]);
            (a, u256([word(0), word(1), word(2), word(3)]))
        });

        bench.register("overflowing", high_words, |(a, b)| {
            let (p, overflow) = a.overflowing_mul(b);
            p.word(0) ^ overflow as u64
        });

        bench.register("full_width", high_words, |(a, b)| {
            a.multiplied_full_width(*b).high.word(0)
        });
    }

    group.finish();
}

pub fn bench_div_u256(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_u256");
    configure(&mut group);

    for i in [2] {
        let input_range = 0..10_u128.pow(30);

        let mut bench = Bench::with(&mut group, 100, input_range, |n| {
            U256::wrapping_from(n).pow(i as u32)
        });

        let mut divisor = 0xff_u64;

        bench.register("wide", i, |n| {
            let q = *n / divisor;
            divisor = divisor.wrapping_add(0xff) | 1;

            q.word(0)
        });

        bench.register("slice", i, |n| {
            let words = n.words();
            div::overflowing_rem(&words, 0x1234_5678_9abc_def1).0
        });
    }

    group.finish();
}

pub fn bench_bit_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_count");
    configure(&mut group);

    for len in [4, 16, 64] {
        let mut bench = Bench::with(&mut group, 100, 0..u64::MAX, |seed| {
            (0..len as u64)
                .map(|i| seed.rotate_left(i as u32) << (i % 8))
                .collect::<Vec<_>>()
        });

        bench.register("twos_complement", len, |limbs| {
            bits::nonzero_bit_count_of_twos_complement(limbs) as u64
        });

        bench.register("equals", len, |limbs| {
            bits::nonzero_bit_count_equals(limbs, len * 16) as u64
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul_u128, bench_mul_u256, bench_div_u256, bench_bit_count);
criterion_main!(benches);
