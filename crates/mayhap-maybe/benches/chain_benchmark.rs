// Copyright (c) 2026 The Mayhap Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mayhap_core::fp::fallback::Defer;
use mayhap_core::slot::Slot;
use mayhap_maybe::maybe::maybe;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Generates a deterministic mix of present, missing, and null slots.
fn generate_slots(len: usize, seed: u64) -> Vec<Slot<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| match rng.random_range(0..10) {
            0 => Slot::Missing,
            1 => Slot::Null,
            _ => Slot::Value(rng.random_range(-1_000..1_000)),
        })
        .collect()
}

fn chain_sum(slots: &[Slot<i64>]) -> i64 {
    slots
        .iter()
        .map(|slot| {
            maybe(*slot)
                .that(|x| *x >= 0)
                .to(|x| Slot::Value(x * 3))
                .or(0)
                .into_option()
                .unwrap_or(0)
        })
        .sum()
}

fn match_sum(slots: &[Slot<i64>]) -> i64 {
    slots
        .iter()
        .map(|slot| match slot {
            Slot::Value(x) if *x >= 0 => x * 3,
            _ => 0,
        })
        .sum()
}

/// The chained combinators should compile down to the hand-rolled match;
/// this group keeps the two side by side.
fn bench_combinator_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_benchmark");

    for size in [1_000_usize, 100_000] {
        let slots = generate_slots(size, 0x5EED);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("combinators", size), &slots, |b, slots| {
            b.iter(|| chain_sum(black_box(slots)))
        });

        group.bench_with_input(BenchmarkId::new("hand_rolled", size), &slots, |b, slots| {
            b.iter(|| match_sum(black_box(slots)))
        });
    }

    group.finish();
}

fn bench_fallback_resolution(c: &mut Criterion) {
    let slots = generate_slots(100_000, 0xFA11);
    let mut group = c.benchmark_group("fallback_benchmark");
    group.throughput(Throughput::Elements(slots.len() as u64));

    group.bench_function("or_value", |b| {
        b.iter(|| {
            slots
                .iter()
                .map(|slot| maybe(black_box(*slot)).or(7).into_option().unwrap_or(0))
                .sum::<i64>()
        })
    });

    group.bench_function("or_deferred", |b| {
        b.iter(|| {
            slots
                .iter()
                .map(|slot| {
                    maybe(black_box(*slot))
                        .or(Defer(|| Slot::Value(7)))
                        .into_option()
                        .unwrap_or(0)
                })
                .sum::<i64>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_combinator_chains, bench_fallback_resolution);
criterion_main!(benches);
