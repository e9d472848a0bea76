// Copyright (c) 2025 Felix Kahle.
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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lacuna_core::num::primes::NumPrimeEngine;
use lacuna_model::range::SearchRange;
use lacuna_search::scanner::GapScanner;
use std::hint::black_box;

/// Benchmarks a full single-worker scan for a handful of upper bounds.
fn bench_full_scan(c: &mut Criterion) {
    let engine = NumPrimeEngine;
    let mut group = c.benchmark_group("scanner/full_scan");

    for upper_bound in [10_000u64, 100_000, 1_000_000] {
        let range = SearchRange::from_u64(upper_bound).unwrap();
        let assignment = range.assignment(0, 1).unwrap();

        group.throughput(Throughput::Elements(upper_bound));
        group.bench_with_input(
            BenchmarkId::from_parameter(upper_bound),
            &assignment,
            |b, assignment| {
                b.iter(|| {
                    let outcome = GapScanner::new(&engine).scan(black_box(assignment));
                    black_box(outcome)
                })
            },
        );
    }

    group.finish();
}

/// Benchmarks one worker's share of a partitioned scan to expose the
/// per-assignment cost at different group sizes.
fn bench_partitioned_share(c: &mut Criterion) {
    let engine = NumPrimeEngine;
    let range = SearchRange::from_u64(1_000_000).unwrap();
    let mut group = c.benchmark_group("scanner/partitioned_share");

    for worker_count in [2usize, 4, 8] {
        // The last rank scans the densest stretch of large primes.
        let assignment = range.assignment(worker_count - 1, worker_count).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(worker_count),
            &assignment,
            |b, assignment| {
                b.iter(|| {
                    let outcome = GapScanner::new(&engine).scan(black_box(assignment));
                    black_box(outcome)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_full_scan, bench_partitioned_share);
criterion_main!(benches);
