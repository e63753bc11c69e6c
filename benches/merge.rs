// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Weft-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Weft and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use weft::merge::interleave_merge;
use weft::ops::{compute_composite, visible_windows};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `merge.interleave`, `merge.composite`
// - Case IDs: `small`, `medium`, `large_cubic`.
fn benches_merge(c: &mut Criterion) {
    let cases = [
        fixtures::rows::Case::Small,
        fixtures::rows::Case::Medium,
        fixtures::rows::Case::LargeCubic,
    ];

    // The raw merge over pre-materialized windows.
    let mut group = c.benchmark_group("merge.interleave");
    for case in cases {
        let session = fixtures::rows::fixture(case);
        let windows = visible_windows(&session);
        group.throughput(Throughput::Elements(windows.len() as u64));
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let composite = interleave_merge(black_box(&windows));
                black_box(fixtures::checksum_window(&composite))
            })
        });
    }
    group.finish();

    // The full entry point: regeneration, order resolution and merge.
    let mut group = c.benchmark_group("merge.composite");
    for case in cases {
        let session = fixtures::rows::fixture(case);
        group.throughput(Throughput::Elements(u64::from(session.row_count())));
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let composite = compute_composite(black_box(&session));
                black_box(fixtures::checksum_window(&composite))
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_merge
}
criterion_main!(benches);
