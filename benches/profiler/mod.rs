// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Criterion with a flamegraph profiler attached (`cargo bench --bench obz -- --profile-time 10`).
///
/// `OBZ_PROFILE_FREQ`, `OBZ_BENCH_SAMPLE_SIZE` and `OBZ_BENCH_MEASUREMENT_SECS` override the
/// defaults.
pub fn criterion() -> Criterion {
    let frequency = env_or("OBZ_PROFILE_FREQ", 100i32).clamp(1, 1000);
    let sample_size = env_or("OBZ_BENCH_SAMPLE_SIZE", 40usize).clamp(10, 200);
    let measurement_secs = env_or("OBZ_BENCH_MEASUREMENT_SECS", 4u64).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
