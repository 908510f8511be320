// ABOUTME: Criterion benchmarks for the formula engine and nutrition planner
// ABOUTME: Measures per-formula BMR cost, method availability, and sequential versus rayon batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the formula engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use calculeat::config::EngineConfig;
use calculeat::planner::{plan, plan_batch, NutritionRequest};
use calculeat::{
    ActivityLevel, AnthropometricProfile, BodyCompositionMethod, CaliperMeasurements,
    CalorieGoal, Gender, TapeMeasurements,
};
use calculeat_intelligence::algorithms::{
    available_methods, compute_bmr, BmrFormula, BodyCompositionParams,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const BATCH_SIZES: [u32; 3] = [16, 256, 4096];

fn caliper() -> CaliperMeasurements {
    CaliperMeasurements {
        chest: Some(12.0),
        abdominal: Some(20.0),
        thigh: Some(15.0),
        tricep: Some(11.0),
        subscapular: Some(14.0),
        suprailiac: Some(13.0),
        midaxillary: Some(10.0),
        ..CaliperMeasurements::default()
    }
}

fn tape() -> TapeMeasurements {
    TapeMeasurements {
        neck: Some(38.0),
        waist: Some(84.0),
        hip: Some(98.0),
        forearm: Some(28.0),
        ..TapeMeasurements::default()
    }
}

fn generate_requests(count: u32) -> Vec<NutritionRequest> {
    (0..count)
        .filter_map(|index| {
            let gender = if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            };
            let profile = AnthropometricProfile::new(
                18 + index % 50,
                gender,
                50.0 + f64::from(index % 60),
                150.0 + f64::from(index % 45),
            )
            .ok()?;
            let mut request = NutritionRequest::new(profile, CalorieGoal::Lose);
            request.caliper = caliper();
            request.tape = tape();
            request.body_fat_method = Some(BodyCompositionMethod::JacksonPollock7);
            request.activity.activity_level = ActivityLevel::ALL[(index % 5) as usize];
            Some(request)
        })
        .collect()
}

fn bench_bmr_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmr");
    let Ok(profile) = AnthropometricProfile::new(30, Gender::Male, 80.0, 180.0)
        .and_then(|p| p.with_body_fat(15.0))
    else {
        return;
    };

    for formula in BmrFormula::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(formula.name()),
            &formula,
            |b, formula| b.iter(|| compute_bmr(*formula, black_box(&profile))),
        );
    }

    group.finish();
}

fn bench_availability(c: &mut Criterion) {
    let Ok(profile) = AnthropometricProfile::new(35, Gender::Female, 62.0, 165.0) else {
        return;
    };
    let params = BodyCompositionParams::from_profile(&profile, caliper(), tape()).with_bmi(22.8);

    c.bench_function("available_methods", |b| {
        b.iter(|| available_methods(black_box(&params)));
    });
}

fn bench_planner(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner");
    let config = EngineConfig::default();

    for size in BATCH_SIZES {
        let requests = generate_requests(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("sequential", size), &requests, |b, reqs| {
            b.iter(|| {
                reqs.iter()
                    .map(|request| plan(black_box(request), &config))
                    .collect::<Vec<_>>()
            });
        });
        group.bench_with_input(BenchmarkId::new("rayon", size), &requests, |b, reqs| {
            b.iter(|| plan_batch(black_box(reqs), &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bmr_formulas, bench_availability, bench_planner);
criterion_main!(benches);
