// ============================================================================
// Amount Input Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Normalizer - Isolates the per-keystroke policy pipeline
// 2. Full Field Pass - normalize + format + selection through AmountField
// 3. Formatter - Grouping and separator substitution
// ============================================================================

use amount_input_engine::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Normalizer Benchmarks
// ============================================================================

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let config = LocaleFormatConfig::new(SeparatorPreset::DotComma, "$", "USD", "US");

    // From a clean single digit to worst-case pasted noise
    for raw in ["5", "1234,5", "1.234.567,89", "12abc34,567"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), &raw, |b, raw| {
            b.iter(|| {
                let mut session = InputSessionState::new();
                black_box(KeystrokeNormalizer::normalize(raw, &config, &mut session))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Full Field Pass
// ============================================================================

fn benchmark_full_field_pass(c: &mut Criterion) {
    c.bench_function("field_text_changed", |b| {
        let mut field = AmountFieldBuilder::new()
            .profile_currency("BRL")
            .profile_country("BR")
            .device_locale("pt-BR")
            .format_preference("1.234,56")
            .build(Arc::new(NoOpFieldEventHandler));

        b.iter(|| black_box(field.text_changed("1.234,56")));
    });
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let config = LocaleFormatConfig::new(SeparatorPreset::SpaceComma, "€", "EUR", "ES");
    let amount: CanonicalAmount = "123456789.12".parse().expect("canonical");

    c.bench_function("format_grouped", |b| {
        b.iter(|| black_box(DisplayFormatter::format(&amount, &config, true)))
    });
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_full_field_pass,
    benchmark_format
);
criterion_main!(benches);
