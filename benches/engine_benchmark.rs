// ============================================================================
// Binary Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - String-in/string-out binary arithmetic at several widths
// 2. Bitwise - AND/XOR/NOT and shifts
// 3. Conversion - Parsing in one radix and rendering in all four
// 4. Session - Full keypad interaction through the calculator driver
// ============================================================================

use binary_calculator::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn operand(bits: usize) -> String {
    // alternating 1010... so every width has set and clear bits
    (0..bits).map(|i| if i % 2 == 0 { '1' } else { '0' }).collect()
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for bits in [8usize, 32, 63].iter() {
        let a = operand(*bits);
        let b = operand(*bits / 2 + 1);

        group.bench_with_input(BenchmarkId::new("add", bits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(add(a, b)));
        });

        group.bench_with_input(
            BenchmarkId::new("subtract_negative", bits),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(subtract(b, a)));
            },
        );

        group.bench_with_input(BenchmarkId::new("divide", bits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(divide(a, b)));
        });
    }

    group.finish();
}

// ============================================================================
// Bitwise Benchmarks
// ============================================================================

fn benchmark_bitwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitwise");
    let a = operand(32);
    let b = operand(17);

    group.bench_function("xor", |bench| {
        bench.iter(|| black_box(bitwise_xor(&a, &b)));
    });

    group.bench_function("not_32", |bench| {
        bench.iter(|| black_box(bitwise_not(&a)));
    });

    group.bench_function("left_shift", |bench| {
        bench.iter(|| black_box(left_shift(&b, 16)));
    });

    group.bench_function("evaluate_dispatch", |bench| {
        bench.iter(|| black_box(evaluate(Operation::RightShift, &a, "101")));
    });

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for (radix, input) in [
        (Radix::Binary, "1111111111111111"),
        (Radix::Decimal, "18446744073709551615"),
        (Radix::Hexadecimal, "DEADBEEF"),
    ] {
        group.bench_with_input(BenchmarkId::new("convert", radix), &input, |bench, input| {
            bench.iter(|| black_box(convert(input, radix)));
        });
    }

    group.bench_function("validate_hex", |bench| {
        bench.iter(|| black_box(validate_hex("0123456789abcdefABCDEF")));
    });

    group.finish();
}

// ============================================================================
// Session Benchmarks
// ============================================================================

fn benchmark_session(c: &mut Criterion) {
    c.bench_function("session_add_and_clear", |bench| {
        let mut calc = CalculatorBuilder::new().build(Arc::new(NoOpEventHandler));
        bench.iter(|| {
            for digit in [Bit::One, Bit::Zero, Bit::One] {
                calc.press_digit(digit);
            }
            calc.select_operation(Operation::Add);
            calc.press_digit(Bit::One);
            calc.press_digit(Bit::One);
            black_box(calc.equals());
            calc.clear();
        });
    });
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_bitwise,
    benchmark_conversion,
    benchmark_session
);
criterion_main!(benches);
