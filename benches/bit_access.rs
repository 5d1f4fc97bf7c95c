use criterion::{Criterion, criterion_group, criterion_main};
use primbits::{
    Decimal,
    codec::{bits_to, get_bit, set_bit, to_bits},
    sequence::double,
};
use std::hint::black_box;

fn bench_to_bits(c: &mut Criterion) {
    c.bench_function("to_bits_u64", |b| {
        b.iter(|| to_bits(black_box(0xDEAD_BEEF_CAFE_BABEu64)))
    });

    let decimal = Decimal::new(true, 6, 987_654_321_000).unwrap();
    c.bench_function("to_bits_decimal", |b| b.iter(|| to_bits(black_box(decimal))));
}

fn bench_bits_to(c: &mut Criterion) {
    for &len in &[32usize, 64, 96] {
        // Deterministic but non-trivial pattern
        let bits: Vec<bool> = (0..len).map(|i| i * 31 % 7 < 3).collect();

        c.bench_function(&format!("bits_to_u64_{}_bits", len), |b| {
            b.iter(|| bits_to::<u64>(black_box(&bits)).unwrap())
        });
    }
}

fn bench_set_bit(c: &mut Criterion) {
    c.bench_function("invert_u32_bitwise", |b| {
        b.iter(|| {
            (0..32).fold(black_box(0x1234_5678u32), |acc, i| {
                let bit = get_bit(acc, i).unwrap();
                set_bit(acc, i, !bit).unwrap()
            })
        })
    });
}

fn bench_range(c: &mut Criterion) {
    c.bench_function("double_range_10k", |b| {
        b.iter(|| double::range(0.0, 1.0, black_box(1.0e-4)).unwrap().sum::<f64>())
    });
}

criterion_group!(benches, bench_to_bits, bench_bits_to, bench_set_bit, bench_range);
criterion_main!(benches);
