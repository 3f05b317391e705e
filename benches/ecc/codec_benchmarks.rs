use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codeword::ecc::{crc_encode, hamming_encode};

// CRC-32 generator (IEEE 802.3) written out as bits.
const CRC32_KEY: &str = "100000100110000010001110110110111";

fn crc_benchmarks(c: &mut Criterion) {
    let data = "1101011011".repeat(64);
    c.bench_function("crc_encode_640_bits", |b| {
        b.iter(|| crc_encode(black_box(&data), black_box(CRC32_KEY)))
    });
    c.bench_function("crc_encode_640_bits_short_key", |b| {
        b.iter(|| crc_encode(black_box(&data), black_box("10011")))
    });
}

fn hamming_benchmarks(c: &mut Criterion) {
    let data = "1011".repeat(64);
    c.bench_function("hamming_encode_256_bits", |b| {
        b.iter(|| hamming_encode(black_box(&data)))
    });
}

criterion_group!(benches, crc_benchmarks, hamming_benchmarks);
criterion_main!(benches);
