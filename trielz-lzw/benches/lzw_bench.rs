//! Throughput benchmarks for compression and decompression.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use trielz_lzw::{compress, decompress};

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repetitive pattern - short phrase repeated end to end
    pub fn repetitive(size: usize) -> Vec<u8> {
        let pattern = b"TOBEORNOTTOBEORTOBEORNOT";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(pattern.len());
            data.extend_from_slice(&pattern[..chunk_size]);
        }
        data
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }
}

const SIZES: [(&str, usize); 3] = [
    ("small_4KB", 4 * 1024),
    ("medium_64KB", 64 * 1024),
    ("large_256KB", 256 * 1024),
];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("repetitive", test_data::repetitive as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let compressed = compress(black_box(data)).unwrap();
                    black_box(compressed);
                });
            });
        }
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let original = generator(size);
            let compressed = compress(&original).unwrap();
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(&id),
                &compressed,
                |b, compressed| {
                    b.iter(|| {
                        let decompressed = decompress(black_box(compressed)).unwrap();
                        black_box(decompressed);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for (size_name, size) in SIZES {
        let data = test_data::text_like(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data)).unwrap();
                let decompressed = decompress(&compressed).unwrap();
                black_box(decompressed);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_roundtrip);
criterion_main!(benches);
