//! Benchmarks for the per-channel transform stages
//!
//! Run with: cargo bench --bench transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use thumbhash_bitstream::{BitReader, BitWriter};
use thumbhash_color::{average_color, rgba_buffer_to_lpqa};
use thumbhash_core::{Dimensions, Grid, CHROMA_GRID};
use thumbhash_transform::{downscale_pixels, encode_channel, evaluate_channel, CosineTable};

fn gradient_plane(width: usize, height: usize) -> Vec<f64> {
    (0..width * height)
        .map(|i| ((i % width) + (i / width)) as f64 / (width + height) as f64)
        .collect()
}

fn gradient_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[
                (x * 255 / width) as u8,
                (y * 255 / height) as u8,
                128,
                if (x + y) % 7 == 0 { 96 } else { 255 },
            ]);
        }
    }
    data
}

fn bench_forward_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward Transform");

    for &size in &[32usize, 64, 100] {
        let plane = gradient_plane(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("luminance_7x7", size), &size, |b, &s| {
            b.iter(|| encode_channel(black_box(&plane), s, s, Grid::new(7, 7)));
        });
        group.bench_with_input(BenchmarkId::new("chroma_3x3", size), &size, |b, &s| {
            b.iter(|| encode_channel(black_box(&plane), s, s, CHROMA_GRID));
        });
    }

    group.finish();
}

fn bench_inverse_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inverse Transform");

    let plane = gradient_plane(32, 32);
    let coeffs = encode_channel(&plane, 32, 32, Grid::new(7, 7));

    group.bench_function("cosine_table_32", |b| {
        b.iter(|| CosineTable::new(black_box(32), 7));
    });

    let fx = CosineTable::new(32, 7);
    let fy = CosineTable::new(32, 7);
    group.bench_function("evaluate_32x32", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for y in 0..32 {
                for x in 0..32 {
                    total += evaluate_channel(&coeffs, Grid::new(7, 7), fx.row(x), fy.row(y));
                }
            }
            total
        });
    });

    group.finish();
}

fn bench_color_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color Conversion");

    let (width, height) = (100, 75);
    let pixels = gradient_rgba(width, height);
    let n = width * height;
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("average_color", |b| {
        b.iter(|| average_color(black_box(&pixels)));
    });

    let avg = average_color(&pixels);
    group.bench_function("rgba_to_lpqa", |b| {
        let (mut l, mut p, mut q, mut a) = (vec![0.0; n], vec![0.0; n], vec![0.0; n], vec![0.0; n]);
        b.iter(|| rgba_buffer_to_lpqa(black_box(&pixels), &avg, &mut l, &mut p, &mut q, &mut a));
    });

    group.finish();
}

fn bench_downscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("Downscale");

    for &size in &[256usize, 1024] {
        let pixels = gradient_rgba(size, size);
        let src = Dimensions::new(size as u32, size as u32);
        let dst = Dimensions::new(100, 100);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| downscale_pixels(black_box(&pixels), src, dst));
        });
    }

    group.finish();
}

fn bench_bitstream(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bitstream");

    let nibbles: Vec<u32> = (0..46).map(|i| i % 16).collect();

    group.bench_function("write_hash_fields", |b| {
        b.iter(|| {
            let mut writer = BitWriter::with_capacity(29);
            writer.write_bits(black_box(0x2A), 6).unwrap();
            writer.write_bits(black_box(0x15), 5).unwrap();
            for &n in &nibbles {
                writer.write_bits(n, 4).unwrap();
            }
            writer.into_bytes()
        });
    });

    let mut writer = BitWriter::new();
    for &n in &nibbles {
        writer.write_bits(n, 4).unwrap();
    }
    let bytes = writer.into_bytes();

    group.bench_function("read_nibbles", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(black_box(&bytes));
            let mut sum = 0u32;
            while let Ok(n) = reader.read_bits(4) {
                sum += n;
            }
            sum
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_transform,
    bench_inverse_transform,
    bench_color_conversion,
    bench_downscale,
    bench_bitstream
);
criterion_main!(benches);
