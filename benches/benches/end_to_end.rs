//! End-to-end hashing and placeholder benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use thumbhash::{
    encode_image, BufferPool, DecoderOptions, EncoderOptions, HashDecoder, HashEncoder, RgbaImage,
};

fn create_test_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        [
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            128,
            255,
        ]
    })
    .unwrap()
}

fn bench_encode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode by Image Size");

    for &size in &[16u32, 32, 64, 100] {
        let image = create_test_image(size, size);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                let encoder = HashEncoder::default();
                b.iter(|| encoder.encode(black_box(&image)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_decode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode by Base Size");

    let hash = encode_image(&create_test_image(64, 48)).unwrap();

    for &base in &[32u32, 64, 128] {
        let decoder = HashDecoder::new(DecoderOptions::new().base_size(base));

        group.bench_with_input(BenchmarkId::from_parameter(base), &base, |b, _| {
            b.iter(|| decoder.decode(black_box(&hash)).unwrap());
        });
    }

    group.finish();
}

fn bench_pooled_vs_unpooled(c: &mut Criterion) {
    let mut group = c.benchmark_group("Buffer Pool");

    let image = create_test_image(100, 100);

    group.bench_function("unpooled", |b| {
        let encoder = HashEncoder::default();
        b.iter(|| encoder.encode(black_box(&image)).unwrap());
    });

    group.bench_function("pooled", |b| {
        let encoder = HashEncoder::with_pool(EncoderOptions::default(), BufferPool::new());
        b.iter(|| encoder.encode(black_box(&image)).unwrap());
    });

    group.finish();
}

fn bench_max_side(c: &mut Criterion) {
    let mut group = c.benchmark_group("Large Input");
    group.sample_size(20);

    let image = create_test_image(1024, 768);

    group.bench_function("full_resolution", |b| {
        let encoder = HashEncoder::default();
        b.iter(|| encoder.encode(black_box(&image)).unwrap());
    });

    group.bench_function("max_side_100", |b| {
        let encoder = HashEncoder::new(EncoderOptions::new().max_side(100));
        b.iter(|| encoder.encode(black_box(&image)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_by_size,
    bench_decode_by_size,
    bench_pooled_vs_unpooled,
    bench_max_side
);
criterion_main!(benches);
