//! Conversion benchmarks
//!
//! Covers the two hot paths: bulk hub-routed color conversion and
//! packed-pixel ↔ float-vector conversion around the dispatch threshold.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxpix_core::{
    CieLab, CieXyz, ColorConverter, Rgb, Rgba32, rgba32_to_vector4, vector4_to_rgba32,
};

fn generate_xyz(count: usize) -> Vec<CieXyz> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            CieXyz::new(t * 0.95, t, t * 1.08)
        })
        .collect()
}

fn generate_pixels(count: usize) -> Vec<Rgba32> {
    (0..count)
        .map(|i| {
            let v = ((i * 37) % 256) as u8;
            Rgba32::new(v, v.wrapping_add(91), v.wrapping_add(182), 255)
        })
        .collect()
}

fn bench_bulk_xyz_to_lab(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_xyz_to_lab");
    let converter = ColorConverter::new();

    for size in [100, 1000, 10000, 100000].iter() {
        let input = generate_xyz(*size);
        let mut output = vec![CieLab::new(0.0, 0.0, 0.0); *size];

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("convert_slice", size), size, |b, &size| {
            b.iter(|| {
                converter
                    .convert_slice(black_box(&input), black_box(&mut output), size)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_single_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");
    let converter = ColorConverter::new();

    group.bench_function("rgb_to_lab", |b| {
        b.iter(|| converter.to_lab(black_box(Rgb::new(0.3, 0.55, 0.8))))
    });
    group.bench_function("lab_to_rgb", |b| {
        b.iter(|| converter.to_rgb(black_box(CieLab::new(60.0, 25.0, -40.0))))
    });
    group.bench_function("rgb_to_ycbcr", |b| {
        b.iter(|| converter.to_ycbcr(black_box(Rgb::new(0.3, 0.55, 0.8))))
    });

    group.finish();
}

fn bench_pixel_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_pack");

    // Sizes straddling the scalar/vector dispatch threshold
    for size in [64, 128, 1000, 100000].iter() {
        let pixels = generate_pixels(*size);
        let mut vectors = vec![[0.0f32; 4]; *size];
        let mut packed = vec![Rgba32::default(); *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("unpack", size), size, |b, &size| {
            b.iter(|| {
                rgba32_to_vector4(black_box(&pixels), black_box(&mut vectors), size).unwrap()
            })
        });

        for (pixel, vector) in pixels.iter().zip(vectors.iter_mut()) {
            *vector = pixel.to_vector4();
        }

        group.bench_with_input(BenchmarkId::new("pack", size), size, |b, &size| {
            b.iter(|| {
                vector4_to_rgba32(black_box(&vectors), black_box(&mut packed), size).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bulk_xyz_to_lab,
    bench_single_conversions,
    bench_pixel_pack,
);

criterion_main!(benches);
