use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dxt_compress_api::{
    compress_image, decompress_image, ColourFitMode, CompressionMethod, CompressionModeBuilder,
    RawImage,
};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

// Gradient with some per pixel noise, close enough to real texture content
fn generate_test_image(width: usize, height: usize) -> RawImage {
    let mut state = 0x9E37_79B9_u32;
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let noise = (state & 0x0F) as usize;
            pixels.extend_from_slice(&[
                ((x * 255 / width + noise) % 256) as u8,
                ((y * 255 / height + noise) % 256) as u8,
                ((x + y) % 256) as u8,
                (255 - (x * 64 / width)) as u8,
            ]);
        }
    }
    RawImage::new(width, height, pixels).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    // 256x256 = 4096 blocks
    let (width, height) = (256, 256);
    let image = generate_test_image(width, height);

    let mut group = c.benchmark_group("Compress Image (RGBA8888 -> DXTn)");
    group.throughput(criterion::Throughput::Bytes(image.pixels().len() as u64));
    group.sample_size(10);

    for &method in CompressionMethod::all_values() {
        for &fit in ColourFitMode::all_values() {
            for parallel in [false, true] {
                let mode = CompressionModeBuilder::new()
                    .method(method)
                    .fit(fit)
                    .use_parallel_processing(parallel)
                    .build();
                let name = format!("{method:?} {fit:?}");
                let parameter = if parallel { "parallel" } else { "serial" };

                group.bench_with_input(BenchmarkId::new(name, parameter), &mode, |b, mode| {
                    b.iter(|| compress_image(black_box(&image), mode).unwrap())
                });
            }
        }
    }
    group.finish();

    let mut group = c.benchmark_group("Decompress Image (DXTn -> RGBA8888)");
    group.throughput(criterion::Throughput::Bytes(image.pixels().len() as u64));

    for &method in CompressionMethod::all_values() {
        let mode = CompressionModeBuilder::new()
            .method(method)
            .fit(ColourFitMode::RangeFit)
            .build();
        let compressed = compress_image(&image, &mode).unwrap();

        group.bench_function(format!("{method:?}"), |b| {
            b.iter(|| decompress_image(black_box(&compressed), width, height, &mode).unwrap())
        });
    }
    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
