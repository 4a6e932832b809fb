use criterion::{criterion_group, criterion_main, Criterion};
use dxt_compress_bc1::colour_fit::{ColourCompressSettings, ColourFitMode};
use dxt_compress_bc2::alpha::compress_alpha_dxt3;
use dxt_compress_bc2::util::decode_bc2_block;
use dxt_compress_bc2::{compress_bc2_block, BC2_BLOCK_SIZE};
use dxt_compress_common::color_8888::Color8888;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC2 Compress Blocks (RGBA8888 -> BC2)");

    // Set up the test data - 4096 blocks with a simple pattern
    let blocks_count = 4096;
    let blocks: Vec<[Color8888; 16]> = (0..blocks_count)
        .map(|block_idx| {
            core::array::from_fn(|i| {
                let v = ((block_idx * 7 + i * 13) % 255) as u8;
                Color8888::new(v, v / 2, 255 - v, v.wrapping_mul(3))
            })
        })
        .collect();
    let mut output = vec![[0u8; BC2_BLOCK_SIZE]; blocks_count];
    group.throughput(criterion::Throughput::Elements(blocks_count as u64));

    group.bench_function("compress_alpha_dxt3", |b| {
        b.iter(|| {
            let mut alpha = [0u8; 8];
            for rgba in blocks.iter() {
                compress_alpha_dxt3(black_box(rgba), 0xFFFF, &mut alpha);
            }
            alpha
        })
    });

    let settings = ColourCompressSettings {
        fit: ColourFitMode::RangeFit,
        ..Default::default()
    };
    group.bench_function("compress_bc2_block_range_fit", |b| {
        b.iter(|| {
            for (rgba, out) in blocks.iter().zip(output.iter_mut()) {
                compress_bc2_block(black_box(rgba), 0xFFFF, &settings, out);
            }
        })
    });

    group.bench_function("decode_bc2_block", |b| {
        b.iter(|| {
            let mut alpha_sum = 0u32;
            for block in output.iter() {
                alpha_sum += decode_bc2_block(black_box(block)).pixels[0].a as u32;
            }
            alpha_sum
        })
    });

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
