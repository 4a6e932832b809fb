use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dxt_compress_bc1::colour_fit::{ColourCompressSettings, ColourFitMode};
use dxt_compress_bc1::{compress_bc1_block, decompress_bc1_block, BC1_BLOCK_SIZE};
use dxt_compress_common::color_8888::Color8888;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Pseudo random but deterministic pixel blocks.
fn generate_blocks(count: usize) -> Vec<[Color8888; 16]> {
    let mut state = 0x1234_5678_u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    (0..count)
        .map(|_| {
            let base = next();
            core::array::from_fn(|_| {
                let noise = next();
                Color8888::new(
                    (base as u8).wrapping_add((noise & 0x1F) as u8),
                    ((base >> 8) as u8).wrapping_add(((noise >> 8) & 0x1F) as u8),
                    ((base >> 16) as u8).wrapping_add(((noise >> 16) & 0x1F) as u8),
                    255,
                )
            })
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC1 Compress Blocks (RGBA8888 -> BC1)");

    let blocks = generate_blocks(4096);
    let mut output = vec![[0u8; BC1_BLOCK_SIZE]; blocks.len()];
    group.throughput(criterion::Throughput::Elements(blocks.len() as u64));

    for fit in [
        ColourFitMode::RangeFit,
        ColourFitMode::ClusterFit,
        ColourFitMode::IterativeClusterFit,
    ] {
        let settings = ColourCompressSettings {
            fit,
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::new("compress", format!("{fit:?}")), &settings, |b, settings| {
            b.iter(|| {
                for (rgba, out) in blocks.iter().zip(output.iter_mut()) {
                    compress_bc1_block(black_box(rgba), 0xFFFF, settings, out);
                }
            })
        });
    }

    group.bench_function("decompress", |b| {
        b.iter(|| {
            let mut opaque = 0usize;
            for block in output.iter() {
                if decompress_bc1_block(black_box(block)).pixels[0].a == 255 {
                    opaque += 1;
                }
            }
            opaque
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
