//! Typed compression configuration.

use crate::flags::CompressionFlags;
use derive_enum_all_values::AllValues;
use dxt_compress_bc1::colour_fit::{ColourCompressSettings, ColourFitMode};
use dxt_compress_bc1::BC1_BLOCK_SIZE;
use dxt_compress_bc2::BC2_BLOCK_SIZE;
use dxt_compress_bc3::BC3_BLOCK_SIZE;
use dxt_compress_common::colour_metric::ColourMetric;

/// Block format to compress to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum CompressionMethod {
    /// DXT1 (BC1): 8 byte blocks, 1-bit alpha
    #[default]
    Dxt1,
    /// DXT3 (BC2): 16 byte blocks, explicit 4-bit alpha
    Dxt3,
    /// DXT5 (BC3): 16 byte blocks, interpolated alpha
    Dxt5,
}

impl CompressionMethod {
    /// Size of one compressed 4x4 block in bytes.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            CompressionMethod::Dxt1 => BC1_BLOCK_SIZE,
            CompressionMethod::Dxt3 => BC2_BLOCK_SIZE,
            CompressionMethod::Dxt5 => BC3_BLOCK_SIZE,
        }
    }
}

/// Complete configuration of a compression or decompression run.
///
/// Every value of this type is a valid configuration. Build one with
/// [`CompressionModeBuilder`](crate::CompressionModeBuilder), from raw
/// [`CompressionFlags`], or use [`CompressionMode::default`] for DXT1 with the cluster fit
/// and perceptual metric.
///
/// Only [`CompressionMode::method`] matters for decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompressionMode {
    /// Block format
    pub method: CompressionMethod,
    /// Colour endpoint fitting algorithm
    pub fit: ColourFitMode,
    /// Colour error metric
    pub metric: ColourMetric,
    /// Weigh each pixel's colour by its alpha while fitting
    pub weight_colour_by_alpha: bool,
    /// Compress rows of blocks in parallel (needs the `multithreaded` feature)
    pub use_parallel_processing: bool,
}

impl CompressionMode {
    /// Settings handed to the colour fitters.
    #[inline]
    pub fn colour_settings(&self) -> ColourCompressSettings {
        ColourCompressSettings {
            fit: self.fit,
            metric: self.metric,
            weight_colour_by_alpha: self.weight_colour_by_alpha,
        }
    }
}

impl From<CompressionFlags> for CompressionMode {
    /// Normalises `flags` with [`CompressionFlags::fix_flags`] and converts the result.
    fn from(flags: CompressionFlags) -> Self {
        let flags = flags.fix_flags();

        let method = if flags.dxt3() {
            CompressionMethod::Dxt3
        } else if flags.dxt5() {
            CompressionMethod::Dxt5
        } else {
            CompressionMethod::Dxt1
        };

        let fit = if flags.range_fit() {
            ColourFitMode::RangeFit
        } else if flags.iterative_cluster_fit() {
            ColourFitMode::IterativeClusterFit
        } else {
            ColourFitMode::ClusterFit
        };

        let metric = if flags.metric_uniform() {
            ColourMetric::Uniform
        } else {
            ColourMetric::Perceptual
        };

        Self {
            method,
            fit,
            metric,
            weight_colour_by_alpha: flags.weight_colour_by_alpha(),
            use_parallel_processing: flags.use_parallel_processing(),
        }
    }
}

impl From<CompressionMode> for CompressionFlags {
    /// Packs a mode into its (already normalised) flag form.
    fn from(mode: CompressionMode) -> Self {
        let mut flags = match mode.method {
            CompressionMethod::Dxt1 => CompressionFlags::DXT1,
            CompressionMethod::Dxt3 => CompressionFlags::DXT3,
            CompressionMethod::Dxt5 => CompressionFlags::DXT5,
        };

        flags |= match mode.fit {
            ColourFitMode::RangeFit => CompressionFlags::RANGE_FIT,
            ColourFitMode::ClusterFit => CompressionFlags::CLUSTER_FIT,
            ColourFitMode::IterativeClusterFit => CompressionFlags::ITERATIVE_CLUSTER_FIT,
        };

        flags |= match mode.metric {
            ColourMetric::Perceptual => CompressionFlags::METRIC_PERCEPTUAL,
            ColourMetric::Uniform => CompressionFlags::METRIC_UNIFORM,
        };

        flags.set_weight_colour_by_alpha(mode.weight_colour_by_alpha);
        flags.set_use_parallel_processing(mode.use_parallel_processing);
        flags
    }
}
