//! Builder pattern implementation for compression modes.

use crate::flags::CompressionFlags;
use crate::mode::{CompressionMethod, CompressionMode};
use dxt_compress_bc1::colour_fit::ColourFitMode;
use dxt_compress_common::colour_metric::ColourMetric;

/// Builder for [`CompressionMode`] with convenient configuration methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressionModeBuilder {
    method: Option<CompressionMethod>,
    fit: Option<ColourFitMode>,
    metric: Option<ColourMetric>,
    weight_colour_by_alpha: Option<bool>,
    use_parallel_processing: Option<bool>,
}

impl CompressionModeBuilder {
    /// Create a new compression mode builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder preset from raw flags, normalised with [`CompressionFlags::fix_flags`].
    pub fn from_flags(flags: CompressionFlags) -> Self {
        let mode = CompressionMode::from(flags);
        Self {
            method: Some(mode.method),
            fit: Some(mode.fit),
            metric: Some(mode.metric),
            weight_colour_by_alpha: Some(mode.weight_colour_by_alpha),
            use_parallel_processing: Some(mode.use_parallel_processing),
        }
    }

    /// Set the block format. Default: [`CompressionMethod::Dxt1`].
    pub fn method(mut self, method: CompressionMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the colour fitting algorithm. Default: [`ColourFitMode::ClusterFit`].
    ///
    /// [`ColourFitMode::RangeFit`] is the fastest and [`ColourFitMode::IterativeClusterFit`]
    /// gives the best quality. Blocks with a single colour always use an exact lookup.
    pub fn fit(mut self, fit: ColourFitMode) -> Self {
        self.fit = Some(fit);
        self
    }

    /// Set the colour error metric. Default: [`ColourMetric::Perceptual`].
    pub fn metric(mut self, metric: ColourMetric) -> Self {
        self.metric = Some(metric);
        self
    }

    /// Set whether colours are weighted by alpha while fitting. Default: `false`.
    ///
    /// Useful when transparent pixels are blended away, so their colour matters less.
    pub fn weight_colour_by_alpha(mut self, enabled: bool) -> Self {
        self.weight_colour_by_alpha = Some(enabled);
        self
    }

    /// Set whether rows of blocks are compressed in parallel. Default: `false`.
    pub fn use_parallel_processing(mut self, enabled: bool) -> Self {
        self.use_parallel_processing = Some(enabled);
        self
    }

    /// Build the mode using the configured values or defaults.
    pub fn build(self) -> CompressionMode {
        CompressionMode {
            method: self.method.unwrap_or_default(),
            fit: self.fit.unwrap_or_default(),
            metric: self.metric.unwrap_or_default(),
            weight_colour_by_alpha: self.weight_colour_by_alpha.unwrap_or(false),
            use_parallel_processing: self.use_parallel_processing.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn test_compression_mode_builder() {
        // Test default builder
        let mode = CompressionModeBuilder::new().build();
        assert_eq!(mode, CompressionMode::default());
        assert_eq!(mode.method, CompressionMethod::Dxt1);
        assert_eq!(mode.fit, ColourFitMode::ClusterFit);
        assert_eq!(mode.metric, ColourMetric::Perceptual);

        // Test with every option set
        let mode = CompressionModeBuilder::new()
            .method(CompressionMethod::Dxt5)
            .fit(ColourFitMode::RangeFit)
            .metric(ColourMetric::Uniform)
            .weight_colour_by_alpha(true)
            .use_parallel_processing(true)
            .build();
        assert_eq!(mode.method, CompressionMethod::Dxt5);
        assert_eq!(mode.fit, ColourFitMode::RangeFit);
        assert_eq!(mode.metric, ColourMetric::Uniform);
        assert!(mode.weight_colour_by_alpha);
        assert!(mode.use_parallel_processing);
    }

    #[test]
    fn builder_from_flags_can_be_overridden() {
        let mode = CompressionModeBuilder::from_flags(
            CompressionFlags::DXT3 | CompressionFlags::METRIC_UNIFORM,
        )
        .fit(ColourFitMode::IterativeClusterFit)
        .build();

        assert_eq!(mode.method, CompressionMethod::Dxt3);
        assert_eq!(mode.metric, ColourMetric::Uniform);
        assert_eq!(mode.fit, ColourFitMode::IterativeClusterFit);
    }
}
