//! Raw compression flags.
//!
//! [`CompressionFlags`] is the packed bitmask form of a [`CompressionMode`]. It accepts any
//! combination of bits; [`CompressionFlags::fix_flags`] resolves it to a valid one.
//!
//! [`CompressionMode`]: crate::CompressionMode

use bitfield::bitfield;
use core::ops::{BitOr, BitOrAssign};

bitfield! {
    /// Packed compression flags.
    ///
    /// Bit layout:
    /// - Bit 0: DXT1 (BC1)
    /// - Bit 1: DXT3 (BC2)
    /// - Bit 2: DXT5 (BC3)
    /// - Bit 3: Cluster fit
    /// - Bit 4: Range fit
    /// - Bit 5: Perceptual colour metric
    /// - Bit 6: Uniform colour metric
    /// - Bit 7: Weigh colours by alpha
    /// - Bit 8: Iterative cluster fit
    /// - Bit 9: Compress rows of blocks in parallel
    /// - Bits 10-31: Unused, dropped by [`CompressionFlags::fix_flags`]
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompressionFlags(u32);
    impl Debug;
    u32;

    /// Compress to DXT1 (BC1)
    pub dxt1, set_dxt1: 0;
    /// Compress to DXT3 (BC2)
    pub dxt3, set_dxt3: 1;
    /// Compress to DXT5 (BC3)
    pub dxt5, set_dxt5: 2;
    /// Use the cluster fit
    pub cluster_fit, set_cluster_fit: 3;
    /// Use the range fit
    pub range_fit, set_range_fit: 4;
    /// Use the perceptual colour metric
    pub metric_perceptual, set_metric_perceptual: 5;
    /// Use the uniform colour metric
    pub metric_uniform, set_metric_uniform: 6;
    /// Weigh colours by alpha while fitting
    pub weight_colour_by_alpha, set_weight_colour_by_alpha: 7;
    /// Use the iterative cluster fit
    pub iterative_cluster_fit, set_iterative_cluster_fit: 8;
    /// Compress rows of blocks in parallel
    pub use_parallel_processing, set_use_parallel_processing: 9;
}

impl CompressionFlags {
    /// DXT1 (BC1)
    pub const DXT1: Self = Self(1 << 0);
    /// DXT3 (BC2)
    pub const DXT3: Self = Self(1 << 1);
    /// DXT5 (BC3)
    pub const DXT5: Self = Self(1 << 2);
    /// Cluster fit
    pub const CLUSTER_FIT: Self = Self(1 << 3);
    /// Range fit
    pub const RANGE_FIT: Self = Self(1 << 4);
    /// Perceptual colour metric
    pub const METRIC_PERCEPTUAL: Self = Self(1 << 5);
    /// Uniform colour metric
    pub const METRIC_UNIFORM: Self = Self(1 << 6);
    /// Weigh colours by alpha
    pub const WEIGHT_COLOUR_BY_ALPHA: Self = Self(1 << 7);
    /// Iterative cluster fit
    pub const ITERATIVE_CLUSTER_FIT: Self = Self(1 << 8);
    /// Compress rows of blocks in parallel
    pub const USE_PARALLEL_PROCESSING: Self = Self(1 << 9);

    const METHOD_MASK: u32 = Self::DXT1.0 | Self::DXT3.0 | Self::DXT5.0;
    const FIT_MASK: u32 = Self::CLUSTER_FIT.0 | Self::RANGE_FIT.0 | Self::ITERATIVE_CLUSTER_FIT.0;
    const METRIC_MASK: u32 = Self::METRIC_PERCEPTUAL.0 | Self::METRIC_UNIFORM.0;
    const EXTRA_MASK: u32 = Self::WEIGHT_COLOUR_BY_ALPHA.0 | Self::USE_PARALLEL_PROCESSING.0;

    /// Creates flags from raw bits. Any value is accepted.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Resolves any combination of bits to exactly one method, fit and metric.
    ///
    /// - Method: DXT3 or DXT5 if that is the only method bit set, otherwise DXT1.
    /// - Fit: range fit or iterative cluster fit if that is the only fit bit set,
    ///   otherwise cluster fit.
    /// - Metric: uniform if that is the only metric bit set, otherwise perceptual.
    /// - Alpha weighting and parallel processing pass through unchanged.
    /// - Every other bit is dropped.
    ///
    /// Normalisation is idempotent.
    ///
    /// # Example
    ///
    /// ```
    /// use dxt_compress_api::CompressionFlags;
    ///
    /// let flags = (CompressionFlags::DXT3 | CompressionFlags::DXT5).fix_flags();
    /// assert_eq!(
    ///     flags,
    ///     CompressionFlags::DXT1 | CompressionFlags::CLUSTER_FIT | CompressionFlags::METRIC_PERCEPTUAL
    /// );
    /// ```
    pub const fn fix_flags(self) -> Self {
        let mut method = self.0 & Self::METHOD_MASK;
        let mut fit = self.0 & Self::FIT_MASK;
        let mut metric = self.0 & Self::METRIC_MASK;
        let extra = self.0 & Self::EXTRA_MASK;

        if method != Self::DXT3.0 && method != Self::DXT5.0 {
            method = Self::DXT1.0;
        }
        if fit != Self::RANGE_FIT.0 && fit != Self::ITERATIVE_CLUSTER_FIT.0 {
            fit = Self::CLUSTER_FIT.0;
        }
        if metric != Self::METRIC_UNIFORM.0 {
            metric = Self::METRIC_PERCEPTUAL.0;
        }

        Self(method | fit | metric | extra)
    }
}

impl BitOr for CompressionFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CompressionFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
