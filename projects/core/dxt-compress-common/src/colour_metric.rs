//! Channel weighting used when measuring colour error.

use crate::math::Vec3;
use derive_enum_all_values::AllValues;

/// Error metric used by the colour fitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum ColourMetric {
    /// Weighs each channel by its contribution to perceived brightness (Rec. 709 luma).
    #[default]
    Perceptual,
    /// All channels contribute equally.
    Uniform,
}

impl ColourMetric {
    /// Returns the per channel weights for this metric.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress_common::colour_metric::ColourMetric;
    ///
    /// let weights = ColourMetric::Uniform.weights();
    /// assert_eq!((weights.x, weights.y, weights.z), (1.0, 1.0, 1.0));
    /// ```
    #[inline]
    pub fn weights(self) -> Vec3 {
        match self {
            ColourMetric::Perceptual => Vec3::new(0.2126, 0.7152, 0.0722),
            ColourMetric::Uniform => Vec3::splat(1.0),
        }
    }
}
