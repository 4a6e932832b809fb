//! Colour endpoint fitting.
//!
//! A fitter chooses two RGB565 endpoints and a 2-bit index per pixel for the colour part
//! of a block. Which fitter runs depends on the number of distinct colours in the block
//! and the requested [`ColourFitMode`]:
//!
//! - No colours (everything masked out or transparent): range fit, which writes
//!   zero endpoints.
//! - Exactly one colour: single colour lookup fit, regardless of the mode.
//! - Otherwise: range fit for [`ColourFitMode::RangeFit`], cluster fit for the others.
//!
//! For BC1 the 3 colour codebook is tried first, followed by the 4 colour codebook unless
//! the block contains transparent pixels. BC2 and BC3 only use the 4 colour codebook.
//! A later attempt only replaces the block if its error is strictly lower.

mod cluster;
mod range;
mod single;
mod single_lut;

use cluster::ClusterFit;
use derive_enum_all_values::AllValues;
use dxt_compress_common::color_8888::Color8888;
use dxt_compress_common::colour_metric::ColourMetric;
use dxt_compress_common::colour_set::ColourSet;
use range::RangeFit;
use single::SingleColourFit;

/// Algorithm used to fit colour endpoints when a block has more than one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum ColourFitMode {
    /// Endpoints at the extremes of the principal axis. Fastest, lowest quality.
    RangeFit,
    /// Exhaustive search over orderings along the principal axis.
    #[default]
    ClusterFit,
    /// [`ColourFitMode::ClusterFit`], refined over up to 8 orderings. Slowest, best quality.
    IterativeClusterFit,
}

/// Settings for compressing the colour part of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColourCompressSettings {
    /// Fitting algorithm for blocks with more than one colour.
    pub fit: ColourFitMode,
    /// Error metric used while fitting.
    pub metric: ColourMetric,
    /// Weigh each pixel by its alpha while fitting.
    pub weight_colour_by_alpha: bool,
}

enum ColourFitter<'a> {
    Single(SingleColourFit<'a>),
    Range(RangeFit<'a>),
    Cluster(ClusterFit<'a>),
}

impl<'a> ColourFitter<'a> {
    fn select(colours: &'a ColourSet, settings: &ColourCompressSettings) -> Self {
        match (colours.count(), settings.fit) {
            (1, _) => Self::Single(SingleColourFit::new(colours)),
            (0, _) | (_, ColourFitMode::RangeFit) => {
                Self::Range(RangeFit::new(colours, settings.metric))
            }
            (_, ColourFitMode::ClusterFit) => {
                Self::Cluster(ClusterFit::new(colours, settings.metric, false))
            }
            (_, ColourFitMode::IterativeClusterFit) => {
                Self::Cluster(ClusterFit::new(colours, settings.metric, true))
            }
        }
    }

    fn compress3(&mut self, block: &mut [u8; 8]) {
        match self {
            Self::Single(fit) => fit.compress3(block),
            Self::Range(fit) => fit.compress3(block),
            Self::Cluster(fit) => fit.compress3(block),
        }
    }

    fn compress4(&mut self, block: &mut [u8; 8]) {
        match self {
            Self::Single(fit) => fit.compress4(block),
            Self::Range(fit) => fit.compress4(block),
            Self::Cluster(fit) => fit.compress4(block),
        }
    }
}

/// Compresses the colour part of a block from a prepared [`ColourSet`].
///
/// # Parameters
///
/// - `colours`: The point set of the block
/// - `is_bc1`: Allow the 3 colour + transparent codebook
/// - `settings`: Fit and metric selection
/// - `block`: Receives the 8 byte colour block
pub fn compress_colour_set(
    colours: &ColourSet,
    is_bc1: bool,
    settings: &ColourCompressSettings,
    block: &mut [u8; 8],
) {
    let mut fitter = ColourFitter::select(colours, settings);
    if is_bc1 {
        fitter.compress3(block);
        if !colours.is_transparent() {
            fitter.compress4(block);
        }
    } else {
        fitter.compress4(block);
    }
}

/// Compresses the colour part of a block.
///
/// # Parameters
///
/// - `rgba`: The 16 pixels of the block, row-major
/// - `mask`: Bit `i` set means pixel `i` takes part in the fit
/// - `is_bc1`: BC1 rules: transparent pixels are dropped and the 3 colour codebook is allowed
/// - `settings`: Fit and metric selection
/// - `block`: Receives the 8 byte colour block
///
/// # Example
///
/// ```
/// use dxt_compress_bc1::colour_fit::{compress_colour_block, ColourCompressSettings};
/// use dxt_compress_common::color_8888::Color8888;
///
/// let rgba = [Color8888::new(0, 0, 255, 255); 16];
/// let mut block = [0u8; 8];
/// compress_colour_block(&rgba, 0xFFFF, false, &ColourCompressSettings::default(), &mut block);
/// assert_eq!(u16::from_le_bytes([block[0], block[1]]), 0x001F);
/// ```
pub fn compress_colour_block(
    rgba: &[Color8888; 16],
    mask: u32,
    is_bc1: bool,
    settings: &ColourCompressSettings,
    block: &mut [u8; 8],
) {
    let colours = ColourSet::new(rgba, mask, is_bc1, settings.weight_colour_by_alpha);
    compress_colour_set(&colours, is_bc1, settings, block);
}
