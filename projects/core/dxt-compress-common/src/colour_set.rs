//! The set of distinct colours in a 4x4 block, which colour endpoints are fitted to.
//!
//! Identical colours are merged into a single weighted point. A remap table keeps track
//! of which point each of the 16 pixels ended up in, so indices chosen per point can be
//! expanded back to indices per pixel with [`ColourSet::remap_indices`].

use crate::color_8888::Color8888;
use crate::math::Vec3;

/// Alpha below which a pixel is treated as transparent in BC1.
pub const BC1_ALPHA_THRESHOLD: u8 = 128;

/// Index written for pixels that are not part of the set.
/// In a 3 colour BC1 block this selects transparent black.
pub const EXCLUDED_PIXEL_INDEX: u8 = 3;

/// A deduplicated, weighted point set built from the pixels of one block.
#[derive(Debug, Clone)]
pub struct ColourSet {
    count: usize,
    points: [Vec3; 16],
    weights: [f32; 16],
    remap: [i8; 16],
    transparent: bool,
}

impl ColourSet {
    /// Builds the point set for a block.
    ///
    /// # Parameters
    ///
    /// - `rgba`: The 16 pixels of the block, in row-major order
    /// - `mask`: Bit `i` set means pixel `i` takes part; clear bits are ignored entirely
    /// - `is_bc1`: Excludes pixels with alpha below [`BC1_ALPHA_THRESHOLD`] and marks the set transparent
    /// - `weight_by_alpha`: Weighs each pixel by `(alpha + 1) / 256` instead of `1`
    pub fn new(rgba: &[Color8888; 16], mask: u32, is_bc1: bool, weight_by_alpha: bool) -> Self {
        let mut set = Self {
            count: 0,
            points: [Vec3::default(); 16],
            weights: [0.0; 16],
            remap: [-1; 16],
            transparent: false,
        };

        let is_included = |i: usize| mask & (1 << i) != 0;
        let is_dropped_by_alpha = |pixel: &Color8888| is_bc1 && pixel.a < BC1_ALPHA_THRESHOLD;

        for i in 0..16 {
            if !is_included(i) {
                continue;
            }

            let pixel = &rgba[i];
            if is_dropped_by_alpha(pixel) {
                set.transparent = true;
                continue;
            }

            let weight = if weight_by_alpha {
                (pixel.a as f32 + 1.0) / 256.0
            } else {
                1.0
            };

            let existing = (0..i).find(|&j| {
                is_included(j) && !is_dropped_by_alpha(&rgba[j]) && rgba[j].same_rgb(pixel)
            });

            match existing {
                Some(j) => {
                    let index = set.remap[j] as usize;
                    set.weights[index] += weight;
                    set.remap[i] = index as i8;
                }
                None => {
                    set.points[set.count] = Vec3::new(
                        pixel.r as f32 / 255.0,
                        pixel.g as f32 / 255.0,
                        pixel.b as f32 / 255.0,
                    );
                    set.weights[set.count] = weight;
                    set.remap[i] = set.count as i8;
                    set.count += 1;
                }
            }
        }

        // Square root the weights so they act linearly in the least squares fit.
        for weight in &mut set.weights[..set.count] {
            *weight = weight.sqrt();
        }

        set
    }

    /// Number of distinct points in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The distinct colours, in `[0, 1]`.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points[..self.count]
    }

    /// The weight of each point.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights[..self.count]
    }

    /// Per pixel index into [`Self::points`], or `-1` for pixels not in the set.
    #[inline]
    pub fn remap(&self) -> &[i8; 16] {
        &self.remap
    }

    /// Whether any pixel was dropped for being transparent (BC1 only).
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Expands indices chosen per point to indices per pixel.
    ///
    /// Pixels outside of the set get [`EXCLUDED_PIXEL_INDEX`].
    ///
    /// # Parameters
    ///
    /// - `source`: One index per point, at least [`Self::count`] long
    pub fn remap_indices(&self, source: &[u8]) -> [u8; 16] {
        core::array::from_fn(|i| match self.remap[i] {
            -1 => EXCLUDED_PIXEL_INDEX,
            j => source[j as usize],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_of(pixel: Color8888) -> [Color8888; 16] {
        [pixel; 16]
    }

    #[test]
    fn identical_pixels_collapse_to_one_point() {
        let rgba = block_of(Color8888::new(10, 20, 30, 255));
        let set = ColourSet::new(&rgba, 0xFFFF, false, false);

        assert_eq!(set.count(), 1);
        assert_eq!(set.remap(), &[0; 16]);
        assert_eq!(set.weights()[0], 4.0); // sqrt(16)
        assert!(!set.is_transparent());
    }

    #[test]
    fn masked_pixels_are_excluded() {
        let mut rgba = block_of(Color8888::new(0, 0, 0, 255));
        rgba[1] = Color8888::new(255, 255, 255, 255);

        // Only pixel 0 participates.
        let set = ColourSet::new(&rgba, 0b1, false, false);
        assert_eq!(set.count(), 1);
        assert_eq!(set.remap()[0], 0);
        assert!(set.remap()[1..].iter().all(|&r| r == -1));
    }

    #[test]
    fn empty_mask_yields_empty_set() {
        let rgba = block_of(Color8888::new(1, 2, 3, 255));
        let set = ColourSet::new(&rgba, 0, true, false);
        assert_eq!(set.count(), 0);
        assert!(!set.is_transparent());
    }

    #[test]
    fn bc1_transparent_pixels_are_dropped() {
        let mut rgba = block_of(Color8888::new(255, 0, 0, 0));
        rgba[5] = Color8888::new(0, 255, 0, 200);

        let set = ColourSet::new(&rgba, 0xFFFF, true, false);
        assert_eq!(set.count(), 1);
        assert!(set.is_transparent());
        assert_eq!(set.remap()[5], 0);
        assert_eq!(set.remap()[0], -1);

        let indices = set.remap_indices(&[2]);
        assert_eq!(indices[5], 2);
        assert_eq!(indices[0], EXCLUDED_PIXEL_INDEX);
    }

    #[test]
    fn all_transparent_bc1_block_is_empty() {
        let rgba = block_of(Color8888::new(90, 90, 90, 10));
        let set = ColourSet::new(&rgba, 0xFFFF, true, false);
        assert_eq!(set.count(), 0);
        assert!(set.is_transparent());
    }

    #[test]
    fn transparent_pixels_are_kept_outside_bc1() {
        let rgba = block_of(Color8888::new(90, 90, 90, 10));
        let set = ColourSet::new(&rgba, 0xFFFF, false, false);
        assert_eq!(set.count(), 1);
        assert!(!set.is_transparent());
    }

    #[test]
    fn alpha_weighting_accumulates_before_sqrt() {
        let mut rgba = block_of(Color8888::new(0, 0, 0, 255));
        rgba[0] = Color8888::new(50, 50, 50, 63);
        rgba[1] = Color8888::new(50, 50, 50, 191);

        let set = ColourSet::new(&rgba, 0b11, false, true);
        assert_eq!(set.count(), 1);
        // (64 + 192) / 256 = 1, sqrt(1) = 1
        assert_eq!(set.weights()[0], 1.0);
    }

    #[test]
    fn fully_transparent_pixels_keep_a_weight() {
        // Outside BC1, alpha 0 still counts as (0 + 1) / 256.
        let rgba = block_of(Color8888::new(40, 80, 120, 0));
        let set = ColourSet::new(&rgba, 0xFFFF, false, true);

        assert_eq!(set.count(), 1);
        assert!(!set.is_transparent());
        assert_eq!(set.weights()[0], (16.0f32 / 256.0).sqrt());
    }

    #[test]
    fn distinct_colours_keep_first_seen_order() {
        let mut rgba = block_of(Color8888::new(0, 0, 0, 255));
        rgba[3] = Color8888::new(255, 0, 0, 255);
        rgba[7] = Color8888::new(0, 0, 255, 255);

        let set = ColourSet::new(&rgba, 0xFFFF, false, false);
        assert_eq!(set.count(), 3);
        assert_eq!(set.points()[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(set.points()[2], Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(set.remap()[3], 1);
        assert_eq!(set.remap()[7], 2);
        assert_eq!(set.weights()[0], 14.0f32.sqrt());
    }
}
