//! Fit for blocks whose pixels all share one colour.
//!
//! Picks, per channel, the endpoint pair from the precomputed lookup tables that reproduces
//! the colour at a single codebook index, so a flat colour round-trips as closely as the
//! format allows.

use super::single_lut::{single_colour_tables, LookupTable, SourceBlock};
use crate::colour_block::{write_colour_block3, write_colour_block4};
use dxt_compress_common::colour_set::ColourSet;
use dxt_compress_common::math::{float_to_int, Vec3};

pub(crate) struct SingleColourFit<'a> {
    colours: &'a ColourSet,
    colour: [u8; 3],
    start: Vec3,
    end: Vec3,
    index: u8,
    error: i32,
    best_error: i32,
}

impl<'a> SingleColourFit<'a> {
    /// Creates the fit for a set containing exactly one point.
    pub(crate) fn new(colours: &'a ColourSet) -> Self {
        let point = colours.points()[0];
        let colour = [
            float_to_int(255.0 * point.x, 255) as u8,
            float_to_int(255.0 * point.y, 255) as u8,
            float_to_int(255.0 * point.z, 255) as u8,
        ];

        Self {
            colours,
            colour,
            start: Vec3::default(),
            end: Vec3::default(),
            index: 0,
            error: i32::MAX,
            best_error: i32::MAX,
        }
    }

    pub(crate) fn compress3(&mut self, block: &mut [u8; 8]) {
        let tables = single_colour_tables();
        self.compute_end_points([&tables.lookup_5_3, &tables.lookup_6_3, &tables.lookup_5_3]);

        if self.error < self.best_error {
            let indices = self.colours.remap_indices(&[self.index]);
            write_colour_block3(self.start, self.end, &indices, block);
            self.best_error = self.error;
        }
    }

    pub(crate) fn compress4(&mut self, block: &mut [u8; 8]) {
        let tables = single_colour_tables();
        self.compute_end_points([&tables.lookup_5_4, &tables.lookup_6_4, &tables.lookup_5_4]);

        if self.error < self.best_error {
            let indices = self.colours.remap_indices(&[self.index]);
            write_colour_block4(self.start, self.end, &indices, block);
            self.best_error = self.error;
        }
    }

    /// Chooses the codebook index (0 or 2) with the smallest summed squared channel error
    /// and stores the matching endpoints.
    fn compute_end_points(&mut self, lookups: [&LookupTable; 3]) {
        self.error = i32::MAX;

        for slot in 0..2 {
            let sources: [&SourceBlock; 3] = core::array::from_fn(|channel| {
                &lookups[channel][self.colour[channel] as usize].sources[slot]
            });

            let error: i32 = sources
                .iter()
                .map(|source| {
                    let diff = source.error as i32;
                    diff * diff
                })
                .sum();

            if error < self.error {
                self.start = Vec3::new(
                    sources[0].start as f32 / 31.0,
                    sources[1].start as f32 / 63.0,
                    sources[2].start as f32 / 31.0,
                );
                self.end = Vec3::new(
                    sources[0].end as f32 / 31.0,
                    sources[1].end as f32 / 63.0,
                    sources[2].end as f32 / 31.0,
                );
                self.index = (2 * slot) as u8;
                self.error = error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::decode_colour_block;
    use dxt_compress_common::color_8888::Color8888;

    fn fit_block(pixel: Color8888, is_bc1: bool) -> [u8; 8] {
        let colours = ColourSet::new(&[pixel; 16], 0xFFFF, is_bc1, false);
        let mut fit = SingleColourFit::new(&colours);
        let mut block = [0u8; 8];
        if is_bc1 {
            fit.compress3(&mut block);
        }
        fit.compress4(&mut block);
        block
    }

    #[test]
    fn pure_red_is_exact() {
        let red = Color8888::new(255, 0, 0, 255);
        let block = fit_block(red, false);
        let decoded = decode_colour_block(&block, false);
        assert!(decoded.pixels.iter().all(|p| *p == red));
    }

    #[test]
    fn grey_lands_within_table_error() {
        let grey = Color8888::new(130, 130, 130, 255);
        let block = fit_block(grey, true);
        let decoded = decode_colour_block(&block, true);
        for pixel in decoded.pixels {
            assert!(pixel.r.abs_diff(130) <= 1, "{pixel:?}");
            assert!(pixel.g.abs_diff(130) <= 1, "{pixel:?}");
            assert!(pixel.b.abs_diff(130) <= 1, "{pixel:?}");
            assert_eq!(pixel.a, 255);
        }
    }

    #[test]
    fn second_pass_only_writes_on_strict_improvement() {
        let white = Color8888::new(255, 255, 255, 255);
        let colours = ColourSet::new(&[white; 16], 0xFFFF, true, false);
        let mut fit = SingleColourFit::new(&colours);

        let mut block = [0u8; 8];
        fit.compress3(&mut block);
        let after_three = block;
        fit.compress4(&mut block);

        // Both codebooks hit white exactly, so the 3 colour result stands.
        assert_eq!(block, after_three);
    }
}
