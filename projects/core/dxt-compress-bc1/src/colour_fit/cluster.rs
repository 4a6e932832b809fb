//! Exhaustive cluster fit.
//!
//! Points are sorted by their projection onto an axis, then every way of splitting that
//! ordering into 3 (or 4) contiguous clusters is tried. For each split the optimal
//! endpoints follow from a 2x2 least squares system; the split with the lowest error
//! after snapping the endpoints to RGB565 wins.
//!
//! The iterative variant repeats the search using the axis between the best endpoints
//! found so far, until the result stops improving, the ordering repeats or
//! [`MAX_ITERATIONS`] orderings have been tried.

use crate::colour_block::{write_colour_block3, write_colour_block4};
use core::ops::{Add, AddAssign, Sub};
use dxt_compress_common::colour_metric::ColourMetric;
use dxt_compress_common::colour_set::ColourSet;
use dxt_compress_common::math::{compute_principal_component, compute_weighted_covariance, Vec3};
use likely_stable::unlikely;

/// Maximum number of orderings tried by the iterative cluster fit.
pub(crate) const MAX_ITERATIONS: usize = 8;

/// A weighted sum of points, together with the sum of weights.
#[derive(Debug, Clone, Copy, Default)]
struct WeightedSum {
    x: Vec3,
    w: f32,
}

impl Add for WeightedSum {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            w: self.w + rhs.w,
        }
    }
}

impl AddAssign for WeightedSum {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for WeightedSum {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            w: self.w - rhs.w,
        }
    }
}

/// Best partition found so far within one compress call.
#[derive(Clone, Copy)]
struct Partition {
    start: Vec3,
    end: Vec3,
    error: f32,
    i: usize,
    j: usize,
    k: usize,
    iteration: usize,
}

pub(crate) struct ClusterFit<'a> {
    colours: &'a ColourSet,
    iteration_count: usize,
    principle: Vec3,
    order: [[u8; 16]; MAX_ITERATIONS],
    points_weights: [WeightedSum; 16],
    total: WeightedSum,
    metric_sqr: Vec3,
    best_error: f32,
}

impl<'a> ClusterFit<'a> {
    /// Creates the fit.
    ///
    /// # Parameters
    ///
    /// - `colours`: The point set, with at least 2 points
    /// - `metric`: Channel weighting for the error
    /// - `iterative`: Refine the ordering axis up to [`MAX_ITERATIONS`] times
    pub(crate) fn new(colours: &'a ColourSet, metric: ColourMetric, iterative: bool) -> Self {
        let covariance = compute_weighted_covariance(colours.points(), colours.weights());
        let weights = metric.weights();

        Self {
            colours,
            iteration_count: if iterative { MAX_ITERATIONS } else { 1 },
            principle: compute_principal_component(&covariance),
            order: [[0; 16]; MAX_ITERATIONS],
            points_weights: [WeightedSum::default(); 16],
            total: WeightedSum::default(),
            metric_sqr: weights * weights,
            best_error: f32::MAX,
        }
    }

    /// Sorts the points by their projection onto `axis` and stores the ordering for
    /// `iteration`. Returns `false` if an earlier iteration already used the same ordering.
    fn construct_ordering(&mut self, axis: Vec3, iteration: usize) -> bool {
        let colours = self.colours;
        let count = colours.count();
        let points = colours.points();
        let weights = colours.weights();

        let mut dps = [0.0f32; 16];
        let mut order = [0u8; 16];
        for i in 0..count {
            dps[i] = points[i].dot(axis);
            order[i] = i as u8;
        }

        // Stable insertion sort, ties keep first-seen order.
        for i in 0..count {
            let mut j = i;
            while j > 0 && dps[j] < dps[j - 1] {
                dps.swap(j, j - 1);
                order.swap(j, j - 1);
                j -= 1;
            }
        }

        if self.order[..iteration]
            .iter()
            .any(|previous| previous[..count] == order[..count])
        {
            return false;
        }
        self.order[iteration] = order;

        self.total = WeightedSum::default();
        for i in 0..count {
            let p = order[i] as usize;
            let w = weights[p];
            let weighted = WeightedSum {
                x: points[p] * w,
                w,
            };
            self.points_weights[i] = weighted;
            self.total += weighted;
        }

        true
    }

    /// Solves for the endpoints of one partition.
    ///
    /// Returns `None` if the system is singular.
    #[inline]
    fn solve(
        &self,
        alphax_sum: WeightedSum,
        betax_sum: WeightedSum,
        alphabeta_sum: f32,
    ) -> Option<(Vec3, Vec3, f32)> {
        let alpha2_sum = alphax_sum.w;
        let beta2_sum = betax_sum.w;

        let factor = 1.0 / (alpha2_sum * beta2_sum - alphabeta_sum * alphabeta_sum);
        if unlikely(!factor.is_finite()) {
            return None;
        }

        let a = (alphax_sum.x * beta2_sum - betax_sum.x * alphabeta_sum) * factor;
        let b = (betax_sum.x * alpha2_sum - alphax_sum.x * alphabeta_sum) * factor;

        let a = a.snap_to_565_grid();
        let b = b.snap_to_565_grid();

        // Error of the partition, minus the constant sum of squared points.
        let e1 = a * a * alpha2_sum + b * b * beta2_sum;
        let e2 = a * b * alphabeta_sum - a * alphax_sum.x;
        let e3 = e2 - b * betax_sum.x;
        let e4 = e3 * 2.0 + e1;

        Some((a, b, e4.dot(self.metric_sqr)))
    }

    fn new_partition(&self) -> Partition {
        Partition {
            start: Vec3::default(),
            end: Vec3::default(),
            error: self.best_error,
            i: 0,
            j: 0,
            k: 0,
            iteration: 0,
        }
    }

    pub(crate) fn compress3(&mut self, block: &mut [u8; 8]) {
        let count = self.colours.count();
        let mut best = self.new_partition();

        self.construct_ordering(self.principle, 0);

        let mut iteration = 0;
        loop {
            let pw = self.points_weights;
            let mut part0 = WeightedSum::default();
            for i in 0..count {
                let mut part1 = if i == 0 {
                    pw[0]
                } else {
                    WeightedSum::default()
                };
                let jmin = if i == 0 { 1 } else { i };

                for j in jmin..=count {
                    let part2 = self.total - part1 - part0;

                    let alphax_sum = WeightedSum {
                        x: part0.x + part1.x * 0.5,
                        w: part0.w + part1.w * 0.25,
                    };
                    let betax_sum = WeightedSum {
                        x: part2.x + part1.x * 0.5,
                        w: part2.w + part1.w * 0.25,
                    };
                    let alphabeta_sum = part1.w * 0.25;

                    if let Some((start, end, error)) =
                        self.solve(alphax_sum, betax_sum, alphabeta_sum)
                    {
                        if unlikely(error < best.error) {
                            best = Partition {
                                start,
                                end,
                                error,
                                i,
                                j,
                                k: 0,
                                iteration,
                            };
                        }
                    }

                    if j == count {
                        break;
                    }
                    part1 += pw[j];
                }

                part0 += pw[i];
            }

            if best.iteration != iteration {
                break;
            }

            iteration += 1;
            if iteration == self.iteration_count {
                break;
            }

            if !self.construct_ordering(best.end - best.start, iteration) {
                break;
            }
        }

        if best.error < self.best_error {
            let order = &self.order[best.iteration];
            let mut unordered = [0u8; 16];
            for (m, &p) in order[..count].iter().enumerate() {
                unordered[p as usize] = if m < best.i {
                    0
                } else if m < best.j {
                    2
                } else {
                    1
                };
            }

            let indices = self.colours.remap_indices(&unordered);
            write_colour_block3(best.start, best.end, &indices, block);
            self.best_error = best.error;
        }
    }

    pub(crate) fn compress4(&mut self, block: &mut [u8; 8]) {
        const TWO_THIRDS: f32 = 2.0 / 3.0;
        const ONE_THIRD: f32 = 1.0 / 3.0;
        const FOUR_NINTHS: f32 = 4.0 / 9.0;
        const ONE_NINTH: f32 = 1.0 / 9.0;
        const TWO_NINTHS: f32 = 2.0 / 9.0;

        let count = self.colours.count();
        let mut best = self.new_partition();

        self.construct_ordering(self.principle, 0);

        let mut iteration = 0;
        loop {
            let pw = self.points_weights;
            let mut part0 = WeightedSum::default();
            for i in 0..count {
                let mut part1 = WeightedSum::default();

                for j in i..=count {
                    let mut part2 = if j == 0 {
                        pw[0]
                    } else {
                        WeightedSum::default()
                    };
                    let kmin = if j == 0 { 1 } else { j };

                    for k in kmin..=count {
                        let part3 = self.total - part2 - part1 - part0;

                        let alphax_sum = WeightedSum {
                            x: part0.x + part1.x * TWO_THIRDS + part2.x * ONE_THIRD,
                            w: part0.w + part1.w * FOUR_NINTHS + part2.w * ONE_NINTH,
                        };
                        let betax_sum = WeightedSum {
                            x: part3.x + part2.x * TWO_THIRDS + part1.x * ONE_THIRD,
                            w: part3.w + part2.w * FOUR_NINTHS + part1.w * ONE_NINTH,
                        };
                        let alphabeta_sum = (part1.w + part2.w) * TWO_NINTHS;

                        if let Some((start, end, error)) =
                            self.solve(alphax_sum, betax_sum, alphabeta_sum)
                        {
                            if unlikely(error < best.error) {
                                best = Partition {
                                    start,
                                    end,
                                    error,
                                    i,
                                    j,
                                    k,
                                    iteration,
                                };
                            }
                        }

                        if k == count {
                            break;
                        }
                        part2 += pw[k];
                    }

                    if j == count {
                        break;
                    }
                    part1 += pw[j];
                }

                part0 += pw[i];
            }

            if best.iteration != iteration {
                break;
            }

            iteration += 1;
            if iteration == self.iteration_count {
                break;
            }

            if !self.construct_ordering(best.end - best.start, iteration) {
                break;
            }
        }

        if best.error < self.best_error {
            let order = &self.order[best.iteration];
            let mut unordered = [0u8; 16];
            for (m, &p) in order[..count].iter().enumerate() {
                unordered[p as usize] = if m < best.i {
                    0
                } else if m < best.j {
                    2
                } else if m < best.k {
                    3
                } else {
                    1
                };
            }

            let indices = self.colours.remap_indices(&unordered);
            write_colour_block4(best.start, best.end, &indices, block);
            self.best_error = best.error;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::decode_colour_block;
    use dxt_compress_common::color_8888::Color8888;
    use rstest::rstest;

    fn squared_error(original: &[Color8888; 16], block: &[u8; 8], is_bc1: bool) -> u32 {
        let decoded = decode_colour_block(block, is_bc1);
        original
            .iter()
            .zip(decoded.pixels.iter())
            .map(|(a, b)| {
                let dr = a.r as i32 - b.r as i32;
                let dg = a.g as i32 - b.g as i32;
                let db = a.b as i32 - b.b as i32;
                (dr * dr + dg * dg + db * db) as u32
            })
            .sum()
    }

    fn noisy_block() -> [Color8888; 16] {
        core::array::from_fn(|i| {
            let i = i as u32;
            Color8888::new(
                ((i * 37 + 11) % 256) as u8,
                ((i * 91 + 50) % 256) as u8,
                ((i * 53 + 200) % 256) as u8,
                255,
            )
        })
    }

    #[test]
    fn two_colours_are_exact() {
        let mut rgba = [Color8888::new(255, 0, 0, 255); 16];
        for pixel in rgba.iter_mut().skip(8) {
            *pixel = Color8888::new(0, 0, 255, 255);
        }

        let colours = ColourSet::new(&rgba, 0xFFFF, false, false);
        let mut fit = ClusterFit::new(&colours, ColourMetric::Uniform, false);
        let mut block = [0u8; 8];
        fit.compress4(&mut block);

        assert_eq!(squared_error(&rgba, &block, false), 0);
    }

    #[rstest]
    #[case(ColourMetric::Uniform)]
    #[case(ColourMetric::Perceptual)]
    fn iterative_is_never_worse_than_single_pass(#[case] metric: ColourMetric) {
        let rgba = noisy_block();
        let colours = ColourSet::new(&rgba, 0xFFFF, false, false);

        let mut single_fit = ClusterFit::new(&colours, metric, false);
        single_fit.compress4(&mut [0u8; 8]);
        let mut iterative_fit = ClusterFit::new(&colours, metric, true);
        iterative_fit.compress4(&mut [0u8; 8]);
        assert!(iterative_fit.best_error <= single_fit.best_error);
    }

    #[test]
    fn colours_on_the_codebook_are_exact() {
        // 85 is exactly 2/3 black + 1/3 white in the 4 colour codebook.
        let mut rgba = [Color8888::new(0, 0, 0, 255); 16];
        for pixel in rgba.iter_mut().skip(5) {
            *pixel = Color8888::new(85, 85, 85, 255);
        }
        for pixel in rgba.iter_mut().skip(11) {
            *pixel = Color8888::new(255, 255, 255, 255);
        }

        let colours = ColourSet::new(&rgba, 0xFFFF, false, false);
        let mut fit = ClusterFit::new(&colours, ColourMetric::Perceptual, true);
        let mut block = [0u8; 8];
        fit.compress4(&mut block);

        assert_eq!(squared_error(&rgba, &block, false), 0);
    }

    #[test]
    fn transparent_pixels_keep_index_3() {
        let mut rgba = [Color8888::new(0, 0, 0, 0); 16];
        rgba[0] = Color8888::new(255, 255, 255, 255);
        rgba[1] = Color8888::new(0, 0, 0, 255);

        let colours = ColourSet::new(&rgba, 0xFFFF, true, false);
        let mut fit = ClusterFit::new(&colours, ColourMetric::Uniform, false);
        let mut block = [0u8; 8];
        fit.compress3(&mut block);

        let decoded = decode_colour_block(&block, true);
        assert_eq!(decoded.pixels[0], Color8888::new(255, 255, 255, 255));
        assert_eq!(decoded.pixels[1], Color8888::new(0, 0, 0, 255));
        assert!(decoded.pixels[2..].iter().all(|p| p.a == 0));
    }
}
