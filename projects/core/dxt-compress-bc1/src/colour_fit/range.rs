//! Fast endpoint fit along the principal axis of the colour set.
//!
//! The endpoints are the extreme projections of the points onto the principal axis,
//! snapped to the RGB565 grid. Every point then takes the nearest codebook entry.

use crate::colour_block::{write_colour_block3, write_colour_block4};
use dxt_compress_common::colour_metric::ColourMetric;
use dxt_compress_common::colour_set::ColourSet;
use dxt_compress_common::math::{
    compute_principal_component, compute_weighted_covariance, float_to_int, Vec3,
};

/// Codebook index for each evenly spaced position between start and end.
const POSITIONS_TO_INDEX_3: [u8; 3] = [0, 2, 1];
const POSITIONS_TO_INDEX_4: [u8; 4] = [0, 2, 3, 1];

pub(crate) struct RangeFit<'a> {
    colours: &'a ColourSet,
    metric: Vec3,
    start: Vec3,
    end: Vec3,
    best_error: f32,
}

impl<'a> RangeFit<'a> {
    pub(crate) fn new(colours: &'a ColourSet, metric: ColourMetric) -> Self {
        let points = colours.points();
        let covariance = compute_weighted_covariance(points, colours.weights());
        let principle = compute_principal_component(&covariance);

        let mut start = Vec3::default();
        let mut end = Vec3::default();
        if let Some(&first) = points.first() {
            start = first;
            end = first;
            let mut min = first.dot(principle);
            let mut max = min;
            for &point in &points[1..] {
                let val = point.dot(principle);
                if val < min {
                    start = point;
                    min = val;
                } else if val > max {
                    end = point;
                    max = val;
                }
            }
        }

        Self {
            colours,
            metric: metric.weights(),
            start: start.snap_to_565_grid(),
            end: end.snap_to_565_grid(),
            best_error: f32::MAX,
        }
    }

    pub(crate) fn compress3(&mut self, block: &mut [u8; 8]) {
        if let Some(indices) = self.fit_indices(&POSITIONS_TO_INDEX_3) {
            write_colour_block3(self.start, self.end, &indices, block);
        }
    }

    pub(crate) fn compress4(&mut self, block: &mut [u8; 8]) {
        if let Some(indices) = self.fit_indices(&POSITIONS_TO_INDEX_4) {
            write_colour_block4(self.start, self.end, &indices, block);
        }
    }

    /// Assigns every point its nearest codebook entry.
    ///
    /// Returns the per pixel indices if the total error beats the best so far.
    fn fit_indices(&mut self, positions_to_index: &[u8]) -> Option<[u8; 16]> {
        let steps = (positions_to_index.len() - 1) as i32;
        let span = self.end - self.start;
        let axis = self.metric * span;
        let axis_length = axis.length_squared();

        let mut closest = [0u8; 16];
        let mut error = 0.0f32;
        for (i, &point) in self.colours.points().iter().enumerate() {
            let t = if axis_length > 0.0 {
                (self.metric * (point - self.start)).dot(axis) / axis_length
            } else {
                0.0
            };

            let position = float_to_int(t * steps as f32, steps);
            let code = self.start + span * (position as f32 / steps as f32);

            error += (self.metric * (point - code)).length_squared();
            closest[i] = positions_to_index[position as usize];
        }

        if error < self.best_error {
            self.best_error = error;
            Some(self.colours.remap_indices(&closest))
        } else {
            None
        }
    }
}
