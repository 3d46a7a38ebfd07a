// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Box-filter smoothing strategies.

use super::SmoothingLane;
use std::ops::Range;
use sward_core::{
    lane::{Lane, LaneKind},
    math::Vec3,
    terrain::SmoothingScheme,
};

/// Rows and columns a pass may rewrite, or `None` when the grid has no interior.
fn interior(width: usize, depth: usize, margin: usize) -> Option<(Range<usize>, Range<usize>)> {
    let margin = margin.max(1);
    let span = margin.saturating_mul(2);
    if width <= span || depth <= span {
        return None;
    }
    Some((margin..depth - margin, margin..width - margin))
}

/// Unweighted mean of the 3x3 block centred on `(x, z)`.
#[inline]
fn box_average(height: impl Fn(usize) -> f32, x: usize, z: usize, width: usize) -> f32 {
    let mut acc = 0.0;
    for row in [z - 1, z, z + 1] {
        let base = row * width;
        acc += height(base + x - 1) + height(base + x) + height(base + x + 1);
    }
    acc / 9.0
}

/// Double-buffered 3x3 box smoothing.
///
/// Each pass averages from a snapshot of the previous pass's heights, so the
/// result is independent of traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotBoxSmoothingLane;

impl SmoothingLane for SnapshotBoxSmoothingLane {
    fn smooth_pass(&self, positions: &mut [Vec3], width: usize, depth: usize, margin: usize) {
        let Some((rows, cols)) = interior(width, depth, margin) else {
            return;
        };
        let snapshot: Vec<f32> = positions.iter().map(|p| p.y).collect();
        for z in rows {
            for x in cols.clone() {
                positions[z * width + x].y = box_average(|i| snapshot[i], x, z, width);
            }
        }
    }
}

impl Lane for SnapshotBoxSmoothingLane {
    fn strategy_name(&self) -> &'static str {
        "SnapshotBoxSmoothing"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Terrain
    }
}

/// Single-buffer 3x3 box smoothing, updated in place in row-major order.
///
/// Cells read neighbours that the same pass may already have rewritten (the
/// row above and the cell to the left), so results depend on traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InPlaceBoxSmoothingLane;

impl SmoothingLane for InPlaceBoxSmoothingLane {
    fn smooth_pass(&self, positions: &mut [Vec3], width: usize, depth: usize, margin: usize) {
        let Some((rows, cols)) = interior(width, depth, margin) else {
            return;
        };
        for z in rows {
            for x in cols.clone() {
                let average = box_average(|i| positions[i].y, x, z, width);
                positions[z * width + x].y = average;
            }
        }
    }
}

impl Lane for InPlaceBoxSmoothingLane {
    fn strategy_name(&self) -> &'static str {
        "InPlaceBoxSmoothing"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Terrain
    }
}

/// The smoothing lane implementing `scheme`.
pub fn smoothing_lane_for(scheme: SmoothingScheme) -> Box<dyn SmoothingLane> {
    match scheme {
        SmoothingScheme::Snapshot => Box::new(SnapshotBoxSmoothingLane),
        SmoothingScheme::InPlace => Box::new(InPlaceBoxSmoothingLane),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn grid(width: usize, depth: usize, height: impl Fn(usize, usize) -> f32) -> Vec<Vec3> {
        (0..depth)
            .flat_map(|z| (0..width).map(move |x| (x, z)))
            .map(|(x, z)| Vec3::new(x as f32, height(x, z), z as f32))
            .collect()
    }

    fn variance(values: &[f32]) -> f32 {
        let mean = values.iter().sum::<f32>() / values.len() as f32;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / values.len() as f32
    }

    fn lanes() -> [Box<dyn SmoothingLane>; 2] {
        [
            Box::new(SnapshotBoxSmoothingLane),
            Box::new(InPlaceBoxSmoothingLane),
        ]
    }

    #[test]
    fn test_uniform_grid_is_unchanged() {
        for lane in lanes() {
            let mut positions = grid(12, 12, |_, _| 32.0);
            lane.smooth_pass(&mut positions, 12, 12, 4);
            assert!(positions.iter().all(|p| p.y == 32.0));
        }
    }

    #[test]
    fn test_small_grids_have_no_interior() {
        for lane in lanes() {
            let original = grid(8, 8, |x, z| (x * z) as f32);
            let mut positions = original.clone();
            lane.smooth_pass(&mut positions, 8, 8, 4);
            assert_eq!(positions, original);
        }
    }

    #[test]
    fn test_margin_cells_are_untouched() {
        for lane in lanes() {
            let original = grid(16, 14, |x, z| ((x * 7 + z * 13) % 5) as f32);
            let mut positions = original.clone();
            lane.smooth_pass(&mut positions, 16, 14, 4);
            for z in 0..14 {
                for x in 0..16 {
                    let inside = (4..12).contains(&x) && (4..10).contains(&z);
                    if !inside {
                        assert_eq!(positions[z * 16 + x], original[z * 16 + x]);
                    }
                }
            }
            // Only y ever moves.
            for (p, o) in positions.iter().zip(&original) {
                assert_eq!((p.x, p.z), (o.x, o.z));
            }
        }
    }

    #[test]
    fn test_huge_margin_leaves_grid_untouched() {
        for lane in lanes() {
            let original = grid(4, 4, |x, z| (x + z) as f32);
            let mut positions = original.clone();
            lane.smooth_pass(&mut positions, 4, 4, usize::MAX);
            assert_eq!(positions, original);
        }
    }

    #[test]
    fn test_spike_is_spread_over_its_neighbourhood() {
        let mut positions = grid(11, 11, |x, z| if (x, z) == (5, 5) { 9.0 } else { 0.0 });
        SnapshotBoxSmoothingLane.smooth_pass(&mut positions, 11, 11, 1);
        for z in 0..11usize {
            for x in 0..11usize {
                let expected = if x.abs_diff(5) <= 1 && z.abs_diff(5) <= 1 {
                    1.0
                } else {
                    0.0
                };
                assert_abs_diff_eq!(positions[z * 11 + x].y, expected, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_pass_reduces_interior_variance() {
        for lane in lanes() {
            let mut positions = grid(24, 24, |x, z| ((x * 31 + z * 17) % 11) as f32);
            let interior = |p: &[Vec3]| -> Vec<f32> {
                (4..20)
                    .flat_map(|z| (4..20).map(move |x| z * 24 + x))
                    .map(|i| p[i].y)
                    .collect()
            };
            let before = variance(&interior(&positions));
            lane.smooth_pass(&mut positions, 24, 24, 4);
            let after = variance(&interior(&positions));
            assert!(after < before, "{}: {after} >= {before}", lane.strategy_name());
        }
    }

    #[test]
    fn test_heights_stay_within_input_range() {
        for lane in lanes() {
            let mut positions = grid(20, 20, |x, z| ((x * 13 + z * 29) % 7) as f32 - 3.0);
            for _ in 0..5 {
                lane.smooth_pass(&mut positions, 20, 20, 2);
            }
            assert!(positions.iter().all(|p| (-3.0..=3.0).contains(&p.y)));
        }
    }

    #[test]
    fn test_in_place_sees_already_smoothed_neighbours() {
        let build = || grid(5, 5, |x, z| if (x, z) == (1, 1) { 9.0 } else { 0.0 });

        let mut snapshot = build();
        SnapshotBoxSmoothingLane.smooth_pass(&mut snapshot, 5, 5, 1);
        let mut in_place = build();
        InPlaceBoxSmoothingLane.smooth_pass(&mut in_place, 5, 5, 1);

        // (1,1) becomes 1.0 either way; (2,1) then reads 1.0 instead of 9.0.
        assert_abs_diff_eq!(snapshot[5 + 2].y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(in_place[5 + 2].y, 1.0 / 9.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lane_for_scheme() {
        assert_eq!(
            smoothing_lane_for(SmoothingScheme::Snapshot).strategy_name(),
            "SnapshotBoxSmoothing"
        );
        assert_eq!(
            smoothing_lane_for(SmoothingScheme::InPlace).strategy_name(),
            "InPlaceBoxSmoothing"
        );
    }
}
