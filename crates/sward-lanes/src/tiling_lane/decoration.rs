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

use sward_core::{
    math::Vec3,
    tiling::{TileGrid, TilingError},
};

/// One decoration (a grass tuft) placed on a tile cell.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct DecorationInstance {
    /// Ground-plane position of the cell; `y` is always zero.
    pub position: Vec3,
    /// Wang tile id of the cell, widened for upload.
    pub tile_id: u32,
}

/// Point-list instance buffer built from a tile layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationLayout {
    density: f32,
    instances: Vec<DecorationInstance>,
}

impl DecorationLayout {
    /// Places one instance per grid cell, row-major, at `(x / density, 0, z / density)`.
    ///
    /// `density` is the number of decoration cells per world unit and must be
    /// finite and positive.
    pub fn from_grid(grid: &TileGrid, density: f32) -> Result<Self, TilingError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(TilingError::InvalidDimensions {
                width: grid.width(),
                depth: grid.depth(),
            });
        }

        let instances = grid
            .rows()
            .enumerate()
            .flat_map(|(z, row)| {
                row.iter().enumerate().map(move |(x, &id)| DecorationInstance {
                    position: Vec3::new(x as f32 / density, 0.0, z as f32 / density),
                    tile_id: u32::from(id),
                })
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Placed {} decorations at density {}.",
            instances.len(),
            density
        );
        Ok(Self { density, instances })
    }

    /// Cells per world unit.
    pub fn density(&self) -> f32 {
        self.density
    }

    /// The instances in row-major cell order.
    pub fn instances(&self) -> &[DecorationInstance] {
        &self.instances
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the layout holds no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Point-list indices `0..len`.
    pub fn indices(&self) -> Vec<u32> {
        (0..self.instances.len() as u32).collect()
    }

    /// The instance buffer as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_positions_follow_density() {
        let grid = TileGrid::from_ids(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        let layout = DecorationLayout::from_grid(&grid, 1.5).unwrap();

        assert_eq!(layout.len(), 6);
        assert_eq!(layout.density(), 1.5);
        let last = layout.instances()[5];
        assert_abs_diff_eq!(last.position.x, 2.0 / 1.5);
        assert_abs_diff_eq!(last.position.y, 0.0);
        assert_abs_diff_eq!(last.position.z, 1.0 / 1.5);
        assert_eq!(last.tile_id, 5);
        assert_eq!(layout.instances()[1].position, Vec3::new(1.0 / 1.5, 0.0, 0.0));
    }

    #[test]
    fn test_indices_and_bytes() {
        let grid = TileGrid::from_ids(2, 2, vec![15; 4]).unwrap();
        let layout = DecorationLayout::from_grid(&grid, 1.0).unwrap();
        assert_eq!(layout.indices(), vec![0, 1, 2, 3]);
        assert_eq!(std::mem::size_of::<DecorationInstance>(), 16);
        assert_eq!(layout.as_bytes().len(), 4 * 16);
        assert!(!layout.is_empty());
    }

    #[test]
    fn test_bad_density_is_rejected() {
        let grid = TileGrid::from_ids(2, 1, vec![0, 0]).unwrap();
        for density in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert_eq!(
                DecorationLayout::from_grid(&grid, density),
                Err(TilingError::InvalidDimensions { width: 2, depth: 1 })
            );
        }
    }
}
