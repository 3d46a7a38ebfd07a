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

use super::{TileId, TilePalette, TilingError, WangTile};
use serde::Serialize;

/// A `width x depth` layout of tile identifiers.
///
/// Stored as one flat row-major buffer indexed `z * width + x`. A grid is only
/// ever built whole by a layout pass and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileGrid {
    width: usize,
    depth: usize,
    ids: Vec<TileId>,
}

impl TileGrid {
    /// Wraps a finished row-major id buffer.
    ///
    /// Fails with `InvalidDimensions` if either side is zero or the buffer
    /// length does not match `width * depth`.
    pub fn from_ids(width: usize, depth: usize, ids: Vec<TileId>) -> Result<Self, TilingError> {
        if width == 0 || depth == 0 || ids.len() != width * depth {
            return Err(TilingError::InvalidDimensions { width, depth });
        }
        Ok(Self { width, depth, ids })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The tile id at `(x, z)`.
    pub fn get(&self, x: usize, z: usize) -> Result<TileId, TilingError> {
        if x >= self.width || z >= self.depth {
            return Err(TilingError::OutOfBounds {
                x,
                z,
                width: self.width,
                depth: self.depth,
            });
        }
        Ok(self.ids[z * self.width + x])
    }

    /// The tile at `(x, z)`, resolved through `palette`.
    pub fn tile<'p>(
        &self,
        x: usize,
        z: usize,
        palette: &'p TilePalette,
    ) -> Result<&'p WangTile, TilingError> {
        palette.get(self.get(x, z)?)
    }

    /// The raw row-major id buffer, ready for upload.
    #[inline]
    pub fn ids(&self) -> &[TileId] {
        &self.ids
    }

    /// Iterates the grid one row (constant `z`) at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[TileId]> {
        self.ids.chunks_exact(self.width)
    }

    /// How many cells use each tile id.
    pub fn histogram(&self) -> [usize; super::TILE_COUNT] {
        let mut counts = [0; super::TILE_COUNT];
        for &id in &self.ids {
            if let Some(slot) = counts.get_mut(id as usize) {
                *slot += 1;
            }
        }
        counts
    }

    /// Re-checks every shared edge of the layout.
    ///
    /// Returns `InvalidTileId` for an id outside the palette and
    /// `EdgeMismatch` at the first cell whose left or top edge disagrees
    /// with its neighbour.
    pub fn validate(&self, palette: &TilePalette) -> Result<(), TilingError> {
        for z in 0..self.depth {
            for x in 0..self.width {
                let tile = self.tile(x, z, palette)?;
                let left_ok = x == 0 || self.tile(x - 1, z, palette)?.right() == tile.left();
                let top_ok = z == 0 || self.tile(x, z - 1, palette)?.bottom() == tile.top();
                if !(left_ok && top_ok) {
                    return Err(TilingError::EdgeMismatch { x, z });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_checks_dimensions() {
        assert!(TileGrid::from_ids(2, 2, vec![0; 4]).is_ok());
        assert_eq!(
            TileGrid::from_ids(0, 3, vec![]),
            Err(TilingError::InvalidDimensions { width: 0, depth: 3 })
        );
        assert_eq!(
            TileGrid::from_ids(2, 2, vec![0; 3]),
            Err(TilingError::InvalidDimensions { width: 2, depth: 2 })
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let grid = TileGrid::from_ids(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(grid.get(0, 0), Ok(0));
        assert_eq!(grid.get(2, 0), Ok(2));
        assert_eq!(grid.get(0, 1), Ok(3));
        assert_eq!(grid.get(2, 1), Ok(5));
        assert_eq!(
            grid.get(3, 0),
            Err(TilingError::OutOfBounds {
                x: 3,
                z: 0,
                width: 3,
                depth: 2
            })
        );
        let rows: Vec<&[TileId]> = grid.rows().collect();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[3, 4, 5][..]]);
    }

    #[test]
    fn test_validate_accepts_matching_edges() {
        let palette = TilePalette::new();
        // 0 = (Red, Blue, Red, Blue) tiles with itself in both directions.
        let grid = TileGrid::from_ids(3, 3, vec![0; 9]).unwrap();
        assert_eq!(grid.validate(&palette), Ok(()));

        // 5 has a yellow right edge and 4 a yellow left edge.
        let grid = TileGrid::from_ids(2, 1, vec![5, 4]).unwrap();
        assert_eq!(grid.validate(&palette), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_mismatch() {
        let palette = TilePalette::new();
        // 1 has a yellow right edge, 0 a blue left edge.
        let grid = TileGrid::from_ids(2, 1, vec![1, 0]).unwrap();
        assert_eq!(
            grid.validate(&palette),
            Err(TilingError::EdgeMismatch { x: 1, z: 0 })
        );

        // 2 has a green bottom edge, 0 a red top edge.
        let grid = TileGrid::from_ids(1, 2, vec![2, 0]).unwrap();
        assert_eq!(
            grid.validate(&palette),
            Err(TilingError::EdgeMismatch { x: 0, z: 1 })
        );

        let grid = TileGrid::from_ids(1, 1, vec![42]).unwrap();
        assert_eq!(grid.validate(&palette), Err(TilingError::InvalidTileId(42)));
    }

    #[test]
    fn test_histogram() {
        let grid = TileGrid::from_ids(2, 2, vec![0, 5, 5, 15]).unwrap();
        let counts = grid.histogram();
        assert_eq!(counts[0], 1);
        assert_eq!(counts[5], 2);
        assert_eq!(counts[15], 1);
        assert_eq!(counts.iter().sum::<usize>(), 4);
    }
}
