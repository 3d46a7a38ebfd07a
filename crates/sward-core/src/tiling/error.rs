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

use super::TileId;
use thiserror::Error;

/// Errors raised while building or reading a tile layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TilingError {
    /// No palette tile satisfies both neighbour constraints at this cell.
    ///
    /// The partially filled grid is discarded; retry with another seed.
    #[error("ran out of Wang tiles at cell ({x}, {z})")]
    TileExhaustion {
        /// Column of the cell that could not be filled.
        x: usize,
        /// Row of the cell that could not be filled.
        z: usize,
    },
    /// A finished grid has a cell whose left or top edge disagrees with its neighbour.
    #[error("tile at cell ({x}, {z}) does not match its neighbours")]
    EdgeMismatch {
        /// Column of the offending cell.
        x: usize,
        /// Row of the offending cell.
        z: usize,
    },
    /// A tile identifier outside the palette was requested.
    #[error("tile id {0} is not in the palette")]
    InvalidTileId(TileId),
    /// A grid coordinate outside the layout was requested.
    #[error("cell ({x}, {z}) is outside the {width}x{depth} tile grid")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        z: usize,
        /// Grid width.
        width: usize,
        /// Grid depth.
        depth: usize,
    },
    /// The requested layout has no cells, or its parameters are unusable.
    #[error("invalid tile grid dimensions {width}x{depth}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested depth.
        depth: usize,
    },
}
