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

use super::EdgeColor;

/// Identifier of a tile within the palette (`0..16`).
pub type TileId = u8;

/// A square tile with a color on each of its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WangTile {
    id: TileId,
    top: EdgeColor,
    left: EdgeColor,
    bottom: EdgeColor,
    right: EdgeColor,
}

impl WangTile {
    /// Creates a tile. Edge order follows the palette table: top, left, bottom, right.
    pub const fn new(
        id: TileId,
        top: EdgeColor,
        left: EdgeColor,
        bottom: EdgeColor,
        right: EdgeColor,
    ) -> Self {
        Self {
            id,
            top,
            left,
            bottom,
            right,
        }
    }

    /// The tile's palette identifier.
    #[inline]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Color of the top edge (faces `z - 1`).
    #[inline]
    pub const fn top(&self) -> EdgeColor {
        self.top
    }

    /// Color of the left edge (faces `x - 1`).
    #[inline]
    pub const fn left(&self) -> EdgeColor {
        self.left
    }

    /// Color of the bottom edge (faces `z + 1`).
    #[inline]
    pub const fn bottom(&self) -> EdgeColor {
        self.bottom
    }

    /// Color of the right edge (faces `x + 1`).
    #[inline]
    pub const fn right(&self) -> EdgeColor {
        self.right
    }

    /// Whether this tile can sit next to the given neighbour edges.
    ///
    /// `left` is the right edge of the tile to the left, `top` the bottom edge
    /// of the tile above; `None` means no neighbour on that side.
    #[inline]
    pub fn accepts(&self, left: Option<EdgeColor>, top: Option<EdgeColor>) -> bool {
        left.map_or(true, |c| c == self.left) && top.map_or(true, |c| c == self.top)
    }
}
