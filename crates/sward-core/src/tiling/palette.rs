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

use super::{EdgeColor, TileId, TilingError, WangTile};

/// Number of tiles in the palette.
pub const TILE_COUNT: usize = 16;

/// The fixed catalog of sixteen Wang tiles.
///
/// Top and bottom edges take `Red` or `Green`, left and right edges take
/// `Blue` or `Yellow`, and every combination appears exactly once. Ids are
/// assigned so that, read as a 4-bit number, the bits are
/// `top = Green`, `left = Yellow`, `bottom = Green`, `right = Yellow`
/// from most to least significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePalette {
    tiles: [WangTile; TILE_COUNT],
}

impl TilePalette {
    /// Builds the palette. Every palette is fully initialised on construction.
    pub fn new() -> Self {
        use EdgeColor::*;

        let tiles = [
            WangTile::new(0, Red, Blue, Red, Blue),
            WangTile::new(1, Red, Blue, Red, Yellow),
            WangTile::new(2, Red, Blue, Green, Blue),
            WangTile::new(3, Red, Blue, Green, Yellow),
            WangTile::new(4, Red, Yellow, Red, Blue),
            WangTile::new(5, Red, Yellow, Red, Yellow),
            WangTile::new(6, Red, Yellow, Green, Blue),
            WangTile::new(7, Red, Yellow, Green, Yellow),
            WangTile::new(8, Green, Blue, Red, Blue),
            WangTile::new(9, Green, Blue, Red, Yellow),
            WangTile::new(10, Green, Blue, Green, Blue),
            WangTile::new(11, Green, Blue, Green, Yellow),
            WangTile::new(12, Green, Yellow, Red, Blue),
            WangTile::new(13, Green, Yellow, Red, Yellow),
            WangTile::new(14, Green, Yellow, Green, Blue),
            WangTile::new(15, Green, Yellow, Green, Yellow),
        ];

        log::trace!("Wang tile palette initialised with {TILE_COUNT} tiles.");
        Self { tiles }
    }

    /// Looks up a tile by identifier.
    pub fn get(&self, id: TileId) -> Result<&WangTile, TilingError> {
        self.tiles
            .get(id as usize)
            .ok_or(TilingError::InvalidTileId(id))
    }

    /// All tiles, ordered by id.
    #[inline]
    pub fn tiles(&self) -> &[WangTile] {
        &self.tiles
    }

    /// Iterates the tiles in id order.
    pub fn iter(&self) -> impl Iterator<Item = &WangTile> {
        self.tiles.iter()
    }

    /// Number of tiles in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles that fit next to the given neighbour edges, in id order.
    ///
    /// See [`WangTile::accepts`] for the meaning of the constraints.
    pub fn candidates(
        &self,
        left: Option<EdgeColor>,
        top: Option<EdgeColor>,
    ) -> impl Iterator<Item = &WangTile> {
        self.tiles.iter().filter(move |t| t.accepts(left, top))
    }
}

impl Default for TilePalette {
    fn default() -> Self {
        Self::new()
    }
}
