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

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use sward_core::{
    lane::{Lane, LaneKind},
    tiling::{TileGrid, TileId, TilePalette, TilingError, TILE_COUNT},
};

/// Fills a tile grid with randomly chosen, edge-matched Wang tiles.
///
/// Cells are visited once in row-major order. Each cell only has to agree with
/// its already placed left and top neighbours, so no backtracking is needed:
/// the first cell is unconstrained, the rest of the first row is constrained on
/// the left edge, the first column on the top edge and every other cell on both.
#[derive(Debug, Clone, Default)]
pub struct TileGridAssigner {
    palette: TilePalette,
}

impl TileGridAssigner {
    /// Creates an assigner drawing from `palette`.
    pub fn new(palette: TilePalette) -> Self {
        Self { palette }
    }

    /// The palette tiles are drawn from.
    pub fn palette(&self) -> &TilePalette {
        &self.palette
    }

    /// Lays out a `width` x `depth` grid using `rng` for every choice.
    ///
    /// Each cell picks uniformly among the matching candidates and consumes
    /// exactly one draw from `rng`, so a seeded generator reproduces the layout.
    pub fn assign<R: Rng>(
        &self,
        width: usize,
        depth: usize,
        rng: &mut R,
    ) -> Result<TileGrid, TilingError> {
        if width == 0 || depth == 0 {
            return Err(TilingError::InvalidDimensions { width, depth });
        }
        let started = Instant::now();

        let mut ids: Vec<TileId> = Vec::with_capacity(width * depth);
        let mut candidates = [0 as TileId; TILE_COUNT];
        for z in 0..depth {
            for x in 0..width {
                let left = match x {
                    0 => None,
                    _ => Some(self.palette.get(ids[ids.len() - 1])?.right()),
                };
                let top = match z {
                    0 => None,
                    _ => Some(self.palette.get(ids[ids.len() - width])?.bottom()),
                };

                let mut count = 0;
                for tile in self.palette.candidates(left, top) {
                    candidates[count] = tile.id();
                    count += 1;
                }
                if count == 0 {
                    return Err(TilingError::TileExhaustion { x, z });
                }
                ids.push(candidates[rng.random_range(0..count)]);
            }
            log::trace!("Tile row {z} assigned.");
        }

        let grid = TileGrid::from_ids(width, depth, ids)?;
        log::info!(
            "{} laid out {}x{} tiles in {:?}.",
            self.strategy_name(),
            width,
            depth,
            started.elapsed()
        );
        Ok(grid)
    }

    /// Lays out a grid from a `ChaCha8Rng` seeded with `seed`.
    ///
    /// The same seed and dimensions always yield the same grid.
    pub fn assign_seeded(
        &self,
        width: usize,
        depth: usize,
        seed: u64,
    ) -> Result<TileGrid, TilingError> {
        log::debug!("Seeding tile layout with {seed}.");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.assign(width, depth, &mut rng)
    }

    /// Lays out a grid from the thread-local generator; results vary per run.
    pub fn assign_from_entropy(&self, width: usize, depth: usize) -> Result<TileGrid, TilingError> {
        self.assign(width, depth, &mut rand::rng())
    }
}

impl Lane for TileGridAssigner {
    fn strategy_name(&self) -> &'static str {
        "RandomWangTiling"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Tiling
    }
}
