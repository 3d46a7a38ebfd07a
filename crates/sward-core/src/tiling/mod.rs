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

//! Wang tile data types: edge colors, the fixed 16-tile palette and the grid
//! of tile identifiers a layout pass produces.
//!
//! A grid is valid when every pair of touching edges agrees:
//! `tile(x, z).left == tile(x - 1, z).right` and
//! `tile(x, z).top == tile(x, z - 1).bottom`.

mod color;
mod error;
mod grid;
mod palette;
mod tile;

pub use color::EdgeColor;
pub use error::TilingError;
pub use grid::TileGrid;
pub use palette::{TilePalette, TILE_COUNT};
pub use tile::{TileId, WangTile};
