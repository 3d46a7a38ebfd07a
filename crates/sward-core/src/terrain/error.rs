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

use thiserror::Error;

/// Errors raised while loading a heightmap or building a terrain mesh.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// The heightmap could not be read or decoded. Terrain generation must abort.
    #[error("could not load heightmap '{path}'")]
    ImageLoad {
        /// The path (or `<memory>` for in-memory bytes) that failed.
        path: String,
        /// The underlying I/O or decode error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// A grid coordinate outside the height field was requested.
    #[error("cell ({x}, {z}) is outside the {width}x{depth} height field")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        z: usize,
        /// Field width.
        width: usize,
        /// Field depth.
        depth: usize,
    },
    /// Terrain needs at least a 2x2 grid of samples, and buffers must match it.
    #[error("invalid terrain dimensions {width}x{depth}")]
    InvalidDimensions {
        /// Width in samples.
        width: usize,
        /// Depth in samples.
        depth: usize,
    },
    /// A configuration value is unusable (non-finite scale, non-positive cell size).
    #[error("invalid terrain configuration: {0}")]
    InvalidConfig(String),
}
