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

//! # Lane Abstraction
//!
//! A **Lane** is a reusable, swappable processing strategy. Each lane wraps
//! one algorithmic approach to a task (decoding a heightmap, smoothing a
//! height field, laying out tiles) behind a small common interface so callers
//! can pick a strategy by configuration and log which one ran.
//!
//! Domain-specific traits extend `Lane` with the actual work:
//! - `AssetLoaderLane<A>: Lane`: decoding raw bytes into an asset
//! - `SmoothingLane: Lane`: height smoothing passes
//!
//! Layout strategies such as the Wang tile assigner implement `Lane` directly.

use std::fmt;

/// Classification of lane types, used for routing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// Asset loading and decoding.
    Asset,
    /// Terrain geometry generation (smoothing, meshing).
    Terrain,
    /// Tile layout generation.
    Tiling,
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneKind::Asset => write!(f, "Asset"),
            LaneKind::Terrain => write!(f, "Terrain"),
            LaneKind::Tiling => write!(f, "Tiling"),
        }
    }
}

/// Base trait for all lane types.
pub trait Lane: Send + Sync {
    /// Human-readable name identifying this lane's strategy.
    ///
    /// Should be unique within a lane kind (e.g. `"SnapshotBoxSmoothing"`).
    fn strategy_name(&self) -> &'static str;

    /// The kind of processing this lane performs.
    fn lane_kind(&self) -> LaneKind;
}
