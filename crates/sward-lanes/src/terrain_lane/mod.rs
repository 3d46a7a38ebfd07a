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

//! Lanes that turn a height field into a renderable terrain mesh.
//!
//! Meshing runs four stages in order: vertex generation, smoothing, normal
//! estimation and index generation. Smoothing finishes over the whole grid
//! before normals are estimated, since normals read the smoothed heights.

mod mesher;
mod normals;
mod smoothing;

pub use mesher::*;
pub use normals::*;
pub use smoothing::*;

use sward_core::{math::Vec3, Lane};

/// A strategy for one smoothing pass over a row-major vertex grid.
///
/// Only the `y` component of each position is changed, and only for cells at
/// least `margin` cells away from every edge. A margin below 1 is treated as 1
/// so the 3x3 stencil never leaves the grid.
pub trait SmoothingLane: Lane {
    /// Runs a single pass in place over `positions`.
    fn smooth_pass(&self, positions: &mut [Vec3], width: usize, depth: usize, margin: usize);
}
