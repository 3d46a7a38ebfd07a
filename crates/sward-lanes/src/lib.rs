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

//! # Sward Lanes
//!
//! The processing strategies behind terrain and decoration generation:
//!
//! - [`asset_lane`] decodes grayscale heightmaps into [`HeightField`]s.
//! - [`terrain_lane`] smooths heights, estimates normals and triangulates the grid.
//! - [`tiling_lane`] lays out Wang tiles and turns a layout into decoration instances.
//!
//! The two pipelines share no state and may run on separate threads.
//!
//! [`HeightField`]: sward_core::terrain::HeightField

pub mod asset_lane;
pub mod terrain_lane;
pub mod tiling_lane;
