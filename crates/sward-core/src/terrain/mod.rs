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

//! Height field and terrain mesh data types.
//!
//! A [`HeightField`] is the decoded grayscale heightmap; a [`TerrainMesh`] is
//! the smoothed, normal-mapped triangle list built from it. The algorithms
//! connecting the two live in the lanes crate.

mod config;
mod error;
mod heightfield;
mod mesh;

pub use config::{SmoothingScheme, TerrainConfig};
pub use error::TerrainError;
pub use heightfield::HeightField;
pub use mesh::{TerrainMesh, TerrainVertex};
