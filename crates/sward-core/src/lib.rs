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

//! # Sward Core
//!
//! Foundational crate containing the data types and contracts shared by the
//! terrain and tiling pipelines: math primitives, Wang tiles and their grid,
//! height fields and terrain meshes.
//!
//! Nothing in here decodes images or draws random numbers; that work lives in
//! the lanes crate.

#![warn(missing_docs)]

pub mod asset;
pub mod lane;
pub mod math;
pub mod terrain;
pub mod tiling;

pub use lane::{Lane, LaneKind};
