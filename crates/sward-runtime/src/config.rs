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

//! Scene configuration file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use sward_core::terrain::TerrainConfig;

/// Decoration grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    /// Tile columns.
    pub width: usize,
    /// Tile rows.
    pub depth: usize,
    /// Fixed seed for a reproducible layout; fresh entropy when absent.
    pub seed: Option<u64>,
    /// Decoration cells per world unit.
    pub density: f32,
}

impl Default for TilingConfig {
    fn default() -> Self {
        // One 256-unit terrain covered at 1.5 cells per unit.
        Self {
            width: 384,
            depth: 384,
            seed: None,
            density: 1.5,
        }
    }
}

/// Everything one `sward-terrain` run needs besides the heightmap itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Meshing settings.
    pub terrain: TerrainConfig,
    /// Tile layout settings; no layout is produced when absent.
    pub tiling: Option<TilingConfig>,
}

impl SceneConfig {
    /// Reads a RON scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene config '{}'", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid scene config '{}'", path.display()))
    }

    /// Parses RON scene text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }
}
