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

//! Heightmap decoding.

use super::AssetLoaderLane;
use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;
use sward_core::{
    lane::{Lane, LaneKind},
    terrain::{HeightField, TerrainError},
};

/// A lane dedicated to decoding grayscale heightmaps on the CPU.
///
/// Any format and color type the `image` crate understands is accepted;
/// color images are reduced to luminance.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeightmapLoaderLane;

impl HeightmapLoaderLane {
    /// Reads and decodes the heightmap at `path`.
    ///
    /// Unreadable files and undecodable data are reported as
    /// [`TerrainError::ImageLoad`]; images smaller than 2x2 as
    /// [`TerrainError::InvalidDimensions`].
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<HeightField, TerrainError> {
        let path = path.as_ref();
        let image_load = |source: anyhow::Error| TerrainError::ImageLoad {
            path: path.display().to_string(),
            source: source.into(),
        };

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read heightmap file '{}'", path.display()))
            .map_err(image_load)?;
        let image = decode(&bytes).map_err(image_load)?;
        let field = to_height_field(image)?;

        log::debug!(
            "Loaded {}x{} heightmap from '{}'.",
            field.width(),
            field.depth(),
            path.display()
        );
        Ok(field)
    }
}

impl AssetLoaderLane<HeightField> for HeightmapLoaderLane {
    fn load(
        &self,
        bytes: &[u8],
    ) -> Result<HeightField, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let image = decode(bytes)?;
        Ok(to_height_field(image)?)
    }
}

impl Lane for HeightmapLoaderLane {
    fn strategy_name(&self) -> &'static str {
        "HeightmapLoader"
    }

    fn lane_kind(&self) -> LaneKind {
        LaneKind::Asset
    }
}

fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).context("Failed to decode heightmap from memory")
}

fn to_height_field(image: DynamicImage) -> Result<HeightField, TerrainError> {
    // Single channel: one byte per sample, row-major.
    let luma = image.into_luma8();
    let (width, depth) = luma.dimensions();
    HeightField::from_luma(width as usize, depth as usize, luma.into_raw())
}
