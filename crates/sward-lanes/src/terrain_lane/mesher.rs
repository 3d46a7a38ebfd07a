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

//! Height field to terrain mesh conversion.

use super::{estimate_normals, smoothing_lane_for, SmoothingLane};
use std::time::Instant;
use sward_core::{
    math::Vec3,
    terrain::{HeightField, TerrainConfig, TerrainError, TerrainMesh},
};

/// Builds smoothed, normal-mapped terrain meshes from height fields.
pub struct TerrainMesher {
    config: TerrainConfig,
    smoothing: Box<dyn SmoothingLane>,
}

impl TerrainMesher {
    /// Creates a mesher using the smoothing scheme named in `config`.
    pub fn new(config: TerrainConfig) -> Self {
        let smoothing = smoothing_lane_for(config.smoothing);
        Self::with_smoothing(config, smoothing)
    }

    /// Creates a mesher with an explicit smoothing strategy, ignoring `config.smoothing`.
    pub fn with_smoothing(config: TerrainConfig, smoothing: Box<dyn SmoothingLane>) -> Self {
        Self { config, smoothing }
    }

    /// The active configuration.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Name of the smoothing strategy in use.
    pub fn smoothing_strategy(&self) -> &'static str {
        self.smoothing.strategy_name()
    }

    /// Runs the four meshing stages over `field`.
    ///
    /// The reported maximum height is taken before smoothing, so it bounds
    /// every unsmoothed sample times the height scale.
    pub fn build(&self, field: &HeightField) -> Result<TerrainMesh, TerrainError> {
        self.config.validate()?;
        let (width, depth) = (field.width(), field.depth());
        if width < 2 || depth < 2 || u32::try_from(width * depth).is_err() {
            return Err(TerrainError::InvalidDimensions { width, depth });
        }
        let started = Instant::now();
        log::debug!(
            "Meshing {}x{} height field, peak sample {:.3}.",
            width,
            depth,
            field.peak()
        );

        let (mut positions, max_height) = self.generate_vertices(field)?;
        log::debug!("Generated {} terrain vertices.", positions.len());

        for pass in 0..self.config.smoothing_passes {
            self.smoothing
                .smooth_pass(&mut positions, width, depth, self.config.smoothing_margin);
            log::trace!("{} pass {} done.", self.smoothing.strategy_name(), pass + 1);
        }

        let normals = estimate_normals(&positions, width, depth);
        let indices = generate_indices(width, depth);
        log::debug!("Generated {} terrain indices.", indices.len());

        let mesh = TerrainMesh::from_buffers(
            width,
            depth,
            self.config.cell_size,
            max_height,
            positions,
            normals,
            indices,
        )?;

        log::info!(
            "Built {}x{} terrain (max height {:.2}) in {:?}.",
            width,
            depth,
            max_height,
            started.elapsed()
        );
        Ok(mesh)
    }

    /// Emits one position per sample, row-major, and tracks the highest one.
    fn generate_vertices(&self, field: &HeightField) -> Result<(Vec<Vec3>, f32), TerrainError> {
        let (width, depth) = (field.width(), field.depth());
        let cell = self.config.cell_size;

        let mut positions = Vec::with_capacity(width * depth);
        let mut max_height = f32::NEG_INFINITY;
        for z in 0..depth {
            for x in 0..width {
                let height = field.height_at(x, z)? * self.config.height_scale;
                max_height = max_height.max(height);
                positions.push(Vec3::new(x as f32 * cell, height, z as f32 * cell));
            }
        }
        Ok((positions, max_height))
    }
}

impl Default for TerrainMesher {
    fn default() -> Self {
        Self::new(TerrainConfig::default())
    }
}

/// Two triangles per grid quad, `{i, i + w, i + 1}` and `{i + 1, i + w, i + 1 + w}`.
///
/// Callers guarantee `width * depth` fits in `u32`.
pub fn generate_indices(width: usize, depth: usize) -> Vec<u32> {
    if width < 2 || depth < 2 {
        return Vec::new();
    }
    let w = width as u32;
    let mut indices = Vec::with_capacity((width - 1) * (depth - 1) * 6);
    for z in 0..depth as u32 - 1 {
        for x in 0..w - 1 {
            let i = z * w + x;
            indices.extend_from_slice(&[i, i + w, i + 1, i + 1, i + w, i + 1 + w]);
        }
    }
    indices
}
