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

use super::TerrainError;
use serde::{Deserialize, Serialize};

/// How each smoothing pass reads the heights it averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SmoothingScheme {
    /// Every pass reads a snapshot of the previous pass and writes a fresh
    /// buffer. The result does not depend on traversal order.
    #[default]
    Snapshot,
    /// Every pass updates heights in place in row-major order, so cells later
    /// in a pass see neighbours already smoothed by the same pass.
    InPlace,
}

/// Parameters for turning a height field into a terrain mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// World units per normalised height unit.
    pub height_scale: f32,
    /// Number of smoothing passes run after vertex generation.
    pub smoothing_passes: u32,
    /// Cells left untouched by smoothing along every edge.
    pub smoothing_margin: usize,
    /// Distance between neighbouring vertices along x and z.
    pub cell_size: f32,
    /// Read scheme used by each smoothing pass.
    pub smoothing: SmoothingScheme,
}

impl TerrainConfig {
    /// Checks that every value can produce a finite mesh.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if !self.height_scale.is_finite() {
            return Err(TerrainError::InvalidConfig(format!(
                "height scale must be finite, got {}",
                self.height_scale
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(TerrainError::InvalidConfig(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            height_scale: 64.0,
            smoothing_passes: 5,
            smoothing_margin: 4,
            cell_size: 1.0,
            smoothing: SmoothingScheme::Snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TerrainConfig::default();
        assert_eq!(config.height_scale, 64.0);
        assert_eq!(config.smoothing_passes, 5);
        assert_eq!(config.smoothing_margin, 4);
        assert_eq!(config.cell_size, 1.0);
        assert_eq!(config.smoothing, SmoothingScheme::Snapshot);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = TerrainConfig {
            cell_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TerrainError::InvalidConfig(_))
        ));

        let config = TerrainConfig {
            height_scale: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TerrainError::InvalidConfig(_))
        ));
    }
}
