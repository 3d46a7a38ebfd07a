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
use crate::asset::Asset;

/// A decoded single-channel heightmap.
///
/// Samples are stored row-major (`z * width + x`), one byte each; a sample's
/// normalised height is `byte / 255`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightField {
    width: usize,
    depth: usize,
    samples: Vec<u8>,
}

impl Asset for HeightField {}

impl HeightField {
    /// Wraps decoded luminance samples.
    ///
    /// Fails with `InvalidDimensions` when either side is smaller than 2 or the
    /// sample count does not match `width * depth`.
    pub fn from_luma(width: usize, depth: usize, samples: Vec<u8>) -> Result<Self, TerrainError> {
        if width < 2 || depth < 2 || samples.len() != width * depth {
            return Err(TerrainError::InvalidDimensions { width, depth });
        }
        Ok(Self {
            width,
            depth,
            samples,
        })
    }

    /// Number of samples per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The raw samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// The undivided byte at `(x, z)`.
    pub fn raw(&self, x: usize, z: usize) -> Result<u8, TerrainError> {
        if x >= self.width || z >= self.depth {
            return Err(TerrainError::OutOfBounds {
                x,
                z,
                width: self.width,
                depth: self.depth,
            });
        }
        Ok(self.samples[z * self.width + x])
    }

    /// Normalised height in `[0, 1]` at `(x, z)`.
    pub fn height_at(&self, x: usize, z: usize) -> Result<f32, TerrainError> {
        self.raw(x, z).map(normalize)
    }

    /// The highest normalised sample in the field.
    pub fn peak(&self) -> f32 {
        self.samples.iter().copied().max().map_or(0.0, normalize)
    }
}

#[inline]
fn normalize(sample: u8) -> f32 {
    sample as f32 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_luma_rejects_degenerate_sizes() {
        assert!(matches!(
            HeightField::from_luma(1, 4, vec![0; 4]),
            Err(TerrainError::InvalidDimensions { width: 1, depth: 4 })
        ));
        assert!(matches!(
            HeightField::from_luma(0, 0, vec![]),
            Err(TerrainError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            HeightField::from_luma(3, 3, vec![0; 8]),
            Err(TerrainError::InvalidDimensions { width: 3, depth: 3 })
        ));
    }

    #[test]
    fn test_height_at_normalises_bytes() {
        let field = HeightField::from_luma(2, 2, vec![0, 255, 128, 51]).unwrap();
        assert_eq!(field.height_at(0, 0).unwrap(), 0.0);
        assert_eq!(field.height_at(1, 0).unwrap(), 1.0);
        assert_abs_diff_eq!(field.height_at(0, 1).unwrap(), 0.50196, epsilon = 1e-4);
        assert_abs_diff_eq!(field.height_at(1, 1).unwrap(), 0.2, epsilon = 1e-6);
        assert_eq!(field.raw(0, 1).unwrap(), 128);
        assert_eq!(field.peak(), 1.0);
    }

    #[test]
    fn test_height_at_out_of_bounds() {
        let field = HeightField::from_luma(2, 3, vec![0; 6]).unwrap();
        assert!(field.height_at(1, 2).is_ok());
        assert!(matches!(
            field.height_at(2, 0),
            Err(TerrainError::OutOfBounds {
                x: 2,
                z: 0,
                width: 2,
                depth: 3
            })
        ));
        assert!(matches!(
            field.height_at(0, 3),
            Err(TerrainError::OutOfBounds { .. })
        ));
    }
}
