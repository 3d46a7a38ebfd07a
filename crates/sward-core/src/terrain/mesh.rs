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

//! Defines the terrain mesh produced by the mesher.

use super::TerrainError;
use crate::asset::Asset;
use crate::math::{Aabb, Vec2, Vec3};

/// One interleaved vertex of the ground mesh, laid out for direct upload.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct TerrainVertex {
    /// World-space position.
    pub position: Vec3,
    /// Estimated surface normal (zero on the border ring).
    pub normal: Vec3,
    /// Texture coordinate, `(x / width, z / depth)`.
    pub tex_coord: Vec2,
}

/// A triangulated height grid.
///
/// Positions and normals are parallel arrays of `width * depth` entries,
/// row-major. Indices form a triangle list with two triangles per grid quad.
/// Normals on the outer ring of vertices are left at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    width: usize,
    depth: usize,
    cell_size: f32,
    max_height: f32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Asset for TerrainMesh {}

impl TerrainMesh {
    /// Assembles a mesh from finished buffers, checking the size invariants.
    ///
    /// `positions.len()` and `normals.len()` must equal `width * depth`,
    /// `indices.len()` must equal `(width - 1) * (depth - 1) * 6`, and every
    /// index must address a vertex.
    pub fn from_buffers(
        width: usize,
        depth: usize,
        cell_size: f32,
        max_height: f32,
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<u32>,
    ) -> Result<Self, TerrainError> {
        let invalid = || TerrainError::InvalidDimensions { width, depth };
        if width < 2 || depth < 2 {
            return Err(invalid());
        }
        let vertex_count = width * depth;
        if positions.len() != vertex_count
            || normals.len() != vertex_count
            || indices.len() != (width - 1) * (depth - 1) * 6
            || indices.iter().any(|&i| i as usize >= vertex_count)
        {
            return Err(invalid());
        }
        Ok(Self {
            width,
            depth,
            cell_size,
            max_height,
            positions,
            normals,
            indices,
        })
    }

    /// Number of vertices per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of vertex rows.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The highest scaled height seen before smoothing ran.
    #[inline]
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Vertex positions, row-major.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex normals, parallel to [`positions`](Self::positions).
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle-list indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    fn index_of(&self, x: usize, z: usize) -> Result<usize, TerrainError> {
        if x >= self.width || z >= self.depth {
            return Err(TerrainError::OutOfBounds {
                x,
                z,
                width: self.width,
                depth: self.depth,
            });
        }
        Ok(z * self.width + x)
    }

    /// Smoothed, scaled height of the vertex at `(x, z)`.
    pub fn height_at(&self, x: usize, z: usize) -> Result<f32, TerrainError> {
        Ok(self.positions[self.index_of(x, z)?].y)
    }

    /// Overwrites the height of the vertex at `(x, z)`.
    ///
    /// Normals and the reported maximum height are not recomputed.
    pub fn set_height(&mut self, x: usize, z: usize, height: f32) -> Result<(), TerrainError> {
        let index = self.index_of(x, z)?;
        self.positions[index].y = height;
        Ok(())
    }

    /// The height of every vertex as a flat row-major array.
    pub fn heights(&self) -> Vec<f32> {
        self.positions.iter().map(|p| p.y).collect()
    }

    /// World-space size of the terrain along x and z.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.cell_size,
            self.depth as f32 * self.cell_size,
        )
    }

    /// Tight bounds of the current vertex positions.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.positions).unwrap_or(Aabb::INVALID)
    }

    /// Interleaves positions, normals and texture coordinates.
    pub fn vertices(&self) -> Vec<TerrainVertex> {
        let (w, d) = (self.width as f32, self.depth as f32);
        self.positions
            .iter()
            .zip(&self.normals)
            .enumerate()
            .map(|(i, (&position, &normal))| {
                let (x, z) = (i % self.width, i / self.width);
                TerrainVertex {
                    position,
                    normal,
                    tex_coord: Vec2::new(x as f32 / w, z as f32 / d),
                }
            })
            .collect()
    }

    /// The interleaved vertex buffer as raw bytes.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    /// The index buffer as raw bytes (`u32`, native endian).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
