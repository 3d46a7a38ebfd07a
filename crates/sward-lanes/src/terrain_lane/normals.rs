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

//! Finite-difference normal estimation.

use sward_core::math::Vec3;

/// Estimates a normal for every interior vertex of a row-major grid.
///
/// For each vertex the edges towards its four neighbours are crossed pairwise
/// (top x right, left x top, bottom x left, right x bottom), each product is
/// normalised and the four are averaged. "Top" is the `z + 1` neighbour.
///
/// The returned buffer is parallel to `positions`; vertices on the outer ring
/// keep [`Vec3::ZERO`].
pub fn estimate_normals(positions: &[Vec3], width: usize, depth: usize) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    if width < 3 || depth < 3 {
        return normals;
    }

    for z in 1..depth - 1 {
        for x in 1..width - 1 {
            let i = z * width + x;
            let mid = positions[i];
            let to_top = positions[i + width] - mid;
            let to_right = positions[i + 1] - mid;
            let to_left = positions[i - 1] - mid;
            let to_bottom = positions[i - width] - mid;

            let sum = to_top.cross(to_right).normalize()
                + to_left.cross(to_top).normalize()
                + to_bottom.cross(to_left).normalize()
                + to_right.cross(to_bottom).normalize();
            normals[i] = sum / 4.0;
        }
    }
    normals
}
