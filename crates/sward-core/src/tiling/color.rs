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

use crate::math::LinearRgba;
use serde::{Deserialize, Serialize};

/// The color painted on one edge of a Wang tile.
///
/// Horizontal edges (top/bottom) use `Red`/`Green`, vertical edges
/// (left/right) use `Blue`/`Yellow`. `Gray` belongs to the shared debug
/// palette and never appears on a tile edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeColor {
    /// Horizontal edge color.
    Red,
    /// Horizontal edge color.
    Green,
    /// Vertical edge color.
    Blue,
    /// Vertical edge color.
    Yellow,
    /// Neutral color, unused by tiling.
    Gray,
}

impl EdgeColor {
    /// The color used when debug-drawing this edge.
    pub const fn to_linear_rgba(self) -> LinearRgba {
        match self {
            EdgeColor::Red => LinearRgba::RED,
            EdgeColor::Green => LinearRgba::GREEN,
            EdgeColor::Blue => LinearRgba::BLUE,
            EdgeColor::Yellow => LinearRgba::YELLOW,
            EdgeColor::Gray => LinearRgba::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_colors_are_distinct() {
        let colors = [
            EdgeColor::Red,
            EdgeColor::Green,
            EdgeColor::Blue,
            EdgeColor::Yellow,
            EdgeColor::Gray,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a.to_linear_rgba(), b.to_linear_rgba());
            }
        }
    }
}
