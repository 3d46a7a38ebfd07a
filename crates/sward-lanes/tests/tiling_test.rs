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

use anyhow::Result;
use std::thread;
use sward_core::tiling::{TilePalette, TILE_COUNT};
use sward_lanes::{
    asset_lane::HeightmapLoaderLane,
    terrain_lane::TerrainMesher,
    tiling_lane::{DecorationLayout, TileGridAssigner},
};

#[test]
fn test_grass_layout_for_default_terrain() -> Result<()> {
    let palette = TilePalette::new();
    let assigner = TileGridAssigner::new(palette.clone());
    let grid = assigner.assign_seeded(384, 384, 0xC0FFEE)?;
    grid.validate(&palette)?;
    assert_eq!(grid.histogram().iter().sum::<usize>(), 384 * 384);
    assert!(grid.histogram().iter().all(|&count| count > 0));

    let layout = DecorationLayout::from_grid(&grid, 1.5)?;
    assert_eq!(layout.len(), 384 * 384);
    let last = layout.instances()[layout.len() - 1];
    assert!((last.position.x - 383.0 / 1.5).abs() < 1e-3);
    assert!((last.position.z - 383.0 / 1.5).abs() < 1e-3);
    assert!(layout.instances().iter().all(|i| (i.tile_id as usize) < TILE_COUNT));
    Ok(())
}

#[test]
fn test_every_shape_up_to_eight_validates() -> Result<()> {
    let palette = TilePalette::new();
    let assigner = TileGridAssigner::new(palette.clone());
    for width in 1..=8 {
        for depth in 1..=8 {
            let grid = assigner.assign_seeded(width, depth, (width * 31 + depth) as u64)?;
            grid.validate(&palette)?;
        }
    }
    Ok(())
}

#[test]
fn test_pipelines_run_on_separate_threads() -> Result<()> {
    let bytes = {
        let image = image::GrayImage::from_fn(16, 16, |x, z| image::Luma([(x * 8 + z) as u8]));
        let mut cursor = std::io::Cursor::new(Vec::new());
        image.write_to(&mut cursor, image::ImageFormat::Png)?;
        cursor.into_inner()
    };

    let tiling = thread::spawn(|| TileGridAssigner::default().assign_seeded(32, 32, 5));
    let terrain = thread::spawn(move || {
        use sward_lanes::asset_lane::AssetLoaderLane;
        let field = HeightmapLoaderLane.load(&bytes).map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok::<_, anyhow::Error>(TerrainMesher::default().build(&field)?)
    });

    let grid = tiling.join().map_err(|_| anyhow::anyhow!("tiling thread panicked"))??;
    let mesh = terrain.join().map_err(|_| anyhow::anyhow!("terrain thread panicked"))??;
    assert_eq!(grid.ids().len(), 32 * 32);
    assert_eq!(mesh.vertex_count(), 16 * 16);
    Ok(())
}
