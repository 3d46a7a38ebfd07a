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
use approx::assert_abs_diff_eq;
use image::GrayImage;
use std::path::Path;
use sward_core::terrain::{SmoothingScheme, TerrainConfig, TerrainError};
use sward_lanes::{asset_lane::HeightmapLoaderLane, terrain_lane::TerrainMesher};
use tempfile::tempdir;

fn write_heightmap(path: &Path, width: u32, depth: u32, height: impl Fn(u32, u32) -> u8) -> Result<()> {
    let image = GrayImage::from_fn(width, depth, |x, z| image::Luma([height(x, z)]));
    image.save(path)?;
    Ok(())
}

#[test]
fn test_uniform_heightmap_from_disk() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("flat.png");
    write_heightmap(&path, 4, 4, |_, _| 128)?;

    let field = HeightmapLoaderLane.load_path(&path)?;
    for z in 0..4 {
        for x in 0..4 {
            assert_abs_diff_eq!(field.height_at(x, z)?, 0.502, epsilon = 1e-3);
        }
    }

    let mesh = TerrainMesher::default().build(&field)?;
    for height in mesh.heights() {
        assert_abs_diff_eq!(height, 32.1, epsilon = 0.05);
    }
    assert_abs_diff_eq!(mesh.max_height(), 32.1, epsilon = 0.05);
    Ok(())
}

#[test]
fn test_mesh_size_invariants() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("ridge.png");
    let (width, depth) = (37u32, 23u32);
    write_heightmap(&path, width, depth, |x, z| ((x * 7 + z * 13) % 256) as u8)?;

    let field = HeightmapLoaderLane.load_path(&path)?;
    let mesh = TerrainMesher::default().build(&field)?;

    let (w, d) = (width as usize, depth as usize);
    assert_eq!(mesh.width(), w);
    assert_eq!(mesh.depth(), d);
    assert_eq!(mesh.positions().len(), w * d);
    assert_eq!(mesh.normals().len(), w * d);
    assert_eq!(mesh.indices().len(), (w - 1) * (d - 1) * 6);
    assert!(mesh.indices().iter().all(|&i| (i as usize) < w * d));

    let scale = TerrainConfig::default().height_scale;
    for z in 0..d {
        for x in 0..w {
            assert!(mesh.max_height() >= field.height_at(x, z)? * scale);
        }
    }
    Ok(())
}

#[test]
fn test_border_normals_stay_zero() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("hill.png");
    write_heightmap(&path, 12, 10, |x, z| (x * 10 + z * 5) as u8)?;

    let mesh = TerrainMesher::default().build(&HeightmapLoaderLane.load_path(&path)?)?;
    let (w, d) = (mesh.width(), mesh.depth());
    for z in 0..d {
        for x in 0..w {
            let normal = mesh.normals()[z * w + x];
            let border = x == 0 || z == 0 || x == w - 1 || z == d - 1;
            if border {
                assert_eq!(normal.length(), 0.0);
            } else {
                assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-3);
                assert!(normal.y > 0.0);
            }
        }
    }
    Ok(())
}

#[test]
fn test_smoothing_schemes_agree_outside_interior() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("noise.png");
    write_heightmap(&path, 16, 16, |x, z| ((x * 97 + z * 31) % 251) as u8)?;
    let field = HeightmapLoaderLane.load_path(&path)?;

    let snapshot = TerrainMesher::default().build(&field)?;
    let in_place = TerrainMesher::new(TerrainConfig {
        smoothing: SmoothingScheme::InPlace,
        ..Default::default()
    })
    .build(&field)?;

    assert_eq!(snapshot.max_height(), in_place.max_height());
    // The margin ring is never smoothed by either scheme.
    for z in 0..16 {
        for x in 0..16 {
            if !(4..12).contains(&x) || !(4..12).contains(&z) {
                assert_eq!(snapshot.height_at(x, z)?, in_place.height_at(x, z)?);
            }
        }
    }
    assert_ne!(snapshot.heights(), in_place.heights());
    Ok(())
}

#[test]
fn test_missing_heightmap_is_image_load_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.png");
    match HeightmapLoaderLane.load_path(&path) {
        Err(TerrainError::ImageLoad { path: reported, .. }) => {
            assert!(reported.ends_with("missing.png"));
        }
        other => panic!("expected ImageLoad, got {other:?}"),
    }
}

#[test]
fn test_undecodable_heightmap_is_image_load_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png")?;
    assert!(matches!(
        HeightmapLoaderLane.load_path(&path),
        Err(TerrainError::ImageLoad { .. })
    ));
    Ok(())
}
