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

//! `sward-terrain`: meshes a grayscale heightmap and, on request, lays out
//! the Wang tile grid that drives grass placement over it.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::{SceneConfig, TilingConfig};
use std::path::PathBuf;
use sward_core::{
    terrain::{SmoothingScheme, TerrainMesh},
    tiling::{TileGrid, TilePalette},
};
use sward_lanes::{
    asset_lane::HeightmapLoaderLane,
    terrain_lane::TerrainMesher,
    tiling_lane::{DecorationLayout, TileGridAssigner},
};

/// Procedural terrain and grass layout generator.
#[derive(Parser, Debug)]
#[command(name = "sward-terrain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grayscale heightmap image.
    heightmap: PathBuf,

    /// RON scene file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World units per normalised height unit.
    #[arg(long)]
    scale: Option<f32>,

    /// Number of smoothing passes.
    #[arg(long)]
    passes: Option<u32>,

    /// Smoothing read scheme.
    #[arg(long, value_enum)]
    smoothing: Option<SmoothingArg>,

    /// Lay out a WIDTHxDEPTH tile grid.
    #[arg(long, value_name = "WxD", value_parser = parse_tiles)]
    tiles: Option<(usize, usize)>,

    /// Seed for the tile layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Decoration cells per world unit.
    #[arg(long)]
    density: Option<f32>,

    /// Re-check every shared tile edge after layout.
    #[arg(long)]
    verify: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SmoothingArg {
    Snapshot,
    InPlace,
}

impl From<SmoothingArg> for SmoothingScheme {
    fn from(arg: SmoothingArg) -> Self {
        match arg {
            SmoothingArg::Snapshot => SmoothingScheme::Snapshot,
            SmoothingArg::InPlace => SmoothingScheme::InPlace,
        }
    }
}

fn parse_tiles(value: &str) -> Result<(usize, usize), String> {
    let (width, depth) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxDEPTH, got '{value}'"))?;
    let parse = |side: &str| {
        side.trim()
            .parse::<usize>()
            .map_err(|e| format!("bad tile count '{side}': {e}"))
    };
    Ok((parse(width)?, parse(depth)?))
}

impl Cli {
    /// Loads the scene file, if any, and layers the command-line overrides on top.
    fn scene(&self) -> Result<SceneConfig> {
        let mut scene = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        let terrain = &mut scene.terrain;
        if let Some(scale) = self.scale {
            terrain.height_scale = scale;
        }
        if let Some(passes) = self.passes {
            terrain.smoothing_passes = passes;
        }
        if let Some(smoothing) = self.smoothing {
            terrain.smoothing = smoothing.into();
        }

        if let Some((width, depth)) = self.tiles {
            let tiling = scene.tiling.get_or_insert_with(TilingConfig::default);
            tiling.width = width;
            tiling.depth = depth;
        }
        if let Some(tiling) = scene.tiling.as_mut() {
            if self.seed.is_some() {
                tiling.seed = self.seed;
            }
            if let Some(density) = self.density {
                tiling.density = density;
            }
        }
        Ok(scene)
    }
}

fn print_mesh(mesh: &TerrainMesh) {
    let extent = mesh.extent();
    println!("width:       {}", mesh.width());
    println!("depth:       {}", mesh.depth());
    println!("max height:  {:.3}", mesh.max_height());
    let bounds = mesh.bounding_box();
    println!("extent:      {} x {}", extent.x, extent.y);
    println!("height span: {:.3} .. {:.3}", bounds.min.y, bounds.max.y);
    println!("vertices:    {}", mesh.vertex_count());
    println!("indices:     {}", mesh.index_count());
}

fn print_tiles(grid: &TileGrid, layout: &DecorationLayout) {
    println!("tiles:       {} x {}", grid.width(), grid.depth());
    println!("decorations: {} ({} bytes)", layout.len(), layout.as_bytes().len());
    for (id, count) in grid.histogram().iter().enumerate() {
        println!("  tile {id:>2}: {count}");
    }
}

fn lay_out_tiles(tiling: &TilingConfig, verify: bool) -> Result<(TileGrid, DecorationLayout)> {
    let palette = TilePalette::new();
    let assigner = TileGridAssigner::new(palette.clone());
    let grid = match tiling.seed {
        Some(seed) => assigner.assign_seeded(tiling.width, tiling.depth, seed),
        None => assigner.assign_from_entropy(tiling.width, tiling.depth),
    }
    .context("Tile layout failed")?;

    if verify {
        grid.validate(&palette)
            .context("Tile layout has mismatched edges")?;
        log::info!("Verified {} tile edges.", grid.ids().len());
    }

    let layout = DecorationLayout::from_grid(&grid, tiling.density)
        .context("Decoration layout failed")?;
    Ok((grid, layout))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let scene = cli.scene()?;
    log::debug!("Scene configuration: {scene:?}");

    let field = HeightmapLoaderLane
        .load_path(&cli.heightmap)
        .context("Heightmap could not be loaded")?;
    let mesh = TerrainMesher::new(scene.terrain.clone())
        .build(&field)
        .context("Terrain meshing failed")?;
    print_mesh(&mesh);

    if let Some(tiling) = &scene.tiling {
        let (grid, layout) = lay_out_tiles(tiling, cli.verify)?;
        print_tiles(&grid, &layout);
    } else if cli.verify {
        log::warn!("--verify has no effect without a tile layout.");
    }
    Ok(())
}
