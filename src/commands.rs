//! CLI command implementations

use anyhow::Context;
use minimap_core::{GraphSummary, Minimap, MinimapConfig};
use minimap_render::ImageFormat;
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> anyhow::Result<MinimapConfig> {
    match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            Ok(MinimapConfig::load(path)?)
        }
        None => Ok(MinimapConfig::default()),
    }
}

fn load_minimap(input: &Path, config: MinimapConfig) -> anyhow::Result<Minimap> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    Minimap::from_json_str(&json, config)
        .with_context(|| format!("failed to load path actors from {}", input.display()))
}

pub fn render(
    input: &Path,
    output: &Path,
    format: ImageFormat,
    debug: bool,
    mut config: MinimapConfig,
) -> anyhow::Result<()> {
    tracing::info!("Rendering minimap: {}", input.display());

    config.debug |= debug;
    let minimap = load_minimap(input, config)?;
    let bounds = minimap.bounds();
    tracing::info!(
        "Loaded {} actors, {} warps; canvas {}x{}",
        minimap.nodes().node_count(),
        minimap.warps().len(),
        bounds.width,
        bounds.height
    );

    let image = minimap_render::render(&minimap, format)?;
    tracing::info!(
        "Drew {} segments across {} components",
        image.report.edges_drawn,
        image.report.roots.len()
    );

    let stem = minimap_render::output_stem(input)?;
    let path = minimap_render::save(&image, output, &stem)?;
    tracing::info!("Saved {}", path.display());
    println!("{}", path.display());
    Ok(())
}

pub fn inspect(input: &Path, config: MinimapConfig) -> anyhow::Result<()> {
    let minimap = load_minimap(input, config)?;
    let summary = GraphSummary::compute(minimap.nodes(), minimap.warps());
    print!("{summary}");
    Ok(())
}
