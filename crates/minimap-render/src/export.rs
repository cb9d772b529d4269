//! Rasterization and persistence of rendered minimaps

use crate::svg::SvgCanvas;
use anyhow::{Context, Result, anyhow, bail};
use minimap_core::{Minimap, WalkReport};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tiny_skia::{Pixmap, Transform};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(format!("unsupported image format `{other}` (expected png or svg)")),
        }
    }
}

/// Encoded image plus the walk that produced it.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
    pub report: WalkReport,
}

/// Walk `map` onto a fresh canvas and encode the result.
pub fn render(map: &Minimap, format: ImageFormat) -> Result<RenderedImage> {
    let mut canvas = SvgCanvas::for_minimap(map);
    let report = map.walk(&mut canvas);
    let svg = canvas.finish();

    let bytes = match format {
        ImageFormat::Svg => svg.into_bytes(),
        ImageFormat::Png => rasterize(&svg, &map.config().font_family)?,
    };
    Ok(RenderedImage { format, bytes, report })
}

/// Rasterize an SVG document to PNG bytes on a transparent background.
pub fn rasterize(svg: &str, font_family: &str) -> Result<Vec<u8>> {
    let mut options = resvg::usvg::Options::default();
    options.font_family = font_family.to_string();
    options.fontdb_mut().load_system_fonts();

    let tree = resvg::usvg::Tree::from_str(svg, &options)
        .map_err(|err| anyhow!("failed to parse generated SVG: {err}"))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        bail!("canvas collapsed to {width}x{height}");
    }

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("failed to allocate {width}x{height} surface"))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| anyhow!("failed to encode PNG output: {err}"))
}

/// Path of the output file: `<dir>/<stem>.<ext>`.
pub fn output_path(dir: &Path, stem: &str, format: ImageFormat) -> PathBuf {
    dir.join(format!("{stem}.{}", format.extension()))
}

/// File stem an input file's minimap is saved under.
pub fn output_stem(input: &Path) -> Result<String> {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("input path has no file name: {}", input.display()))
}

/// Write an encoded image, creating `dir` if needed. A partially written file is removed.
pub fn save(image: &RenderedImage, dir: &Path, stem: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = output_path(dir, stem, image.format);
    if let Err(err) = std::fs::write(&path, &image.bytes) {
        let _ = std::fs::remove_file(&path);
        return Err(err).with_context(|| format!("failed to write {}", path.display()));
    }

    tracing::debug!("Wrote {} bytes to {}", image.bytes.len(), path.display());
    Ok(path)
}
