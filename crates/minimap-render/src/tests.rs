//! Unit tests for minimap-render

use crate::svg::escape_xml;
use crate::*;
use minimap_core::{Canvas, Color, Minimap, MinimapConfig, Point};
use tempfile::TempDir;

const TWO_ACTORS: &str = r#"[{
    "PathActorA": {"X": 0, "Y": 0, "HiddenPath": false, "Link": ["PathActorB"],
        "FastTravel": "W", "UniqueLabel": "None"},
    "PathActorB": {"X": 0, "Y": 100, "HiddenPath": true, "Link": ["PathActorA"],
        "FastTravel": "None", "UniqueLabel": "W"}
}]"#;

fn small_config() -> MinimapConfig {
    MinimapConfig {
        path_width: 10.0,
        margin: 40,
        font_size: 8.0,
        ..MinimapConfig::default()
    }
}

#[test]
fn test_svg_document_is_flipped() {
    let mut canvas = SvgCanvas::new(20, 10, 9.0, "Arial");
    canvas.line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &Color::new("white"), 10.0);
    canvas.filled_circle(Point::new(10.0, 0.0), 5.0, &Color::new("gray"));
    canvas.centered_text(Point::new(10.0, 0.0), "3", &Color::new("white"));

    insta::assert_snapshot!(canvas.finish(), @r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10">
      <g transform="matrix(1 0 0 -1 0 10)">
        <line x1="0" y1="0" x2="10" y2="0" stroke="white" stroke-width="10" />
        <circle cx="10" cy="0" r="5" fill="gray" />
        <text transform="matrix(1 0 0 -1 10 0)" text-anchor="middle" dominant-baseline="central" font-family="Arial" font-size="9" fill="white">3</text>
      </g>
    </svg>
    "#);
}

#[test]
fn test_escape_xml() {
    assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
    assert_eq!(escape_xml("#1e90ff"), "#1e90ff");
}

#[test]
fn test_canvas_sized_from_bounds() {
    let map = Minimap::from_json_str(TWO_ACTORS, small_config()).unwrap();
    let canvas = SvgCanvas::for_minimap(&map);
    assert_eq!(canvas.width(), 140);
    assert_eq!(canvas.height(), 40);
}

#[test]
fn test_render_svg_contains_all_primitives() {
    let map = Minimap::from_json_str(TWO_ACTORS, small_config()).unwrap();
    let image = render(&map, ImageFormat::Svg).unwrap();
    let svg = String::from_utf8(image.bytes).unwrap();

    assert_eq!(svg.matches("<line ").count(), 1);
    // Two base discs and two warp discs.
    assert_eq!(svg.matches("<circle ").count(), 4);
    assert_eq!(svg.matches(">0</text>").count(), 2);
    assert!(svg.contains(r#"stroke="gray""#));
    assert_eq!(image.report.rendered.len(), 2);
}

#[test]
fn test_render_png() {
    let map = Minimap::from_json_str(TWO_ACTORS, small_config()).unwrap();
    let image = render(&map, ImageFormat::Png).unwrap();
    assert_eq!(&image.bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn test_image_format_parsing() {
    assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
    assert_eq!("SVG".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
    assert!("gif".parse::<ImageFormat>().is_err());
    assert_eq!(ImageFormat::default(), ImageFormat::Png);
}

#[test]
fn test_output_naming() {
    let stem = output_stem(std::path::Path::new("data/Map_Field_01.json")).unwrap();
    assert_eq!(stem, "Map_Field_01");
    assert_eq!(
        output_path(std::path::Path::new("out"), &stem, ImageFormat::Png),
        std::path::PathBuf::from("out/Map_Field_01.png")
    );
}

#[test]
fn test_save_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("nested/minimaps");

    let map = Minimap::from_json_str(TWO_ACTORS, small_config()).unwrap();
    let image = render(&map, ImageFormat::Svg).unwrap();
    let path = save(&image, &dir, "field").unwrap();

    assert_eq!(path, dir.join("field.svg"));
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, image.bytes);
}

#[test]
fn test_save_fails_when_directory_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("taken");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let map = Minimap::from_json_str(TWO_ACTORS, small_config()).unwrap();
    let image = render(&map, ImageFormat::Svg).unwrap();
    assert!(save(&image, &blocker, "field").is_err());
}
