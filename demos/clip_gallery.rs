//! Renders a gallery of clip operations as SVG files.
//!
//! Run with: cargo run --example clip_gallery
//!
//! Set `RUST_LOG=weiler_clip=debug` to watch the clipper's stages.

use std::fs;
use tracing::info;
use weiler_clip::io::{parse_svg_polygon, ClipScene};
use weiler_clip::{clip_polygons, Point2, Polygon};

const SIZE: f64 = 400.0;
const SCALE: f64 = 40.0;
const MARGIN: f64 = 60.0;
const OUT_DIR: &str = "gallery";

/// A named subject/clip pair in scene units.
struct Scene {
    name: &'static str,
    subject: &'static str,
    clip: &'static str,
}

const SCENES: &[Scene] = &[
    Scene {
        name: "overlapping_squares",
        subject: "M 0 0 L 4 0 L 4 4 L 0 4 Z",
        clip: "M 2 2 L 6 2 L 6 6 L 2 6 Z",
    },
    Scene {
        name: "u_shape_and_bar",
        subject: "M 0 0 H 6 V 6 H 4 V 2 H 2 V 6 H 0 Z",
        clip: "M -1 3 H 7 V 5 H -1 Z",
    },
    Scene {
        name: "diamond_and_square",
        subject: "M 2 -1 L 5 2 L 2 5 L -1 2 Z",
        clip: "M 0 0 H 4 V 4 H 0 Z",
    },
    Scene {
        name: "triangle_inside_square",
        subject: "M 1 1 L 3 1 L 2 3 Z",
        clip: "M 0 0 H 4 V 4 H 0 Z",
    },
    Scene {
        name: "comb_and_triangle",
        subject: "M 0 0 H 6 V 5 H 5 V 1 H 4 V 5 H 3 V 1 H 2 V 5 H 1 V 1 H 0 Z",
        clip: "M -0.5 2 L 6.5 2 L 3 6 Z",
    },
];

/// Maps scene units onto the canvas.
fn to_canvas(poly: &Polygon<f64>) -> Polygon<f64> {
    Polygon::new(
        poly.vertices
            .iter()
            .map(|p| Point2::new(MARGIN + p.x * SCALE, MARGIN + p.y * SCALE))
            .collect(),
    )
}

fn main() {
    tracing_subscriber::fmt::init();

    fs::create_dir_all(OUT_DIR).unwrap();

    for scene in SCENES {
        let subject = parse_svg_polygon::<f64>(scene.subject).unwrap();
        let clip = parse_svg_polygon::<f64>(scene.clip).unwrap();

        let result = clip_polygons(&subject, &clip);
        let area: f64 = result.iter().map(|p| p.area()).sum();
        info!(
            scene = scene.name,
            polygons = result.len(),
            area,
            "clipped"
        );

        let subject = to_canvas(&subject);
        let clip = to_canvas(&clip);
        let result: Vec<_> = result.iter().map(to_canvas).collect();

        let svg = ClipScene::new(&subject, &clip, &result, SIZE, SIZE)
            .with_flip_y(true)
            .to_svg();
        let path = format!("{}/{}.svg", OUT_DIR, scene.name);
        fs::write(&path, svg).unwrap();
    }

    println!("Generated {} scenes in {}/", SCENES.len(), OUT_DIR);
}
