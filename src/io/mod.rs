//! Input/output utilities for polygons.
//!
//! Provides SVG path parsing and serialization, plus a renderer that draws a
//! clip operation as a standalone SVG document.

mod svg;

pub use svg::{
    parse_svg_polygon, parse_svg_polygons, polygon_to_svg_path, polyline_to_svg_path, ClipScene,
    SvgParseError, BACKGROUND, CLIP_STROKE, RESULT_FILL, SUBJECT_STROKE,
};
