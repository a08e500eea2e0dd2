//! SVG path import and scene export.
//!
//! Polygons are read from the straight-line subset of SVG path data and
//! written back as path strings or as a complete SVG document showing a clip
//! operation.
//!
//! # Supported Commands
//!
//! - `M`/`m` - Move to (absolute/relative), starts a new polygon
//! - `L`/`l` - Line to
//! - `H`/`h` - Horizontal line to
//! - `V`/`v` - Vertical line to
//! - `Z`/`z` - Close path
//!
//! Curve and arc commands are rejected.
//!
//! # Example
//!
//! ```
//! use weiler_clip::io::{parse_svg_polygon, polygon_to_svg_path};
//!
//! let poly = parse_svg_polygon::<f64>("M 0 0 L 10 0 L 10 10 Z").unwrap();
//! assert_eq!(poly.len(), 3);
//!
//! let d = polygon_to_svg_path(&poly);
//! assert_eq!(d, "M 0 0 L 10 0 L 10 10 Z");
//! ```

use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// Outline color of the subject polygon.
pub const SUBJECT_STROKE: &str = "#8080ff";
/// Outline color of the clip polygon.
pub const CLIP_STROKE: &str = "#ff8080";
/// Fill color of the clipped result.
pub const RESULT_FILL: &str = "#00ff00";
/// Scene background.
pub const BACKGROUND: &str = "#1a1a1a";

/// Error type for SVG path parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgParseError {
    /// Unexpected character encountered.
    UnexpectedChar(char, usize),
    /// Expected a number but found something else.
    ExpectedNumber(usize),
    /// Invalid number format.
    InvalidNumber(String, usize),
    /// A command other than M, L, H, V or Z.
    UnsupportedCommand(char, usize),
    /// A drawing command appeared before any move-to.
    MissingMoveTo(usize),
    /// The path contains no vertices.
    EmptyPath,
}

impl fmt::Display for SvgParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgParseError::UnexpectedChar(c, pos) => {
                write!(f, "Unexpected character '{}' at position {}", c, pos)
            }
            SvgParseError::ExpectedNumber(pos) => {
                write!(f, "Expected number at position {}", pos)
            }
            SvgParseError::InvalidNumber(s, pos) => {
                write!(f, "Invalid number '{}' at position {}", s, pos)
            }
            SvgParseError::UnsupportedCommand(c, pos) => {
                write!(f, "Unsupported command '{}' at position {}", c, pos)
            }
            SvgParseError::MissingMoveTo(pos) => {
                write!(f, "Drawing command before move-to at position {}", pos)
            }
            SvgParseError::EmptyPath => write!(f, "Path contains no vertices"),
        }
    }
}

impl std::error::Error for SvgParseError {}

/// Parses SVG path data into polygons, one per subpath.
///
/// An explicit closing vertex equal to the first vertex is dropped, since
/// polygons are implicitly closed.
///
/// # Example
///
/// ```
/// use weiler_clip::io::parse_svg_polygons;
///
/// let polys = parse_svg_polygons::<f64>("M0,0 h4 v4 h-4 z M10,10 l2,0 l0,2 z").unwrap();
/// assert_eq!(polys.len(), 2);
/// assert_eq!(polys[0].len(), 4);
/// assert_eq!(polys[1].len(), 3);
/// ```
pub fn parse_svg_polygons<F: Float + FromStr>(s: &str) -> Result<Vec<Polygon<F>>, SvgParseError> {
    PathParser::new(s).parse()
}

/// Parses SVG path data holding a single polygon.
///
/// Only the first subpath is used.
pub fn parse_svg_polygon<F: Float + FromStr>(s: &str) -> Result<Polygon<F>, SvgParseError> {
    parse_svg_polygons(s)?
        .into_iter()
        .next()
        .ok_or(SvgParseError::EmptyPath)
}

/// Converts a polyline to an SVG path string.
///
/// # Example
///
/// ```
/// use weiler_clip::{Point2, io::polyline_to_svg_path};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// let svg = polyline_to_svg_path(&points, true);
/// assert!(svg.starts_with("M"));
/// assert!(svg.ends_with("Z"));
/// ```
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut result = format!("M {} {}", first.x, first.y);
    for p in rest {
        let _ = write!(result, " L {} {}", p.x, p.y);
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Converts a polygon to an SVG path string.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &Polygon<F>) -> String {
    polyline_to_svg_path(&polygon.vertices, true)
}

/// A clip operation rendered as a standalone SVG document.
///
/// Subject and clip are drawn as outlines, the result polygons filled on
/// top.
///
/// # Example
///
/// ```
/// use weiler_clip::clip::clip_polygons;
/// use weiler_clip::io::{parse_svg_polygon, ClipScene};
///
/// let subject = parse_svg_polygon::<f64>("M 0 0 L 40 0 L 40 40 L 0 40 Z").unwrap();
/// let clip = parse_svg_polygon::<f64>("M 20 20 L 60 20 L 60 60 L 20 60 Z").unwrap();
/// let result = clip_polygons(&subject, &clip);
///
/// let svg = ClipScene::new(&subject, &clip, &result, 80.0, 80.0).to_svg();
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClipScene<'a, F> {
    pub subject: &'a Polygon<F>,
    pub clip: &'a Polygon<F>,
    pub result: &'a [Polygon<F>],
    pub width: F,
    pub height: F,
    /// Puts the origin at the bottom-left with y pointing up.
    pub flip_y: bool,
}

impl<'a, F: Float + fmt::Display> ClipScene<'a, F> {
    /// Creates a scene in SVG's native y-down orientation.
    pub fn new(
        subject: &'a Polygon<F>,
        clip: &'a Polygon<F>,
        result: &'a [Polygon<F>],
        width: F,
        height: F,
    ) -> Self {
        Self {
            subject,
            clip,
            result,
            width,
            height,
            flip_y: false,
        }
    }

    /// Sets whether y points up.
    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    /// Renders the scene.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = String::new();

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{BACKGROUND}"/>"#);

        if self.flip_y {
            let _ = writeln!(out, r#"<g transform="translate(0 {h}) scale(1 -1)">"#);
        } else {
            out.push_str("<g>\n");
        }

        outline(&mut out, self.subject, SUBJECT_STROKE, 2.0);
        outline(&mut out, self.clip, CLIP_STROKE, 2.0);
        for poly in self.result {
            if poly.is_empty() {
                continue;
            }
            let _ = writeln!(
                out,
                r#"<path d="{}" fill="{RESULT_FILL}" fill-opacity="0.8" stroke="{RESULT_FILL}" stroke-width="1"/>"#,
                polygon_to_svg_path(poly)
            );
        }

        out.push_str("</g>\n</svg>\n");
        out
    }
}

fn outline<F: Float + fmt::Display>(out: &mut String, poly: &Polygon<F>, color: &str, width: f64) {
    if poly.is_empty() {
        return;
    }
    let _ = writeln!(
        out,
        r#"<path d="{}" fill="none" stroke="{color}" stroke-width="{width}"/>"#,
        polygon_to_svg_path(poly)
    );
}

// ============================================================================
// Internal implementation
// ============================================================================

/// Collects subpaths into polygons while commands are parsed.
struct RingBuilder<F> {
    cursor: Point2<F>,
    start: Option<Point2<F>>,
    ring: Vec<Point2<F>>,
    polygons: Vec<Polygon<F>>,
}

impl<F: Float> RingBuilder<F> {
    fn new() -> Self {
        Self {
            cursor: Point2::origin(),
            start: None,
            ring: Vec::new(),
            polygons: Vec::new(),
        }
    }

    fn move_to(&mut self, p: Point2<F>) {
        self.flush();
        self.cursor = p;
        self.start = Some(p);
        self.ring.push(p);
    }

    fn line_to(&mut self, p: Point2<F>, pos: usize) -> Result<(), SvgParseError> {
        let start = self.start.ok_or(SvgParseError::MissingMoveTo(pos))?;
        // A drawing command after Z continues from the closed subpath's start.
        if self.ring.is_empty() {
            self.ring.push(start);
        }
        self.ring.push(p);
        self.cursor = p;
        Ok(())
    }

    fn close(&mut self) {
        self.flush();
        if let Some(start) = self.start {
            self.cursor = start;
        }
    }

    fn flush(&mut self) {
        let mut ring = std::mem::take(&mut self.ring);
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if !ring.is_empty() {
            self.polygons.push(Polygon::new(ring));
        }
    }

    fn finish(mut self) -> Vec<Polygon<F>> {
        self.flush();
        self.polygons
    }
}

/// SVG path parser.
struct PathParser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> PathParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn parse<F: Float + FromStr>(&mut self) -> Result<Vec<Polygon<F>>, SvgParseError> {
        let mut builder = RingBuilder::new();

        loop {
            self.skip_whitespace_and_commas();
            let Some((pos, c)) = self.chars.next() else {
                break;
            };

            if !c.is_ascii_alphabetic() {
                return Err(SvgParseError::UnexpectedChar(c, pos));
            }
            let relative = c.is_ascii_lowercase();

            match c.to_ascii_uppercase() {
                'M' => {
                    let p = self.parse_point(builder.cursor, relative)?;
                    builder.move_to(p);
                    // Subsequent pairs are implicit LineTo
                    while self.has_number() {
                        let p = self.parse_point(builder.cursor, relative)?;
                        builder.line_to(p, pos)?;
                    }
                }
                'L' => loop {
                    let p = self.parse_point(builder.cursor, relative)?;
                    builder.line_to(p, pos)?;
                    if !self.has_number() {
                        break;
                    }
                },
                'H' => loop {
                    let x: F = self.parse_number()?;
                    let x = if relative { builder.cursor.x + x } else { x };
                    builder.line_to(Point2::new(x, builder.cursor.y), pos)?;
                    if !self.has_number() {
                        break;
                    }
                },
                'V' => loop {
                    let y: F = self.parse_number()?;
                    let y = if relative { builder.cursor.y + y } else { y };
                    builder.line_to(Point2::new(builder.cursor.x, y), pos)?;
                    if !self.has_number() {
                        break;
                    }
                },
                'Z' => builder.close(),
                _ => return Err(SvgParseError::UnsupportedCommand(c, pos)),
            }
        }

        Ok(builder.finish())
    }

    fn parse_point<F: Float + FromStr>(
        &mut self,
        cursor: Point2<F>,
        relative: bool,
    ) -> Result<Point2<F>, SvgParseError> {
        let x: F = self.parse_number()?;
        let y: F = self.parse_number()?;
        if relative {
            Ok(Point2::new(cursor.x + x, cursor.y + y))
        } else {
            Ok(Point2::new(x, y))
        }
    }

    fn skip_whitespace_and_commas(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() || c == ',' {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn has_number(&mut self) -> bool {
        self.skip_whitespace_and_commas();
        if let Some(&(_, c)) = self.chars.peek() {
            c.is_ascii_digit() || c == '-' || c == '+' || c == '.'
        } else {
            false
        }
    }

    fn parse_number<F: Float + FromStr>(&mut self) -> Result<F, SvgParseError> {
        self.skip_whitespace_and_commas();

        let start = self.chars.peek().map(|&(i, _)| i).unwrap_or(self.input.len());
        let mut end = start;

        // Optional sign
        if let Some(&(_, c)) = self.chars.peek() {
            if c == '-' || c == '+' {
                self.chars.next();
            }
        }

        self.take_digits(&mut end);

        if let Some(&(_, '.')) = self.chars.peek() {
            self.chars.next();
            self.take_digits(&mut end);
        }

        if let Some(&(_, c)) = self.chars.peek() {
            if (c == 'e' || c == 'E') && end > start {
                self.chars.next();
                if let Some(&(_, c)) = self.chars.peek() {
                    if c == '-' || c == '+' {
                        self.chars.next();
                    }
                }
                self.take_digits(&mut end);
            }
        }

        if end == start {
            return Err(SvgParseError::ExpectedNumber(start));
        }

        let num_str = &self.input[start..end];
        num_str
            .parse()
            .map_err(|_| SvgParseError::InvalidNumber(num_str.to_string(), start))
    }

    fn take_digits(&mut self, end: &mut usize) {
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                *end = i + 1;
                self.chars.next();
            } else {
                break;
            }
        }
    }
}
