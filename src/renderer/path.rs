//! Closed triangle paths and their SVG `d` descriptions

use crate::geometry::Point;
use crate::net::Triangle;

/// A segment of a path description
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Close path back to start
    Close,
}

/// Presentation attributes of a path element
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub stroke: String,
    pub stroke_width: f64,
    /// `None` leaves the interior transparent
    pub fill: Option<String>,
}

impl PathStyle {
    pub fn new(stroke: impl Into<String>, stroke_width: f64, fill: Option<&str>) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            fill: fill.map(str::to_string),
        }
    }

    /// Red outline on yellow, used for the cut outline
    pub fn outer() -> Self {
        Self::new("red", 1.0, Some("yellow"))
    }

    /// Unfilled blue outline, used for the fold lines
    pub fn inner() -> Self {
        Self::new("blue", 1.0, None)
    }

    /// Value for the `fill` attribute
    pub fn fill_attr(&self) -> &str {
        self.fill.as_deref().unwrap_or("none")
    }
}

/// A styled closed triangle ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TrianglePath {
    pub triangle: Triangle,
    pub style: PathStyle,
}

impl TrianglePath {
    pub fn new(triangle: Triangle, style: PathStyle) -> Self {
        Self { triangle, style }
    }

    /// Move to the first vertex, line through the others, close
    pub fn segments(&self) -> [PathSegment; 4] {
        let [a, b, c] = self.triangle.vertices;
        [
            PathSegment::MoveTo(a),
            PathSegment::LineTo(b),
            PathSegment::LineTo(c),
            PathSegment::Close,
        ]
    }

    /// Convert to SVG path `d` attribute string
    ///
    /// Coordinates use 3 decimals right-aligned in 7 columns, e.g.
    /// `M   2.000   2.000 L 102.000   2.000 L  52.000  88.603 Z`.
    pub fn to_svg_d(&self) -> String {
        self.segments()
            .iter()
            .map(|seg| match seg {
                PathSegment::MoveTo(p) => format!("M {:>7.3} {:>7.3}", p.x, p.y),
                PathSegment::LineTo(p) => format!("L {:>7.3} {:>7.3}", p.x, p.y),
                PathSegment::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
