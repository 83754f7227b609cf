//! SVG renderer for triangle nets
//!
//! Turns styled triangles into path elements and serializes them into a
//! minimal SVG document.

pub mod config;
pub mod path;
pub mod svg;

pub use config::{Profile, SvgConfig};
pub use path::{PathSegment, PathStyle, TrianglePath};
pub use svg::{render_svg, SvgBuilder};
