//! Tetra Net - cutting layouts for foldable tetrahedra
//!
//! Computes an equilateral triangle together with its medial triangle and
//! writes both as SVG paths for a laser cutter. Cutting the outer triangle
//! and folding along the inner one gives a regular tetrahedron.
//!
//! # Example
//!
//! ```rust
//! use tetra_net::{generate, NetConfig};
//!
//! let [outer, inner] = generate(&NetConfig::default()).unwrap();
//! assert_eq!(
//!     outer.to_svg_d(),
//!     "M   2.000   2.000 L 102.000   2.000 L  52.000  88.603 Z"
//! );
//! assert_eq!(inner.style.fill_attr(), "none");
//! ```

pub mod drawing;
pub mod error;
pub mod geometry;
pub mod net;
pub mod netfile;
pub mod renderer;

pub use drawing::{Drawing, DEFAULT_OUTPUT};
pub use error::NetError;
pub use geometry::Point;
pub use net::{compute, InnerMethod, NetConfig, Triangle, TriangleNet};
pub use netfile::{NetFile, Overrides, Resolved};
pub use renderer::{render_svg, PathStyle, Profile, SvgConfig, TrianglePath};

use std::path::PathBuf;

/// Compute the styled outer and inner paths of a net
pub fn generate(config: &NetConfig) -> Result<[TrianglePath; 2], NetError> {
    let net = compute(config)?;
    Ok([
        TrianglePath::new(net.outer, PathStyle::outer()),
        TrianglePath::new(net.inner, PathStyle::inner()),
    ])
}

/// Compute a net and bind it to an output file
///
/// # Example
///
/// ```rust
/// use tetra_net::{build_drawing, NetConfig, SvgConfig};
///
/// let drawing = build_drawing(&NetConfig::default(), "net.svg", SvgConfig::default()).unwrap();
/// let svg = drawing.to_svg();
/// assert!(svg.contains(r#"baseProfile="tiny""#));
/// assert_eq!(svg.matches("<path ").count(), 2);
/// ```
pub fn build_drawing(
    config: &NetConfig,
    output: impl Into<PathBuf>,
    svg: SvgConfig,
) -> Result<Drawing, NetError> {
    let net = compute(config)?;
    Ok(Drawing::from_net(&net, output, svg))
}
