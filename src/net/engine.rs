//! Vertex computation for the outer triangle and its medial triangle

use log::{debug, warn};

use crate::error::NetError;
use crate::geometry::Point;

use super::config::{InnerMethod, NetConfig};
use super::types::{Triangle, TriangleNet};

/// Height of an equilateral triangle with unit side, sqrt(3)/2
pub const HEIGHT_RATIO: f64 = 0.866025403784439;

/// Compute both triangles of the net
pub fn compute(config: &NetConfig) -> Result<TriangleNet, NetError> {
    config.validate()?;
    if config.scale == 0.0 {
        warn!("scale is zero, all vertices coincide at ({}, {})", config.x0, config.y0);
    }

    let outer = outer_triangle(config);
    let inner = match config.inner {
        InnerMethod::Offset => inner_triangle(config),
        InnerMethod::Midpoint => {
            let [a, b, c] = outer.edge_midpoints();
            Triangle::new(a, b, c)
        }
    };
    let overflowed = outer
        .vertices
        .iter()
        .chain(inner.vertices.iter())
        .any(|p| !p.x.is_finite() || !p.y.is_finite());
    if overflowed {
        return Err(NetError::invalid("scale", "coordinates overflow"));
    }
    debug!("outer vertices: {:?}", outer.vertices);
    debug!("inner vertices ({:?}): {:?}", config.inner, inner.vertices);

    Ok(TriangleNet { outer, inner })
}

/// Equilateral triangle with its first vertex at the offset, the second to
/// its right and the apex `HEIGHT_RATIO * scale` away along y
fn outer_triangle(config: &NetConfig) -> Triangle {
    let NetConfig { scale, x0, y0, .. } = *config;
    Triangle::new(
        Point::new(0.0 * scale + x0, 0.0 * scale + y0),
        Point::new(1.0 * scale + x0, 0.0 * scale + y0),
        Point::new(0.5 * scale + x0, HEIGHT_RATIO * scale + y0),
    )
}

/// Medial triangle, placed relative to the outer triangle's mid-height
fn inner_triangle(config: &NetConfig) -> Triangle {
    let NetConfig { scale, x0, y0, .. } = *config;
    let half_height = HEIGHT_RATIO / 2.0;
    let ox = x0;
    let oy = y0 + half_height * scale;
    Triangle::new(
        Point::new(0.5 * scale + ox, -half_height * scale + oy),
        Point::new(0.25 * scale + ox, 0.0 * scale + oy),
        Point::new(0.75 * scale + ox, 0.0 * scale + oy),
    )
}
