//! Configuration for net generation

use serde::Deserialize;

use crate::error::NetError;

/// How the inner (medial) triangle's vertices are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InnerMethod {
    /// Offset from the outer triangle's mid-height; reproduces the
    /// reference coordinates bit for bit
    #[default]
    Offset,
    /// Average the endpoints of each outer edge
    Midpoint,
}

/// Geometry parameters for a tetrahedron net
#[derive(Debug, Clone, PartialEq)]
pub struct NetConfig {
    /// Side length of the outer triangle
    pub scale: f64,

    /// Horizontal offset of the first outer vertex
    pub x0: f64,

    /// Vertical offset of the first outer vertex
    pub y0: f64,

    /// Inner triangle construction
    pub inner: InnerMethod,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            x0: 2.0,
            y0: 2.0,
            inner: InnerMethod::Offset,
        }
    }
}

impl NetConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outer side length
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the position of the first outer vertex
    pub fn with_offset(mut self, x0: f64, y0: f64) -> Self {
        self.x0 = x0;
        self.y0 = y0;
        self
    }

    /// Set the inner triangle construction
    pub fn with_inner(mut self, inner: InnerMethod) -> Self {
        self.inner = inner;
        self
    }

    /// Check that every value is usable for coordinate generation
    ///
    /// A zero scale is allowed and yields coincident vertices.
    pub fn validate(&self) -> Result<(), NetError> {
        if !self.scale.is_finite() {
            return Err(NetError::invalid("scale", "must be a finite number"));
        }
        if self.scale < 0.0 {
            return Err(NetError::invalid(
                "scale",
                format!("must not be negative (got {})", self.scale),
            ));
        }
        if !self.x0.is_finite() {
            return Err(NetError::invalid("x0", "must be a finite number"));
        }
        if !self.y0.is_finite() {
            return Err(NetError::invalid("y0", "must be a finite number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NetConfig::default();
        assert_eq!(config.scale, 100.0);
        assert_eq!(config.x0, 2.0);
        assert_eq!(config.y0, 2.0);
        assert_eq!(config.inner, InnerMethod::Offset);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = NetConfig::new()
            .with_scale(40.0)
            .with_offset(-5.0, 7.5)
            .with_inner(InnerMethod::Midpoint);

        assert_eq!(config.scale, 40.0);
        assert_eq!(config.x0, -5.0);
        assert_eq!(config.y0, 7.5);
        assert_eq!(config.inner, InnerMethod::Midpoint);
    }

    #[test]
    fn test_zero_scale_is_valid() {
        assert!(NetConfig::new().with_scale(0.0).validate().is_ok());
    }

    #[test]
    fn test_negative_scale_rejected() {
        let err = NetConfig::new().with_scale(-1.0).validate().unwrap_err();
        assert!(matches!(err, NetError::InvalidConfig { field: "scale", .. }));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(NetConfig::new().with_scale(f64::NAN).validate().is_err());
        assert!(NetConfig::new().with_scale(f64::INFINITY).validate().is_err());
        let err = NetConfig::new()
            .with_offset(f64::NEG_INFINITY, 0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, NetError::InvalidConfig { field: "x0", .. }));
        let err = NetConfig::new()
            .with_offset(0.0, f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, NetError::InvalidConfig { field: "y0", .. }));
    }
}
