//! TOML net files
//!
//! A net file presets the geometry and output options so a layout can be
//! regenerated without repeating command-line flags. Every key is optional:
//!
//! ```toml
//! [net]
//! scale = 100.0
//! x0 = 2.0
//! y0 = 2.0
//! inner = "offset"
//!
//! [output]
//! path = "triangle.svg"
//! profile = "tiny"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::drawing::DEFAULT_OUTPUT;
use crate::error::NetError;
use crate::net::{InnerMethod, NetConfig};
use crate::renderer::{Profile, SvgConfig};

/// Parsed contents of a net file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetFile {
    pub net: NetSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetSection {
    pub scale: Option<f64>,
    pub x0: Option<f64>,
    pub y0: Option<f64>,
    pub inner: Option<InnerMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub path: Option<PathBuf>,
    pub profile: Option<Profile>,
}

/// Values given explicitly, e.g. on the command line; they take
/// precedence over the net file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub scale: Option<f64>,
    pub x0: Option<f64>,
    pub y0: Option<f64>,
    pub inner: Option<InnerMethod>,
    pub profile: Option<Profile>,
    pub output: Option<PathBuf>,
}

/// Final settings for one run
#[derive(Debug, Clone)]
pub struct Resolved {
    pub net: NetConfig,
    pub svg: SvgConfig,
    pub output: PathBuf,
}

impl NetFile {
    /// Load a net file from disk
    pub fn from_file(path: &Path) -> Result<Self, NetError> {
        let content = std::fs::read_to_string(path).map_err(|e| NetError::io(path, e))?;
        Self::from_str(&content)
    }

    /// Parse a net file from a TOML string
    pub fn from_str(content: &str) -> Result<Self, NetError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay the values present in this file onto a net configuration
    pub fn apply_net(&self, mut config: NetConfig) -> NetConfig {
        if let Some(scale) = self.net.scale {
            config.scale = scale;
        }
        if let Some(x0) = self.net.x0 {
            config.x0 = x0;
        }
        if let Some(y0) = self.net.y0 {
            config.y0 = y0;
        }
        if let Some(inner) = self.net.inner {
            config.inner = inner;
        }
        config
    }

    /// Overlay the output profile onto an SVG configuration
    pub fn apply_svg(&self, config: SvgConfig) -> SvgConfig {
        match self.output.profile {
            Some(profile) => config.with_profile(profile),
            None => config,
        }
    }

    /// Merge defaults, this file and explicit overrides, in increasing
    /// precedence
    pub fn resolve(&self, overrides: &Overrides) -> Resolved {
        let mut net = self.apply_net(NetConfig::default());
        if let Some(scale) = overrides.scale {
            net.scale = scale;
        }
        if let Some(x0) = overrides.x0 {
            net.x0 = x0;
        }
        if let Some(y0) = overrides.y0 {
            net.y0 = y0;
        }
        if let Some(inner) = overrides.inner {
            net.inner = inner;
        }

        let mut svg = self.apply_svg(SvgConfig::default());
        if let Some(profile) = overrides.profile {
            svg = svg.with_profile(profile);
        }

        let output = overrides
            .output
            .clone()
            .or_else(|| self.output.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Resolved { net, svg, output }
    }
}
