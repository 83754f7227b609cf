//! Configuration for SVG rendering

use clap::ValueEnum;
use serde::Deserialize;

/// SVG feature profile declared on the root element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// SVG Tiny 1.2, enough for plain paths
    #[default]
    Tiny,
    /// SVG 1.1 full profile
    Full,
}

impl Profile {
    /// Value of the `baseProfile` attribute
    pub fn base_profile(&self) -> &'static str {
        match self {
            Profile::Tiny => "tiny",
            Profile::Full => "full",
        }
    }

    /// Value of the `version` attribute
    pub fn version(&self) -> &'static str {
        match self {
            Profile::Tiny => "1.2",
            Profile::Full => "1.1",
        }
    }
}

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Declared profile
    pub profile: Profile,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to put each element on its own indented line
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Tiny,
            standalone: true,
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the declared profile
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
