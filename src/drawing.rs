//! Drawing documents bound to an output file

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::NetError;
use crate::net::TriangleNet;
use crate::renderer::{render_svg, PathStyle, SvgConfig, TrianglePath};

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "triangle.svg";

/// An ordered collection of paths destined for one SVG file
#[derive(Debug, Clone)]
pub struct Drawing {
    paths: Vec<TrianglePath>,
    output: PathBuf,
    config: SvgConfig,
}

impl Drawing {
    /// Create an empty drawing
    pub fn new(output: impl Into<PathBuf>, config: SvgConfig) -> Self {
        Self {
            paths: vec![],
            output: output.into(),
            config,
        }
    }

    /// Create a drawing with the outer triangle followed by the inner one
    pub fn from_net(net: &TriangleNet, output: impl Into<PathBuf>, config: SvgConfig) -> Self {
        let mut drawing = Self::new(output, config);
        drawing.add(TrianglePath::new(net.outer, PathStyle::outer()));
        drawing.add(TrianglePath::new(net.inner, PathStyle::inner()));
        drawing
    }

    /// Append a path; later paths are painted on top
    pub fn add(&mut self, path: TrianglePath) {
        self.paths.push(path);
    }

    pub fn paths(&self) -> &[TrianglePath] {
        &self.paths
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn config(&self) -> &SvgConfig {
        &self.config
    }

    /// Serialize to an SVG string
    pub fn to_svg(&self) -> String {
        render_svg(&self.paths, &self.config)
    }

    /// Write the SVG document to the output path
    pub fn save(&self) -> Result<(), NetError> {
        fs::write(&self.output, self.to_svg()).map_err(|e| NetError::io(&self.output, e))?;
        info!(
            "wrote {} path(s) to {}",
            self.paths.len(),
            self.output.display()
        );
        Ok(())
    }

    /// Print the SVG document to `out` when `to_stdout` is set; otherwise
    /// print one path description per line and save to the output file
    pub fn emit<W: Write>(&self, to_stdout: bool, out: &mut W) -> Result<(), NetError> {
        if to_stdout {
            return write!(out, "{}", self.to_svg()).map_err(|e| NetError::io("<stdout>", e));
        }
        for path in &self.paths {
            writeln!(out, "{}", path.to_svg_d()).map_err(|e| NetError::io("<stdout>", e))?;
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{compute, NetConfig};

    fn default_drawing(output: impl Into<PathBuf>) -> Drawing {
        let net = compute(&NetConfig::default()).unwrap();
        Drawing::from_net(&net, output, SvgConfig::default())
    }

    #[test]
    fn test_from_net_orders_outer_first() {
        let drawing = default_drawing(DEFAULT_OUTPUT);
        assert_eq!(drawing.paths().len(), 2);
        assert_eq!(drawing.paths()[0].style, PathStyle::outer());
        assert_eq!(drawing.paths()[1].style, PathStyle::inner());
        assert_eq!(drawing.output(), Path::new("triangle.svg"));
    }

    #[test]
    fn test_save_and_reload() {
        let path =
            std::env::temp_dir().join(format!("tetra-net-drawing-{}.svg", std::process::id()));
        let drawing = default_drawing(&path);
        drawing.save().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(written, drawing.to_svg());
    }

    #[test]
    fn test_emit_to_stdout_skips_file() {
        let path = std::env::temp_dir().join(format!("tetra-net-emit-{}.svg", std::process::id()));
        let drawing = default_drawing(&path);
        let mut out = Vec::new();
        drawing.emit(true, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), drawing.to_svg());
        assert!(!path.exists());
    }

    #[test]
    fn test_emit_prints_paths_and_saves() {
        let path =
            std::env::temp_dir().join(format!("tetra-net-emit-file-{}.svg", std::process::id()));
        let drawing = default_drawing(&path);
        let mut out = Vec::new();
        drawing.emit(false, &mut out).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(
            lines,
            vec![
                "M   2.000   2.000 L 102.000   2.000 L  52.000  88.603 Z",
                "M  52.000   2.000 L  27.000  45.301 L  77.000  45.301 Z",
            ]
        );
        assert_eq!(written, drawing.to_svg());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let drawing = default_drawing("/nonexistent-dir/sub/triangle.svg");
        let err = drawing.save().unwrap_err();
        assert!(matches!(err, NetError::Io { .. }));
    }
}
