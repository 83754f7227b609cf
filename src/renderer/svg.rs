//! SVG document generation from triangle paths

use super::path::TrianglePath;
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a closed path element
    pub fn add_path(&mut self, path: &TrianglePath) {
        let style = &path.style;
        self.elements.push(format!(
            r#"{}<path d="{}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
            self.indent_str(),
            path.to_svg_d(),
            escape_xml(&style.stroke),
            style.stroke_width,
            escape_xml(style.fill_attr()),
        ));
    }

    /// Number of elements added so far
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let profile = self.config.profile;

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="{}" baseProfile="{}" width="100%" height="100%">"#,
            profile.version(),
            profile.base_profile()
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Render paths, in order, to an SVG string
pub fn render_svg(paths: &[TrianglePath], config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    for path in paths {
        builder.add_path(path);
    }
    builder.build()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
