//! SVG export for paths.
//!
//! Arcs are written as native SVG `A` commands, so a smooth rounded
//! rectangle round-trips through SVG without approximation.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use squircle::smooth_round_rect;
//! use squircle::svg::{SvgDocument, SvgStyle};
//!
//! let path = smooth_round_rect(Vec2::ZERO, Vec2::new(100.0, 60.0), 0.8, 12.0);
//! let mut doc = SvgDocument::new(100.0, 60.0);
//! doc.add_path(&path, SvgStyle::fill("#202124"));
//! let svg = doc.to_svg_string();
//! assert!(svg.contains("<path"));
//! ```

use std::fmt::Write as _;

use glam::Vec2;

use crate::arc::{ArcDirection, ArcSize};
use crate::path::{Path, PathCommand};

/// Error writing an SVG document.
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    /// Underlying file I/O failure.
    #[error("failed to write SVG: {0}")]
    Io(#[from] std::io::Error),
}

/// Style for SVG elements.
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Fill color (None for no fill).
    pub fill: Option<String>,
    /// Stroke color (None for no stroke).
    pub stroke: Option<String>,
    /// Stroke width.
    pub stroke_width: f32,
    /// Fill opacity (0.0 to 1.0).
    pub fill_opacity: f32,
    /// Stroke opacity (0.0 to 1.0).
    pub stroke_opacity: f32,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            fill: Some("black".to_string()),
            stroke: None,
            stroke_width: 1.0,
            fill_opacity: 1.0,
            stroke_opacity: 1.0,
        }
    }
}

impl SvgStyle {
    /// Creates a style with only fill.
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            stroke: None,
            ..Default::default()
        }
    }

    /// Creates a style with only stroke.
    pub fn stroke(color: impl Into<String>, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(color.into()),
            stroke_width: width,
            ..Default::default()
        }
    }

    /// Creates a style with both fill and stroke.
    pub fn fill_stroke(
        fill_color: impl Into<String>,
        stroke_color: impl Into<String>,
        stroke_width: f32,
    ) -> Self {
        Self {
            fill: Some(fill_color.into()),
            stroke: Some(stroke_color.into()),
            stroke_width,
            ..Default::default()
        }
    }

    /// Converts the style to SVG attribute string.
    fn to_attributes(&self) -> String {
        let mut attrs = String::new();

        match &self.fill {
            Some(color) => write!(&mut attrs, "fill=\"{}\" ", color).unwrap(),
            None => attrs.push_str("fill=\"none\" "),
        }

        if self.fill_opacity < 1.0 {
            write!(&mut attrs, "fill-opacity=\"{:.3}\" ", self.fill_opacity).unwrap();
        }

        if let Some(color) = &self.stroke {
            write!(&mut attrs, "stroke=\"{}\" ", color).unwrap();
            write!(&mut attrs, "stroke-width=\"{:.3}\" ", self.stroke_width).unwrap();

            if self.stroke_opacity < 1.0 {
                write!(&mut attrs, "stroke-opacity=\"{:.3}\" ", self.stroke_opacity).unwrap();
            }
        }

        attrs.trim_end().to_string()
    }
}

/// An SVG document containing paths and rectangles.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    /// Document width.
    pub width: f32,
    /// Document height.
    pub height: f32,
    /// Elements in the document.
    elements: Vec<SvgElement>,
}

/// An element in an SVG document.
#[derive(Debug, Clone)]
enum SvgElement {
    Path {
        data: String,
        style: SvgStyle,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: SvgStyle,
    },
}

impl SvgDocument {
    /// Creates a new SVG document with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Adds a path to the document.
    pub fn add_path(&mut self, path: &Path, style: SvgStyle) {
        let data = path_to_svg_data(path);
        self.elements.push(SvgElement::Path { data, style });
    }

    /// Adds a rectangle to the document.
    pub fn add_rect(&mut self, pos: Vec2, size: Vec2, style: SvgStyle) {
        self.elements.push(SvgElement::Rect {
            x: pos.x,
            y: pos.y,
            width: size.x,
            height: size.y,
            style,
        });
    }

    /// Converts the document to an SVG string.
    pub fn to_svg_string(&self) -> String {
        let mut svg = String::new();

        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        write!(
            &mut svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.3}\" height=\"{:.3}\">\n",
            self.width, self.height
        )
        .unwrap();

        for element in &self.elements {
            write_element(&mut svg, element);
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Writes the document to a file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), SvgError> {
        std::fs::write(path, self.to_svg_string())?;
        Ok(())
    }
}

impl std::fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_svg_string())
    }
}

/// Writes an SVG element to a string.
fn write_element(svg: &mut String, element: &SvgElement) {
    match element {
        SvgElement::Path { data, style } => {
            write!(svg, "  <path d=\"{}\" {}/>\n", data, style.to_attributes()).unwrap();
        }
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            style,
        } => {
            write!(
                svg,
                "  <rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\" {}/>\n",
                x,
                y,
                width,
                height,
                style.to_attributes()
            )
            .unwrap();
        }
    }
}

/// Converts a Path to SVG path data string. Arc rotations are converted
/// from radians to the degrees SVG expects.
pub fn path_to_svg_data(path: &Path) -> String {
    let mut data = String::new();

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                write!(&mut data, "M{:.3},{:.3} ", p.x, p.y).unwrap();
            }
            PathCommand::LineTo(p) => {
                write!(&mut data, "L{:.3},{:.3} ", p.x, p.y).unwrap();
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                write!(
                    &mut data,
                    "C{:.3},{:.3} {:.3},{:.3} {:.3},{:.3} ",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                )
                .unwrap();
            }
            PathCommand::ArcTo {
                radii,
                rotation,
                size,
                direction,
                to,
            } => {
                let large = match size {
                    ArcSize::Small => 0,
                    ArcSize::Large => 1,
                };
                let sweep = match direction {
                    ArcDirection::Clockwise => 1,
                    ArcDirection::CounterClockwise => 0,
                };
                write!(
                    &mut data,
                    "A{:.3},{:.3} {:.3} {} {} {:.3},{:.3} ",
                    radii.x,
                    radii.y,
                    rotation.to_degrees(),
                    large,
                    sweep,
                    to.x,
                    to.y
                )
                .unwrap();
            }
            PathCommand::Close => {
                data.push_str("Z ");
            }
        }
    }

    data.trim_end().to_string()
}

/// Converts a Path to a complete SVG string (simple helper).
pub fn path_to_svg(path: &Path, width: f32, height: f32, style: SvgStyle) -> String {
    let mut doc = SvgDocument::new(width, height);
    doc.add_path(path, style);
    doc.to_svg_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathBuilder;

    #[test]
    fn test_path_data_commands() {
        let path = PathBuilder::new()
            .move_to(Vec2::ZERO)
            .line_to(Vec2::new(10.0, 0.0))
            .arc_to(
                Vec2::splat(5.0),
                0.0,
                ArcSize::Small,
                ArcDirection::Clockwise,
                Vec2::new(15.0, 5.0),
            )
            .close()
            .build();

        let data = path_to_svg_data(&path);
        assert!(data.starts_with("M0.000,0.000"));
        assert!(data.contains("L10.000,0.000"));
        assert!(data.contains("A5.000,5.000 0.000 0 1 15.000,5.000"));
        assert!(data.ends_with('Z'));
    }

    #[test]
    fn test_document_structure() {
        let path = crate::rect(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let mut doc = SvgDocument::new(20.0, 20.0);
        doc.add_path(&path, SvgStyle::fill_stroke("#fff", "#000", 2.0));
        doc.add_rect(Vec2::ZERO, Vec2::splat(20.0), SvgStyle::stroke("#888", 1.0));

        let svg = doc.to_svg_string();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg xmlns"));
        assert!(svg.contains("<path"));
        assert!(svg.contains("<rect"));
        assert!(svg.contains("stroke-width=\"2.000\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_stroke_only_has_no_fill() {
        let attrs = SvgStyle::stroke("#123456", 1.5).to_attributes();
        assert!(attrs.contains("fill=\"none\""));
        assert!(attrs.contains("stroke=\"#123456\""));
    }
}
