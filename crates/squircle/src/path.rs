//! 2D path representation and building.

use glam::Vec2;

use crate::arc::{ArcDirection, ArcSize, CenterArc};
use crate::bezier::cubic_point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A path command in an SVG-like path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Vec2),
    /// Draw a line to a point.
    LineTo(Vec2),
    /// Cubic bezier curve to a point with two control points.
    CubicTo {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
    /// Elliptical arc to a point, endpoint form. `rotation` is the
    /// x-axis rotation in radians.
    ArcTo {
        radii: Vec2,
        rotation: f32,
        size: ArcSize,
        direction: ArcDirection,
        to: Vec2,
    },
    /// Close the current subpath by drawing a line to the start.
    Close,
}

/// A 2D path consisting of path commands.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns true if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Appends commands from another path.
    pub fn extend(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Translates the path by an offset.
    pub fn translate(&mut self, offset: Vec2) {
        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p += offset,
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    *control1 += offset;
                    *control2 += offset;
                    *to += offset;
                }
                PathCommand::ArcTo { to, .. } => *to += offset,
                PathCommand::Close => {}
            }
        }
    }

    /// Scales the path uniformly about the origin. Arc radii scale with
    /// the points, so the shape stays self-similar.
    pub fn scale(&mut self, factor: f32) {
        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p *= factor,
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    *control1 *= factor;
                    *control2 *= factor;
                    *to *= factor;
                }
                PathCommand::ArcTo { radii, to, .. } => {
                    *radii *= factor;
                    *to *= factor;
                }
                PathCommand::Close => {}
            }
        }
    }

    /// Approximates the path as a polyline, sampling each curve and arc
    /// with `segments_per_curve` segments. A closed subpath repeats its
    /// starting point at the end.
    pub fn flatten(&self, segments_per_curve: usize) -> Vec<Vec2> {
        let n = segments_per_curve.max(1);
        let mut points = Vec::new();
        let mut current = Vec2::ZERO;
        let mut start = Vec2::ZERO;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    points.push(p);
                    current = p;
                    start = p;
                }
                PathCommand::LineTo(p) => {
                    points.push(p);
                    current = p;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    for i in 1..=n {
                        let t = i as f32 / n as f32;
                        points.push(cubic_point(current, control1, control2, to, t));
                    }
                    current = to;
                }
                PathCommand::ArcTo {
                    radii,
                    rotation,
                    size,
                    direction,
                    to,
                } => {
                    match CenterArc::from_endpoints(current, to, radii, rotation, size, direction)
                    {
                        Some(arc) => {
                            for i in 1..=n {
                                points.push(arc.point_at(i as f32 / n as f32));
                            }
                        }
                        // Degenerate chord, nothing to sweep.
                        None => points.push(to),
                    }
                    current = to;
                }
                PathCommand::Close => {
                    points.push(start);
                    current = start;
                }
            }
        }

        points
    }

    /// Returns the approximate axis-aligned bounding box as
    /// `(min, max)`, or `None` for an empty path. Curves are sampled,
    /// not solved exactly.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let points = self.flatten(16);
        let first = *points.first()?;
        Some(
            points
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

/// Builder for constructing paths.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    /// Creates a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to a point without drawing.
    pub fn move_to(mut self, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::MoveTo(to));
        self
    }

    /// Draws a line to a point.
    pub fn line_to(mut self, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Draws a cubic bezier curve.
    pub fn cubic_to(mut self, control1: Vec2, control2: Vec2, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    /// Draws an elliptical arc from the current point, endpoint form.
    pub fn arc_to(
        mut self,
        radii: Vec2,
        rotation: f32,
        size: ArcSize,
        direction: ArcDirection,
        to: Vec2,
    ) -> Self {
        self.path.commands.push(PathCommand::ArcTo {
            radii,
            rotation,
            size,
            direction,
            to,
        });
        self
    }

    /// Closes the current subpath.
    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    /// Builds the final path.
    pub fn build(self) -> Path {
        self.path
    }
}

// Path primitives

/// Cubic control offset ratio for a quarter-circle arc,
/// `4/3 * tan(π/8)`.
const ARC_CONTROL_RATIO: f32 = 0.552_284_8;

/// Creates a rectangle.
pub fn rect(min: Vec2, max: Vec2) -> Path {
    PathBuilder::new()
        .move_to(min)
        .line_to(Vec2::new(max.x, min.y))
        .line_to(max)
        .line_to(Vec2::new(min.x, max.y))
        .close()
        .build()
}

/// Creates a rounded rectangle with plain quarter-circle corners,
/// approximated with cubic beziers.
///
/// This is the companion to [`smooth_round_rect`](crate::smooth_round_rect)
/// for the unsmoothed case. The radius is clamped to half the smaller
/// dimension; a non-positive radius falls back to [`rect`].
pub fn round_rect(min: Vec2, max: Vec2, radius: f32) -> Path {
    let r = radius.min((max.x - min.x) / 2.0).min((max.y - min.y) / 2.0);

    if r <= 0.0 {
        return rect(min, max);
    }

    let k = ARC_CONTROL_RATIO * r;

    PathBuilder::new()
        // Start at top-left, after corner
        .move_to(Vec2::new(min.x + r, min.y))
        // Top edge
        .line_to(Vec2::new(max.x - r, min.y))
        // Top-right corner
        .cubic_to(
            Vec2::new(max.x - r + k, min.y),
            Vec2::new(max.x, min.y + r - k),
            Vec2::new(max.x, min.y + r),
        )
        // Right edge
        .line_to(Vec2::new(max.x, max.y - r))
        // Bottom-right corner
        .cubic_to(
            Vec2::new(max.x, max.y - r + k),
            Vec2::new(max.x - r + k, max.y),
            Vec2::new(max.x - r, max.y),
        )
        // Bottom edge
        .line_to(Vec2::new(min.x + r, max.y))
        // Bottom-left corner
        .cubic_to(
            Vec2::new(min.x + r - k, max.y),
            Vec2::new(min.x, max.y - r + k),
            Vec2::new(min.x, max.y - r),
        )
        // Left edge
        .line_to(Vec2::new(min.x, min.y + r))
        // Top-left corner
        .cubic_to(
            Vec2::new(min.x, min.y + r - k),
            Vec2::new(min.x + r - k, min.y),
            Vec2::new(min.x + r, min.y),
        )
        .close()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(Vec2::ZERO)
            .line_to(Vec2::new(1.0, 0.0))
            .line_to(Vec2::new(1.0, 1.0))
            .close()
            .build();

        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_rect() {
        let path = rect(Vec2::ZERO, Vec2::new(2.0, 1.0));
        assert_eq!(path.len(), 5); // move, 3 lines, close
    }

    #[test]
    fn test_round_rect() {
        let path = round_rect(Vec2::ZERO, Vec2::new(4.0, 2.0), 0.5);
        assert_eq!(path.len(), 10); // move, 4 lines, 4 cubics, close
    }

    #[test]
    fn test_round_rect_degenerate_radius() {
        let path = round_rect(Vec2::ZERO, Vec2::new(4.0, 2.0), 0.0);
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn test_translate() {
        let mut path = PathBuilder::new()
            .move_to(Vec2::ZERO)
            .line_to(Vec2::new(1.0, 0.0))
            .build();
        path.translate(Vec2::new(10.0, 0.0));

        if let PathCommand::LineTo(p) = path.commands()[1] {
            assert!((p.x - 11.0).abs() < 0.001);
        } else {
            panic!("expected LineTo");
        }
    }

    #[test]
    fn test_scale_arc_radii() {
        let mut path = PathBuilder::new()
            .move_to(Vec2::new(2.0, 0.0))
            .arc_to(
                Vec2::splat(2.0),
                0.0,
                ArcSize::Small,
                ArcDirection::Clockwise,
                Vec2::new(0.0, 2.0),
            )
            .build();
        path.scale(3.0);

        if let PathCommand::ArcTo { radii, to, .. } = path.commands()[1] {
            assert!((radii.x - 6.0).abs() < 1e-5);
            assert!((to.y - 6.0).abs() < 1e-5);
        } else {
            panic!("expected ArcTo");
        }
    }

    #[test]
    fn test_flatten_closes_subpath() {
        let path = rect(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let points = path.flatten(4);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!((*first - *last).length() < 1e-6);
    }

    #[test]
    fn test_flatten_arc_stays_on_circle() {
        let path = PathBuilder::new()
            .move_to(Vec2::new(2.0, 0.0))
            .arc_to(
                Vec2::splat(2.0),
                0.0,
                ArcSize::Small,
                ArcDirection::Clockwise,
                Vec2::new(0.0, 2.0),
            )
            .build();

        for p in path.flatten(8) {
            assert!((p.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_bounds() {
        let path = rect(Vec2::new(1.0, 2.0), Vec2::new(5.0, 3.0));
        let (lo, hi) = path.bounds().unwrap();
        assert!((lo.x - 1.0).abs() < 1e-5);
        assert!((lo.y - 2.0).abs() < 1e-5);
        assert!((hi.x - 5.0).abs() < 1e-5);
        assert!((hi.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Path::new().bounds().is_none());
    }
}
