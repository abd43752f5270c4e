//! Smooth-corner rounded rectangle construction.
//!
//! A plain rounded rectangle joins each straight edge directly to a
//! quarter-circle arc, leaving a visible curvature discontinuity at the
//! join. The smooth variant inserts a cubic bezier "shoulder" on each
//! side of a shortened circular arc, so curvature ramps up gradually
//! along the edge, the profile of superellipse-shaped UI elements.
//!
//! The `smoothness` parameter ξ in (0, 1] controls how much edge length
//! the shoulders consume: each corner starts `(1 + ξ) · radius` away
//! from the corner point, and the circular arc shrinks from a full
//! quarter turn at ξ → 0 toward zero extent at ξ = 1. A smoothness of
//! exactly zero is the plain rounding case and is served by
//! [`round_rect`](crate::round_rect) instead.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;

use crate::arc::{ArcDirection, ArcSize};
use crate::path::{Path, PathBuilder};

/// Placement ratio of the edge-side control point, interpolating
/// between the full smoothing length and the arc hand-off offset. A
/// shape constant tuned for a flat-looking shoulder, not a derived
/// quantity.
const EDGE_CONTROL_RATIO: f32 = 2.0 / 3.0;

/// Angle consumed by the shoulder curve at full smoothness, measured
/// from the corner bisector.
const MAX_JOIN_ANGLE: f32 = FRAC_PI_4;

/// Scalar offsets shared by all four corners. Computed once per call;
/// corners differ only by axis/sign permutation.
#[derive(Debug, Clone, Copy)]
struct CornerMetrics {
    /// Corner radius.
    radius: f32,
    /// Distance from the corner along each edge where the shoulder
    /// curve begins, `(1 + ξ) · radius`.
    edge_offset: f32,
    /// Edge-side cubic control offset from the corner.
    edge_control: f32,
    /// Arc-side cubic control offset from the corner, along the edge.
    arc_control: f32,
    /// Offset from the rounding center to the shoulder/arc hand-off
    /// point, componentwise.
    arc_join: Vec2,
    /// Angle from the corner bisector at which the shoulder hands off
    /// to the circular arc, `(π/4) · ξ`.
    join_angle: f32,
}

impl CornerMetrics {
    fn new(radius: f32, smoothness: f32) -> Self {
        // For a right-angle corner the squircle edge length
        // `R · sqrt((1 + cos θ) / (1 - cos θ))` collapses to exactly R,
        // since cos θ = 0.
        let rounding_segment = radius;

        let edge_offset = (1.0 + smoothness) * rounding_segment;
        let join_angle = MAX_JOIN_ANGLE * smoothness;

        let arc_join =
            Vec2::new(1.0 - join_angle.sin(), 1.0 - join_angle.cos()) * radius;

        // Standard circular-arc control offset, evaluated at the
        // hand-off angle rather than a full quarter turn.
        let join_control = (join_angle * 0.5).tan() * join_angle.cos() * radius;
        let arc_control = arc_join.x + join_control;

        let edge_control = edge_offset - (edge_offset - arc_control) * EDGE_CONTROL_RATIO;

        Self {
            radius,
            edge_offset,
            edge_control,
            arc_control,
            arc_join,
            join_angle,
        }
    }
}

/// One corner's orientation: the corner point plus unit directions
/// along the edge the outline arrives on (`enter`) and the edge it
/// leaves on (`exit`), both pointing away from the corner.
#[derive(Debug, Clone, Copy)]
struct CornerFrame {
    corner: Vec2,
    enter: Vec2,
    exit: Vec2,
}

impl CornerFrame {
    /// Point where the outline enters this corner's geometry.
    fn entry(&self, m: &CornerMetrics) -> Vec2 {
        self.corner + m.edge_offset * self.enter
    }

    /// Emits the corner: shoulder curve in, circular arc across,
    /// shoulder curve out, ending at `edge_offset` along the exit edge.
    fn emit(&self, builder: PathBuilder, m: &CornerMetrics) -> PathBuilder {
        builder
            .cubic_to(
                self.corner + m.edge_control * self.enter,
                self.corner + m.arc_control * self.enter,
                self.corner + m.arc_join.x * self.enter + m.arc_join.y * self.exit,
            )
            .arc_to(
                Vec2::splat(m.radius),
                0.0,
                ArcSize::Small,
                ArcDirection::Clockwise,
                self.corner + m.arc_join.y * self.enter + m.arc_join.x * self.exit,
            )
            .cubic_to(
                self.corner + m.arc_control * self.exit,
                self.corner + m.edge_control * self.exit,
                self.corner + m.edge_offset * self.exit,
            )
    }
}

/// Builds the outline of a smooth (squircle-style) rounded rectangle.
///
/// The outline is a single closed path traced clockwise, starting on
/// the left edge at `(min.x, min.y + (1 + smoothness) * radius)` and
/// visiting top-left, top-right, bottom-right, bottom-left. Each corner
/// contributes a cubic shoulder, a minor circular arc of the given
/// radius, and a mirrored shoulder; straight edges connect the corners.
///
/// `smoothness` must lie in (0, 1]. For plain quarter-circle rounding
/// (smoothness zero) use [`round_rect`](crate::round_rect), which
/// serves that case without the shoulder geometry.
///
/// # Preconditions
///
/// Checked with debug assertions only; violating them in release
/// builds produces an unspecified outline:
///
/// * `max.x > min.x` and `max.y > min.y`
/// * `0 < smoothness <= 1`
/// * `radius > 0`
/// * the corner geometry fits: `2 * (1 + smoothness) * radius` must
///   not exceed the width or the height. Clamp the radius with
///   [`max_smooth_radius`] upstream.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use squircle::smooth_round_rect;
///
/// let path = smooth_round_rect(Vec2::ZERO, Vec2::new(200.0, 100.0), 0.6, 20.0);
/// assert_eq!(path.len(), 17);
/// ```
pub fn smooth_round_rect(min: Vec2, max: Vec2, smoothness: f32, radius: f32) -> Path {
    debug_assert!(max.x > min.x && max.y > min.y, "empty rectangle");
    debug_assert!(
        smoothness > 0.0 && smoothness <= 1.0,
        "smoothness out of (0, 1]; use round_rect for plain rounding"
    );
    debug_assert!(radius > 0.0, "non-positive radius");

    debug_assert!(
        radius <= max_smooth_radius(max - min, smoothness) * (1.0 + 1e-5),
        "corner geometry exceeds the rectangle; clamp with max_smooth_radius"
    );

    let metrics = CornerMetrics::new(radius, smoothness);
    debug_assert!(metrics.join_angle > 0.0 && metrics.join_angle <= MAX_JOIN_ANGLE);

    let top_left = CornerFrame {
        corner: min,
        enter: Vec2::Y,
        exit: Vec2::X,
    };
    let top_right = CornerFrame {
        corner: Vec2::new(max.x, min.y),
        enter: -Vec2::X,
        exit: Vec2::Y,
    };
    let bottom_right = CornerFrame {
        corner: max,
        enter: -Vec2::Y,
        exit: -Vec2::X,
    };
    let bottom_left = CornerFrame {
        corner: Vec2::new(min.x, max.y),
        enter: Vec2::X,
        exit: -Vec2::Y,
    };

    let mut builder = PathBuilder::new().move_to(top_left.entry(&metrics));
    builder = top_left.emit(builder, &metrics);
    for frame in [top_right, bottom_right, bottom_left] {
        builder = builder.line_to(frame.entry(&metrics));
        builder = frame.emit(builder, &metrics);
    }
    builder.close().build()
}

/// Largest radius whose smooth corner geometry fits a rectangle of the
/// given size without opposing corners overlapping:
/// `min(width, height) / (2 * (1 + smoothness))`.
pub fn max_smooth_radius(size: Vec2, smoothness: f32) -> f32 {
    size.min_element() / (2.0 * (1.0 + smoothness))
}
