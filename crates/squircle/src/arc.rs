//! Circular and elliptical arc parameterization.
//!
//! Path arcs are stored in endpoint form (the SVG `A` convention: two
//! endpoints, radii, rotation, and two flags). Sampling needs the
//! center form instead, so [`CenterArc`] performs the endpoint-to-center
//! conversion.

use std::f32::consts::TAU;

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two candidate sweeps an endpoint arc takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArcSize {
    /// The minor arc (sweep of at most half a turn).
    #[default]
    Small,
    /// The major arc.
    Large,
}

/// Winding direction of an arc, in y-down coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArcDirection {
    /// Clockwise on screen (the SVG positive-sweep direction).
    #[default]
    Clockwise,
    /// Counter-clockwise on screen.
    CounterClockwise,
}

/// An elliptical arc in center parameterization.
///
/// Angles are in radians; `sweep` is signed (positive sweeps clockwise
/// in y-down coordinates).
///
/// # Example
///
/// ```
/// use squircle::{ArcDirection, ArcSize, CenterArc};
/// use glam::Vec2;
///
/// let arc = CenterArc::from_endpoints(
///     Vec2::new(20.0, 0.0),
///     Vec2::new(0.0, 20.0),
///     Vec2::splat(20.0),
///     0.0,
///     ArcSize::Small,
///     ArcDirection::Clockwise,
/// )
/// .unwrap();
///
/// assert!(arc.center.length() < 1e-4);
/// assert!((arc.sweep - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    /// Ellipse center.
    pub center: Vec2,
    /// Ellipse radii, possibly scaled up from the requested radii to
    /// span the chord.
    pub radii: Vec2,
    /// X-axis rotation in radians.
    pub rotation: f32,
    /// Angle of the start point on the ellipse.
    pub start_angle: f32,
    /// Signed sweep from the start angle to the end angle.
    pub sweep: f32,
}

impl CenterArc {
    /// Converts an endpoint arc to center parameterization.
    ///
    /// Radii too small to span the chord are scaled up uniformly, per
    /// the SVG out-of-range correction. Returns `None` for a
    /// degenerate arc: coincident endpoints or a vanishing radius.
    pub fn from_endpoints(
        start: Vec2,
        end: Vec2,
        radii: Vec2,
        rotation: f32,
        size: ArcSize,
        direction: ArcDirection,
    ) -> Option<CenterArc> {
        if (start - end).length_squared() < 1e-12 {
            return None;
        }
        if radii.x.abs() < 1e-6 || radii.y.abs() < 1e-6 {
            return None;
        }

        let mut rx = radii.x.abs();
        let mut ry = radii.y.abs();
        let (sin_phi, cos_phi) = rotation.sin_cos();

        // Half-chord in the ellipse's local frame.
        let d = (start - end) * 0.5;
        let x1p = cos_phi * d.x + sin_phi * d.y;
        let y1p = -sin_phi * d.x + cos_phi * d.y;

        // Scale up radii that cannot span the chord.
        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        let large = size == ArcSize::Large;
        let sweep_positive = direction == ArcDirection::Clockwise;

        let rxsq = rx * rx;
        let rysq = ry * ry;
        let x1psq = x1p * x1p;
        let y1psq = y1p * y1p;

        let radicand =
            ((rxsq * rysq) - (rxsq * y1psq) - (rysq * x1psq)) / ((rxsq * y1psq) + (rysq * x1psq));
        let coef = if large != sweep_positive { 1.0 } else { -1.0 } * radicand.max(0.0).sqrt();

        let cxp = coef * rx * y1p / ry;
        let cyp = -coef * ry * x1p / rx;

        let center = Vec2::new(
            cos_phi * cxp - sin_phi * cyp + (start.x + end.x) * 0.5,
            sin_phi * cxp + cos_phi * cyp + (start.y + end.y) * 0.5,
        );

        let start_v = Vec2::new((x1p - cxp) / rx, (y1p - cyp) / ry);
        let end_v = Vec2::new((-x1p - cxp) / rx, (-y1p - cyp) / ry);

        let start_angle = signed_angle(Vec2::X, start_v);
        let mut sweep = signed_angle(start_v, end_v);
        if !sweep_positive && sweep > 0.0 {
            sweep -= TAU;
        }
        if sweep_positive && sweep < 0.0 {
            sweep += TAU;
        }

        Some(CenterArc {
            center,
            radii: Vec2::new(rx, ry),
            rotation,
            start_angle,
            sweep,
        })
    }

    /// Point on the arc at parameter `t` in [0, 1].
    pub fn point_at(&self, t: f32) -> Vec2 {
        let theta = self.start_angle + t * self.sweep;
        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let (sin_t, cos_t) = theta.sin_cos();
        let p = Vec2::new(self.radii.x * cos_t, self.radii.y * sin_t);
        Vec2::new(
            self.center.x + cos_phi * p.x - sin_phi * p.y,
            self.center.y + sin_phi * p.x + cos_phi * p.y,
        )
    }

    /// Tangent of the arc at parameter `t` in [0, 1], pointing in the
    /// direction of travel. Unnormalized.
    pub fn tangent_at(&self, t: f32) -> Vec2 {
        let theta = self.start_angle + t * self.sweep;
        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let (sin_t, cos_t) = theta.sin_cos();
        let d = Vec2::new(-self.radii.x * sin_t, self.radii.y * cos_t);
        let v = Vec2::new(
            cos_phi * d.x - sin_phi * d.y,
            sin_phi * d.x + cos_phi * d.y,
        );
        if self.sweep < 0.0 {
            -v
        } else {
            v
        }
    }
}

/// Signed angle from `u` to `v`, positive toward +θ.
fn signed_angle(u: Vec2, v: Vec2) -> f32 {
    let sign = if u.perp_dot(v) < 0.0 { -1.0 } else { 1.0 };
    let cos = (u.dot(v) / (u.length() * v.length())).clamp(-1.0, 1.0);
    sign * cos.acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_quarter_circle() {
        let start = Vec2::new(20.0, 0.0);
        let end = Vec2::new(0.0, 20.0);
        let arc = CenterArc::from_endpoints(
            start,
            end,
            Vec2::splat(20.0),
            0.0,
            ArcSize::Small,
            ArcDirection::Clockwise,
        )
        .unwrap();

        assert!(arc.center.length() < 1e-4);
        assert!((arc.sweep - FRAC_PI_2).abs() < 1e-5);
        assert!((arc.point_at(0.0) - start).length() < 1e-4);
        assert!((arc.point_at(1.0) - end).length() < 1e-4);

        // Midpoint sits on the circle, between the endpoints.
        let mid = arc.point_at(0.5);
        assert!((mid.length() - 20.0).abs() < 1e-4);
        assert!(mid.x > 0.0 && mid.y > 0.0);
    }

    #[test]
    fn test_direction_flips_center() {
        let start = Vec2::new(20.0, 0.0);
        let end = Vec2::new(0.0, 20.0);
        let ccw = CenterArc::from_endpoints(
            start,
            end,
            Vec2::splat(20.0),
            0.0,
            ArcSize::Small,
            ArcDirection::CounterClockwise,
        )
        .unwrap();

        // The other small quarter circle, centered past the chord.
        assert!((ccw.center - Vec2::new(20.0, 20.0)).length() < 1e-4);
        assert!((ccw.sweep + FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_undersized_radii_scale_up() {
        let start = Vec2::new(-10.0, 0.0);
        let end = Vec2::new(10.0, 0.0);
        let arc = CenterArc::from_endpoints(
            start,
            end,
            Vec2::splat(1.0),
            0.0,
            ArcSize::Small,
            ArcDirection::Clockwise,
        )
        .unwrap();

        // Radii grow to half the chord; the arc becomes a half circle.
        assert!((arc.radii.x - 10.0).abs() < 1e-4);
        assert!((arc.point_at(0.0) - start).length() < 1e-3);
        assert!((arc.point_at(1.0) - end).length() < 1e-3);
    }

    #[test]
    fn test_degenerate_chord() {
        let p = Vec2::new(5.0, 5.0);
        assert!(CenterArc::from_endpoints(
            p,
            p,
            Vec2::splat(10.0),
            0.0,
            ArcSize::Small,
            ArcDirection::Clockwise,
        )
        .is_none());
    }

    #[test]
    fn test_tangent_perpendicular_to_radius() {
        let arc = CenterArc::from_endpoints(
            Vec2::new(20.0, 0.0),
            Vec2::new(0.0, 20.0),
            Vec2::splat(20.0),
            0.0,
            ArcSize::Small,
            ArcDirection::Clockwise,
        )
        .unwrap();

        for i in 0..=4 {
            let t = i as f32 / 4.0;
            let radial = arc.point_at(t) - arc.center;
            let tangent = arc.tangent_at(t);
            assert!(radial.dot(tangent).abs() < 1e-3);
        }
    }
}
