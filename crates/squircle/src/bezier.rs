//! Cubic bezier evaluation helpers.

use glam::Vec2;

/// Evaluates a cubic bezier curve at parameter `t`.
///
/// # Arguments
///
/// * `p0` - Start point
/// * `p1` - First control point
/// * `p2` - Second control point
/// * `p3` - End point
/// * `t` - Parameter in [0, 1]
///
/// # Example
///
/// ```
/// use squircle::bezier::cubic_point;
/// use glam::Vec2;
///
/// let p0 = Vec2::ZERO;
/// let p1 = Vec2::new(0.25, 1.0);
/// let p2 = Vec2::new(0.75, 1.0);
/// let p3 = Vec2::X;
///
/// let mid = cubic_point(p0, p1, p2, p3, 0.5);
/// assert!((mid.x - 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;
    let t2 = t * t;
    let t3 = t2 * t;
    p0 * mt3 + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * t3
}

/// Evaluates the tangent (derivative) of a cubic bezier curve at
/// parameter `t`.
///
/// Returns the unnormalized tangent vector.
#[inline]
pub fn cubic_tangent(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;
    3.0 * mt2 * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t2 * (p3 - p2)
}
