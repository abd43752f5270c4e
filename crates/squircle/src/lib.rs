//! Smooth (squircle-style) rounded rectangle outlines.
//!
//! Builds the closed outline of a rounded rectangle whose corners blend
//! a circular arc with cubic bezier "shoulder" curves, the rounding
//! style popularized by superellipse-shaped UI elements. The result is
//! an ordered sequence of path commands consumable by any 2D vector
//! backend.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use squircle::{smooth_round_rect, max_smooth_radius};
//!
//! let min = Vec2::ZERO;
//! let max = Vec2::new(200.0, 100.0);
//! let smoothness = 0.6;
//! let radius = max_smooth_radius(max - min, smoothness).min(20.0);
//!
//! let path = smooth_round_rect(min, max, smoothness, radius);
//! assert!(!path.is_empty());
//! ```

pub mod arc;
pub mod bezier;
mod path;
mod smooth;
pub mod svg;

pub use arc::{ArcDirection, ArcSize, CenterArc};
pub use path::{
    Path,
    PathBuilder,
    PathCommand,
    // Primitives
    rect,
    round_rect,
};
pub use smooth::{max_smooth_radius, smooth_round_rect};
