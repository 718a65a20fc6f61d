//! Pure curve math: Bézier evaluation, path construction and color shifts.

pub mod color;
pub mod geometry;
pub mod path;

pub use color::{Rgb, Rgba};
pub use geometry::Point;
