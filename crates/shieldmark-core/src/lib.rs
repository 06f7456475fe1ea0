//! # Shieldmark Core
//!
//! Geometry primitives, RGBA color handling, the artwork data model, and the
//! compiled-in Contoso shield artwork, plus an R-tree spatial index for
//! group hit-testing.
//!
//! This crate is the heart of the Shieldmark rendering kernel.

pub mod geometry;
pub mod color;
pub mod artwork;
pub mod shield;
pub mod spatial;

pub use geometry::{BBox, Point, Transform2D};
pub use color::Rgba;
pub use artwork::{Artwork, FillRule, ShapeGroup};
pub use shield::contoso_shield;
pub use spatial::GroupIndex;
