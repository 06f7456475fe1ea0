//! # Shieldmark Raster
//!
//! CPU rasterization for the logo engine: an RGBA8 surface type, scanline
//! polygon filling, surface compositing, and the `LogoRenderer` that turns
//! an artwork's drawing sequence into pixels.

pub mod surface;
pub mod fill;
pub mod placement;
pub mod legacy;
pub mod renderer;

pub use surface::Surface;
pub use fill::fill_polygon;
pub use placement::{composite, Placement};
pub use legacy::LegacySurfaceManager;
pub use renderer::{LogoRenderer, RenderError};
