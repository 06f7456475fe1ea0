//! # Shieldmark I/O
//!
//! File readers and writers: PNG export/import of rendered surfaces and the
//! JSON artwork format.

pub mod png;
pub mod artwork_json;

pub use png::{read_surface, write_surface, PngError};
pub use artwork_json::{load_artwork, save_artwork, ArtworkFileError};
