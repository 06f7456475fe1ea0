use serde::{Deserialize, Serialize};

use crate::surface::Surface;

/// Mapping of a source surface onto a destination rectangle.
///
/// Scaling is implicit: the full source stretches to the dest rect,
/// per-axis. Adapted from the screen/layout coordinate conversions of a
/// pan-zoom viewport, reduced to the fixed-rect case compositing needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub dest_x: u32,
    pub dest_y: u32,
    pub dest_width: u32,
    pub dest_height: u32,
    pub src_width: u32,
    pub src_height: u32,
}

impl Placement {
    /// Scale-to-fit the whole source into the given destination rectangle.
    pub fn fit(src: &Surface, dest_x: u32, dest_y: u32, dest_width: u32, dest_height: u32) -> Self {
        Self {
            dest_x,
            dest_y,
            dest_width,
            dest_height,
            src_width: src.width(),
            src_height: src.height(),
        }
    }

    pub fn scale_x(&self) -> f64 {
        self.src_width as f64 / self.dest_width as f64
    }

    pub fn scale_y(&self) -> f64 {
        self.src_height as f64 / self.dest_height as f64
    }

    /// Source coordinates sampled for the center of a dest-rect-relative
    /// pixel.
    pub fn dest_to_src(&self, dx: u32, dy: u32) -> (f64, f64) {
        (
            (dx as f64 + 0.5) * self.scale_x(),
            (dy as f64 + 0.5) * self.scale_y(),
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.dest_width == 0
            || self.dest_height == 0
            || self.src_width == 0
            || self.src_height == 0
    }
}

/// Composite `src` onto `dest` per the placement, nearest-neighbor sampled,
/// source-over blended. Degenerate placements are a no-op.
pub fn composite(dest: &mut Surface, src: &Surface, placement: &Placement) {
    if placement.is_degenerate() {
        return;
    }
    for dy in 0..placement.dest_height {
        let out_y = placement.dest_y + dy;
        if out_y >= dest.height() {
            break;
        }
        for dx in 0..placement.dest_width {
            let out_x = placement.dest_x + dx;
            if out_x >= dest.width() {
                break;
            }
            let (sx, sy) = placement.dest_to_src(dx, dy);
            let sx = (sx as u32).min(placement.src_width - 1);
            let sy = (sy as u32).min(placement.src_height - 1);
            if let Some(color) = src.pixel(sx, sy) {
                dest.blend_pixel(out_x, out_y, color);
            }
        }
    }
}
