use shieldmark_core::{FillRule, Point, Rgba};

use crate::surface::Surface;

/// Fill a closed polygon onto the surface.
///
/// The outline closes implicitly from the last vertex back to the first.
/// Sampling is at pixel centers: a pixel is inside when its center point
/// satisfies the fill rule. Spans outside the surface clip; outlines with
/// fewer than three vertices are a no-op.
pub fn fill_polygon(surface: &mut Surface, outline: &[Point], color: Rgba, rule: FillRule) {
    if outline.len() < 3 || surface.is_empty() {
        return;
    }

    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for p in outline {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    // Rows whose center y+0.5 lies in [min_y, max_y).
    let row_start = (min_y - 0.5).ceil().max(0.0) as u32;
    let row_end = (max_y - 0.5).ceil().clamp(0.0, surface.height() as f64) as u32;

    let mut crossings: Vec<(f64, i32)> = Vec::new();
    for row in row_start..row_end {
        let y = row as f64 + 0.5;
        crossings.clear();

        for i in 0..outline.len() {
            let p0 = outline[i];
            let p1 = outline[(i + 1) % outline.len()];
            if p0.y == p1.y {
                continue; // horizontal edges never cross a scanline center
            }
            let (lo, hi) = if p0.y < p1.y { (p0.y, p1.y) } else { (p1.y, p0.y) };
            if y < lo || y >= hi {
                continue;
            }
            let t = (y - p0.y) / (p1.y - p0.y);
            let x = p0.x + t * (p1.x - p0.x);
            let dir = if p1.y > p0.y { 1 } else { -1 };
            crossings.push((x, dir));
        }

        crossings.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        match rule {
            FillRule::EvenOdd => {
                let mut i = 0;
                while i + 1 < crossings.len() {
                    fill_span(surface, row, crossings[i].0, crossings[i + 1].0, color);
                    i += 2;
                }
            }
            FillRule::NonZero => {
                let mut winding = 0;
                let mut span_start = 0.0;
                for &(x, dir) in &crossings {
                    if winding == 0 {
                        span_start = x;
                    }
                    winding += dir;
                    if winding == 0 {
                        fill_span(surface, row, span_start, x, color);
                    }
                }
            }
        }
    }
}

/// Fill pixels of `row` whose center x+0.5 lies in `[x_start, x_end)`.
fn fill_span(surface: &mut Surface, row: u32, x_start: f64, x_end: f64, color: Rgba) {
    let left = (x_start - 0.5).ceil().max(0.0) as u32;
    let right = (x_end - 0.5).ceil().clamp(0.0, surface.width() as f64) as u32;
    for col in left..right {
        surface.blend_pixel(col, row, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);

    fn square(x: f64, y: f64, side: f64) -> Vec<Point> {
        vec![
            Point::new(x, y),
            Point::new(x + side, y),
            Point::new(x + side, y + side),
            Point::new(x, y + side),
        ]
    }

    /// Five-point star whose center winds twice: filled under NonZero,
    /// empty under EvenOdd.
    fn star() -> Vec<Point> {
        vec![
            Point::new(50.0, 10.0),
            Point::new(73.51, 82.36),
            Point::new(11.96, 37.64),
            Point::new(88.04, 37.64),
            Point::new(26.49, 82.36),
        ]
    }

    #[test]
    fn test_square_pixel_extent() {
        let mut s = Surface::new(10, 10);
        fill_polygon(&mut s, &square(2.0, 2.0, 6.0), RED, FillRule::NonZero);
        assert_eq!(s.pixel(2, 2), Some(RED));
        assert_eq!(s.pixel(7, 7), Some(RED));
        assert_eq!(s.pixel(1, 2), Some(Rgba::TRANSPARENT));
        assert_eq!(s.pixel(8, 8), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_degenerate_outline_is_noop() {
        let mut s = Surface::new(10, 10);
        fill_polygon(
            &mut s,
            &[Point::new(0.0, 0.0), Point::new(9.0, 9.0)],
            RED,
            FillRule::NonZero,
        );
        assert_eq!(s, Surface::new(10, 10));
    }

    #[test]
    fn test_duplicate_vertices_ignored() {
        let mut a = Surface::new(10, 10);
        let mut b = Surface::new(10, 10);
        let mut doubled = square(2.0, 2.0, 6.0);
        let repeat = doubled[1];
        doubled.insert(1, repeat); // repeat a vertex
        let first = doubled[0];
        doubled.push(first); // explicit closing point
        fill_polygon(&mut a, &square(2.0, 2.0, 6.0), RED, FillRule::NonZero);
        fill_polygon(&mut b, &doubled, RED, FillRule::NonZero);
        assert_eq!(a, b);
    }

    #[test]
    fn test_star_center_nonzero() {
        let mut s = Surface::new(100, 100);
        fill_polygon(&mut s, &star(), RED, FillRule::NonZero);
        assert_eq!(s.pixel(50, 50), Some(RED));
    }

    #[test]
    fn test_star_center_even_odd() {
        let mut s = Surface::new(100, 100);
        fill_polygon(&mut s, &star(), RED, FillRule::EvenOdd);
        assert_eq!(s.pixel(50, 50), Some(Rgba::TRANSPARENT));
        // The points of the star fill under both rules.
        assert_eq!(s.pixel(50, 15), Some(RED));
    }

    #[test]
    fn test_clipping_outside_surface() {
        let mut s = Surface::new(4, 4);
        fill_polygon(&mut s, &square(-10.0, -10.0, 100.0), RED, FillRule::NonZero);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(s.pixel(x, y), Some(RED));
            }
        }
    }
}
