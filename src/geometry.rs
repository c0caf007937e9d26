//! # Triangle Geometry
//!
//! Integer points, triangles, and a barycentric scanline rasterizer.
//!
//! Points may lie outside the canvas; the rasterizer clips each triangle's
//! bounding box to the canvas before testing pixels. A triangle whose signed
//! area is exactly zero (collinear vertices) fills nothing.

/// A 2D integer coordinate. May fall outside the canvas bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }
}

/// A triangle used as a fill primitive.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Twice the signed area. Zero means the vertices are collinear.
    fn doubled_area(&self) -> f64 {
        let (ax, ay) = (self.a.x as f64, self.a.y as f64);
        let (bx, by) = (self.b.x as f64, self.b.y as f64);
        let (cx, cy) = (self.c.x as f64, self.c.y as f64);
        -by * cx + ay * (cx - bx) + ax * (by - cy) + bx * cy
    }

    /// Barycentric inside-test: the point is inside when both weights are
    /// non-negative and their sum does not exceed one.
    fn contains(&self, px: f64, py: f64, doubled_area: f64) -> bool {
        let (ax, ay) = (self.a.x as f64, self.a.y as f64);
        let (bx, by) = (self.b.x as f64, self.b.y as f64);
        let (cx, cy) = (self.c.x as f64, self.c.y as f64);
        let s = (ay * cx - ax * cy + (cy - ay) * px + (ax - cx) * py) / doubled_area;
        let t = (ax * by - ay * bx + (ay - by) * px + (bx - ax) * py) / doubled_area;
        s >= 0.0 && t >= 0.0 && s + t <= 1.0
    }

    /// Integer bounding box clipped to a `width` x `height` canvas.
    /// Returns None when the box lies entirely off-canvas.
    fn clipped_bounds(&self, width: u32, height: u32) -> Option<(i32, i32, i32, i32)> {
        let min_x = self.a.x.min(self.b.x).min(self.c.x).max(0);
        let max_x = self.a.x.max(self.b.x).max(self.c.x).min(width as i32 - 1);
        let min_y = self.a.y.min(self.b.y).min(self.c.y).max(0);
        let max_y = self.a.y.max(self.b.y).max(self.c.y).min(height as i32 - 1);
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some((min_x, max_x, min_y, max_y))
    }

    /// Overwrite every covered pixel with `color` (RGB plus alpha 255).
    ///
    /// The buffer is row-major RGBA of the given dimensions. Later fills
    /// occlude earlier ones; nothing is blended.
    pub fn fill(&self, pixels: &mut [u8], width: u32, height: u32, color: [u8; 3]) {
        let doubled_area = self.doubled_area();
        if doubled_area == 0.0 {
            // Collinear vertices; the inside-test would divide by zero.
            return;
        }
        let Some((min_x, max_x, min_y, max_y)) = self.clipped_bounds(width, height) else {
            return;
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if self.contains(x as f64, y as f64, doubled_area) {
                    let idx = (y as usize * width as usize + x as usize) * 4;
                    pixels[idx] = color[0];
                    pixels[idx + 1] = color[1];
                    pixels[idx + 2] = color[2];
                    pixels[idx + 3] = 255;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> Vec<u8> {
        vec![0; (width * height * 4) as usize]
    }

    #[test]
    fn test_right_triangle_fills_exact_pixels() {
        let (w, h) = (10u32, 10u32);
        let mut pixels = blank(w, h);
        let tri = Triangle::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
        tri.fill(&mut pixels, w, h, [9, 9, 9]);

        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let idx = (y as usize * w as usize + x as usize) * 4;
                let filled = pixels[idx] == 9;
                let expected = x + y <= 10;
                assert_eq!(filled, expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_degenerate_triangle_fills_nothing() {
        let (w, h) = (16u32, 16u32);
        let mut pixels = blank(w, h);
        let tri = Triangle::new(Point::new(0, 0), Point::new(5, 5), Point::new(10, 10));
        tri.fill(&mut pixels, w, h, [255, 255, 255]);
        assert!(pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_offscreen_triangle_fills_nothing() {
        let (w, h) = (8u32, 8u32);
        let mut pixels = blank(w, h);
        let tri = Triangle::new(Point::new(-30, -30), Point::new(-10, -30), Point::new(-30, -10));
        tri.fill(&mut pixels, w, h, [255, 255, 255]);
        assert!(pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_partially_offscreen_triangle_is_clipped() {
        let (w, h) = (8u32, 8u32);
        let mut pixels = blank(w, h);
        // Covers the whole canvas and then some.
        let tri = Triangle::new(Point::new(-20, -20), Point::new(40, -20), Point::new(-20, 40));
        tri.fill(&mut pixels, w, h, [7, 7, 7]);
        assert!(pixels.chunks_exact(4).all(|px| px == [7, 7, 7, 255]));
    }

    #[test]
    fn test_fill_sets_alpha_opaque() {
        let (w, h) = (12u32, 12u32);
        let mut pixels = blank(w, h);
        let tri = Triangle::new(Point::new(0, 0), Point::new(12, 0), Point::new(0, 12));
        tri.fill(&mut pixels, w, h, [1, 2, 3]);
        for px in pixels.chunks_exact(4) {
            if px[0] == 1 {
                assert_eq!(px, [1, 2, 3, 255]);
            }
        }
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }
}
