//! # Crystal Pattern Synthesizer
//!
//! Generates a randomized "crystal" texture: a solid background in a random
//! base color, overlaid with layers of faceted triangles in progressively
//! lighter shades of the same hue.
//!
//! ## Description
//!
//! Each layer scatters anchor points across the canvas (with a margin, so
//! facets bleed past the edges), then connects every point to its two nearest
//! neighbours to form a triangle and fills it. Layers stack with full
//! overwrite, so later facets occlude earlier ones and the result reads as
//! overlapping crystal shards.

use crate::color::Hsl;
use crate::error::GlintError;
use crate::geometry::{Point, Triangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Parameters for the crystal pattern.
#[derive(Debug, Clone)]
pub struct Params {
    /// Number of facet layers. Default: 10
    pub layers: usize,
    /// Anchor points scattered per layer. Default: 10
    pub points_per_layer: usize,
    /// Off-canvas margin for anchor points, in pixels. Default: 50
    pub margin: i32,
    /// Base lightness of the background. Default: 30.0
    pub base_lightness: f64,
    /// Lightness added per layer. Default: 5.0
    pub lightness_step: f64,
    /// Total width of the per-layer lightness jitter band. Default: 20.0
    pub lightness_variation: f64,
    /// Seed for reproducible output. None draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            layers: 10,
            points_per_layer: 10,
            margin: 50,
            base_lightness: 30.0,
            lightness_step: 5.0,
            lightness_variation: 20.0,
            seed: None,
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "layers={} points={} margin={} seed={}",
            self.layers,
            self.points_per_layer,
            self.margin,
            self.seed.map_or("random".to_string(), |s| s.to_string()),
        )
    }
}

/// Crystal texture generator.
#[derive(Debug, Clone, Default)]
pub struct Crystal {
    params: Params,
}

impl Crystal {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Generator with a fixed seed and default shape parameters.
    pub fn seeded(seed: u64) -> Self {
        Self {
            params: Params {
                seed: Some(seed),
                ..Params::default()
            },
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Synthesize a `width` x `height` RGBA pixel buffer.
    ///
    /// Every pixel is fully opaque. Fails only on zero dimensions.
    pub fn synthesize(&self, width: u32, height: u32) -> Result<Vec<u8>, GlintError> {
        if width == 0 || height == 0 {
            return Err(GlintError::InvalidDimension { width, height });
        }

        let mut rng = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let base = Hsl::new(
            rng.random_range(0..360) as f64,
            rng.random_range(50..80) as f64,
            self.params.base_lightness,
        );

        let pixel_count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(pixel_count * 4);
        let [r, g, b] = base.to_rgb();
        for _ in 0..pixel_count {
            pixels.extend_from_slice(&[r, g, b, 255]);
        }

        for layer in 0..self.params.layers {
            self.draw_layer(&mut pixels, width, height, base, layer, &mut rng);
        }

        Ok(pixels)
    }

    /// Scatter points, triangulate against nearest neighbours, fill.
    fn draw_layer(
        &self,
        pixels: &mut [u8],
        width: u32,
        height: u32,
        base: Hsl,
        layer: usize,
        rng: &mut StdRng,
    ) {
        let points = scatter_points(
            rng,
            self.params.points_per_layer,
            width,
            height,
            self.params.margin,
        );

        let shade = Hsl {
            l: base.l + layer as f64 * self.params.lightness_step,
            ..base
        };
        let fill = shade
            .jitter_lightness(rng, self.params.lightness_variation)
            .to_rgb();

        for (idx, &p) in points.iter().enumerate() {
            let Some((n1, n2)) = nearest_two(&points, idx) else {
                continue;
            };
            Triangle::new(p, n1, n2).fill(pixels, width, height, fill);
        }
    }
}

/// Generate random anchor points with coordinates in `[-margin, dim + margin)`.
fn scatter_points<R: Rng>(
    rng: &mut R,
    count: usize,
    width: u32,
    height: u32,
    margin: i32,
) -> Vec<Point> {
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(-margin..width as i32 + margin),
                rng.random_range(-margin..height as i32 + margin),
            )
        })
        .collect()
}

/// Find the two points nearest to `points[idx]`, excluding itself.
///
/// Distance ties break on generation order (the sort is stable). Returns
/// None when fewer than two other points exist.
fn nearest_two(points: &[Point], idx: usize) -> Option<(Point, Point)> {
    let origin = points[idx];
    let mut others: Vec<&Point> = points[..idx]
        .iter()
        .chain(points[idx + 1..].iter())
        .collect();
    if others.len() < 2 {
        return None;
    }
    others.sort_by(|a, b| {
        origin
            .distance(**a)
            .partial_cmp(&origin.distance(**b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Some((*others[0], *others[1]))
}
