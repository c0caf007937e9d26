//! # HSL Color Conversion
//!
//! Converts HSL triples to 8-bit RGB using the piecewise formula
//!
//! ```text
//! k(n) = (n + h*12) mod 12
//! a    = s * min(l, 1-l)
//! f(n) = l - a * max(min(k-3, 9-k, 1), -1)
//! rgb  = [f(0), f(8), f(4)] * 255, rounded
//! ```
//!
//! The channel assignment `f(0) -> R`, `f(8) -> G`, `f(4) -> B` is part of
//! the contract; callers elsewhere depend on the exact rounded output.

use rand::Rng;

/// An HSL color: hue in [0, 360), saturation and lightness in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to an 8-bit RGB triple.
    pub fn to_rgb(self) -> [u8; 3] {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Same color with lightness jittered by a uniform offset in
    /// [-variation/2, +variation/2).
    pub fn jitter_lightness<R: Rng>(self, rng: &mut R, variation: f64) -> Self {
        if variation <= 0.0 {
            return self;
        }
        let offset = rng.random_range(0.0..variation) - variation / 2.0;
        Self {
            l: self.l + offset,
            ..self
        }
    }
}

/// Convert HSL (h in [0,360), s and l in [0,100]) to an RGB triple.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let f = |n: f64| -> u8 {
        let k = (n + h * 12.0) % 12.0;
        let a = s * l.min(1.0 - l);
        let v = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (v * 255.0).round() as u8
    };

    [f(0.0), f(8.0), f(4.0)]
}
