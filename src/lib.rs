//! # Glint - Procedural Crystal Icon Generator
//!
//! Glint synthesizes randomized "crystal" textures and encodes them as PNG
//! files without an imaging library. It provides:
//!
//! - **Crystal synthesis**: layered, faceted triangle patterns over a solid
//!   background, all shades of one random hue
//! - **HSL color math**: exact HSL to RGB conversion
//! - **PNG encoding**: hand-built chunk stream (IHDR/IDAT/IEND) with CRC32
//!   checksums and zlib-compressed scanlines
//!
//! ## Quick Start
//!
//! ```
//! use glint::{crystal::Crystal, png};
//!
//! // Synthesize a 256x256 icon (seeded for reproducibility)
//! let crystal = Crystal::seeded(42);
//! let pixels = crystal.synthesize(256, 256)?;
//!
//! // Encode as a PNG byte stream
//! let bytes = png::encode(&pixels, 256, 256)?;
//! assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
//!
//! # Ok::<(), glint::GlintError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`crystal`] | Crystal pattern synthesizer |
//! | [`color`] | HSL to RGB conversion |
//! | [`geometry`] | Points, triangles, rasterization |
//! | [`png`] | PNG byte-stream encoder |
//! | [`error`] | Error types |

pub mod color;
pub mod crystal;
pub mod error;
pub mod geometry;
pub mod png;

// Re-exports for convenience
pub use crystal::Crystal;
pub use error::GlintError;
