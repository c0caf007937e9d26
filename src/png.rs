//! # PNG Encoder
//!
//! Serializes an RGBA pixel buffer into a minimal standards-compliant PNG:
//! the 8-byte signature followed by IHDR, a single IDAT, and IEND. Scanlines
//! use filter type 0 (none) and are deflated into one zlib stream. No
//! ancillary chunks are written.
//!
//! Each chunk is length-prefixed and carries a CRC32 over its type tag and
//! payload (the zlib/PNG polynomial, via [`flate2::Crc`]).

use crate::error::GlintError;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

/// PNG file signature.
const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// IHDR constants: 8-bit depth, color type 6 (truecolor with alpha),
/// compression, filter, and interlace methods all 0.
const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;

/// Encode an RGBA pixel buffer as a PNG byte stream.
///
/// `pixels` must be exactly `width * height * 4` bytes, row-major. The buffer
/// is read without mutation; the only failure modes are a length mismatch and
/// (not expected in practice) a deflate I/O error.
pub fn encode(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, GlintError> {
    if width == 0 || height == 0 {
        return Err(GlintError::InvalidDimension { width, height });
    }
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(GlintError::Encoding {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let mut out = Vec::with_capacity(expected / 2 + 64);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr_payload(width, height));
    write_chunk(&mut out, b"IDAT", &compress_scanlines(pixels, width, height)?);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// The 13-byte IHDR payload.
fn ihdr_payload(width: u32, height: u32) -> [u8; 13] {
    let mut payload = [0u8; 13];
    payload[..4].copy_from_slice(&width.to_be_bytes());
    payload[4..8].copy_from_slice(&height.to_be_bytes());
    payload[8] = BIT_DEPTH;
    payload[9] = COLOR_TYPE_RGBA;
    // Bytes 10..13 (compression, filter, interlace) stay 0.
    payload
}

/// Prefix each row with a filter-type-0 byte and deflate the whole buffer
/// into a zlib stream.
fn compress_scanlines(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, GlintError> {
    let row_bytes = width as usize * 4;
    let mut raw = Vec::with_capacity((row_bytes + 1) * height as usize);
    for row in pixels.chunks_exact(row_bytes) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&raw)?;
    Ok(encoder.finish()?)
}

/// Append one chunk: big-endian length, type tag, payload, CRC32(tag + payload).
fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&chunk_crc(tag, payload).to_be_bytes());
}

/// CRC32 over the chunk's type tag and payload.
fn chunk_crc(tag: &[u8; 4], payload: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(tag);
    crc.update(payload);
    crc.sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iend_crc_matches_known_constant() {
        // Reference value for CRC32("IEND") from the PNG specification.
        assert_eq!(chunk_crc(b"IEND", &[]), 0xAE42_6082);
    }

    #[test]
    fn test_signature_and_ihdr_fields() {
        let pixels = vec![0u8; 3 * 2 * 4];
        let png = encode(&pixels, 3, 2).unwrap();

        assert_eq!(&png[..8], &SIGNATURE);
        // IHDR follows immediately: 4-byte length (13), tag, payload.
        assert_eq!(&png[8..12], &13u32.to_be_bytes());
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(&png[16..20], &3u32.to_be_bytes());
        assert_eq!(&png[20..24], &2u32.to_be_bytes());
        assert_eq!(png[24], 8); // bit depth
        assert_eq!(png[25], 6); // color type
        assert_eq!(&png[26..29], &[0, 0, 0]);
    }

    #[test]
    fn test_ends_with_iend_chunk() {
        let pixels = vec![0u8; 4];
        let png = encode(&pixels, 1, 1).unwrap();
        let tail = &png[png.len() - 12..];
        assert_eq!(&tail[..4], &0u32.to_be_bytes());
        assert_eq!(&tail[4..8], b"IEND");
        assert_eq!(&tail[8..], &0xAE42_6082u32.to_be_bytes());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let pixels = vec![0u8; 15];
        let err = encode(&pixels, 2, 2).unwrap_err();
        assert!(matches!(
            err,
            GlintError::Encoding {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            encode(&[], 0, 5),
            Err(GlintError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_idat_is_valid_zlib() {
        use std::io::Read;

        let pixels: Vec<u8> = (0..2 * 2 * 4).map(|i| i as u8).collect();
        let png = encode(&pixels, 2, 2).unwrap();

        // IDAT starts after signature (8) + IHDR chunk (12 + 13).
        let idat_start = 8 + 25;
        let len = u32::from_be_bytes(png[idat_start..idat_start + 4].try_into().unwrap()) as usize;
        assert_eq!(&png[idat_start + 4..idat_start + 8], b"IDAT");
        let compressed = &png[idat_start + 8..idat_start + 8 + len];

        let mut inflated = Vec::new();
        flate2::read::ZlibDecoder::new(compressed)
            .read_to_end(&mut inflated)
            .unwrap();

        // Two rows, each a filter byte followed by 8 pixel bytes.
        assert_eq!(inflated.len(), 2 * (1 + 8));
        assert_eq!(inflated[0], 0);
        assert_eq!(&inflated[1..9], &pixels[..8]);
        assert_eq!(inflated[9], 0);
        assert_eq!(&inflated[10..], &pixels[8..]);
    }
}
