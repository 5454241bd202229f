use crate::foundation::error::{BmpseqError, BmpseqResult};

/// Length of the fixed BMP header written by [`encode_bmp`] (BITMAPFILEHEADER
/// + BITMAPINFOHEADER, no palette).
pub const HEADER_LEN: usize = 54;

const SIGNATURE: [u8; 2] = *b"BM";

// Horizontal/vertical resolution written into encoded headers, px per meter.
const RESOLUTION_PPM: u32 = 2835;

/// Fields read from a BMP header, decoded from fixed little-endian byte
/// offsets. The header is never aliased onto memory; every field goes
/// through an explicit byte-slice read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    /// Byte offset where pixel data starts.
    pub data_offset: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels (rows are stored bottom-up).
    pub height: u32,
    /// Color plane count; must be 1.
    pub planes: u16,
    /// Bits per pixel; must be 24.
    pub bits_per_pixel: u16,
    /// Compression code; must be 0 (uncompressed).
    pub compression: u32,
}

/// A decoded 24-bit bitmap: dimensions plus the interleaved pixel buffer
/// exactly as stored in the file (row-major, bottom-up, rows padded to a
/// 4-byte boundary, blue/green/red per pixel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Interleaved pixel bytes, `row_stride(width) * height` long.
    pub pixels: Vec<u8>,
}

/// Padding bytes appended to each pixel row so its length is a multiple of 4.
pub fn row_padding(width: u32) -> usize {
    let line = width as usize * 3;
    (4 - line % 4) % 4
}

/// Byte length of one stored pixel row, padding included.
pub fn row_stride(width: u32) -> usize {
    width as usize * 3 + row_padding(width)
}

fn read_u16_le(raw: &[u8], offset: usize) -> BmpseqResult<u16> {
    let bytes: [u8; 2] = raw
        .get(offset..offset + 2)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| BmpseqError::decode(format!("header truncated at byte {offset}")))?;
    Ok(u16::from_le_bytes(bytes))
}

fn read_u32_le(raw: &[u8], offset: usize) -> BmpseqResult<u32> {
    let bytes: [u8; 4] = raw
        .get(offset..offset + 4)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| BmpseqError::decode(format!("header truncated at byte {offset}")))?;
    Ok(u32::from_le_bytes(bytes))
}

impl BmpHeader {
    /// Parse the header fields from the front of a raw file buffer.
    ///
    /// Fails with [`BmpseqError::Decode`] if the `BM` signature is missing or
    /// the buffer is too short to hold the fixed fields.
    pub fn parse(raw: &[u8]) -> BmpseqResult<Self> {
        if raw.len() < 2 || raw[0..2] != SIGNATURE {
            return Err(BmpseqError::decode("missing BM signature"));
        }

        // Width and height are stored signed; a negative height marks a
        // top-down bitmap, which this codec does not decode.
        let width = read_u32_le(raw, 18)? as i32;
        let height = read_u32_le(raw, 22)? as i32;
        if width <= 0 || height <= 0 {
            return Err(BmpseqError::decode(format!(
                "unsupported dimensions {width}x{height}"
            )));
        }

        Ok(Self {
            data_offset: read_u32_le(raw, 10)?,
            width: width as u32,
            height: height as u32,
            planes: read_u16_le(raw, 26)?,
            bits_per_pixel: read_u16_le(raw, 28)?,
            compression: read_u32_le(raw, 30)?,
        })
    }

    /// Check the structural invariants required for processing.
    ///
    /// Any violation is a per-image skip, never a process-fatal error.
    pub fn validate(&self) -> BmpseqResult<()> {
        if self.planes != 1 {
            return Err(BmpseqError::decode(format!(
                "plane count is {}, expected 1",
                self.planes
            )));
        }
        if self.bits_per_pixel != 24 {
            return Err(BmpseqError::decode(format!(
                "bit depth is {}, expected 24",
                self.bits_per_pixel
            )));
        }
        if self.compression != 0 {
            return Err(BmpseqError::decode(format!(
                "compression code is {}, expected 0",
                self.compression
            )));
        }
        Ok(())
    }
}

/// Decode a raw file buffer into a [`BmpImage`].
///
/// The pixel buffer is every byte from the header's data offset to the end
/// of the file, and must match `row_stride(width) * height` exactly.
pub fn decode_bmp(raw: &[u8]) -> BmpseqResult<BmpImage> {
    let header = BmpHeader::parse(raw)?;
    header.validate()?;

    let start = header.data_offset as usize;
    if start > raw.len() {
        return Err(BmpseqError::decode(format!(
            "pixel data offset {start} is past end of file ({} bytes)",
            raw.len()
        )));
    }

    let pixels = raw[start..].to_vec();
    let expected = row_stride(header.width) * header.height as usize;
    if pixels.len() != expected {
        return Err(BmpseqError::decode(format!(
            "pixel data is {} bytes, expected {expected} for {}x{}",
            pixels.len(),
            header.width,
            header.height
        )));
    }

    Ok(BmpImage {
        width: header.width,
        height: header.height,
        pixels,
    })
}

/// Encode an interleaved pixel buffer under a freshly built 54-byte header.
///
/// The pixel bytes are written verbatim, padding included; only the header
/// is synthesized. The caller must pass a buffer of `row_stride(width) *
/// height` bytes.
pub fn encode_bmp(width: u32, height: u32, pixels: &[u8]) -> BmpseqResult<Vec<u8>> {
    let expected = row_stride(width) * height as usize;
    if pixels.len() != expected {
        return Err(BmpseqError::validation(format!(
            "encode_bmp expects {expected} pixel bytes for {width}x{height}, got {}",
            pixels.len()
        )));
    }

    let file_size = (HEADER_LEN + pixels.len()) as u32;
    let mut out = Vec::with_capacity(HEADER_LEN + pixels.len());

    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes()); // DIB header size
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixels.len() as u32).to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // palette size
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    debug_assert_eq!(out.len(), HEADER_LEN);
    out.extend_from_slice(pixels);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/bmp.rs"]
mod tests;
