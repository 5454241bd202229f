use super::*;
use crate::codec::bmp::row_stride;

fn uniform_bmp(width: u32, height: u32, bgr: [u8; 3]) -> Vec<u8> {
    let stride = row_stride(width);
    let mut pixels = vec![0u8; stride * height as usize];
    for row in 0..height as usize {
        for col in 0..width as usize {
            pixels[row * stride + col * 3..row * stride + col * 3 + 3].copy_from_slice(&bgr);
        }
    }
    encode_bmp(width, height, &pixels).unwrap()
}

#[test]
fn copy_output_is_byte_identical() {
    let raw = uniform_bmp(2, 2, [0, 0, 0]);
    let processed = process_image(&raw, Operation::Copy).unwrap();
    // Input was freshly encoded, so the rebuilt header matches too.
    assert_eq!(processed.bytes, raw);
}

#[test]
fn copy_preserves_arbitrary_pixels_and_padding() {
    let stride = row_stride(3); // 12, with 3 padding bytes per row
    let mut pixels = vec![0u8; stride * 2];
    for (i, b) in pixels.iter_mut().enumerate() {
        *b = (i * 13) as u8;
    }
    // Copy reuses the stored buffer verbatim, nonzero padding included.
    let raw = encode_bmp(3, 2, &pixels).unwrap();
    let processed = process_image(&raw, Operation::Copy).unwrap();
    let out = decode_bmp(&processed.bytes).unwrap();
    assert_eq!(out.pixels, pixels);
}

#[test]
fn gauss_on_uniform_image_is_identity() {
    let raw = uniform_bmp(6, 4, [40, 90, 200]);
    let processed = process_image(&raw, Operation::Gauss).unwrap();
    let out = decode_bmp(&processed.bytes).unwrap();
    let reference = decode_bmp(&raw).unwrap();
    assert_eq!(out.pixels, reference.pixels);
    assert_eq!((out.width, out.height), (6, 4));
}

#[test]
fn gauss_keeps_channels_independent() {
    let raw = uniform_bmp(5, 5, [10, 128, 250]);
    let processed = process_image(&raw, Operation::Gauss).unwrap();
    let out = decode_bmp(&processed.bytes).unwrap();
    let planes = decompose(&out.pixels, 5, 5).unwrap();
    assert!(planes.blue.iter().all(|&v| v == 10));
    assert!(planes.green.iter().all(|&v| v == 128));
    assert!(planes.red.iter().all(|&v| v == 250));
}

#[test]
fn sobel_on_uniform_image_has_zero_interior() {
    let raw = uniform_bmp(8, 8, [77, 77, 77]);
    let processed = process_image(&raw, Operation::Sobel).unwrap();
    let out = decode_bmp(&processed.bytes).unwrap();
    let planes = decompose(&out.pixels, 8, 8).unwrap();
    for plane in [&planes.blue, &planes.green, &planes.red] {
        for row in 2..6 {
            for col in 2..6 {
                assert_eq!(plane[row * 8 + col], 0, "({row}, {col})");
            }
        }
    }
}

#[test]
fn non_bitmap_input_is_a_skip() {
    let err = process_image(b"definitely not a bitmap", Operation::Copy).unwrap_err();
    assert!(err.is_skip(), "{err}");
}

#[test]
fn unsupported_depth_is_a_skip_with_reason() {
    let mut raw = uniform_bmp(2, 2, [0, 0, 0]);
    raw[28] = 8;
    let err = process_image(&raw, Operation::Gauss).unwrap_err();
    assert!(err.is_skip());
    assert!(err.to_string().contains("bit depth is 8"), "{err}");
}

#[test]
fn timings_cover_executed_stages_only() {
    let raw = uniform_bmp(4, 4, [1, 2, 3]);

    let copied = process_image(&raw, Operation::Copy).unwrap();
    assert_eq!(copied.timings.blur, std::time::Duration::ZERO);
    assert_eq!(copied.timings.edge, std::time::Duration::ZERO);

    let blurred = process_image(&raw, Operation::Gauss).unwrap();
    assert_eq!(blurred.timings.edge, std::time::Duration::ZERO);
}

#[test]
fn processed_planes_selection() {
    let planes = ChannelPlanes::zeroed(2, 2);
    assert!(ProcessedPlanes::Original.channels().is_none());
    assert!(ProcessedPlanes::Blurred(planes.clone()).channels().is_some());
    assert!(ProcessedPlanes::EdgeDetected(planes).channels().is_some());
}
