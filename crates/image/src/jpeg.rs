use {crate::*, base::Vec2, crates_image::ImageEncoder};

pub const DEFAULT_JPEG_QUALITY: u8 = 95;

pub fn rgb_to_jpeg(size: Vec2<usize>, data: &[u8], quality: u8) -> Result<Vec<u8>, ImageError> {
    let expected_len = size.area() * 3;
    if data.len() < expected_len {
        return Err(ImageError::Encode(format!(
            "RGB buffer too short: got {} bytes, expected {}",
            data.len(),
            expected_len
        )));
    }
    let mut buffer = Vec::new();
    let encoder =
        crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    encoder
        .write_image(
            &data[..expected_len],
            size.x as u32,
            size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

pub fn yuyv_to_jpeg(size: Vec2<usize>, data: &[u8], quality: u8) -> Result<Vec<u8>, ImageError> {
    let rgb = yuyv_to_rgb(size, data)?;
    rgb_to_jpeg(size, &rgb, quality)
}

/// Encode any supported frame as a JPEG file body.
///
/// MJPEG frames are decoded and re-encoded, since camera MJPEG streams often
/// omit the Huffman tables a standalone JPEG file needs.
pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    match image.format {
        PixelFormat::Rgb8 => rgb_to_jpeg(image.size, &image.data, quality),
        PixelFormat::Yuyv => yuyv_to_jpeg(image.size, &image.data, quality),
        PixelFormat::Jpeg => {
            let rgb = jpeg_to_rgb(image)?;
            rgb_to_jpeg(rgb.size, &rgb.data, quality)
        }
    }
}
