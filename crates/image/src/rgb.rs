use {crate::*, base::Vec2};

/// Convert packed YUYV 4:2:2 (`[Y0, U, Y1, V]` per pixel pair) to RGB.
pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Result<Vec<u8>, ImageError> {
    let pixel_count = size.area();
    let expected_len = pixel_count * 2;
    if data.len() < expected_len {
        return Err(ImageError::Format(format!(
            "YUYV frame too short: got {} bytes, expected {} for {}x{}",
            data.len(),
            expected_len,
            size.x,
            size.y
        )));
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);
    for chunk in data[..expected_len].chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        rgb.extend_from_slice(&[r0, g0, b0, r1, g1, b1]);
    }

    Ok(rgb)
}

pub fn jpeg_to_rgb(image: &Image) -> Result<Image, ImageError> {
    if image.format != PixelFormat::Jpeg {
        return Err(ImageError::Decode(format!(
            "expected {:?} format, got {:?}",
            PixelFormat::Jpeg,
            image.format
        )));
    }
    let decoded = crates_image::load_from_memory_with_format(
        &image.data,
        crates_image::ImageFormat::Jpeg,
    )
    .map_err(|e| ImageError::Decode(format!("Failed to decode JPEG: {}", e)))?;

    let rgb_image = decoded.to_rgb8();
    let (width, height) = rgb_image.dimensions();
    let size = Vec2::new(width as usize, height as usize);

    Ok(Image::new(size, rgb_image.into_raw(), PixelFormat::Rgb8))
}
