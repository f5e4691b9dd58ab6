use image::Image;

#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub color: Image,
}
