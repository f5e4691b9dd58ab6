use {
    std::path::PathBuf,
    video::{VideoInConfig, v4l2::V4l2Config},
};

pub const CAMERA_INDEX: usize = 0;
pub const FPS: u32 = 30;
pub const DURATION_SECS: u32 = 60;
pub const IMAGE_DIR: &str = "img";
pub const LOG_FILE: &str = "log.txt";
pub const JPEG_QUALITY: u8 = image::DEFAULT_JPEG_QUALITY;

#[derive(Debug, Clone)]
pub struct RecordConfig {
    pub camera: VideoInConfig,
    pub fps: u32,
    pub duration_secs: u32,
    pub image_dir: PathBuf,
    pub log_path: PathBuf,
    pub jpeg_quality: u8,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            camera: VideoInConfig::V4l2(V4l2Config {
                frame_rate: Some(FPS as f32),
                ..V4l2Config::with_index(CAMERA_INDEX)
            }),
            fps: FPS,
            duration_secs: DURATION_SECS,
            image_dir: PathBuf::from(IMAGE_DIR),
            log_path: PathBuf::from(LOG_FILE),
            jpeg_quality: JPEG_QUALITY,
        }
    }
}

impl RecordConfig {
    /// Number of loop iterations in a run.
    pub fn frames(&self) -> usize {
        self.fps as usize * self.duration_secs as usize
    }

    /// `<image_dir>/i<index>.jpg`, index in plain decimal without padding.
    pub fn image_path(&self, index: usize) -> PathBuf {
        self.image_dir.join(format!("i{index}.jpg"))
    }
}
