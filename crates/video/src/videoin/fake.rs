use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
};

/// Which captures of a `FakeVideoIn` report failure, by zero-based capture count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FailingFrames {
    #[default]
    None,
    All,
    Indices(Vec<usize>),
    EveryNth(usize),
}

impl FailingFrames {
    pub fn fails(&self, index: usize) -> bool {
        match self {
            FailingFrames::None => false,
            FailingFrames::All => true,
            FailingFrames::Indices(indices) => indices.contains(&index),
            FailingFrames::EveryNth(0) => false,
            FailingFrames::EveryNth(n) => index % n == n - 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakeConfig {
    pub size: Vec2<usize>,
    pub refuse_open: bool,
    pub failing: FailingFrames,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(16, 12),
            refuse_open: false,
            failing: FailingFrames::None,
        }
    }
}

/// In-memory capture device producing RGB gradient frames.
///
/// Counts every call so tests can check how the device was driven.
#[derive(Debug, Default)]
pub struct FakeVideoIn {
    config: Option<FakeConfig>,
    opens: usize,
    closes: usize,
    captures: usize,
}

impl FakeVideoIn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opens(&self) -> usize {
        self.opens
    }

    pub fn closes(&self) -> usize {
        self.closes
    }

    pub fn captures(&self) -> usize {
        self.captures
    }

    fn gradient(size: Vec2<usize>, offset: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size.area() * 3);
        for y in 0..size.y {
            for x in 0..size.x {
                let v = x * 255 / size.x.max(1);
                let w = y * 255 / size.y.max(1);
                data.extend_from_slice(&[v as u8, w as u8, (offset % 256) as u8]);
            }
        }
        data
    }
}

impl VideoInDevice for FakeVideoIn {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError> {
        self.opens += 1;
        let config = match config {
            VideoInConfig::Fake(config) => config,
            #[allow(unreachable_patterns)]
            _ => {
                return Err(VideoError::Device(
                    "FakeVideoIn::open should be called with VideoInConfig::Fake".to_string(),
                ));
            }
        };
        if config.refuse_open {
            return Err(VideoError::Device("fake device refused to open".to_string()));
        }
        self.config = Some(config.clone());
        Ok(VideoInConfig::Fake(config.clone()))
    }

    fn close(&mut self) {
        self.closes += 1;
        self.config = None;
    }

    fn is_open(&self) -> bool {
        self.config.is_some()
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        let Some(config) = self.config.as_ref() else {
            return Err(VideoError::Stream("No stream".to_string()));
        };
        let index = self.captures;
        self.captures += 1;
        if config.failing.fails(index) {
            return Err(VideoError::Stream(format!("no frame at capture {index}")));
        }
        Ok(VideoFrame {
            color: Image::new(
                config.size,
                Self::gradient(config.size, index),
                PixelFormat::Rgb8,
            ),
        })
    }
}
