use crate::*;

#[derive(Debug, Clone)]
pub enum VideoInConfig {
    #[cfg(feature = "v4l2")]
    V4l2(v4l2::V4l2Config),
    Fake(fake::FakeConfig),
}

/// A capture device, driven synchronously by a single thread.
///
/// `open` acquires the device and returns the configuration that was actually
/// negotiated. `blocking_capture` waits, without timeout, until the device
/// delivers a frame or reports a failure. `close` releases the device and is
/// a no-op if it is not open.
pub trait VideoInDevice: Send {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError>;
    fn close(&mut self);
    fn is_open(&self) -> bool;
    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError>;
}

/// Create an unopened device for the backend named by `config`.
pub fn create_device(config: &VideoInConfig) -> Box<dyn VideoInDevice> {
    match config {
        #[cfg(feature = "v4l2")]
        VideoInConfig::V4l2(_) => Box::new(v4l2::V4l2::new()),
        VideoInConfig::Fake(_) => Box::new(fake::FakeVideoIn::new()),
    }
}

pub mod fake;

#[cfg(feature = "v4l2")]
pub mod v4l2;
