use {
    crate::*,
    base::{Vec2, log_debug},
    image::{Image, PixelFormat, fourcc_to_string},
    std::path::PathBuf,
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

// number of mmap buffers queued with the driver
const BUFFER_COUNT: u32 = 4;

#[derive(Debug, Clone, Default)]
pub struct V4l2Config {
    pub index: usize,
    pub path: Option<PathBuf>,
    pub size: Option<Vec2<usize>>,
    pub format: Option<PixelFormat>,
    pub frame_rate: Option<f32>,
}

impl V4l2Config {
    pub fn with_index(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }
}

pub(crate) struct V4l2 {
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
    frame_rate: f32,
}

impl V4l2 {
    pub fn new() -> Self {
        Self {
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
            frame_rate: 0.0,
        }
    }
}

impl VideoInDevice for V4l2 {
    fn open(&mut self, config: &VideoInConfig) -> Result<VideoInConfig, VideoError> {
        // close stream
        self.stream.take();

        // unpack config
        let config = match config {
            VideoInConfig::V4l2(config) => config,
            _ => {
                return Err(VideoError::Device(
                    "V4l2::open should be called with VideoInConfig::V4l2".to_string(),
                ));
            }
        };

        // create device from path or index
        let device = match &config.path {
            Some(path) => Device::with_path(path)?,
            None => Device::new(config.index)?,
        };
        let device_format = Capture::format(&device)?;

        // build size
        let desired_size = match config.size {
            Some(size) => size,
            None => Vec2::new(device_format.width as usize, device_format.height as usize),
        };

        // set the first format the device accepts and we can convert
        let device_fourcc = u32::from_le_bytes(device_format.fourcc.repr);
        let candidates = candidate_formats(config.format, device_fourcc);
        let mut negotiated = None;
        for candidate in &candidates {
            let actual_format = Capture::set_format(
                &device,
                &Format::new(
                    desired_size.x as u32,
                    desired_size.y as u32,
                    FourCC::new(&candidate.as_fourcc().to_le_bytes()),
                ),
            )?;
            let actual_fourcc = u32::from_le_bytes(actual_format.fourcc.repr);
            match PixelFormat::from_fourcc(actual_fourcc) {
                Ok(format) => {
                    negotiated = Some((actual_format, format));
                    break;
                }
                Err(_) => log_debug!(
                    "v4l2: asked for {}, device set {}",
                    fourcc_to_string(candidate.as_fourcc()),
                    actual_format.fourcc
                ),
            }
        }
        let Some((actual_format, format)) = negotiated else {
            let tried: Vec<String> = candidates
                .iter()
                .map(|format| fourcc_to_string(format.as_fourcc()))
                .collect();
            return Err(VideoError::Device(format!(
                "no supported pixel format (device default {}, tried {})",
                fourcc_to_string(device_fourcc),
                tried.join(", ")
            )));
        };

        // extract size and pixel format
        self.size = Vec2::new(actual_format.width as usize, actual_format.height as usize);
        self.format = format;

        // build frame rate
        let desired_frame_rate = match config.frame_rate {
            Some(frame_rate) => frame_rate,
            None => {
                let params = Capture::params(&device)?;
                params.interval.denominator as f32 / params.interval.numerator as f32
            }
        };

        // set the frame rate and get the actual frame rate back
        let actual_params = Capture::set_params(
            &device,
            &v4l::video::capture::Parameters::with_fps(desired_frame_rate.round() as u32),
        )?;
        self.frame_rate =
            actual_params.interval.denominator as f32 / actual_params.interval.numerator as f32;

        // create the stream
        self.stream = match MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT) {
            Ok(stream) => Some(stream),
            Err(error) => {
                return Err(VideoError::Stream(error.to_string()));
            }
        };

        log_debug!(
            "v4l2: opened {}x{} {} at {} fps",
            self.size.x,
            self.size.y,
            fourcc_to_string(self.format.as_fourcc()),
            self.frame_rate
        );

        Ok(VideoInConfig::V4l2(V4l2Config {
            index: config.index,
            path: config.path.clone(),
            size: Some(self.size),
            format: Some(self.format),
            frame_rate: Some(self.frame_rate),
        }))
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    fn blocking_capture(&mut self) -> Result<VideoFrame, VideoError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(VideoError::Stream("No stream".to_string()));
        };
        match CaptureStream::next(stream) {
            Ok((frame_data, metadata)) => {
                // drivers may hand back the whole mmap buffer
                let used = metadata.bytesused as usize;
                let data = if used > 0 && used <= frame_data.len() {
                    &frame_data[..used]
                } else {
                    frame_data
                };
                Ok(VideoFrame {
                    color: Image::new(self.size, data.to_vec(), self.format),
                })
            }
            Err(error) => Err(VideoError::Stream(error.to_string())),
        }
    }
}

// formats the capture loop can encode, in order of preference
const FALLBACK_FORMATS: [PixelFormat; 2] = [PixelFormat::Jpeg, PixelFormat::Yuyv];

/// Pixel formats to try, in order, when opening a device.
///
/// An explicit request is tried alone. Otherwise the device's current format
/// comes first when it is one we handle, followed by MJPG and YUYV.
pub(crate) fn candidate_formats(requested: Option<PixelFormat>, device_fourcc: u32) -> Vec<PixelFormat> {
    if let Some(format) = requested {
        return vec![format];
    }
    let mut candidates = Vec::with_capacity(FALLBACK_FORMATS.len() + 1);
    if let Ok(format) = PixelFormat::from_fourcc(device_fourcc) {
        candidates.push(format);
    }
    for format in FALLBACK_FORMATS {
        if !candidates.contains(&format) {
            candidates.push(format);
        }
    }
    candidates
}

/// Count how many V4L2 devices, from index 0 upward, can be opened.
///
/// Stops at the first index that fails to open.
pub fn probe_devices(max: usize) -> usize {
    (0..max).take_while(|&index| Device::new(index).is_ok()).count()
}
