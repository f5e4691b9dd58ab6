use {crate::RecorderState, std::fmt, video::VideoError};

#[derive(Debug)]
pub enum RecordError {
    NoDevice(VideoError),
    State(RecorderState),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NoDevice(err) => write!(f, "no capture device: {err}"),
            RecordError::State(state) => write!(f, "recorder cannot run from state {state:?}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::NoDevice(err) => Some(err),
            RecordError::State(_) => None,
        }
    }
}

impl From<VideoError> for RecordError {
    fn from(err: VideoError) -> Self {
        RecordError::NoDevice(err)
    }
}
