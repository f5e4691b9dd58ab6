use {
    crate::*,
    anyhow::{Context, Result},
    base::{log_debug, log_error, log_info, log_warn},
    std::path::PathBuf,
    video::{VideoFrame, VideoInDevice},
};

pub const NO_WEBCAM_MESSAGE: &str = "No webcam detected at specified port!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Unopened,
    Running,
    Released,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSummary {
    pub frames: usize,
    pub captured: usize,
    pub failed: usize,
    /// The missed-frame count printed at the end of the run. Never tallied.
    pub reported_missed: usize,
}

pub struct Recorder {
    config: RecordConfig,
    run_log: RunLog,
    state: RecorderState,
}

impl Recorder {
    pub fn new(config: RecordConfig) -> Self {
        let run_log = RunLog::new(config.log_path.clone());
        Self {
            config,
            run_log,
            state: RecorderState::Unopened,
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    /// Record one run on `device`.
    ///
    /// Opens the device, performs exactly `frames()` blocking reads, then
    /// closes it. If the device cannot be opened, `NO_WEBCAM_MESSAGE` goes to
    /// the console, nothing is written to the run log or image directory, the
    /// device is not closed, and `RecordError::NoDevice` is returned.
    /// Per-frame failures never end the run early.
    pub fn run(&mut self, device: &mut dyn VideoInDevice) -> Result<RecordSummary, RecordError> {
        if self.state != RecorderState::Unopened {
            return Err(RecordError::State(self.state));
        }

        if let Err(error) = device.open(&self.config.camera) {
            self.state = RecorderState::Terminated;
            log_error!("{}", NO_WEBCAM_MESSAGE);
            return Err(RecordError::NoDevice(error));
        }
        self.state = RecorderState::Running;

        let frames = self.config.frames();
        let mut captured = 0;
        let mut failed = 0;
        // reported but not counted; failures are tallied in `failed`
        let missed_frames = 0;

        log_info!("Recording video");
        self.log_event(self.run_log.append_timestamp());

        for index in 0..frames {
            log_debug!("Current frame: {}", index);
            match device.blocking_capture() {
                Ok(frame) => {
                    captured += 1;
                    if let Err(error) = self.write_frame(index, &frame) {
                        log_warn!("frame {}: {:#}", index, error);
                    }
                    self.log_event(self.run_log.append_timestamp());
                }
                Err(error) => {
                    failed += 1;
                    log_debug!("frame {}: {}", index, error);
                    self.log_event(self.run_log.append_no_frame());
                }
            }
        }

        log_info!("Recording finished. Missed frames: {}", missed_frames);
        self.log_event(self.run_log.append_timestamp());

        device.close();
        self.state = RecorderState::Released;

        Ok(RecordSummary {
            frames,
            captured,
            failed,
            reported_missed: missed_frames,
        })
    }

    fn write_frame(&self, index: usize, frame: &VideoFrame) -> Result<PathBuf> {
        let jpeg = image::encode_jpeg(&frame.color, self.config.jpeg_quality)
            .context("encoding frame")?;
        let path = self.config.image_path(index);
        std::fs::write(&path, jpeg).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    fn log_event(&self, result: Result<()>) {
        if let Err(error) = result {
            log_warn!("run log: {:#}", error);
        }
    }
}
