use {
    base::{init_stdout_logger, log_error, log_info, log_warn},
    record::{RecordConfig, RecordError, Recorder},
    video::{create_device, v4l2::probe_devices},
};

// highest camera index probed when no device can be opened
const MAX_PROBED_DEVICES: usize = 5;

fn main() {
    init_stdout_logger();

    let config = RecordConfig::default();
    if !config.image_dir.is_dir() {
        log_warn!(
            "{} is not a directory, frames will not be saved",
            config.image_dir.display()
        );
    }

    let mut device = create_device(&config.camera);
    let mut recorder = Recorder::new(config);

    match recorder.run(device.as_mut()) {
        Ok(summary) => {
            log_info!(
                "{} of {} frames captured, {} reads failed",
                summary.captured,
                summary.frames,
                summary.failed
            );
        }
        Err(RecordError::NoDevice(error)) => {
            log_info!(
                "{}; {} camera(s) found",
                error,
                probe_devices(MAX_PROBED_DEVICES)
            );
        }
        Err(error) => {
            log_error!("{}", error);
        }
    }
}
