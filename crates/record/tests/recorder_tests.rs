use {
    base::{Level, Logger},
    record::{NO_FRAME_LINE, NO_WEBCAM_MESSAGE, RecordConfig, RecordError, Recorder, RecorderState},
    std::{
        fs,
        path::PathBuf,
        sync::{Arc, Mutex},
    },
    video::{
        VideoInConfig, VideoInDevice,
        fake::{FailingFrames, FakeConfig, FakeVideoIn},
    },
};

struct TestDir {
    root: PathBuf,
}

impl TestDir {
    fn new(name: &str) -> Self {
        let root =
            std::env::temp_dir().join(format!("record-test-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("img")).unwrap();
        Self { root }
    }

    fn config(&self, fps: u32, duration_secs: u32, fake: FakeConfig) -> RecordConfig {
        RecordConfig {
            camera: VideoInConfig::Fake(fake),
            fps,
            duration_secs,
            image_dir: self.root.join("img"),
            log_path: self.root.join("log.txt"),
            ..Default::default()
        }
    }

    fn log_lines(&self) -> Vec<String> {
        match fs::read_to_string(self.root.join("log.txt")) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn image_count(&self) -> usize {
        fs::read_dir(self.root.join("img")).unwrap().count()
    }

    fn image_exists(&self, index: usize) -> bool {
        self.root.join("img").join(format!("i{index}.jpg")).exists()
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

struct CaptureLogger {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, level: Level, _file: &str, _line: usize, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}

fn failing(failing: FailingFrames) -> FakeConfig {
    FakeConfig {
        failing,
        ..Default::default()
    }
}

fn is_timestamp(line: &str) -> bool {
    // HH:MM:SS.nnnnnnnnn
    let bytes = line.as_bytes();
    line.len() == 18
        && bytes[2] == b':'
        && bytes[5] == b':'
        && bytes[8] == b'.'
        && line
            .char_indices()
            .all(|(i, c)| matches!(i, 2 | 5 | 8) || c.is_ascii_digit())
}

#[test]
fn test_all_reads_succeed() {
    let dir = TestDir::new("all-succeed");
    let mut recorder = Recorder::new(dir.config(5, 2, FakeConfig::default()));
    let mut device = FakeVideoIn::new();

    let summary = recorder.run(&mut device).unwrap();

    assert_eq!(summary.frames, 10);
    assert_eq!(summary.captured, 10);
    assert_eq!(summary.failed, 0);
    assert_eq!(dir.image_count(), 10);
    for index in 0..10 {
        assert!(dir.image_exists(index));
    }

    let lines = dir.log_lines();
    assert_eq!(lines.len(), 12);
    assert!(lines.iter().all(|line| is_timestamp(line)));
}

#[test]
fn test_images_are_jpeg() {
    let dir = TestDir::new("jpeg");
    let mut recorder = Recorder::new(dir.config(1, 1, FakeConfig::default()));
    recorder.run(&mut FakeVideoIn::new()).unwrap();

    let data = fs::read(dir.root.join("img").join("i0.jpg")).unwrap();
    assert_eq!(&data[..2], &[0xFF, 0xD8]);
}

#[test]
fn test_all_reads_fail() {
    let dir = TestDir::new("all-fail");
    let mut recorder = Recorder::new(dir.config(4, 3, failing(FailingFrames::All)));
    let mut device = FakeVideoIn::new();

    let summary = recorder.run(&mut device).unwrap();

    assert_eq!(summary.captured, 0);
    assert_eq!(summary.failed, 12);
    assert_eq!(device.captures(), 12);
    assert_eq!(dir.image_count(), 0);

    let lines = dir.log_lines();
    assert_eq!(lines.len(), 14);
    assert!(is_timestamp(&lines[0]));
    assert!(is_timestamp(&lines[13]));
    assert!(lines[1..13].iter().all(|line| line == NO_FRAME_LINE));
}

#[test]
fn test_mixed_reads() {
    let dir = TestDir::new("mixed");
    let mut recorder = Recorder::new(dir.config(3, 2, failing(FailingFrames::Indices(vec![1, 4]))));

    let summary = recorder.run(&mut FakeVideoIn::new()).unwrap();

    assert_eq!(summary.captured, 4);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.captured + summary.failed, summary.frames);

    let lines = dir.log_lines();
    assert_eq!(lines.len(), 8);
    for index in 0..6 {
        let line = &lines[index + 1];
        if index == 1 || index == 4 {
            assert!(!dir.image_exists(index));
            assert_eq!(line, NO_FRAME_LINE);
        } else {
            assert!(dir.image_exists(index));
            assert!(is_timestamp(line));
        }
    }
}

#[test]
fn test_missed_frames_report_stays_zero() {
    let dir = TestDir::new("missed");
    let mut recorder = Recorder::new(dir.config(2, 2, failing(FailingFrames::EveryNth(2))));

    let summary = recorder.run(&mut FakeVideoIn::new()).unwrap();

    assert_eq!(summary.failed, 2);
    assert_eq!(summary.reported_missed, 0);
}

#[test]
fn test_device_not_opened() {
    let dir = TestDir::new("no-device");
    let config = dir.config(
        30,
        60,
        FakeConfig {
            refuse_open: true,
            ..Default::default()
        },
    );
    let mut recorder = Recorder::new(config);
    let mut device = FakeVideoIn::new();

    // other tests in this binary may log while the capture logger is installed
    let console = Arc::new(Mutex::new(Vec::new()));
    base::log::LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(Box::new(CaptureLogger {
            lines: Arc::clone(&console),
        }));
    let result = recorder.run(&mut device);
    base::log::LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .take();

    assert!(matches!(result, Err(RecordError::NoDevice(_))));
    let no_webcam = console
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, message)| *level == Level::Error && message == NO_WEBCAM_MESSAGE)
        .count();
    assert_eq!(no_webcam, 1);
    assert_eq!(NO_WEBCAM_MESSAGE, "No webcam detected at specified port!");
    assert_eq!(recorder.state(), RecorderState::Terminated);
    assert_eq!(device.opens(), 1);
    assert_eq!(device.captures(), 0);
    assert_eq!(device.closes(), 0);
    assert!(!dir.root.join("log.txt").exists());
    assert_eq!(dir.image_count(), 0);
}

#[test]
fn test_state_transitions_and_release() {
    let dir = TestDir::new("states");
    let mut recorder = Recorder::new(dir.config(1, 2, FakeConfig::default()));
    let mut device = FakeVideoIn::new();
    assert_eq!(recorder.state(), RecorderState::Unopened);

    recorder.run(&mut device).unwrap();

    assert_eq!(recorder.state(), RecorderState::Released);
    assert_eq!(device.opens(), 1);
    assert_eq!(device.closes(), 1);
    assert!(!device.is_open());

    // a recorder runs once
    assert!(matches!(
        recorder.run(&mut device),
        Err(RecordError::State(RecorderState::Released))
    ));
    assert_eq!(device.opens(), 1);
}

#[test]
fn test_missing_image_dir_still_logs() {
    let dir = TestDir::new("no-img");
    fs::remove_dir_all(dir.root.join("img")).unwrap();
    let mut recorder = Recorder::new(dir.config(2, 1, FakeConfig::default()));

    let summary = recorder.run(&mut FakeVideoIn::new()).unwrap();

    assert_eq!(summary.captured, 2);
    assert!(!dir.root.join("img").exists());
    let lines = dir.log_lines();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| is_timestamp(line)));
}

#[test]
fn test_log_is_appended_across_runs() {
    let dir = TestDir::new("append");
    for _ in 0..2 {
        let mut recorder = Recorder::new(dir.config(1, 3, FakeConfig::default()));
        recorder.run(&mut FakeVideoIn::new()).unwrap();
    }
    assert_eq!(dir.log_lines().len(), 10);
    // same indices overwrite the same files
    assert_eq!(dir.image_count(), 3);
}

#[test]
fn test_full_default_length_run() {
    let dir = TestDir::new("full");
    let mut recorder = Recorder::new(dir.config(30, 60, FakeConfig::default()));

    let summary = recorder.run(&mut FakeVideoIn::new()).unwrap();

    assert_eq!(summary.frames, 1800);
    assert_eq!(dir.image_count(), 1800);
    assert!(dir.image_exists(0));
    assert!(dir.image_exists(1799));
    assert!(!dir.image_exists(1800));
    assert_eq!(dir.log_lines().len(), 1802);
}

#[test]
fn test_full_default_length_run_all_failing() {
    let dir = TestDir::new("full-fail");
    let mut recorder = Recorder::new(dir.config(30, 60, failing(FailingFrames::All)));

    recorder.run(&mut FakeVideoIn::new()).unwrap();

    let lines = dir.log_lines();
    assert_eq!(dir.image_count(), 0);
    assert_eq!(lines.len(), 1802);
    assert_eq!(
        lines.iter().filter(|line| *line == NO_FRAME_LINE).count(),
        1800
    );
}
