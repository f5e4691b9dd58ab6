use {
    anyhow::{Context, Result},
    base::format_time_of_day,
    std::{
        fs::OpenOptions,
        io::Write,
        path::{Path, PathBuf},
    },
};

pub const NO_FRAME_LINE: &str = "ERROR: No frame acquired";

/// Append-only text log of a run, one line per event.
///
/// The file is opened for every append and closed again.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        writeln!(file, "{line}").with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    pub fn append_timestamp(&self) -> Result<()> {
        self.append_line(&format_time_of_day())
    }

    pub fn append_no_frame(&self) -> Result<()> {
        self.append_line(NO_FRAME_LINE)
    }
}
