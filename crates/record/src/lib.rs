//! Fixed-length frame recorder.
//!
//! Captures `fps * duration_secs` frames from a camera, writes each one to
//! `img/i<N>.jpg`, and appends a wall-clock timestamp (or an error marker)
//! per attempted read to `log.txt`.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod recorder;
pub use recorder::*;

mod runlog;
pub use runlog::*;
