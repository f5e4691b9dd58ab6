//! Blocking video capture for the recorder.
//!
//! A `VideoInDevice` is opened once, delivers frames one blocking call at a
//! time, and is closed once. Backends: V4L2 (feature `v4l2`) and an
//! in-memory `FakeVideoIn` for tests and dry runs.

mod error;
pub use error::*;

mod videoframe;
pub use videoframe::*;

mod videoin;
pub use videoin::*;
