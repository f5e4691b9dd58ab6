//! Frame images for the recorder.
//!
//! An `Image` is a raw pixel buffer tagged with its size and `PixelFormat`,
//! as delivered by a capture device. This crate converts between the formats
//! cameras produce (YUYV, MJPEG) and RGB, and encodes frames as JPEG.

mod error;
pub use error::*;

mod image;
pub use image::*;

mod jpeg;
pub use jpeg::*;

mod pixelformat;
pub use pixelformat::*;

mod rgb;
pub use rgb::*;
