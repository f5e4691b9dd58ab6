mod clock;
pub use clock::*;

pub mod log;
pub use log::*;

mod vec2;
pub use vec2::*;
