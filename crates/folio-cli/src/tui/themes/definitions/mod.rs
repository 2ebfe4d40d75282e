//! Built-in theme definitions

mod forest;
mod midnight;
mod neon;
mod paper;

pub use forest::forest;
pub use midnight::midnight;
pub use neon::neon;
pub use paper::paper;
