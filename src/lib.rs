pub mod blur;
#[cfg(feature = "x11")]
pub mod capture;
pub mod config;
pub mod error;
pub mod frame;
pub mod lock;
pub mod parallel;
pub mod pixel;
pub mod scale;

pub use blur::{box_blur, box_blur_once, box_blur_with};
pub use config::LockParams;
pub use frame::Frame;
pub use lock::LockCommand;
