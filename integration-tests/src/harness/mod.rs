pub mod logs;
pub mod tracing;

pub use logs::LogDir;
pub use tracing::{CapturedEvent, capture_events};
