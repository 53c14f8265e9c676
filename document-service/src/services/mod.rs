pub mod metrics;
pub mod storage;

pub use storage::{LocalStorage, Storage};
