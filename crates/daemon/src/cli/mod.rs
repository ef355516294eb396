pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Backup, Health, Restore, Serve, Version};
