pub mod backup;
pub mod health;
pub mod restore;
pub mod serve;
pub mod version;

pub use backup::Backup;
pub use health::Health;
pub use restore::Restore;
pub use serve::Serve;
pub use version::Version;
