use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

pub const DEFAULT_PORT: u16 = 5328;
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct Config {
    // data store configuration
    /// directory holding one JSON file per collection,
    ///  created and seeded on startup if missing
    pub data_dir: PathBuf,

    // http server configuration
    /// address for the API server to listen on.
    ///  if not set then 0.0.0.0:5328 will be used
    pub listen_addr: SocketAddr,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), DEFAULT_PORT),
            log_level: tracing::Level::INFO,
            log_dir: None,
        }
    }
}
