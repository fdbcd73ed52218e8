pub mod config;
pub mod error;
pub mod feed;
pub mod registry;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use registry::{Registry, DEFAULT_CATEGORY};
