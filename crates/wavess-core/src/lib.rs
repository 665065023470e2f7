//! Typed records, configuration, and CSV loading for Wavess.

pub mod app_config;
pub mod config;
pub mod dataset;
pub mod error;
pub mod records;

pub use app_config::{AppConfig, Environment, MAX_HISTOGRAM_BINS};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{
    load_audience, load_comments, load_dataset, load_posts, read_audience, read_comments,
    read_posts, DatasetPaths,
};
pub use error::{ConfigError, DatasetError};
pub use records::{AudienceMember, Comment, Dataset, Post};
