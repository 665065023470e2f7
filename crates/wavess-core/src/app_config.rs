use std::path::PathBuf;

/// Upper bound on the comment sentiment histogram bin count.
pub const MAX_HISTOGRAM_BINS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding the three input tables.
    pub data_dir: PathBuf,
    pub posts_file: String,
    pub audience_file: String,
    pub comments_file: String,
    /// How many keywords the report lists for the primary post.
    pub top_keywords: usize,
    /// Bin count for the comment sentiment histogram.
    pub histogram_bins: usize,
    /// Optional YAML overlay merged over the built-in sentiment lexicon.
    pub lexicon_path: Option<PathBuf>,
}

impl AppConfig {
    /// Resolved paths of the posts, audience, and comments tables.
    #[must_use]
    pub fn dataset_paths(&self) -> crate::DatasetPaths {
        crate::DatasetPaths {
            posts: self.data_dir.join(&self.posts_file),
            audience: self.data_dir.join(&self.audience_file),
            comments: self.data_dir.join(&self.comments_file),
        }
    }
}
