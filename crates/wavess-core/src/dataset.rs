//! CSV loading for the posts, audience, and comments tables.
//!
//! Rows are deserialized as raw strings and validated here so the analysis
//! layer only ever sees typed records. Numeric failures carry the table,
//! 1-based data row, and column of the offending cell.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DatasetError;
use crate::records::{AudienceMember, Comment, Dataset, Post};

const POSTS: &str = "posts";
const AUDIENCE: &str = "audience";
const COMMENTS: &str = "comments";

/// File locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub posts: PathBuf,
    pub audience: PathBuf,
    pub comments: PathBuf,
}

impl DatasetPaths {
    /// Paths that do not exist on disk, in posts/audience/comments order.
    #[must_use]
    pub fn missing(&self) -> Vec<&Path> {
        [&self.posts, &self.audience, &self.comments]
            .into_iter()
            .map(PathBuf::as_path)
            .filter(|p| !p.exists())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct PostRow {
    post_id: String,
    post_text: String,
    likes: String,
    comments: String,
    shares: String,
}

#[derive(Debug, Deserialize)]
struct AudienceRow {
    name: String,
    role: String,
    relevance_to_icp: String,
}

#[derive(Debug, Deserialize)]
struct CommentRow {
    comment_text: String,
}

/// Load all three tables.
///
/// # Errors
///
/// Returns the first [`DatasetError`] hit, in posts/audience/comments order.
pub fn load_dataset(paths: &DatasetPaths) -> Result<Dataset, DatasetError> {
    let posts = load_posts(&paths.posts)?;
    let audience = load_audience(&paths.audience)?;
    let comments = load_comments(&paths.comments)?;

    tracing::info!(
        posts = posts.len(),
        audience = audience.len(),
        comments = comments.len(),
        "dataset loaded"
    );

    Ok(Dataset {
        posts,
        audience,
        comments,
    })
}

/// Load the posts table from a CSV file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened, otherwise see [`read_posts`].
pub fn load_posts(path: &Path) -> Result<Vec<Post>, DatasetError> {
    read_posts(open(path)?)
}

/// Load the audience table from a CSV file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened, otherwise see [`read_audience`].
pub fn load_audience(path: &Path) -> Result<Vec<AudienceMember>, DatasetError> {
    read_audience(open(path)?)
}

/// Load the comments table from a CSV file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened, otherwise see [`read_comments`].
pub fn load_comments(path: &Path) -> Result<Vec<Comment>, DatasetError> {
    read_comments(open(path)?)
}

/// Parse a posts table (`post_id, post_text, likes, comments, shares`).
///
/// # Errors
///
/// Returns [`DatasetError::Csv`] on malformed CSV or missing columns, and
/// [`DatasetError::InvalidField`] when a counter is not a non-negative integer.
pub fn read_posts<R: Read>(reader: R) -> Result<Vec<Post>, DatasetError> {
    let mut posts = Vec::new();
    for (idx, row) in csv_reader(reader).deserialize::<PostRow>().enumerate() {
        let row = row.map_err(|source| DatasetError::Csv {
            table: POSTS,
            source,
        })?;
        let line = idx + 1;
        posts.push(Post {
            likes: parse_count(POSTS, line, "likes", &row.likes)?,
            comments: parse_count(POSTS, line, "comments", &row.comments)?,
            shares: parse_count(POSTS, line, "shares", &row.shares)?,
            id: row.post_id,
            text: row.post_text,
        });
    }
    Ok(posts)
}

/// Parse an audience table (`name, role, relevance_to_icp`).
///
/// Relevance outside `[0, 1]` is kept but logged.
///
/// # Errors
///
/// Returns [`DatasetError::Csv`] on malformed CSV or missing columns, and
/// [`DatasetError::InvalidField`] when relevance is not a finite number.
pub fn read_audience<R: Read>(reader: R) -> Result<Vec<AudienceMember>, DatasetError> {
    let mut members = Vec::new();
    for (idx, row) in csv_reader(reader)
        .deserialize::<AudienceRow>()
        .enumerate()
    {
        let row = row.map_err(|source| DatasetError::Csv {
            table: AUDIENCE,
            source,
        })?;
        let line = idx + 1;
        let relevance_to_icp = parse_relevance(line, &row.relevance_to_icp)?;
        if !(0.0..=1.0).contains(&relevance_to_icp) {
            tracing::warn!(
                row = line,
                name = %row.name,
                relevance_to_icp,
                "relevance_to_icp outside [0, 1]"
            );
        }
        members.push(AudienceMember {
            name: row.name,
            role: row.role,
            relevance_to_icp,
        });
    }
    Ok(members)
}

/// Parse a comments table (`comment_text`).
///
/// # Errors
///
/// Returns [`DatasetError::Csv`] on malformed CSV or a missing column.
pub fn read_comments<R: Read>(reader: R) -> Result<Vec<Comment>, DatasetError> {
    csv_reader(reader)
        .deserialize::<CommentRow>()
        .map(|row| {
            row.map(|r| Comment {
                text: r.comment_text,
            })
            .map_err(|source| DatasetError::Csv {
                table: COMMENTS,
                source,
            })
        })
        .collect()
}

fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader)
}

/// Parse an engagement counter.
///
/// Accepts plain integers and whole floats such as `"120.0"`, which is how
/// spreadsheet exports often write integer columns.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_count(
    table: &'static str,
    row: usize,
    column: &'static str,
    raw: &str,
) -> Result<u64, DatasetError> {
    let value = raw.trim();
    let invalid = |reason: &str| DatasetError::InvalidField {
        table,
        row,
        column,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    if let Ok(n) = value.parse::<u64>() {
        return Ok(n);
    }

    match value.parse::<f64>() {
        Ok(f) if !f.is_finite() => Err(invalid("must be a finite number")),
        Ok(f) if f < 0.0 => Err(invalid("must be non-negative")),
        Ok(f) if f.fract().abs() > 0.0 => Err(invalid("must be a whole number")),
        Ok(f) if f <= 9_007_199_254_740_992.0 => Ok(f as u64),
        Ok(_) => Err(invalid("too large")),
        Err(_) => Err(invalid("not a number")),
    }
}

fn parse_relevance(row: usize, raw: &str) -> Result<f64, DatasetError> {
    let invalid = |reason: &str| DatasetError::InvalidField {
        table: AUDIENCE,
        row,
        column: "relevance_to_icp",
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    match raw.trim().parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f),
        Ok(_) => Err(invalid("must be a finite number")),
        Err(_) => Err(invalid("not a number")),
    }
}
