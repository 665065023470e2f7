use serde::{Deserialize, Serialize};

/// One row of the posts table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// One row of the comments table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

/// One row of the audience table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceMember {
    pub name: String,
    /// Free-text professional role, e.g. "Head of ESG Research".
    pub role: String,
    /// Ideal-customer-profile match, nominally in `[0.0, 1.0]`.
    pub relevance_to_icp: f64,
}

/// The three input tables of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub posts: Vec<Post>,
    pub audience: Vec<AudienceMember>,
    pub comments: Vec<Comment>,
}
