//! Audience role classification.

use serde::{Deserialize, Serialize};
use wavess_core::AudienceMember;

/// Coarse professional field of an audience member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Marketing,
    Policy,
    Sustainability,
    Research,
    Technology,
    Other,
    /// Sentinel for "no field available"; [`classify_role`] never returns it.
    Unknown,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Marketing => "Marketing",
            Field::Policy => "Policy",
            Field::Sustainability => "Sustainability",
            Field::Research => "Research",
            Field::Technology => "Technology",
            Field::Other => "Other",
            Field::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Ordered (needles, field) rules; the first rule with a matching needle wins.
const RULES: &[(&[&str], Field)] = &[
    (&["marketing"], Field::Marketing),
    (&["policy", "climate"], Field::Policy),
    (&["esg", "sustainability"], Field::Sustainability),
    (&["research"], Field::Research),
    (&["founder", "tech"], Field::Technology),
];

/// An audience member with their classified field attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedMember {
    #[serde(flatten)]
    pub member: AudienceMember,
    pub field: Field,
}

/// Map a free-text role to a [`Field`] by case-insensitive substring match.
///
/// Total: roles matching no rule (including the empty role) are `Other`.
#[must_use]
pub fn classify_role(role: &str) -> Field {
    let role = role.to_lowercase();
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| role.contains(n)))
        .map_or(Field::Other, |&(_, field)| field)
}

/// Classify every member of an audience table, preserving order.
#[must_use]
pub fn classify_members(members: &[AudienceMember]) -> Vec<ClassifiedMember> {
    members
        .iter()
        .map(|member| ClassifiedMember {
            field: classify_role(&member.role),
            member: member.clone(),
        })
        .collect()
}
