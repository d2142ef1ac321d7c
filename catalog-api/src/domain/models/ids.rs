use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog project.
///
/// Wraps i64 to match the numeric ids used in the JSON dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a reference entity (skill, specialty, industry, category, subcategory).
pub type ReferenceId = i64;
