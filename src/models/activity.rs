use std::fmt;

use serde::{Deserialize, Serialize};

/// Registry key for an activity. Lookup is exact and case-sensitive,
/// including embedded spaces and punctuation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityName(String);

impl ActivityName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ActivityName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for ActivityName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// One extracurricular offering. The name lives only as the registry key;
/// on the wire the activities object is keyed by name and the value carries
/// these four fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    /// Signup order; never contains the same email twice.
    pub participants: Vec<String>,
}
