//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a feat as issued by the remote feats service.
///
/// Feat ids are opaque strings (e.g. `"feat_2025_11_pushups"`), never
/// generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatId(String);

impl FeatId {
    /// Creates a new FeatId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("feat_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FeatId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Unique identifier for a recorded completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionId(Uuid);

impl CompletionId {
    /// Creates a new random CompletionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CompletionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CompletionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompletionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feat_id_rejects_empty() {
        assert!(FeatId::new("").is_err());
        assert!(FeatId::new("   ").is_err());
    }

    #[test]
    fn feat_id_preserves_value() {
        let id = FeatId::new("feat_pushups").unwrap();
        assert_eq!(id.as_str(), "feat_pushups");
        assert_eq!(id.to_string(), "feat_pushups");
    }

    #[test]
    fn feat_id_parses_from_str() {
        let id: FeatId = "feat_burpees".parse().unwrap();
        assert_eq!(id.as_str(), "feat_burpees");
    }

    #[test]
    fn feat_id_serializes_transparently() {
        let id = FeatId::new("feat_pushups").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"feat_pushups\"");
    }

    #[test]
    fn completion_id_generates_unique_values() {
        assert_ne!(CompletionId::new(), CompletionId::new());
    }

    #[test]
    fn completion_id_roundtrips_through_display() {
        let id = CompletionId::new();
        let parsed: CompletionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
