use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input for one story generation request: the photo collection plus the
/// optional metadata the editor screen collected. Constructed by the caller,
/// immutable for the lifetime of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryContext {
    /// Opaque photo identifiers, in display order.
    pub photos: Vec<String>,
    pub title: Option<String>,
    /// Free-form category label. Recognized values map to a fixed template
    /// (see `StoryCategory::parse`); anything else counts as unrecognized.
    pub category: Option<String>,
    /// ISO-8601 date on the wire.
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}

/// A generated story plus derived metadata. Produced fresh per call and never
/// mutated after return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStory {
    pub title: String,
    pub content: String,
    /// Count of whitespace-delimited tokens in `content`.
    pub word_count: usize,
    /// Ordered, no uniqueness constraint.
    pub tags: Vec<String>,
}

/// The closed set of categories with a dedicated story template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryCategory {
    Travel,
    Family,
    Nature,
    Urban,
}

impl StoryCategory {
    /// Parses a category label, case-insensitively. Returns `None` for
    /// anything outside the fixed vocabulary.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "travel" => Some(Self::Travel),
            "family" => Some(Self::Family),
            "nature" => Some(Self::Nature),
            "urban" => Some(Self::Urban),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Travel => "travel",
            Self::Family => "family",
            Self::Nature => "nature",
            Self::Urban => "urban",
        }
    }
}
