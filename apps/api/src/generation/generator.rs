//! Story generation — orchestrates the full request pipeline.
//!
//! Flow: credential check → build prompt → remote invocation → normalize.
//! Every failure on the remote path (no credential, transport error, bad
//! status, malformed or empty payload) falls through to the category
//! template, so `generate_story` always returns a usable story and has no
//! externally observable error condition.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::generation::backend::StoryBackend;
use crate::generation::prompts::{PROMPT_CLOSING, PROMPT_INTRO};
use crate::generation::templates::template_for;
use crate::models::story::{GeneratedStory, StoryCategory, StoryContext};

/// Title applied to remote-generated stories when the caller supplies none.
/// Template stories use their own default titles instead.
const DEFAULT_REMOTE_TITLE: &str = "My Story";

/// How many content tokens are appended to the tag list on the remote path.
const CONTENT_TAG_COUNT: usize = 3;

/// Stateless story generator. Holds only the optional remote backend, so
/// clones are cheap and concurrent calls need no coordination.
#[derive(Clone)]
pub struct StoryGenerator {
    backend: Option<Arc<dyn StoryBackend>>,
}

impl StoryGenerator {
    /// A generator that attempts remote generation before falling back.
    pub fn with_backend(backend: Arc<dyn StoryBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A generator with no remote backend: every request is served from the
    /// built-in templates. Used when no API credential is configured.
    pub fn offline() -> Self {
        Self { backend: None }
    }

    /// Generates a story for the given photo context.
    ///
    /// Never fails: remote errors are logged and converted into the
    /// deterministic template story for the context's category.
    pub async fn generate_story(&self, context: &StoryContext) -> GeneratedStory {
        let Some(backend) = self.backend.as_ref() else {
            debug!("no LLM backend configured; serving template story");
            return template_story(context);
        };

        let prompt = build_story_prompt(context);

        match backend.generate(&prompt).await {
            Ok(text) => normalize_response(&text, context),
            Err(e) => {
                warn!("remote story generation failed, serving template story: {e}");
                template_story(context)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt construction
// ────────────────────────────────────────────────────────────────────────────

/// Builds the user prompt from the context. Absent fields are omitted
/// entirely — no labeled empty placeholders.
fn build_story_prompt(context: &StoryContext) -> String {
    let mut prompt = format!("{PROMPT_INTRO}\n\n");

    if let Some(title) = &context.title {
        prompt.push_str(&format!("Title: {title}\n"));
    }
    if let Some(category) = &context.category {
        prompt.push_str(&format!("Category: {category}\n"));
    }
    if let Some(date) = &context.date {
        prompt.push_str(&format!("Date: {date}\n"));
    }
    if let Some(location) = &context.location {
        prompt.push_str(&format!("Location: {location}\n"));
    }

    prompt.push_str(&format!("Number of photos: {}\n\n", context.photos.len()));
    prompt.push_str(PROMPT_CLOSING);

    prompt
}

// ────────────────────────────────────────────────────────────────────────────
// Fallback path
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic template story for the context's category. The caller's
/// title wins over the template default; body and tags are fixed.
fn template_story(context: &StoryContext) -> GeneratedStory {
    let category = context.category.as_deref().and_then(StoryCategory::parse);
    let template = template_for(category);

    debug!(
        "serving {} template story",
        category.map_or("default travel", |c| c.as_str())
    );

    GeneratedStory {
        title: context
            .title
            .clone()
            .unwrap_or_else(|| template.default_title.to_string()),
        content: template.body.to_string(),
        word_count: count_words(template.body),
        tags: template.tags.iter().map(|t| t.to_string()).collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Remote-success normalization
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes raw remote text into a `GeneratedStory`.
fn normalize_response(raw: &str, context: &StoryContext) -> GeneratedStory {
    let content = raw.trim().to_string();

    GeneratedStory {
        title: context
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_REMOTE_TITLE.to_string()),
        word_count: count_words(&content),
        tags: extract_tags(&content, context.category.as_deref()),
        content,
    }
}

/// Whitespace-delimited token count — the `word_count` invariant. Simple
/// split, not locale-aware segmentation.
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Derives tags for remote-generated content: the category label as given
/// (or "story" when absent), followed by the first `CONTENT_TAG_COUNT`
/// distinct lowercase alphanumeric tokens in order of first occurrence.
/// No stopword filtering and no frequency ranking.
fn extract_tags(content: &str, category: Option<&str>) -> Vec<String> {
    let mut tags = vec![category.unwrap_or("story").to_string()];

    let mut seen = HashSet::new();
    for token in content
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        let token = token.to_lowercase();
        if seen.insert(token.clone()) {
            tags.push(token);
            if seen.len() == CONTENT_TAG_COUNT {
                break;
            }
        }
    }

    tags
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
