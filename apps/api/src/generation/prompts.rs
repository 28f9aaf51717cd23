// All LLM prompt constants for story generation.
// The user prompt is assembled per-request in generator.rs from the fragments
// below plus whatever context fields the caller supplied.

/// System prompt for story generation.
pub const STORY_SYSTEM: &str = "You are a creative storyteller who writes engaging, \
    personal stories based on photo collections. \
    Keep stories under 200 words, warm, and personal.";

/// Opening line of the user prompt.
pub const PROMPT_INTRO: &str = "Create a personal, engaging story based on this photo collection:";

/// Fixed stylistic instruction closing the user prompt.
pub const PROMPT_CLOSING: &str = "Please write a warm, personal story (under 200 words) \
    that captures the essence of these moments. \
    Make it feel like a personal memory being shared with friends. \
    Include emotional details and vivid descriptions.";
