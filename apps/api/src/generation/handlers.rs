//! Axum route handlers for the Story API.

use axum::{extract::State, Json};

use crate::models::story::{GeneratedStory, StoryContext};
use crate::state::AppState;

/// POST /api/v1/stories/generate
///
/// Generates a story for a photo collection. Infallible by design: when the
/// LLM is unconfigured or unreachable the response is a template story,
/// never an error. Malformed bodies are rejected by the Json extractor
/// before this handler runs.
pub async fn handle_generate_story(
    State(state): State<AppState>,
    Json(context): Json<StoryContext>,
) -> Json<GeneratedStory> {
    Json(state.generator.generate_story(&context).await)
}
