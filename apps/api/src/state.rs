use crate::generation::generator::StoryGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub generator: StoryGenerator,
}
