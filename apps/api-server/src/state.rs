//! Application state - shared across all handlers.

use std::sync::Arc;

use postplan_core::domain::PlatformRegistry;
use postplan_core::ports::PostRepository;
use postplan_infra::{InMemoryPostStore, seed};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub platforms: Arc<PlatformRegistry>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Self {
        let store = if config.seed_demo_posts {
            let posts = seed::demo_posts();
            tracing::info!(count = posts.len(), "seeding store with demo posts");
            InMemoryPostStore::with_posts(posts)
        } else {
            InMemoryPostStore::new()
        };

        tracing::info!("Application state initialized");

        Self {
            posts: Arc::new(store),
            platforms: Arc::new(PlatformRegistry::builtin()),
        }
    }

    /// Empty state for handler tests.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            posts: Arc::new(InMemoryPostStore::new()),
            platforms: Arc::new(PlatformRegistry::builtin()),
        }
    }
}
