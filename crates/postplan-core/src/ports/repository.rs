use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Post store port. The in-memory adapter backs it today; the trait exists
/// so a persistent backend can be substituted without touching consumers.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, in insertion order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Append a new post to the store.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Replace an existing post in place.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove a post by its ID.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
