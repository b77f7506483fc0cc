//! Domain entities - the core business objects.

mod filter;
mod platform;
mod post;

pub use filter::PostFilter;
pub use platform::{Platform, PlatformRegistry};
pub use post::{ContentType, Post, PostDraft, PostStatus, MAX_CONTENT_LENGTH};
