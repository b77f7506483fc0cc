//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many posts a calendar day renders directly; the rest are summarized
/// as a "+N more" count. Display truncation only - the store keeps them all.
pub const DAY_DISPLAY_CAP: usize = 3;

/// Body for creating or editing a post. Enum-like fields travel as plain
/// lowercase strings and are parsed at the handler boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub content: String,
    pub platforms: Vec<String>,
    pub content_type: String,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub mentions: Vec<String>,
}

/// Response containing one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub content: String,
    pub platforms: Vec<String>,
    pub content_type: String,
    pub scheduled_date: String,
    pub status: String,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Response containing one platform from the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformResponse {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Filter dimensions, as query parameters. List dimensions are
/// comma-separated; an absent or empty dimension matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub platforms: Option<String>,
    pub content_types: Option<String>,
    pub statuses: Option<String>,
    pub search: Option<String>,
}

/// Calendar view query parameters. `mode` defaults to week and `reference`
/// to now; filter dimensions ride alongside as [`FilterParams`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarParams {
    pub mode: Option<String>,
    pub reference: Option<DateTime<Utc>>,
}

/// Query parameters for the confirmation-gated delete.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteParams {
    pub confirm: Option<bool>,
}

/// One calendar day with its display-capped posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayView {
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    /// At most [`DAY_DISPLAY_CAP`] posts, in store order.
    pub posts: Vec<PostResponse>,
    /// How many matching posts were truncated from `posts`.
    pub more: usize,
    /// Total matching posts for the day, truncated or not.
    pub total: usize,
}

/// The rendered calendar grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarView {
    pub mode: String,
    pub reference: String,
    pub days: Vec<DayView>,
}
