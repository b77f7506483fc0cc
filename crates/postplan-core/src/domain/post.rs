//! Post entity - a unit of plannable content.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::PlatformRegistry;
use crate::error::DomainError;

/// Maximum content length accepted at the validation boundary.
pub const MAX_CONTENT_LENGTH: usize = 2200;

/// What kind of content a post carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Story,
    Reel,
    Tweet,
    Video,
    Image,
}

impl ContentType {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "post" => Ok(Self::Post),
            "story" => Ok(Self::Story),
            "reel" => Ok(Self::Reel),
            "tweet" => Ok(Self::Tweet),
            "video" => Ok(Self::Video),
            "image" => Ok(Self::Image),
            other => Err(DomainError::Validation(format!(
                "unknown content type: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Story => "story",
            Self::Reel => "reel",
            Self::Tweet => "tweet",
            Self::Video => "video",
            Self::Image => "image",
        }
    }
}

/// Publication status. Variant order is the allowed direction of travel:
/// transitions may only move forward (draft -> scheduled -> published).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
}

impl PostStatus {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "published" => Ok(Self::Published),
            other => Err(DomainError::Validation(format!("unknown status: {other}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
        }
    }
}

/// Post entity - one planned piece of content with scheduling metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    /// Platform ids, each resolving to an entry in the registry.
    pub platforms: Vec<String>,
    pub content_type: ContentType,
    pub scheduled_date: DateTime<Utc>,
    pub status: PostStatus,
    /// Stored without the leading '#'.
    pub hashtags: Vec<String>,
    /// Stored without the leading '@'.
    pub mentions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied fields of a post; everything except identity and
/// timestamps. Used for both create and edit.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub content: String,
    pub platforms: Vec<String>,
    pub content_type: ContentType,
    pub scheduled_date: DateTime<Utc>,
    pub status: PostStatus,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
}

impl PostDraft {
    /// Validate the submission rules: content present and within bounds,
    /// at least one platform, every platform id known.
    pub fn validate(&self, registry: &PlatformRegistry) -> Result<(), DomainError> {
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("content is required".to_string()));
        }
        if self.content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(DomainError::Validation(format!(
                "content exceeds {MAX_CONTENT_LENGTH} characters"
            )));
        }
        if self.platforms.is_empty() {
            return Err(DomainError::Validation(
                "at least one platform is required".to_string(),
            ));
        }
        for id in &self.platforms {
            if !registry.contains(id) {
                return Err(DomainError::Validation(format!("unknown platform: {id}")));
            }
        }
        Ok(())
    }
}

impl Post {
    /// Create a new post with generated ID and timestamps.
    /// Hashtags and mentions are normalized to their canonical symbol-less form.
    pub fn new(draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            content: draft.content,
            platforms: draft.platforms,
            content_type: draft.content_type,
            scheduled_date: draft.scheduled_date,
            status: draft.status,
            hashtags: normalize_tags(draft.hashtags, '#'),
            mentions: normalize_tags(draft.mentions, '@'),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields, keeping identity and `created_at`.
    pub fn apply(&mut self, draft: PostDraft) -> Result<(), DomainError> {
        self.transition(draft.status)?;
        self.content = draft.content;
        self.platforms = draft.platforms;
        self.content_type = draft.content_type;
        self.scheduled_date = draft.scheduled_date;
        self.hashtags = normalize_tags(draft.hashtags, '#');
        self.mentions = normalize_tags(draft.mentions, '@');
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Clone of all fields except id and timestamps.
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Move `status` forward. Staying in place is a no-op; moving backward
    /// is rejected.
    pub fn transition(&mut self, next: PostStatus) -> Result<(), DomainError> {
        if next < self.status {
            return Err(DomainError::StatusTransition {
                from: self.status.as_str(),
                to: next.as_str(),
            });
        }
        if next != self.status {
            self.status = next;
            self.updated_at = Utc::now();
        }
        Ok(())
    }

    /// Flip to published as part of the publish-now operation.
    pub fn publish_now(&mut self) -> Result<(), DomainError> {
        self.transition(PostStatus::Published)
    }

    /// The calendar day this post renders under. Time-of-day is ignored.
    pub fn scheduled_day(&self) -> NaiveDate {
        self.scheduled_date.date_naive()
    }
}

/// Strip a leading sigil ('#' or '@') and surrounding whitespace; drop
/// entries that are empty afterwards. One canonical storage form, whichever
/// shape the input arrived in.
fn normalize_tags(tags: Vec<String>, sigil: char) -> Vec<String> {
    tags.into_iter()
        .filter_map(|tag| {
            let tag = tag.trim().trim_start_matches(sigil).to_string();
            if tag.is_empty() { None } else { Some(tag) }
        })
        .collect()
}
