//! Social platforms a post can target.

use serde::{Deserialize, Serialize};

/// Platform entity - immutable reference data describing one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
    /// Hex color used for UI grouping; not semantically load-bearing.
    pub color: String,
}

impl Platform {
    fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// Registry of known platforms. Created at process start, never mutated.
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
}

impl PlatformRegistry {
    /// The built-in platform set every deployment starts with.
    pub fn builtin() -> Self {
        Self {
            platforms: vec![
                Platform::new("instagram", "Instagram", "#E4405F"),
                Platform::new("tiktok", "TikTok", "#010101"),
                Platform::new("youtube", "YouTube", "#FF0000"),
                Platform::new("twitter", "X (Twitter)", "#1DA1F2"),
                Platform::new("facebook", "Facebook", "#1877F2"),
                Platform::new("linkedin", "LinkedIn", "#0A66C2"),
            ],
        }
    }

    pub fn all(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn get(&self, id: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
