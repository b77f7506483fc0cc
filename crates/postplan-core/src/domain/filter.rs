//! Filter engine - pure predicates over the post collection.

use serde::{Deserialize, Serialize};

use crate::domain::{ContentType, Post, PostStatus};

/// One filter value per dimension. An empty dimension matches everything,
/// so the default filter is the identity; selections within a dimension are
/// OR'd, dimensions are AND'd together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostFilter {
    pub platforms: Vec<String>,
    pub content_types: Vec<ContentType>,
    pub statuses: Vec<PostStatus>,
    pub search_term: String,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        if !self.platforms.is_empty()
            && !post.platforms.iter().any(|p| self.platforms.contains(p))
        {
            return false;
        }
        if !self.content_types.is_empty() && !self.content_types.contains(&post.content_type) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&post.status) {
            return false;
        }
        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            if !post.content.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Order-preserving subsequence of `posts` matching every dimension.
    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        posts.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;
    use chrono::{TimeZone, Utc};

    fn post(content: &str, platforms: &[&str], content_type: ContentType, status: PostStatus) -> Post {
        Post::new(PostDraft {
            content: content.to_string(),
            platforms: platforms.iter().map(|s| s.to_string()).collect(),
            content_type,
            scheduled_date: Utc.with_ymd_and_hms(2024, 6, 25, 10, 0, 0).unwrap(),
            status,
            hashtags: vec![],
            mentions: vec![],
        })
    }

    fn sample() -> Vec<Post> {
        vec![
            post("Yeni VIDEO içeriğimiz yayında!", &["youtube"], ContentType::Video, PostStatus::Published),
            post("Story içeriği hazırlanıyor", &["instagram"], ContentType::Story, PostStatus::Draft),
            post("Cross-post for the launch", &["instagram", "tiktok"], ContentType::Reel, PostStatus::Scheduled),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let posts = sample();
        let out = PostFilter::default().apply(&posts);
        assert_eq!(out, posts);
    }

    #[test]
    fn platform_filter_selects_intersecting_posts() {
        let posts = sample();
        let filter = PostFilter {
            platforms: vec!["instagram".to_string()],
            ..Default::default()
        };
        let out = filter.apply(&posts);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.platforms.contains(&"instagram".to_string())));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let posts = sample();
        let filter = PostFilter {
            search_term: "video".to_string(),
            ..Default::default()
        };
        let out = filter.apply(&posts);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].content, "Yeni VIDEO içeriğimiz yayında!");
    }

    #[test]
    fn dimensions_combine_with_and() {
        let posts = sample();
        let filter = PostFilter {
            platforms: vec!["instagram".to_string()],
            statuses: vec![PostStatus::Scheduled],
            ..Default::default()
        };
        let out = filter.apply(&posts);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].content, "Cross-post for the launch");
    }

    #[test]
    fn filter_preserves_input_order() {
        let posts = sample();
        let filter = PostFilter {
            platforms: vec!["instagram".to_string(), "youtube".to_string()],
            ..Default::default()
        };
        let out = filter.apply(&posts);
        assert_eq!(out[0].content, posts[0].content);
        assert_eq!(out[1].content, posts[1].content);
    }
}
