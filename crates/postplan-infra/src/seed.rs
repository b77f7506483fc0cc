//! Demo seed data - a small representative post set for local runs.

use chrono::{Duration, Utc};

use postplan_core::domain::{ContentType, Post, PostDraft, PostStatus};

/// Posts spread around "now" so both week and month views have content on
/// first launch. Enabled with `SEED_DEMO_POSTS=true`.
pub fn demo_posts() -> Vec<Post> {
    let now = Utc::now();
    let drafts = vec![
        PostDraft {
            content: "Yeni VIDEO içeriğimiz yayında! Kaçırmayın.".to_string(),
            platforms: vec!["youtube".to_string()],
            content_type: ContentType::Video,
            scheduled_date: now - Duration::days(1),
            status: PostStatus::Published,
            hashtags: vec!["video".to_string(), "yenibölüm".to_string()],
            mentions: vec![],
        },
        PostDraft {
            content: "Behind the scenes from today's shoot".to_string(),
            platforms: vec!["instagram".to_string(), "tiktok".to_string()],
            content_type: ContentType::Reel,
            scheduled_date: now + Duration::hours(6),
            status: PostStatus::Scheduled,
            hashtags: vec!["#bts".to_string(), "#creator".to_string()],
            mentions: vec!["@studio".to_string()],
        },
        PostDraft {
            content: "Story içeriği hazırlanıyor".to_string(),
            platforms: vec!["instagram".to_string()],
            content_type: ContentType::Story,
            scheduled_date: now + Duration::days(1),
            status: PostStatus::Draft,
            hashtags: vec![],
            mentions: vec![],
        },
        PostDraft {
            content: "Launch thread: everything we shipped this month".to_string(),
            platforms: vec!["twitter".to_string(), "linkedin".to_string()],
            content_type: ContentType::Tweet,
            scheduled_date: now + Duration::days(2),
            status: PostStatus::Scheduled,
            hashtags: vec!["launch".to_string()],
            mentions: vec![],
        },
        PostDraft {
            content: "Poster frame options for the next upload".to_string(),
            platforms: vec!["facebook".to_string()],
            content_type: ContentType::Image,
            scheduled_date: now + Duration::days(4),
            status: PostStatus::Draft,
            hashtags: vec!["thumbnail".to_string()],
            mentions: vec![],
        },
    ];

    drafts.into_iter().map(Post::new).collect()
}
