//! HTTP handlers and route configuration.

mod calendar;
mod health;
mod platforms;
mod posts;

use actix_web::{HttpResponse, web};

use postplan_core::domain::{ContentType, Post, PostDraft, PostFilter, PostStatus};
use postplan_shared::ErrorResponse;
use postplan_shared::dto::{FilterParams, PostPayload, PostResponse};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/platforms", web::get().to(platforms::list))
            .route("/calendar", web::get().to(calendar::view))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/duplicate", web::post().to(posts::duplicate))
                    .route("/{id}/publish", web::post().to(posts::publish)),
            ),
    );
}

/// Fallback for unmatched routes - the API's "not found" view.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found("no such route"))
}

/// Parse the comma-separated filter query into the domain filter.
pub(crate) fn parse_filter(params: &FilterParams) -> Result<PostFilter, AppError> {
    let mut filter = PostFilter {
        platforms: split_csv(params.platforms.as_deref()),
        search_term: params.search.clone().unwrap_or_default(),
        ..Default::default()
    };
    for token in split_csv(params.content_types.as_deref()) {
        filter.content_types.push(ContentType::parse(&token)?);
    }
    for token in split_csv(params.statuses.as_deref()) {
        filter.statuses.push(PostStatus::parse(&token)?);
    }
    Ok(filter)
}

fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a payload's string-typed fields into a domain draft.
pub(crate) fn parse_draft(payload: PostPayload) -> Result<PostDraft, AppError> {
    let status = match payload.status.as_deref() {
        Some(s) => PostStatus::parse(s)?,
        None => PostStatus::Draft,
    };
    Ok(PostDraft {
        content: payload.content,
        platforms: payload.platforms,
        content_type: ContentType::parse(&payload.content_type)?,
        scheduled_date: payload.scheduled_date,
        status,
        hashtags: payload.hashtags,
        mentions: payload.mentions,
    })
}

pub(crate) fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        content: post.content.clone(),
        platforms: post.platforms.clone(),
        content_type: post.content_type.as_str().to_string(),
        scheduled_date: post.scheduled_date.to_rfc3339(),
        status: post.status.as_str().to_string(),
        hashtags: post.hashtags.clone(),
        mentions: post.mentions.clone(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}
