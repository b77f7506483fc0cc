//! Post lifecycle handlers: create, list, edit, duplicate, delete, publish-now.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use postplan_core::domain::Post;
use postplan_shared::ApiResponse;
use postplan_shared::dto::{DeleteParams, FilterParams, PostPayload, PostResponse};

use crate::handlers::{parse_draft, parse_filter, to_response};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts - list posts, narrowed by the optional filter dimensions.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<FilterParams>,
) -> AppResult<HttpResponse> {
    let filter = parse_filter(&query)?;
    let posts = state.posts.list().await?;
    let visible: Vec<PostResponse> = filter.apply(&posts).iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(visible)))
}

/// POST /api/posts - create a post.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = parse_draft(body.into_inner())?;
    draft.validate(&state.platforms)?;

    let post = state.posts.insert(Post::new(draft)).await?;
    tracing::info!(post_id = %post.id, "post created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(&post))))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = find(&state, *id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(&post))))
}

/// PUT /api/posts/{id} - replace the editable fields.
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let draft = parse_draft(body.into_inner())?;
    draft.validate(&state.platforms)?;

    let mut post = find(&state, *id).await?;
    post.apply(draft)?;
    let post = state.posts.update(post).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(&post))))
}

/// DELETE /api/posts/{id}?confirm=true
///
/// Destructive, so the caller must confirm explicitly; without the flag
/// nothing is removed.
pub async fn delete(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    query: web::Query<DeleteParams>,
) -> AppResult<HttpResponse> {
    if query.confirm != Some(true) {
        return Err(AppError::BadRequest(
            "deletion must be confirmed with confirm=true".to_string(),
        ));
    }

    let id = id.into_inner();
    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, "post deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(id.to_string(), "post deleted")))
}

/// POST /api/posts/{id}/duplicate - clone a post under a new identity.
pub async fn duplicate(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let original = find(&state, *id).await?;
    let copy = state.posts.insert(original.duplicate()).await?;
    tracing::info!(source = %original.id, copy = %copy.id, "post duplicated");
    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(&copy))))
}

/// POST /api/posts/{id}/publish - publish-now.
///
/// Flips the status to published in the same store mutation.
pub async fn publish(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let mut post = find(&state, *id).await?;
    post.publish_now()?;
    let post = state.posts.update(post).await?;
    tracing::info!(post_id = %post.id, "post published");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(&post))))
}

async fn find(state: &AppState, id: Uuid) -> Result<Post, AppError> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))
}
