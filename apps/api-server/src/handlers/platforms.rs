//! Platform registry endpoint.

use actix_web::{HttpResponse, web};

use postplan_shared::ApiResponse;
use postplan_shared::dto::PlatformResponse;

use crate::state::AppState;

/// GET /api/platforms - the built-in platform registry.
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let platforms: Vec<PlatformResponse> = state
        .platforms
        .all()
        .iter()
        .map(|p| PlatformResponse {
            id: p.id.clone(),
            name: p.name.clone(),
            color: p.color.clone(),
        })
        .collect();

    HttpResponse::Ok().json(ApiResponse::ok(platforms))
}
