//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// How many posts the store currently holds.
    pub posts: usize,
    /// How many platforms the registry knows.
    pub platforms: usize,
}

/// Health check endpoint - returns server status and store shape.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let posts = state.posts.list().await.map(|p| p.len()).unwrap_or(0);

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        posts,
        platforms: state.platforms.all().len(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::Value;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn health_reports_store_and_registry_shape() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::empty()))
                .configure(configure_routes),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 0);
        assert_eq!(body["platforms"], 6);
        assert!(body["version"].as_str().is_some());
    }
}
