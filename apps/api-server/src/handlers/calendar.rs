//! Calendar view handler - filter, range, bucket, render.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use postplan_core::calendar::{ViewMode, bucket_by_day, days_in_view};
use postplan_shared::ApiResponse;
use postplan_shared::dto::{CalendarParams, DAY_DISPLAY_CAP, DayView, FilterParams};

use crate::handlers::{parse_filter, to_response};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/calendar?mode=week|month&reference=<RFC 3339>
///
/// Runs the full pipeline: filter the store, compute the day range for the
/// view mode, bucket the matches by calendar day, then apply the per-day
/// display cap. `mode` defaults to week, `reference` to now.
pub async fn view(
    state: web::Data<AppState>,
    params: web::Query<CalendarParams>,
    filter_params: web::Query<FilterParams>,
) -> AppResult<HttpResponse> {
    let mode = match params.mode.as_deref() {
        Some(s) => ViewMode::parse(s)?,
        None => ViewMode::Week,
    };
    let reference = params.reference.unwrap_or_else(Utc::now);
    let filter = parse_filter(&filter_params)?;

    let posts = state.posts.list().await?;
    let visible = filter.apply(&posts);
    let days = days_in_view(reference, mode);

    let days: Vec<DayView> = bucket_by_day(&visible, &days)
        .into_iter()
        .map(|bucket| {
            let total = bucket.posts.len();
            DayView {
                date: bucket.date.to_string(),
                posts: bucket
                    .posts
                    .iter()
                    .take(DAY_DISPLAY_CAP)
                    .map(to_response)
                    .collect(),
                more: total.saturating_sub(DAY_DISPLAY_CAP),
                total,
            }
        })
        .collect();

    let view = postplan_shared::dto::CalendarView {
        mode: mode.as_str().to_string(),
        reference: reference.to_rfc3339(),
        days,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(view)))
}
