//! Handler for the dashboard summary.

use crate::api::models::dashboard::{vaccination_rate, DashboardSummary, UPCOMING_WINDOW_DAYS};
use crate::db::handlers::{Drives, Students};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{extract::State, Json};
use chrono::{Duration, Local};

#[utoipa::path(
    get,
    path = "/dashboard/summary",
    tag = "dashboard",
    summary = "Dashboard summary",
    responses(
        (status = 200, description = "Student counts, vaccination rate, and drives in the next 30 days", body = DashboardSummary),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let mut students = Students::new(&mut conn);
    let total_students = students.count().await?;
    let vaccinated_students = students.count_vaccinated().await?;

    let today = Local::now().date_naive();
    let upcoming_drives = Drives::new(&mut conn)
        .upcoming_between(today, today + Duration::days(UPCOMING_WINDOW_DAYS))
        .await?;

    Ok(Json(DashboardSummary {
        total_students,
        vaccinated_students,
        vaccination_rate: vaccination_rate(vaccinated_students, total_students),
        upcoming_drives,
    }))
}
