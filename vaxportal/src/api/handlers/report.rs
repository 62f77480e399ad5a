//! Handlers for the vaccination report screen.

use crate::api::models::report::ReportQuery;
use crate::db::handlers::Reports;
use crate::db::models::report::{DriveReportRow, ReportRow, StudentReportRow};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

#[utoipa::path(
    get,
    path = "/report/stdsvlvd",
    tag = "report",
    summary = "Vaccination-level report",
    params(ReportQuery),
    responses(
        (status = 200, description = "One row per (student, drive) pair; unvaccinated students carry null drive columns", body = Vec<ReportRow>),
        (status = 400, description = "Malformed drive date filter"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn vaccination_level(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<ReportRow>>> {
    let filter = query.into_filter()?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Reports::new(&mut conn);

    let rows = repo.vaccination_level(&filter).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/report/vd",
    tag = "report",
    summary = "Drive listing for the report",
    responses(
        (status = 200, description = "All drives, newest first", body = Vec<DriveReportRow>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn drives(State(state): State<AppState>) -> Result<Json<Vec<DriveReportRow>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Reports::new(&mut conn);

    let rows = repo.drives().await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/report/std",
    tag = "report",
    summary = "Student listing for the report",
    responses(
        (status = 200, description = "All students, alphabetical", body = Vec<StudentReportRow>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn students(State(state): State<AppState>) -> Result<Json<Vec<StudentReportRow>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Reports::new(&mut conn);

    let rows = repo.students().await?;
    Ok(Json(rows))
}
