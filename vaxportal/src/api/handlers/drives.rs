//! Handlers for vaccination drive management.

use crate::api::models::drives::{DriveResponse, DriveUpsert};
use crate::db::errors::DbError;
use crate::db::handlers::{Drives, Repository};
use crate::errors::{Error, Result};
use crate::types::DriveId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub const DATE_TAKEN_MESSAGE: &str = "Vaccination drive date already exists, please choose a new date!";

fn map_drive_error(e: DbError) -> Error {
    match e {
        DbError::UniqueViolation { .. } => Error::conflict(DATE_TAKEN_MESSAGE),
        other => Error::Database(other),
    }
}

#[utoipa::path(
    get,
    path = "/vaccines",
    tag = "drives",
    summary = "List vaccination drives",
    responses(
        (status = 200, description = "All drives, soonest first", body = Vec<DriveResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_drives(State(state): State<AppState>) -> Result<Json<Vec<DriveResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Drives::new(&mut conn);

    let drives = repo.list(&()).await?;
    Ok(Json(drives.into_iter().map(DriveResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/vaccines",
    tag = "drives",
    summary = "Schedule a vaccination drive",
    request_body = DriveUpsert,
    responses(
        (status = 201, description = "Drive scheduled", body = DriveResponse),
        (status = 400, description = "A drive already exists on that date"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_drive(
    State(state): State<AppState>,
    Json(create): Json<DriveUpsert>,
) -> Result<(StatusCode, Json<DriveResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Drives::new(&mut conn);

    let drive = repo.create(&create.into()).await.map_err(map_drive_error)?;
    Ok((StatusCode::CREATED, Json(DriveResponse::from(drive))))
}

#[utoipa::path(
    put,
    path = "/vaccines/{id}",
    tag = "drives",
    summary = "Update a vaccination drive",
    request_body = DriveUpsert,
    responses(
        (status = 200, description = "Drive updated", body = DriveResponse),
        (status = 400, description = "A drive already exists on that date"),
        (status = 404, description = "Drive not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Drive ID")
    )
)]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn update_drive(
    State(state): State<AppState>,
    Path(id): Path<DriveId>,
    Json(update): Json<DriveUpsert>,
) -> Result<Json<DriveResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Drives::new(&mut conn);

    match repo.update(id, &update.into()).await.map_err(map_drive_error)? {
        Some(drive) => Ok(Json(DriveResponse::from(drive))),
        None => Err(Error::NotFound {
            resource: "Drive".to_string(),
            id: id.to_string(),
        }),
    }
}
