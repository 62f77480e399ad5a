//! Handlers for student registration, editing, bulk import, and vaccination.

use crate::api::models::students::{
    BulkImportResponse, StatusUpdateRequest, StudentResponse, StudentUpsert, VaccinateRequest,
};
use crate::api::models::MessageResponse;
use crate::db::errors::DbError;
use crate::db::handlers::{Repository, Students, Vaccinations};
use crate::db::models::students::{StudentCreateDBRequest, StudentWithVaccinations, STATUS_VACCINATED};
use crate::db::models::vaccinations::VaccinationCreateDBRequest;
use crate::errors::{Error, Result};
use crate::types::StudentId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub const ALREADY_VACCINATED_MESSAGE: &str = "Student already vaccinated in this drive";
pub const DRIVE_ID_REQUIRED_MESSAGE: &str = "Vaccination drive ID is required";
pub const STATUS_REQUIRED_MESSAGE: &str = "vaccination_status is required";

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    summary = "List students with their vaccinations",
    responses(
        (status = 200, description = "All students, each with the vaccinations they received", body = Vec<StudentWithVaccinations>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<StudentWithVaccinations>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut conn);

    let students = repo.list_with_vaccinations().await?;
    Ok(Json(students))
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    summary = "Register a student",
    request_body = StudentUpsert,
    responses(
        (status = 201, description = "Student registered", body = StudentResponse),
        (status = 400, description = "Invalid date of birth"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(create): Json<StudentUpsert>,
) -> Result<(StatusCode, Json<StudentResponse>)> {
    create.validate()?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut conn);

    let student = repo.create(&create.into()).await?;
    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}

#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    summary = "Edit a student",
    request_body = StudentUpsert,
    responses(
        (status = 200, description = "Update applied", body = MessageResponse),
        (status = 400, description = "Invalid date of birth"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Student ID")
    )
)]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(update): Json<StudentUpsert>,
) -> Result<Json<MessageResponse>> {
    update.validate()?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut conn);

    // An unknown id updates nothing and still reports success; the roster
    // screen refetches afterwards either way.
    repo.update(id, &update.into()).await?;
    Ok(Json(MessageResponse::new("Student updated successfully")))
}

#[utoipa::path(
    post,
    path = "/students/bulk",
    tag = "students",
    summary = "Bulk import students",
    request_body = Vec<StudentUpsert>,
    responses(
        (status = 200, description = "Import finished; counts of created and skipped rows", body = BulkImportResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(rows = rows.len()))]
pub async fn bulk_import(
    State(state): State<AppState>,
    Json(rows): Json<Vec<StudentUpsert>>,
) -> Result<Json<BulkImportResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut conn);

    let mut created = 0;
    let mut skipped = 0;

    for row in rows {
        if row.validate().is_err() {
            skipped += 1;
            continue;
        }
        let request: StudentCreateDBRequest = row.into();
        if repo.find_duplicate(&request).await?.is_some() {
            skipped += 1;
            continue;
        }
        match repo.create(&request).await {
            Ok(_) => created += 1,
            Err(e) => {
                // A bad row never aborts the rest of the import
                tracing::warn!("Skipping student row during bulk import: {}", e);
                skipped += 1;
            }
        }
    }

    Ok(Json(BulkImportResponse { created, skipped }))
}

#[utoipa::path(
    post,
    path = "/students/{id}/vaccinate",
    tag = "students",
    summary = "Record a vaccination for a student",
    request_body = VaccinateRequest,
    responses(
        (status = 201, description = "Vaccination recorded", body = MessageResponse),
        (status = 400, description = "Missing drive ID, or student already vaccinated in this drive"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Student ID")
    )
)]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn vaccinate_student(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(request): Json<VaccinateRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let drive_id = request
        .vaccination_drive_id
        .ok_or_else(|| Error::bad_request(DRIVE_ID_REQUIRED_MESSAGE))?;

    // Link insert and status flag move together or not at all
    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;

    Vaccinations::new(&mut tx)
        .create(&VaccinationCreateDBRequest {
            student_id: id,
            vaccination_drive_id: drive_id,
        })
        .await
        .map_err(|e| match e {
            DbError::UniqueViolation { .. } => Error::conflict(ALREADY_VACCINATED_MESSAGE),
            other => Error::Database(other),
        })?;

    Students::new(&mut tx).set_status(id, STATUS_VACCINATED).await?;

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Student vaccinated successfully"))))
}

#[utoipa::path(
    put,
    path = "/students/vaccination_status_update/{id}",
    tag = "students",
    summary = "Override a student's vaccination status",
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 400, description = "Missing vaccination_status"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Student ID")
    )
)]
#[tracing::instrument(skip_all, fields(id = %id))]
pub async fn update_vaccination_status(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<MessageResponse>> {
    let status = request
        .vaccination_status
        .ok_or_else(|| Error::bad_request(STATUS_REQUIRED_MESSAGE))?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut conn);

    // The flag is stored verbatim, no value validation
    repo.set_status(id, &status).await?;
    Ok(Json(MessageResponse::new("Vaccination status updated")))
}
