//! OpenAPI document for the portal API, served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "vaxportal",
        description = "School vaccination portal: students, drives, dashboard, and reports"
    ),
    servers((url = "/api")),
    paths(
        crate::api::handlers::dashboard::summary,
        crate::api::handlers::students::list_students,
        crate::api::handlers::students::create_student,
        crate::api::handlers::students::update_student,
        crate::api::handlers::students::bulk_import,
        crate::api::handlers::students::vaccinate_student,
        crate::api::handlers::students::update_vaccination_status,
        crate::api::handlers::drives::list_drives,
        crate::api::handlers::drives::create_drive,
        crate::api::handlers::drives::update_drive,
        crate::api::handlers::report::vaccination_level,
        crate::api::handlers::report::drives,
        crate::api::handlers::report::students,
    ),
    components(schemas(
        crate::api::models::MessageResponse,
        crate::api::models::dashboard::DashboardSummary,
        crate::api::models::drives::DriveResponse,
        crate::api::models::drives::DriveUpsert,
        crate::api::models::students::BulkImportResponse,
        crate::api::models::students::StatusUpdateRequest,
        crate::api::models::students::StudentResponse,
        crate::api::models::students::StudentUpsert,
        crate::api::models::students::VaccinateRequest,
        crate::db::models::drives::UpcomingDrive,
        crate::db::models::report::DriveReportRow,
        crate::db::models::report::ReportRow,
        crate::db::models::report::StudentReportRow,
        crate::db::models::students::StudentWithVaccinations,
        crate::db::models::students::VaccinationInfo,
    )),
    tags(
        (name = "dashboard", description = "Summary figures for the landing screen"),
        (name = "students", description = "Student roster and vaccination recording"),
        (name = "drives", description = "Vaccination drive scheduling"),
        (name = "report", description = "Filterable vaccination report"),
    )
)]
pub struct ApiDoc;
