//! Database models for the vaccination report.

use crate::types::StudentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the vaccination report.
///
/// Built from students left-joined to their vaccination links and drives, so
/// an unvaccinated student still appears, with the drive columns null.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ReportRow {
    pub id: StudentId,
    pub name: String,
    pub student_class: String,
    pub dob: String,
    pub vaccination_status: String,
    pub title: Option<String>,
    pub vaccine_name: Option<String>,
    /// Class the drive targeted, as opposed to the student's own class
    pub vaccine_class: Option<String>,
    pub drive_date: Option<NaiveDate>,
    pub no_of_vaccine: Option<i64>,
}

/// Filters for the report query. Empty strings mean "no filter", matching
/// how the report screen submits its untouched inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportFilter {
    pub name: Option<String>,
    pub student_class: Option<String>,
    pub vaccination_status: Option<String>,
    pub vaccine_name: Option<String>,
    pub drive_date: Option<NaiveDate>,
}

/// Drive listing on the report screen, newest drive first
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct DriveReportRow {
    pub id: crate::types::DriveId,
    pub title: String,
    pub vaccine_name: String,
    pub drive_date: NaiveDate,
    pub no_of_vaccine: i64,
    pub vaccine_class: String,
}

/// Student listing on the report screen, alphabetical
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct StudentReportRow {
    pub id: StudentId,
    pub name: String,
    pub student_class: String,
    pub dob: String,
    pub vaccination_status: String,
}

impl ReportFilter {
    /// True when no filter column is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.student_class.is_none()
            && self.vaccination_status.is_none()
            && self.vaccine_name.is_none()
            && self.drive_date.is_none()
    }
}
