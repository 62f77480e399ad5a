//! API types for student endpoints.

use crate::{
    db::models::students::{Student, StudentCreateDBRequest, StudentUpdateDBRequest},
    errors::{Error, Result},
    types::{DriveId, StudentId},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

static DOB_FORMAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

pub const INVALID_DATE_MESSAGE: &str = "Invalid date format. Use yyyy-mm-dd";

/// Request body for registering or editing a student
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentUpsert {
    pub name: String,
    pub classname: String,
    /// Date of birth, yyyy-mm-dd
    pub dob: String,
}

impl StudentUpsert {
    /// Reject any dob not shaped like an ISO date, before anything is written
    pub fn validate(&self) -> Result<()> {
        if !DOB_FORMAT.is_match(&self.dob) {
            return Err(Error::bad_request(INVALID_DATE_MESSAGE));
        }
        Ok(())
    }
}

impl From<StudentUpsert> for StudentCreateDBRequest {
    fn from(value: StudentUpsert) -> Self {
        Self {
            name: value.name,
            classname: value.classname,
            dob: value.dob,
        }
    }
}

impl From<StudentUpsert> for StudentUpdateDBRequest {
    fn from(value: StudentUpsert) -> Self {
        Self {
            name: value.name,
            classname: value.classname,
            dob: value.dob,
        }
    }
}

/// Response body for a single student
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: StudentId,
    pub name: String,
    pub classname: String,
    pub dob: String,
    pub vaccination_status: String,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            classname: s.classname,
            dob: s.dob,
            vaccination_status: s.vaccination_status,
        }
    }
}

/// Request body for recording a vaccination.
///
/// The drive id is optional at the type level so a missing field produces the
/// domain's own 400 message instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaccinateRequest {
    pub vaccination_drive_id: Option<DriveId>,
}

/// Request body for the direct status override endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    pub vaccination_status: Option<String>,
}

/// Outcome counts of a bulk import; per-row detail is deliberately not reported
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkImportResponse {
    pub created: usize,
    pub skipped: usize,
}
