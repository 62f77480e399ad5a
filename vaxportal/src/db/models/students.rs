//! Database models for student records.

use crate::types::{DriveId, StudentId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status value written when a student receives a vaccination
pub const STATUS_VACCINATED: &str = "Vaccinated";

/// Status value assigned to newly registered students
pub const STATUS_NOT_VACCINATED: &str = "Not Vaccinated";

/// Database representation of a student
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub classname: String,
    /// Date of birth, ISO yyyy-mm-dd
    pub dob: String,
    pub vaccination_status: String,
}

/// Request to create a new student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCreateDBRequest {
    pub name: String,
    pub classname: String,
    pub dob: String,
}

/// Request to update an existing student's editable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentUpdateDBRequest {
    pub name: String,
    pub classname: String,
    pub dob: String,
}

/// One vaccination received by a student, as shown on the student roster
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaccinationInfo {
    #[serde(rename = "driveId")]
    pub drive_id: DriveId,
    pub title: String,
    #[serde(rename = "vaccineName")]
    pub vaccine_name: String,
    pub date: NaiveDate,
}

/// A student together with every vaccination they have received
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentWithVaccinations {
    pub id: StudentId,
    pub name: String,
    pub classname: String,
    pub dob: String,
    pub vaccination_status: String,
    pub vaccinations: Vec<VaccinationInfo>,
}

/// Response from database after creating or updating a student
pub type StudentDBResponse = Student;
