//! Database models for the student-to-drive vaccination link table.

use crate::types::{DriveId, LinkId, StudentId};
use serde::{Deserialize, Serialize};

/// One recorded vaccination: a student matched to the drive where they
/// received it. The (student_id, vaccination_drive_id) pair is unique.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StudentVaccineLink {
    pub id: LinkId,
    pub student_id: StudentId,
    pub vaccination_drive_id: DriveId,
}

/// Request to record a vaccination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccinationCreateDBRequest {
    pub student_id: StudentId,
    pub vaccination_drive_id: DriveId,
}
