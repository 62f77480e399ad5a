//! Database models for vaccination drives.

use crate::types::DriveId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Database representation of a vaccination drive
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct VaccinationDrive {
    pub id: DriveId,
    pub title: String,
    pub vaccine_name: String,
    pub drive_date: NaiveDate,
    pub no_of_vaccine: i64,
    pub classname: String,
}

/// Request to create a new drive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveCreateDBRequest {
    pub title: String,
    pub vaccine_name: String,
    pub drive_date: NaiveDate,
    pub no_of_vaccine: i64,
    pub classname: String,
}

/// Request to replace an existing drive's fields
pub type DriveUpdateDBRequest = DriveCreateDBRequest;

/// Response from database after creating or updating a drive
pub type DriveDBResponse = VaccinationDrive;

/// Slim projection of a drive for the dashboard's upcoming-drives panel
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct UpcomingDrive {
    pub id: DriveId,
    pub title: String,
    pub drive_date: NaiveDate,
}
