//! API types for vaccination drive endpoints.

use crate::{
    db::models::drives::{DriveCreateDBRequest, VaccinationDrive},
    types::DriveId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or replacing a drive
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DriveUpsert {
    pub title: String,
    pub vaccine_name: String,
    pub drive_date: NaiveDate,
    /// Number of doses available for this drive
    pub no_of_vaccine: i64,
    /// Class the drive targets
    pub classname: String,
}

impl From<DriveUpsert> for DriveCreateDBRequest {
    fn from(value: DriveUpsert) -> Self {
        Self {
            title: value.title,
            vaccine_name: value.vaccine_name,
            drive_date: value.drive_date,
            no_of_vaccine: value.no_of_vaccine,
            classname: value.classname,
        }
    }
}

/// Response body for a single drive
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DriveResponse {
    pub id: DriveId,
    pub title: String,
    pub vaccine_name: String,
    pub drive_date: NaiveDate,
    pub no_of_vaccine: i64,
    pub classname: String,
}

impl From<VaccinationDrive> for DriveResponse {
    fn from(d: VaccinationDrive) -> Self {
        Self {
            id: d.id,
            title: d.title,
            vaccine_name: d.vaccine_name,
            drive_date: d.drive_date,
            no_of_vaccine: d.no_of_vaccine,
            classname: d.classname,
        }
    }
}
