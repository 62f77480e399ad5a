//! API types for the report endpoints.

use crate::{
    api::models::students::INVALID_DATE_MESSAGE,
    db::models::report::ReportFilter,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Query string for the vaccination-level report.
///
/// Every field is optional and an empty string counts as absent, matching how
/// the report screen submits its untouched filter inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct ReportQuery {
    /// Substring filter on the student's name
    pub student_name: Option<String>,
    /// Substring filter on the student's class
    pub classname: Option<String>,
    /// Substring filter on the vaccination status flag
    pub vaccination_status: Option<String>,
    /// Substring filter on the drive's vaccine name
    pub vaccine_name: Option<String>,
    /// Exact drive date, yyyy-mm-dd
    pub drive_date: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ReportQuery {
    pub fn into_filter(self) -> Result<ReportFilter> {
        let drive_date = match non_empty(self.drive_date) {
            Some(raw) => Some(raw.parse().map_err(|_| Error::bad_request(INVALID_DATE_MESSAGE))?),
            None => None,
        };

        Ok(ReportFilter {
            name: non_empty(self.student_name),
            student_class: non_empty(self.classname),
            vaccination_status: non_empty(self.vaccination_status),
            vaccine_name: non_empty(self.vaccine_name),
            drive_date,
        })
    }
}
