//! API types for the dashboard summary.

use crate::db::models::drives::UpcomingDrive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of days ahead the dashboard looks for upcoming drives
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_students: i64,
    pub vaccinated_students: i64,
    /// Whole-number percentage, rounded half away from zero
    pub vaccination_rate: i64,
    pub upcoming_drives: Vec<UpcomingDrive>,
}

/// Percentage of vaccinated students, 0 when there are no students at all
pub fn vaccination_rate(vaccinated: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    ((vaccinated as f64 / total as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_is_zero_for_empty_school() {
        assert_eq!(vaccination_rate(0, 0), 0);
    }

    #[test]
    fn test_rate_rounds_to_whole_percent() {
        assert_eq!(vaccination_rate(1, 3), 33);
        assert_eq!(vaccination_rate(2, 3), 67);
        assert_eq!(vaccination_rate(3, 3), 100);
        assert_eq!(vaccination_rate(0, 5), 0);
    }
}
