//! View state for the report screen.

use crate::db::models::report::ReportRow;
use crate::view::table::{sort_rows, Pager, SortDirection, SortState};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportColumn {
    Name,
    StudentClass,
    VaccinationStatus,
    VaccineName,
    DriveDate,
}

/// Per-field filters re-applied on the client over the server-filtered fetch.
/// Empty text means no filter; all set filters must match (AND).
#[derive(Debug, Clone, Default)]
pub struct ReportFilters {
    pub name: String,
    pub student_class: String,
    pub vaccination_status: String,
    pub vaccine_name: String,
    pub drive_date: Option<NaiveDate>,
}

impl ReportFilters {
    fn text_matches(filter: &str, value: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        filter.is_empty() || value.to_lowercase().contains(&filter)
    }

    fn matches(&self, row: &ReportRow) -> bool {
        Self::text_matches(&self.name, &row.name)
            && Self::text_matches(&self.student_class, &row.student_class)
            && Self::text_matches(&self.vaccination_status, &row.vaccination_status)
            && Self::text_matches(&self.vaccine_name, row.vaccine_name.as_deref().unwrap_or(""))
            && match self.drive_date {
                Some(date) => row.drive_date == Some(date),
                None => true,
            }
    }
}

#[derive(Debug, Clone)]
pub struct ReportView {
    pub filters: ReportFilters,
    pub sort: SortState<ReportColumn>,
    pub pager: Pager,
}

impl Default for ReportView {
    fn default() -> Self {
        Self {
            filters: ReportFilters::default(),
            sort: SortState::new(ReportColumn::Name),
            pager: Pager::default(),
        }
    }
}

impl ReportView {
    pub fn select_column(&mut self, column: ReportColumn) {
        self.sort.select(column);
    }

    fn sort(&self, rows: &mut [&ReportRow]) {
        let direction: SortDirection = self.sort.direction;
        match self.sort.column {
            ReportColumn::Name => sort_rows(rows, |r| Some(r.name.to_lowercase()), direction),
            ReportColumn::StudentClass => sort_rows(rows, |r| Some(r.student_class.to_lowercase()), direction),
            ReportColumn::VaccinationStatus => {
                sort_rows(rows, |r| Some(r.vaccination_status.to_lowercase()), direction)
            }
            ReportColumn::VaccineName => {
                sort_rows(rows, |r| r.vaccine_name.as_ref().map(|v| v.to_lowercase()), direction)
            }
            ReportColumn::DriveDate => sort_rows(rows, |r| r.drive_date, direction),
        }
    }

    /// Apply filters, sort, and pagination; returns only the visible page
    pub fn visible<'a>(&self, rows: &'a [ReportRow]) -> Vec<&'a ReportRow> {
        let mut filtered: Vec<&ReportRow> = rows.iter().filter(|r| self.filters.matches(r)).collect();
        self.sort(&mut filtered);
        self.pager.slice(&filtered).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, class: &str, status: &str, vaccine: Option<&str>, date: Option<&str>) -> ReportRow {
        ReportRow {
            id: 1,
            name: name.to_string(),
            student_class: class.to_string(),
            dob: "2014-03-21".to_string(),
            vaccination_status: status.to_string(),
            title: vaccine.map(|v| format!("{v} drive")),
            vaccine_name: vaccine.map(|v| v.to_string()),
            vaccine_class: vaccine.map(|_| class.to_string()),
            drive_date: date.map(|d| d.parse().unwrap()),
            no_of_vaccine: vaccine.map(|_| 100),
        }
    }

    fn sample_rows() -> Vec<ReportRow> {
        vec![
            row("Asha Rao", "5A", "Vaccinated", Some("Polio"), Some("2026-04-10")),
            row("Ben Wu", "6B", "Not Vaccinated", None, None),
            row("Chitra Iyer", "5A", "Vaccinated", Some("Measles"), Some("2026-07-15")),
        ]
    }

    #[test]
    fn test_filters_and_together() {
        let rows = sample_rows();
        let mut view = ReportView::default();

        view.filters.student_class = "5a".to_string();
        assert_eq!(view.visible(&rows).len(), 2);

        view.filters.vaccine_name = "polio".to_string();
        let visible = view.visible(&rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Asha Rao");
    }

    #[test]
    fn test_date_filter_is_exact() {
        let rows = sample_rows();
        let mut view = ReportView::default();
        view.filters.drive_date = Some("2026-07-15".parse().unwrap());

        let visible = view.visible(&rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Chitra Iyer");
    }

    #[test]
    fn test_missing_drive_date_sorts_last_both_ways() {
        let rows = sample_rows();
        let mut view = ReportView::default();
        view.select_column(ReportColumn::DriveDate);

        let visible = view.visible(&rows);
        assert_eq!(visible.last().unwrap().name, "Ben Wu");

        view.select_column(ReportColumn::DriveDate);
        let visible = view.visible(&rows);
        assert_eq!(visible.first().unwrap().name, "Chitra Iyer");
        assert_eq!(visible.last().unwrap().name, "Ben Wu");
    }

    #[test]
    fn test_empty_vaccine_filter_keeps_unvaccinated_rows() {
        let rows = sample_rows();
        let view = ReportView::default();
        assert_eq!(view.visible(&rows).len(), 3);
    }
}
