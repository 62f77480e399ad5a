//! View state for the student roster screen.

use crate::db::models::students::StudentWithVaccinations;
use crate::view::table::{sort_rows, Pager, SortDirection, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentColumn {
    Id,
    Name,
    Classname,
    Dob,
    VaccinationStatus,
}

/// One search box, one sortable table, one pager.
#[derive(Debug, Clone)]
pub struct StudentListView {
    pub search: String,
    pub sort: SortState<StudentColumn>,
    pub pager: Pager,
}

impl Default for StudentListView {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortState::new(StudentColumn::Id),
            pager: Pager::default(),
        }
    }
}

impl StudentListView {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn select_column(&mut self, column: StudentColumn) {
        self.sort.select(column);
    }

    /// The single search needle matches as a substring against the student's
    /// name, class, stringified id, and the names of every vaccine they have
    /// received, all case-insensitively.
    fn matches(student: &StudentWithVaccinations, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let vaccine_names = student
            .vaccinations
            .iter()
            .map(|v| v.vaccine_name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        student.name.to_lowercase().contains(needle)
            || student.classname.to_lowercase().contains(needle)
            || student.id.to_string().contains(needle)
            || vaccine_names.contains(needle)
    }

    fn sort(&self, rows: &mut [&StudentWithVaccinations]) {
        let direction: SortDirection = self.sort.direction;
        match self.sort.column {
            StudentColumn::Id => sort_rows(rows, |r| Some(r.id), direction),
            StudentColumn::Name => sort_rows(rows, |r| Some(r.name.to_lowercase()), direction),
            StudentColumn::Classname => sort_rows(rows, |r| Some(r.classname.to_lowercase()), direction),
            StudentColumn::Dob => sort_rows(rows, |r| Some(r.dob.clone()), direction),
            StudentColumn::VaccinationStatus => {
                sort_rows(rows, |r| Some(r.vaccination_status.to_lowercase()), direction)
            }
        }
    }

    /// Apply search, sort, and pagination; returns only the visible page
    pub fn visible<'a>(&self, students: &'a [StudentWithVaccinations]) -> Vec<&'a StudentWithVaccinations> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<&StudentWithVaccinations> =
            students.iter().filter(|s| Self::matches(s, &needle)).collect();
        self.sort(&mut rows);
        self.pager.slice(&rows).to_vec()
    }
}
