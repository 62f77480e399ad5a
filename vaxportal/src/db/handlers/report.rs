//! Database queries for the vaccination report screen.

use crate::db::{
    errors::Result,
    models::report::{DriveReportRow, ReportFilter, ReportRow, StudentReportRow},
};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use tracing::instrument;

pub struct Reports<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Reports<'c> {
    /// Create a new Reports repository instance
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Build the report query for the given filters.
    ///
    /// Text filters are case-insensitive substring matches; the drive date is
    /// an exact match. Filtering on a drive column implicitly drops rows where
    /// the student has no drive, since NULL never matches.
    fn vaccination_level_query(filter: &ReportFilter) -> QueryBuilder<'static, Sqlite> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT s.id, s.name, s.classname AS student_class, s.dob, s.vaccination_status,
                   vd.title, vd.vaccine_name, vd.classname AS vaccine_class, vd.drive_date,
                   vd.no_of_vaccine
            FROM students s
            LEFT JOIN student_vaccine_link svl ON s.id = svl.student_id
            LEFT JOIN vaccination_drives vd ON svl.vaccination_drive_id = vd.id
            WHERE 1=1
            "#,
        );

        if let Some(name) = &filter.name {
            query.push(" AND LOWER(s.name) LIKE ");
            query.push_bind(format!("%{}%", name.to_lowercase()));
        }
        if let Some(student_class) = &filter.student_class {
            query.push(" AND LOWER(s.classname) LIKE ");
            query.push_bind(format!("%{}%", student_class.to_lowercase()));
        }
        if let Some(status) = &filter.vaccination_status {
            query.push(" AND LOWER(s.vaccination_status) LIKE ");
            query.push_bind(format!("%{}%", status.to_lowercase()));
        }
        if let Some(vaccine_name) = &filter.vaccine_name {
            query.push(" AND LOWER(vd.vaccine_name) LIKE ");
            query.push_bind(format!("%{}%", vaccine_name.to_lowercase()));
        }
        if let Some(drive_date) = filter.drive_date {
            query.push(" AND vd.drive_date = ");
            query.push_bind(drive_date);
        }

        query.push(" ORDER BY s.id ASC, vd.drive_date ASC");
        query
    }

    /// Report rows at vaccination level: one row per (student, drive) pair,
    /// plus one row with null drive columns per unvaccinated student.
    #[instrument(skip_all, err)]
    pub async fn vaccination_level(&mut self, filter: &ReportFilter) -> Result<Vec<ReportRow>> {
        let rows = Self::vaccination_level_query(filter)
            .build_query_as::<ReportRow>()
            .fetch_all(&mut *self.db)
            .await?;

        Ok(rows)
    }

    /// All drives for the report, newest first
    #[instrument(skip_all, err)]
    pub async fn drives(&mut self) -> Result<Vec<DriveReportRow>> {
        let rows = sqlx::query_as::<_, DriveReportRow>(
            r#"
            SELECT id, title, vaccine_name, drive_date, no_of_vaccine, classname AS vaccine_class
            FROM vaccination_drives
            ORDER BY drive_date DESC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// All students for the report, alphabetical by name
    #[instrument(skip_all, err)]
    pub async fn students(&mut self) -> Result<Vec<StudentReportRow>> {
        let rows = sqlx::query_as::<_, StudentReportRow>(
            r#"
            SELECT id, name, classname AS student_class, dob, vaccination_status
            FROM students
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        handlers::{Drives, Repository, Students, Vaccinations},
        models::{
            drives::DriveCreateDBRequest, students::StudentCreateDBRequest,
            vaccinations::VaccinationCreateDBRequest,
        },
    };
    use sqlx::SqlitePool;

    #[test]
    fn test_empty_filter_adds_no_predicates() {
        let mut query = Reports::vaccination_level_query(&ReportFilter::default());
        let sql = query.sql();
        assert!(!sql.contains("LIKE"));
        assert!(sql.contains("LEFT JOIN vaccination_drives"));
    }

    #[test]
    fn test_each_filter_adds_its_predicate() {
        let filter = ReportFilter {
            name: Some("asha".to_string()),
            vaccine_name: Some("polio".to_string()),
            drive_date: Some("2026-04-10".parse().unwrap()),
            ..Default::default()
        };
        let mut query = Reports::vaccination_level_query(&filter);
        let sql = query.sql();
        assert!(sql.contains("LOWER(s.name) LIKE"));
        assert!(sql.contains("LOWER(vd.vaccine_name) LIKE"));
        assert!(sql.contains("vd.drive_date = "));
        assert!(!sql.contains("LOWER(s.classname)"));
    }

    async fn seed(conn: &mut SqliteConnection) {
        let asha = Students::new(conn)
            .create(&StudentCreateDBRequest {
                name: "Asha Rao".to_string(),
                classname: "5A".to_string(),
                dob: "2014-03-21".to_string(),
            })
            .await
            .unwrap();
        Students::new(conn)
            .create(&StudentCreateDBRequest {
                name: "Ben Wu".to_string(),
                classname: "6B".to_string(),
                dob: "2013-07-02".to_string(),
            })
            .await
            .unwrap();

        let drive = Drives::new(conn)
            .create(&DriveCreateDBRequest {
                title: "Spring polio drive".to_string(),
                vaccine_name: "Polio".to_string(),
                drive_date: "2026-04-10".parse().unwrap(),
                no_of_vaccine: 100,
                classname: "5A".to_string(),
            })
            .await
            .unwrap();

        Vaccinations::new(conn)
            .create(&VaccinationCreateDBRequest {
                student_id: asha.id,
                vaccination_drive_id: drive.id,
            })
            .await
            .unwrap();
        Students::new(conn).set_status(asha.id, "Vaccinated").await.unwrap();
    }

    #[sqlx::test]
    async fn test_unfiltered_report_keeps_unvaccinated_students(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        seed(&mut conn).await;

        let rows = Reports::new(&mut conn).vaccination_level(&ReportFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 2);

        let ben = rows.iter().find(|r| r.name == "Ben Wu").unwrap();
        assert!(ben.vaccine_name.is_none());
        assert!(ben.drive_date.is_none());
        assert!(ben.title.is_none());
        assert!(ben.no_of_vaccine.is_none());
        assert_eq!(ben.dob, "2013-07-02");

        let asha = rows.iter().find(|r| r.name == "Asha Rao").unwrap();
        assert_eq!(asha.vaccine_name.as_deref(), Some("Polio"));
        assert_eq!(asha.vaccine_class.as_deref(), Some("5A"));
        assert_eq!(asha.title.as_deref(), Some("Spring polio drive"));
        assert_eq!(asha.no_of_vaccine, Some(100));
        assert_eq!(asha.dob, "2014-03-21");
    }

    #[sqlx::test]
    async fn test_name_filter_is_case_insensitive_substring(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        seed(&mut conn).await;

        let filter = ReportFilter {
            name: Some("ASHA".to_string()),
            ..Default::default()
        };
        let rows = Reports::new(&mut conn).vaccination_level(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Asha Rao");
    }

    #[sqlx::test]
    async fn test_drive_filter_drops_null_drive_rows(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        seed(&mut conn).await;

        let filter = ReportFilter {
            vaccine_name: Some("polio".to_string()),
            ..Default::default()
        };
        let rows = Reports::new(&mut conn).vaccination_level(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Asha Rao");

        let filter = ReportFilter {
            drive_date: Some("2026-01-01".parse().unwrap()),
            ..Default::default()
        };
        let rows = Reports::new(&mut conn).vaccination_level(&filter).await.unwrap();
        assert!(rows.is_empty());
    }

    #[sqlx::test]
    async fn test_report_listings_order(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        seed(&mut conn).await;

        Drives::new(&mut conn)
            .create(&DriveCreateDBRequest {
                title: "Summer measles drive".to_string(),
                vaccine_name: "Measles".to_string(),
                drive_date: "2026-07-15".parse().unwrap(),
                no_of_vaccine: 80,
                classname: "6B".to_string(),
            })
            .await
            .unwrap();

        let mut reports = Reports::new(&mut conn);

        let drives = reports.drives().await.unwrap();
        assert_eq!(drives[0].title, "Summer measles drive");
        assert_eq!(drives[0].vaccine_class, "6B");

        let students = reports.students().await.unwrap();
        let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Asha Rao", "Ben Wu"]);
    }
}
