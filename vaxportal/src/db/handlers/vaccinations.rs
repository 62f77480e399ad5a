//! Database repository for the student-to-drive vaccination links.

use crate::{
    db::{
        errors::Result,
        models::vaccinations::{StudentVaccineLink, VaccinationCreateDBRequest},
    },
    types::StudentId,
};
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct Vaccinations<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Vaccinations<'c> {
    /// Create a new Vaccinations repository instance
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Record a vaccination. A second record for the same (student, drive)
    /// pair trips the unique constraint and surfaces as a UniqueViolation;
    /// unknown student or drive ids surface as a ForeignKeyViolation.
    #[instrument(skip(self, request), fields(student_id = %request.student_id, drive_id = %request.vaccination_drive_id), err)]
    pub async fn create(&mut self, request: &VaccinationCreateDBRequest) -> Result<StudentVaccineLink> {
        let link = sqlx::query_as::<_, StudentVaccineLink>(
            r#"
            INSERT INTO student_vaccine_link (student_id, vaccination_drive_id)
            VALUES (?, ?)
            RETURNING id, student_id, vaccination_drive_id
            "#,
        )
        .bind(request.student_id)
        .bind(request.vaccination_drive_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(link)
    }

    /// All vaccination links for one student
    #[instrument(skip(self), err)]
    pub async fn list_for_student(&mut self, student_id: StudentId) -> Result<Vec<StudentVaccineLink>> {
        let links = sqlx::query_as::<_, StudentVaccineLink>(
            "SELECT id, student_id, vaccination_drive_id FROM student_vaccine_link WHERE student_id = ?",
        )
        .bind(student_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        errors::DbError,
        handlers::{Drives, Repository, Students},
        models::{drives::DriveCreateDBRequest, students::StudentCreateDBRequest},
    };
    use sqlx::SqlitePool;

    async fn seed(conn: &mut SqliteConnection) -> (StudentId, crate::types::DriveId) {
        let student = Students::new(conn)
            .create(&StudentCreateDBRequest {
                name: "Asha Rao".to_string(),
                classname: "5A".to_string(),
                dob: "2014-03-21".to_string(),
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

        (student.id, drive.id)
    }

    #[sqlx::test]
    async fn test_duplicate_pair_is_unique_violation(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let (student_id, drive_id) = seed(&mut conn).await;

        let request = VaccinationCreateDBRequest {
            student_id,
            vaccination_drive_id: drive_id,
        };

        let mut repo = Vaccinations::new(&mut conn);
        repo.create(&request).await.unwrap();
        let err = repo.create(&request).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));

        // exactly one link survives
        let links = repo.list_for_student(student_id).await.unwrap();
        assert_eq!(links.len(), 1);
    }

    #[sqlx::test]
    async fn test_unknown_drive_is_foreign_key_violation(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let (student_id, _) = seed(&mut conn).await;

        let err = Vaccinations::new(&mut conn)
            .create(&VaccinationCreateDBRequest {
                student_id,
                vaccination_drive_id: 9999,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
