//! Database repository for student records.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::students::{
            Student, StudentCreateDBRequest, StudentDBResponse, StudentUpdateDBRequest, StudentWithVaccinations,
            VaccinationInfo,
        },
    },
    types::{DriveId, StudentId},
};
use chrono::NaiveDate;
use sqlx::SqliteConnection;
use std::collections::HashMap;
use tracing::instrument;

pub struct Students<'c> {
    db: &'c mut SqliteConnection,
}

/// Flat row from the roster join, regrouped per student afterwards
#[derive(sqlx::FromRow)]
struct RosterJoinRow {
    student_id: StudentId,
    drive_id: DriveId,
    title: String,
    vaccine_name: String,
    drive_date: NaiveDate,
}

impl<'c> Students<'c> {
    /// Create a new Students repository instance
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// List every student together with the vaccinations they have received.
    ///
    /// Two queries rather than one join on the hot path: the join rows are
    /// regrouped in memory so each student appears exactly once, with an empty
    /// vaccination list when they have none.
    #[instrument(skip(self), err)]
    pub async fn list_with_vaccinations(&mut self) -> Result<Vec<StudentWithVaccinations>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, classname, dob, vaccination_status FROM students ORDER BY id",
        )
        .fetch_all(&mut *self.db)
        .await?;

        let rows = sqlx::query_as::<_, RosterJoinRow>(
            r#"
            SELECT svl.student_id, vd.id AS drive_id, vd.title, vd.vaccine_name, vd.drive_date
            FROM student_vaccine_link svl
            JOIN vaccination_drives vd ON svl.vaccination_drive_id = vd.id
            ORDER BY vd.drive_date
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        let mut by_student: HashMap<StudentId, Vec<VaccinationInfo>> = HashMap::new();
        for row in rows {
            by_student.entry(row.student_id).or_default().push(VaccinationInfo {
                drive_id: row.drive_id,
                title: row.title,
                vaccine_name: row.vaccine_name,
                date: row.drive_date,
            });
        }

        Ok(students
            .into_iter()
            .map(|s| {
                let vaccinations = by_student.remove(&s.id).unwrap_or_default();
                StudentWithVaccinations {
                    id: s.id,
                    name: s.name,
                    classname: s.classname,
                    dob: s.dob,
                    vaccination_status: s.vaccination_status,
                    vaccinations,
                }
            })
            .collect())
    }

    /// Find a student with the exact same name, class, and date of birth.
    /// Used by bulk import to skip rows that are already registered.
    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn find_duplicate(&mut self, request: &StudentCreateDBRequest) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, classname, dob, vaccination_status
            FROM students
            WHERE name = ? AND classname = ? AND dob = ?
            "#,
        )
        .bind(&request.name)
        .bind(&request.classname)
        .bind(&request.dob)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(student)
    }

    /// Set a student's vaccination status, returning the number of rows matched
    #[instrument(skip(self), err)]
    pub async fn set_status(&mut self, id: StudentId, status: &str) -> Result<u64> {
        let result = sqlx::query("UPDATE students SET vaccination_status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }

    /// Total number of registered students
    #[instrument(skip(self), err)]
    pub async fn count(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&mut *self.db)
            .await?;
        Ok(count)
    }

    /// Number of students whose status marks them vaccinated
    #[instrument(skip(self), err)]
    pub async fn count_vaccinated(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM students WHERE vaccination_status = ?",
        )
        .bind(crate::db::models::students::STATUS_VACCINATED)
        .fetch_one(&mut *self.db)
        .await?;
        Ok(count)
    }
}

#[async_trait::async_trait]
impl Repository for Students<'_> {
    type CreateRequest = StudentCreateDBRequest;
    type UpdateRequest = StudentUpdateDBRequest;
    type Response = StudentDBResponse;
    type Id = StudentId;
    type Filter = ();

    #[instrument(skip(self, request), fields(name = %request.name, classname = %request.classname), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, classname, dob)
            VALUES (?, ?, ?)
            RETURNING id, name, classname, dob, vaccination_status
            "#,
        )
        .bind(&request.name)
        .bind(&request.classname)
        .bind(&request.dob)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, classname, dob, vaccination_status FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip_all, err)]
    async fn list(&mut self, _filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, classname, dob, vaccination_status FROM students ORDER BY id",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(students)
    }

    #[instrument(skip(self, request), fields(id = %id), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Option<Self::Response>> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = ?, classname = ?, dob = ?
            WHERE id = ?
            RETURNING id, name, classname, dob, vaccination_status
            "#,
        )
        .bind(&request.name)
        .bind(&request.classname)
        .bind(&request.dob)
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
