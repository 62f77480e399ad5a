//! Database repository for vaccination drives.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::drives::{DriveCreateDBRequest, DriveDBResponse, DriveUpdateDBRequest, UpcomingDrive, VaccinationDrive},
    },
    types::DriveId,
};
use chrono::NaiveDate;
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct Drives<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Drives<'c> {
    /// Create a new Drives repository instance
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Drives scheduled within the closed date window, soonest first
    #[instrument(skip(self), err)]
    pub async fn upcoming_between(&mut self, start: NaiveDate, end: NaiveDate) -> Result<Vec<UpcomingDrive>> {
        let drives = sqlx::query_as::<_, UpcomingDrive>(
            r#"
            SELECT id, title, drive_date
            FROM vaccination_drives
            WHERE drive_date >= ? AND drive_date <= ?
            ORDER BY drive_date ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(drives)
    }
}

#[async_trait::async_trait]
impl Repository for Drives<'_> {
    type CreateRequest = DriveCreateDBRequest;
    type UpdateRequest = DriveUpdateDBRequest;
    type Response = DriveDBResponse;
    type Id = DriveId;
    type Filter = ();

    /// Insert a new drive. The unique constraint on drive_date makes a
    /// concurrent duplicate surface as a UniqueViolation instead of relying
    /// on a racy existence pre-check.
    #[instrument(skip(self, request), fields(title = %request.title, drive_date = %request.drive_date), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let drive = sqlx::query_as::<_, VaccinationDrive>(
            r#"
            INSERT INTO vaccination_drives (title, vaccine_name, drive_date, no_of_vaccine, classname)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, vaccine_name, drive_date, no_of_vaccine, classname
            "#,
        )
        .bind(&request.title)
        .bind(&request.vaccine_name)
        .bind(request.drive_date)
        .bind(request.no_of_vaccine)
        .bind(&request.classname)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(drive)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let drive = sqlx::query_as::<_, VaccinationDrive>(
            "SELECT id, title, vaccine_name, drive_date, no_of_vaccine, classname FROM vaccination_drives WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(drive)
    }

    #[instrument(skip_all, err)]
    async fn list(&mut self, _filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let drives = sqlx::query_as::<_, VaccinationDrive>(
            r#"
            SELECT id, title, vaccine_name, drive_date, no_of_vaccine, classname
            FROM vaccination_drives
            ORDER BY drive_date ASC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(drives)
    }

    /// Replace every editable field of the drive. The date uniqueness
    /// constraint applies here as on create, so moving a drive onto an
    /// already-taken date is rejected.
    #[instrument(skip(self, request), fields(id = %id), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Option<Self::Response>> {
        let drive = sqlx::query_as::<_, VaccinationDrive>(
            r#"
            UPDATE vaccination_drives
            SET title = ?, vaccine_name = ?, drive_date = ?, no_of_vaccine = ?, classname = ?
            WHERE id = ?
            RETURNING id, title, vaccine_name, drive_date, no_of_vaccine, classname
            "#,
        )
        .bind(&request.title)
        .bind(&request.vaccine_name)
        .bind(request.drive_date)
        .bind(request.no_of_vaccine)
        .bind(&request.classname)
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(drive)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM vaccination_drives WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use sqlx::SqlitePool;

    fn sample(title: &str, date: &str) -> DriveCreateDBRequest {
        DriveCreateDBRequest {
            title: title.to_string(),
            vaccine_name: "Polio".to_string(),
            drive_date: date.parse().unwrap(),
            no_of_vaccine: 50,
            classname: "5A".to_string(),
        }
    }

    #[sqlx::test]
    async fn test_list_orders_by_date_ascending(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Drives::new(&mut conn);

        repo.create(&sample("Later", "2026-06-01")).await.unwrap();
        repo.create(&sample("Sooner", "2026-05-01")).await.unwrap();

        let drives = repo.list(&()).await.unwrap();
        assert_eq!(drives.len(), 2);
        assert_eq!(drives[0].title, "Sooner");
        assert_eq!(drives[1].title, "Later");
    }

    #[sqlx::test]
    async fn test_duplicate_date_is_unique_violation(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Drives::new(&mut conn);

        repo.create(&sample("First", "2026-05-01")).await.unwrap();
        let err = repo.create(&sample("Second", "2026-05-01")).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[sqlx::test]
    async fn test_update_enforces_date_uniqueness(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Drives::new(&mut conn);

        repo.create(&sample("First", "2026-05-01")).await.unwrap();
        let second = repo.create(&sample("Second", "2026-06-01")).await.unwrap();

        let onto_taken_date = sample("Second", "2026-05-01");
        let err = repo.update(second.id, &onto_taken_date).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[sqlx::test]
    async fn test_update_missing_drive_returns_none(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Drives::new(&mut conn);

        let result = repo.update(42, &sample("Ghost", "2026-05-01")).await.unwrap();
        assert!(result.is_none());
    }

    #[sqlx::test]
    async fn test_upcoming_between_is_a_closed_window(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Drives::new(&mut conn);

        repo.create(&sample("Before", "2026-04-30")).await.unwrap();
        repo.create(&sample("OnStart", "2026-05-01")).await.unwrap();
        repo.create(&sample("OnEnd", "2026-05-31")).await.unwrap();
        repo.create(&sample("After", "2026-06-01")).await.unwrap();

        let upcoming = repo
            .upcoming_between("2026-05-01".parse().unwrap(), "2026-05-31".parse().unwrap())
            .await
            .unwrap();

        let titles: Vec<_> = upcoming.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["OnStart", "OnEnd"]);
    }
}
