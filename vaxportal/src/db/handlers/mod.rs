//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection or transaction, provides
//! strongly-typed operations over one table, and returns domain models from
//! [`crate::db::models`]. Constraint violations surface as
//! [`crate::db::errors::DbError`] variants rather than raw driver errors.
//!
//! All repositories follow this usage pattern:
//!
//! ```ignore
//! use vaxportal::db::handlers::{Repository, Students};
//!
//! async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tx = pool.begin().await?;
//!     let mut repo = Students::new(&mut tx);
//!     let students = repo.list(&()).await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod drives;
pub mod report;
pub mod repository;
pub mod students;
pub mod vaccinations;

pub use drives::Drives;
pub use report::Reports;
pub use repository::Repository;
pub use students::Students;
pub use vaccinations::Vaccinations;
