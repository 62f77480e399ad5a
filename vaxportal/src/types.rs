//! Identifier aliases shared across the API and database layers.

pub type StudentId = i64;
pub type DriveId = i64;
pub type LinkId = i64;
