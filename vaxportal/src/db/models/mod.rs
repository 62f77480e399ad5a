//! Database models, organized by table.

pub mod drives;
pub mod report;
pub mod students;
pub mod vaccinations;
