//! HTTP request handlers, one module per resource.

pub mod dashboard;
pub mod drives;
pub mod report;
pub mod students;
