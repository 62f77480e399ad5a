//! Request and response types for the HTTP API.

pub mod dashboard;
pub mod drives;
pub mod report;
pub mod students;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain confirmation body for mutations that return no entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
