use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub database: String,
}

impl DatabaseHealthStatus {
    pub fn up() -> Self {
        Self {
            status: "ok".to_string(),
            database: "up".to_string(),
        }
    }

    pub fn down() -> Self {
        Self {
            status: "unavailable".to_string(),
            database: "down".to_string(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.database == "up"
    }
}
