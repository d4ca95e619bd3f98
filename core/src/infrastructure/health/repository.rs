use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self.db.ping().await {
            Ok(()) => Ok(DatabaseHealthStatus::up()),
            Err(e) => {
                warn!("Database ping failed: {}", e);
                Ok(DatabaseHealthStatus::down())
            }
        }
    }
}
