use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::config::MySqlConfig;

pub async fn connect(db_config: &MySqlConfig) -> Result<MySqlPool, sqlx::Error> {
    let url = format!(
        "mysql://{}:{}@{}:{}",
        db_config.username, db_config.password, db_config.host, db_config.port
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(db_config.max_connections)
        .acquire_timeout(Duration::from_secs(db_config.connect_timeout))
        .connect(&url)
        .await?;

    info!(
        "backend connection pool established with max_connections={}",
        db_config.max_connections
    );

    Ok(pool)
}
