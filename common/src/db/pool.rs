// PostgreSQL connection pool implementation

use crate::config::DatabaseConfig;
use crate::errors::DatabaseError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Number of connection attempts made before startup fails
const CONNECT_ATTEMPTS: u32 = 5;

/// Fixed delay between connection attempts
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct DbPool {
    pool: PgPool,
}

impl DbPool {
    /// Establish a connection pool, retrying a fixed number of times with a
    /// fixed delay between attempts.
    ///
    /// # Errors
    /// Returns `DatabaseError::ConnectionFailed` once all attempts are
    /// exhausted; callers treat this as fatal at startup.
    #[instrument(skip(config), fields(host = %config.host, dbname = %config.dbname))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let url = config.connection_string();

        let mut last_error = None;
        for attempt in 1..=CONNECT_ATTEMPTS {
            match PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
                .connect(&url)
                .await
            {
                Ok(pool) => {
                    info!(
                        attempt,
                        max_connections = config.max_connections,
                        "Database connection pool established"
                    );
                    return Ok(Self { pool });
                }
                Err(e) => {
                    warn!(
                        attempt,
                        error = %e,
                        "Failed to connect to database, retrying in {}s",
                        CONNECT_RETRY_DELAY.as_secs()
                    );
                    last_error = Some(e);
                    if attempt < CONNECT_ATTEMPTS {
                        tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                    }
                }
            }
        }

        Err(DatabaseError::ConnectionFailed(format!(
            "unable to connect after {} attempts: {}",
            CONNECT_ATTEMPTS,
            last_error.map(|e| e.to_string()).unwrap_or_default()
        )))
    }

    /// Get a reference to the underlying pool
    ///
    /// This is used by repositories to execute queries
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the connection pool gracefully during shutdown
    #[instrument(skip(self))]
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }
}
