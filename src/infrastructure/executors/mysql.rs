use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{Column, MySqlPool, Row};

use crate::domain::executor::{BackendExecutor, ExecutorError, ExecutorResult, TabularResult};

pub struct MySqlExecutor {
    pool: MySqlPool,
}

impl MySqlExecutor {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BackendExecutor for MySqlExecutor {
    async fn execute(&self, statement: &str) -> ExecutorResult<TabularResult> {
        let rows = sqlx::query(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| ExecutorError::Execution(err.to_string()))?;

        tabulate(&rows)
    }
}

// Statements without a result set (GRANT, ALTER, DROP) come back as
// zero rows, which tabulates to an empty result.
fn tabulate(rows: &[MySqlRow]) -> ExecutorResult<TabularResult> {
    let columns = rows
        .first()
        .map(|row| {
            row.columns()
                .iter()
                .map(|column| column.name().to_string())
                .collect()
        })
        .unwrap_or_default();

    let cells = rows
        .iter()
        .map(|row| {
            (0..row.len())
                .map(|index| {
                    row.try_get::<String, _>(index)
                        .map_err(|err| ExecutorError::Execution(err.to_string()))
                })
                .collect::<ExecutorResult<Vec<String>>>()
        })
        .collect::<ExecutorResult<Vec<Vec<String>>>>()?;

    Ok(TabularResult::new(columns, cells))
}
