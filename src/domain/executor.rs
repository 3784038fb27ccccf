use async_trait::async_trait;
use thiserror::Error;

pub type ExecutorResult<T> = Result<T, ExecutorError>;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("{0}")]
    Execution(String),
}

/// Named-column, ordered-row result set as reported by the backend.
/// Every cell is carried as its textual value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

/// Seam to the SQL-speaking backend. One statement in, one tabular
/// result or one error out; retry and timeout policy live behind it.
#[async_trait]
pub trait BackendExecutor: Send + Sync {
    async fn execute(&self, statement: &str) -> ExecutorResult<TabularResult>;
}
