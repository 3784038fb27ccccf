use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    executor::{BackendExecutor, TabularResult},
    models::account::{Account, AccountCredentials},
    services::account::AccountService,
    statement,
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    executor: Arc<dyn BackendExecutor>,
}

impl AccountServiceImpl {
    pub fn new(executor: Arc<dyn BackendExecutor>) -> Self {
        Self { executor }
    }

    async fn execute(&self, statement: &str) -> AppResult<TabularResult> {
        Ok(self.executor.execute(statement).await?)
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn create(&self, account: AccountCredentials) -> AppResult<()> {
        self.execute(&statement::create_user(
            &account.user,
            &account.host,
            &account.password,
        ))
        .await?;

        Ok(())
    }

    async fn alter(&self, account: AccountCredentials) -> AppResult<()> {
        self.execute(&statement::alter_user(
            &account.user,
            &account.host,
            &account.password,
        ))
        .await?;

        Ok(())
    }

    async fn remove(&self, account: Account) -> AppResult<()> {
        self.execute(&statement::drop_user(&account.user, &account.host))
            .await?;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        let result = self.execute(statement::list_users()).await?;

        project_accounts(result)
    }
}

/// Maps a `User`/`Host` tabular result into accounts, preserving the
/// backend's row order. A result without those columns is a backend
/// contract violation and fails closed as an internal error.
fn project_accounts(result: TabularResult) -> AppResult<Vec<Account>> {
    if result.rows.is_empty() {
        return Ok(Vec::new());
    }

    let user = result
        .column("User")
        .ok_or_else(|| contract_violation("User"))?;
    let host = result
        .column("Host")
        .ok_or_else(|| contract_violation("Host"))?;

    result
        .rows
        .iter()
        .map(|row| {
            let cell = |index: usize| {
                row.get(index)
                    .cloned()
                    .ok_or_else(|| AppError::InternalError().trace("backend row is too short"))
            };

            Ok(Account {
                user: cell(user)?,
                host: cell(host)?,
            })
        })
        .collect()
}

fn contract_violation(column: &str) -> AppError {
    AppError::InternalError().trace(&format!("backend result is missing column {column}"))
}
