use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AccountCredentials};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create(&self, account: AccountCredentials) -> AppResult<()>;
    async fn alter(&self, account: AccountCredentials) -> AppResult<()>;
    async fn remove(&self, account: Account) -> AppResult<()>;
    async fn list(&self) -> AppResult<Vec<Account>>;
}
