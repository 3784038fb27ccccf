use std::sync::Arc;

use crate::domain::executor::BackendExecutor;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(executor: Arc<dyn BackendExecutor>) -> Self {
        Container {
            account_service: Arc::new(AccountServiceImpl::new(executor)),
        }
    }
}
