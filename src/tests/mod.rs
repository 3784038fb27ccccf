
use std::sync::Arc;

use serde::Deserialize;

use crate::container::Container;
use crate::infrastructure::executors::mysql::mock::MockExecutor;

pub struct TestContext {
    pub executor: Arc<MockExecutor>,
    pub container: Arc<Container>,
}

pub fn context(executor: MockExecutor) -> TestContext {
    let executor = Arc::new(executor);
    let container = Arc::new(Container::new(executor.clone()));

    TestContext {
        executor,
        container,
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
