/// A backend-managed identity: one user@host pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user: String,
    pub host: String,
}

#[derive(Clone)]
pub struct AccountCredentials {
    pub user: String,
    pub host: String,
    pub password: String,
}
