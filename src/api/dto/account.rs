use crate::api::dto::validation::{is_host, is_password, is_username};
use crate::domain::models::account::{Account, AccountCredentials};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

fn default_host() -> String {
    "localhost".to_string()
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateAccountDTO {
    #[serde(rename = "User")]
    #[validate(custom(function = "is_username"))]
    #[schema(examples("app_ro"))]
    pub user: String,

    #[serde(rename = "Password")]
    #[validate(custom(function = "is_password"))]
    #[schema(examples("s3cret"))]
    pub password: String,

    #[serde(rename = "Host", default = "default_host")]
    #[validate(custom(function = "is_host"))]
    #[schema(examples("localhost"))]
    pub host: String,
}

/// Removal never needs a password; an extra `Password` field in the
/// payload is ignored.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct DropAccountDTO {
    #[serde(rename = "User")]
    #[validate(custom(function = "is_username"))]
    #[schema(examples("app_ro"))]
    pub user: String,

    #[serde(rename = "Host", default = "default_host")]
    #[validate(custom(function = "is_host"))]
    #[schema(examples("localhost"))]
    pub host: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[serde(rename = "User")]
    user: String,

    #[serde(rename = "Host")]
    host: String,
}

impl From<Account> for AccountDTO {
    fn from(account: Account) -> Self {
        AccountDTO {
            user: account.user,
            host: account.host,
        }
    }
}

impl From<CreateAccountDTO> for AccountCredentials {
    fn from(dto: CreateAccountDTO) -> Self {
        AccountCredentials {
            user: dto.user,
            host: dto.host,
            password: dto.password,
        }
    }
}

impl From<DropAccountDTO> for Account {
    fn from(dto: DropAccountDTO) -> Self {
        Account {
            user: dto.user,
            host: dto.host,
        }
    }
}
