use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, CreateAccountDTO, DropAccountDTO};

use actix_web::{HttpResponse, get, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(add)
        .service(update)
        .service(remove)
        .service(userz);
}

#[utoipa::path(
    responses(
        (status = 200, description = "Account created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CreateAccountDTO,
    tag = "User",
)]
#[post("/add")]
pub async fn add(
    payload: Json<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service.create(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().finish())
}

#[utoipa::path(
    responses(
        (status = 200, description = "Credential changed"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CreateAccountDTO,
    tag = "User",
)]
#[post("/update")]
pub async fn update(
    payload: Json<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service.alter(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().finish())
}

#[utoipa::path(
    responses(
        (status = 200, description = "Account removed"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = DropAccountDTO,
    tag = "User",
)]
#[post("/remove")]
pub async fn remove(
    payload: Json<DropAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service.remove(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().finish())
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<AccountDTO>, description = "Accounts reported by the backend"),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    tag = "User",
)]
#[get("/userz")]
pub async fn userz(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    let accounts = account_service.list().await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}
