use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes};
use crate::utils::password::hash_password;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::error;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let params = body.into_inner();

    if params.email.is_empty() {
        return Err(AppError::Validation("Email must not be empty".to_string()));
    }

    let hashed_password = match hash_password(&params.password) {
        Ok(digest) => digest,
        Err(e) => {
            error!("Error while hashing password: {}", e);
            return Err(AppError::Internal("password hashing failed".to_string()));
        }
    };

    let user = db
        .create_user(DBUserCreate {
            email: params.email,
            hashed_password,
        })
        .await?;

    Ok(ApiResponse::Created(user.into()))
}
