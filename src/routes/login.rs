use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserRes};
use crate::utils::password::verify_password;
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserRes> {
    let params = body.into_inner();

    let user = match db.get_user_by_email(&params.email).await {
        Ok(user) => user,
        Err(_) => return Err(AppError::Unauthorized),
    };

    match verify_password(&params.password, &user.hashed_password) {
        Ok(true) => {}
        // a mismatch and an unparseable digest both read as a failed login
        _ => return Err(AppError::Unauthorized),
    }

    Ok(ApiResponse::Ok(user.into()))
}
