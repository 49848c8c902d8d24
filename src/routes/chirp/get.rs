use crate::db::postgres_service::PostgresService;
use crate::types::chirp::ChirpRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

#[get("/{chirp_id}")]
async fn get_by_id(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<ChirpRes> {
    let chirp_id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => {
            return Err(AppError::BadRequest(
                "Invalid chirp ID. Failed UUID parse.".to_string(),
            ))
        }
    };

    let chirp = db.get_chirp_by_id(&chirp_id).await?;

    Ok(ApiResponse::Ok(chirp.into()))
}
