use crate::config::EnvConfig;
use crate::db::postgres_service::PostgresService;
use crate::middleware::hits::HitCounter;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{post, web};
use std::sync::Arc;

/// Wipes every user (chirps go with them) and zeroes the hit counter.
/// Only available when the service runs on the dev platform.
#[post("/reset")]
async fn reset(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    hits: web::Data<HitCounter>,
    config: web::Data<EnvConfig>,
) -> ApiResult<()> {
    if !config.is_dev() {
        return Err(AppError::Forbidden);
    }

    db.delete_users().await?;
    hits.reset();

    Ok(ApiResponse::EmptyOk)
}
