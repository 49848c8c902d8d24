use crate::db::postgres_service::PostgresService;
use crate::types::chirp::ChirpRes;
use crate::types::response::{ApiResponse, ApiResult};
use actix_web::{get, web};
use std::sync::Arc;

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<ChirpRes>> {
    let chirps = db.get_chirps().await?;

    Ok(ApiResponse::Ok(
        chirps.into_iter().map(ChirpRes::from).collect(),
    ))
}
