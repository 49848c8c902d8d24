use crate::db::postgres_service::PostgresService;
use crate::types::chirp::{ChirpRes, DBChirpCreate, RChirpCreate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::censor::Censor;
use actix_web::{post, web};
use std::sync::Arc;
use uuid::Uuid;

const MAX_CHIRP_LENGTH: usize = 140;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    censor: web::Data<Censor>,
    body: web::Json<RChirpCreate>,
) -> ApiResult<ChirpRes> {
    let params = body.into_inner();

    if params.body.is_empty() {
        return Err(AppError::Validation("Chirp body must not be empty".to_string()));
    }
    if params.body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(AppError::Validation("Chirp is too long".to_string()));
    }

    // store NULL rather than reject when the author id does not parse
    let user_id = params
        .user_id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id).ok());

    let chirp = db
        .create_chirp(DBChirpCreate {
            body: censor.clean(&params.body),
            user_id,
        })
        .await?;

    Ok(ApiResponse::Created(chirp.into()))
}
