use crate::db::postgres_service::PostgresService;
use crate::types::{chirp::DBChirpCreate, error::AppError};
use chrono::Utc;
use entity::chirp::{ActiveModel as ChirpActive, Entity as Chirp, Model as ChirpModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    /// The body arrives already validated and censored.
    pub async fn create_chirp(&self, payload: DBChirpCreate) -> Result<ChirpModel, AppError> {
        let now = Utc::now();

        let chirp = ChirpActive {
            id: Set(Uuid::new_v4()),
            body: Set(payload.body),
            user_id: Set(payload.user_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        Ok(chirp)
    }

    /// Oldest first, the reading order of the public timeline.
    pub async fn get_chirps(&self) -> Result<Vec<ChirpModel>, AppError> {
        Ok(Chirp::find()
            .order_by_asc(entity::chirp::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn get_chirp_by_id(&self, id: &Uuid) -> Result<ChirpModel, AppError> {
        Ok(Chirp::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Chirp does not exist".into()))?)
    }
}
