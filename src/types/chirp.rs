use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RChirpCreate {
    pub body: String,
    /// Kept as a raw string: ids that fail to parse are stored as NULL
    /// rather than rejected.
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChirpRes {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Option<Uuid>,
}

impl From<entity::chirp::Model> for ChirpRes {
    fn from(chirp: entity::chirp::Model) -> Self {
        ChirpRes {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}

pub struct DBChirpCreate {
    pub body: String,
    pub user_id: Option<Uuid>,
}
