use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RUserCreate {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

/// What the API returns for a user. The password digest stays in the db.
#[derive(Serialize, Deserialize)]
pub struct UserRes {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl From<entity::user::Model> for UserRes {
    fn from(user: entity::user::Model) -> Self {
        UserRes {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email,
        }
    }
}

pub struct DBUserCreate {
    pub email: String,
    pub hashed_password: String,
}
