use actix_files::Files;
use actix_web::{web, App};
use chirpy::{
    config::EnvConfig,
    db::postgres_service::PostgresService,
    middleware::hits::{HitCount, HitCounter},
    types::{error::AppError, user::DBUserCreate},
    utils::{censor::Censor, password::hash_password},
};
use std::sync::Arc;
use uuid::Uuid;

/// The password every test user is created with.
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "hunter2!";

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub hits: web::Data<HitCounter>,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient::with_config(db, super::get_test_config())
    }

    pub fn with_config(db: Arc<PostgresService>, config: EnvConfig) -> Self {
        TestClient {
            db,
            hits: web::Data::new(HitCounter::default()),
            config,
        }
    }

    /// Mirrors the app assembly in main so the flows exercise the same
    /// routing, middleware, and JSON handling as the real server.
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.config.clone()))
            .app_data(self.hits.clone())
            .app_data(web::Data::new(Censor::default()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(err.to_string()).into()
            }))
            .configure(chirpy::routes::configure_routes)
            .service(
                web::scope("/app")
                    .wrap(HitCount::new(self.hits.clone().into_inner()))
                    .service(
                        Files::new("/", "./static")
                            .index_file("index.html")
                            .show_files_listing(),
                    ),
            )
    }

    /// Inserts a user directly, bypassing the API. Returns the id and the
    /// email it was created under; the password is always TEST_PASSWORD.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> Result<(Uuid, String), AppError> {
        let random_id = Uuid::new_v4();
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", random_id));

        let hashed_password =
            hash_password(TEST_PASSWORD).expect("Failed to hash test password");

        let user = self
            .db
            .create_user(DBUserCreate {
                email: email.clone(),
                hashed_password,
            })
            .await?;

        Ok((user.id, email))
    }
}
