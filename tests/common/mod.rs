use chirpy::config::EnvConfig;
use chirpy::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        platform: "dev".to_string(),
    }
}

#[allow(dead_code)]
pub fn get_non_dev_config() -> EnvConfig {
    EnvConfig {
        platform: "prod".to_string(),
        ..get_test_config()
    }
}

// Test data helpers
pub mod test_data {
    use chirpy::types::chirp::RChirpCreate;
    use chirpy::types::user::RUserCreate;

    #[allow(dead_code)]
    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            email: "test@example.com".to_string(),
            password: "hunter2!".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            email: email.to_string(),
            password: "hunter2!".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_chirp(user_id: Option<String>) -> RChirpCreate {
        RChirpCreate {
            body: "Hello, Chirpy!".to_string(),
            user_id,
        }
    }
}
