use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub platform: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8080),
            db_url: Self::get_env("DB_URL"),
            platform: Self::get_env("PLATFORM"),
        }
    }

    /// The destructive admin endpoints are only live on dev deployments.
    pub fn is_dev(&self) -> bool {
        self.platform == "dev"
    }
}
