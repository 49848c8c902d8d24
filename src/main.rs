use actix_files::Files;
use actix_web::{web, App, HttpServer};
use chirpy::config::EnvConfig;
use chirpy::db::postgres_service::PostgresService;
use chirpy::middleware::hits::{HitCount, HitCounter};
use chirpy::routes::configure_routes;
use chirpy::types::error::AppError;
use chirpy::utils::censor::Censor;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let hits = web::Data::new(HitCounter::default());

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(config.clone()))
            .app_data(hits.clone())
            .app_data(web::Data::new(Censor::default()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(err.to_string()).into()
            }))
            .configure(configure_routes)
            .service(
                web::scope("/app")
                    .wrap(HitCount::new(hits.clone().into_inner()))
                    .service(
                        Files::new("/", "./static")
                            .index_file("index.html")
                            .show_files_listing(),
                    ),
            )
    })
    .bind(addr)?
    .run()
    .await
}
