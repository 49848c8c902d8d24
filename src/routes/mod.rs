use actix_web::web;

pub mod admin;
pub mod chirp;
pub mod health;
pub mod login;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::health)
            .service(web::scope("/users").service(user::create::create))
            .service(web::scope("/login").service(login::login))
            .service(
                web::scope("/chirps")
                    .service(chirp::create::create)
                    .service(chirp::list::list)
                    .service(chirp::get::get_by_id),
            ),
    );
    cfg.service(
        web::scope("/admin")
            .service(admin::metrics::metrics)
            .service(admin::reset::reset),
    );
}
