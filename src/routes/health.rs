use actix_web::{get, HttpResponse};

#[get("/healthz")]
async fn health(
    _req: actix_web::HttpRequest
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}
