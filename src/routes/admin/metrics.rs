use crate::middleware::hits::HitCounter;
use actix_web::{get, web, HttpResponse, Responder};

/// Admin-facing hit report for the static site. HTML rather than JSON so it
/// reads in a browser.
#[get("/metrics")]
async fn metrics(_req: actix_web::HttpRequest, hits: web::Data<HitCounter>) -> impl Responder {
    let body = format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>"#,
        hits.load()
    );

    HttpResponse::Ok().content_type("text/html").body(body)
}
