use actix_web::HttpResponse;

#[tracing::instrument(name = "/health_check: Check health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
