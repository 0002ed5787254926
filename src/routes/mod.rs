//! HTTP handlers: the JSON list API and the server-rendered list pages.

use actix_web::{HttpResponse, http::header, web};
use tera::{Context, Tera};

use crate::services::{ServiceError, ServiceResult};

pub mod api;
pub mod pages;

/// Registers every route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api::customers_list)
            .service(api::employees_list)
            .service(api::suppliers_list),
    )
    .service(pages::index)
    .service(pages::customers)
    .service(pages::customers_export)
    .service(pages::employees)
    .service(pages::employees_export)
    .service(pages::suppliers)
    .service(pages::suppliers_export);
}

/// Runs a blocking service call on the actix blocking pool.
pub async fn run_blocking<T, F>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.map_err(|_| ServiceError::Cancelled)?
}

/// Logs `err` and maps it to a bare status code.
pub fn error_response(action: &str, err: ServiceError) -> HttpResponse {
    log::error!("Failed to {action}: {err}");
    match err {
        ServiceError::Cancelled => HttpResponse::ServiceUnavailable().finish(),
        _ => HttpResponse::InternalServerError().finish(),
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
