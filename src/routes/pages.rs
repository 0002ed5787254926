//! Server-rendered list pages with their XML export views.

use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::dto::customers::CustomersListRequest;
use crate::dto::employees::EmployeesListRequest;
use crate::dto::suppliers::SuppliersListRequest;
use crate::repository::DieselRepository;
use crate::routes::{error_response, redirect, render_template, run_blocking};
use crate::services::export::{XmlRecord, to_xml};
use crate::services::{
    ServiceError, ServiceResult, customers as customers_service,
    employees as employees_service, suppliers as suppliers_service,
};

/// Base context shared by the list pages: navigation marker, the submitted
/// filters and the link to the export view of the same list.
fn list_context<Q: Serialize>(req: &HttpRequest, current_page: &str, request: &Q) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("request", request);
    let export_url = match req.query_string() {
        "" => format!("/{current_page}/export"),
        query => format!("/{current_page}/export?{query}"),
    };
    context.insert("export_url", &export_url);
    context
}

fn render_list<T: Serialize, Q: Serialize>(
    tera: &Tera,
    req: &HttpRequest,
    current_page: &str,
    request: &Q,
    result: ServiceResult<Vec<T>>,
) -> HttpResponse {
    match result {
        Ok(items) => {
            let mut context = list_context(req, current_page, request);
            context.insert("items", &items);
            render_template(tera, &format!("{current_page}/index.html"), &context)
        }
        Err(err) => error_response(&format!("list {current_page}"), err),
    }
}

fn render_export<T: XmlRecord>(
    tera: &Tera,
    req: &HttpRequest,
    current_page: &str,
    result: ServiceResult<Vec<T>>,
) -> HttpResponse {
    let xml = result.and_then(|items| to_xml(current_page, &items).map_err(ServiceError::from));
    match xml {
        Ok(xml) => {
            let mut context = Context::new();
            context.insert("current_page", current_page);
            context.insert("xml", &xml);
            let back_url = match req.query_string() {
                "" => format!("/{current_page}"),
                query => format!("/{current_page}?{query}"),
            };
            context.insert("back_url", &back_url);
            render_template(tera, "export.html", &context)
        }
        Err(err) => error_response(&format!("export {current_page}"), err),
    }
}

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/customers")
}

#[get("/customers")]
pub async fn customers(
    req: HttpRequest,
    params: web::Query<CustomersListRequest>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    let query = request.clone();
    let result = run_blocking(move || customers_service::list_customers(repo.as_ref(), &query)).await;
    render_list(&tera, &req, "customers", &request, result)
}

#[get("/customers/export")]
pub async fn customers_export(
    req: HttpRequest,
    params: web::Query<CustomersListRequest>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    let result = run_blocking(move || customers_service::list_customers(repo.as_ref(), &request)).await;
    render_export(&tera, &req, "customers", result)
}

#[get("/employees")]
pub async fn employees(
    req: HttpRequest,
    params: web::Query<EmployeesListRequest>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    let query = request.clone();
    let result = run_blocking(move || employees_service::list_employees(repo.as_ref(), &query)).await;
    render_list(&tera, &req, "employees", &request, result)
}

#[get("/employees/export")]
pub async fn employees_export(
    req: HttpRequest,
    params: web::Query<EmployeesListRequest>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    let result = run_blocking(move || employees_service::list_employees(repo.as_ref(), &request)).await;
    render_export(&tera, &req, "employees", result)
}

#[get("/suppliers")]
pub async fn suppliers(
    req: HttpRequest,
    params: web::Query<SuppliersListRequest>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    let query = request.clone();
    let result = run_blocking(move || suppliers_service::list_suppliers(repo.as_ref(), &query)).await;
    render_list(&tera, &req, "suppliers", &request, result)
}

#[get("/suppliers/export")]
pub async fn suppliers_export(
    req: HttpRequest,
    params: web::Query<SuppliersListRequest>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    let result = run_blocking(move || suppliers_service::list_suppliers(repo.as_ref(), &request)).await;
    render_export(&tera, &req, "suppliers", result)
}
