use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::customers::CustomersListRequest;
use crate::dto::employees::EmployeesListRequest;
use crate::dto::suppliers::SuppliersListRequest;
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::{
    customers as customers_service, employees as employees_service,
    suppliers as suppliers_service,
};

#[get("/customers/list")]
pub async fn customers_list(
    params: web::Query<CustomersListRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    match run_blocking(move || customers_service::list_customers(repo.as_ref(), &request)).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response("list customers", err),
    }
}

#[get("/employees/list")]
pub async fn employees_list(
    params: web::Query<EmployeesListRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    match run_blocking(move || employees_service::list_employees(repo.as_ref(), &request)).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response("list employees", err),
    }
}

#[get("/suppliers/list")]
pub async fn suppliers_list(
    params: web::Query<SuppliersListRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = params.into_inner();
    let repo = repo.into_inner();
    match run_blocking(move || suppliers_service::list_suppliers(repo.as_ref(), &request)).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response("list suppliers", err),
    }
}
