use std::sync::Arc;

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::employees::models::{
    CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest,
};
use crate::modules::employees::services::employee_service::EmployeeService;

/// Query parameters for the high-paid finders
#[derive(Debug, Deserialize)]
pub struct ThresholdQuery {
    pub threshold: Decimal,
}

/// List all employees
/// GET /api/v1/employees
pub async fn get_all_employees(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let employees = service.get_all_employees().await?;
    let responses: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// Get employee by ID
/// GET /api/v1/employees/{id}
pub async fn get_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let employee = service
        .get_employee_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee not found with id: {}", id)))?;

    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

/// Create a new employee
/// POST /api/v1/employees
pub async fn create_employee(
    service: web::Data<Arc<EmployeeService>>,
    request: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let employee = service.create_employee(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(EmployeeResponse::from(employee)))
}

/// Partial update of an employee
/// PUT /api/v1/employees/{id}
pub async fn update_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateEmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let employee = service
        .update_employee(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

/// Delete an employee
/// DELETE /api/v1/employees/{id}
pub async fn delete_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": true })))
}

/// Find employees by last name (exact match)
/// GET /api/v1/employees/lastname/{last_name}
pub async fn find_by_last_name(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employees = service.find_by_last_name(&path.into_inner()).await?;
    let responses: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// Find employees by position (exact match)
/// GET /api/v1/employees/position/{position}
pub async fn find_by_position(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employees = service.find_by_position(&path.into_inner()).await?;
    let responses: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// Find the employee with a given email; misses are 404, not an empty list
/// GET /api/v1/employees/email/{email}
pub async fn find_by_email(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = service.find_by_email(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

/// Employees earning strictly above the threshold
/// GET /api/v1/employees/high-paid?threshold=50000
pub async fn find_high_paid(
    service: web::Data<Arc<EmployeeService>>,
    query: web::Query<ThresholdQuery>,
) -> Result<HttpResponse, AppError> {
    let employees = service.find_high_paid(query.threshold).await?;
    let responses: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// Full names of employees earning strictly above the threshold
/// GET /api/v1/employees/high-paid/names?threshold=50000
pub async fn find_high_paid_names(
    service: web::Data<Arc<EmployeeService>>,
    query: web::Query<ThresholdQuery>,
) -> Result<HttpResponse, AppError> {
    let names = service.find_high_paid_names(query.threshold).await?;

    Ok(HttpResponse::Ok().json(names))
}

/// The single highest-paid employee
/// GET /api/v1/employees/highest-paid
pub async fn find_highest_paid(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let employee = service.find_highest_paid().await?;

    Ok(HttpResponse::Ok().json(EmployeeResponse::from(employee)))
}

/// Employees reporting to the given manager
/// GET /api/v1/employees/under-manager/{manager_id}
pub async fn find_under_manager(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employees = service.find_by_manager(path.into_inner()).await?;
    let responses: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// Sum of all recorded salaries
/// GET /api/v1/employees/total-salary
pub async fn total_salary(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let total = service.total_salary().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "total_salary": total })))
}

/// Configure employee routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route("", web::get().to(get_all_employees))
            .route("", web::post().to(create_employee))
            .route("/high-paid", web::get().to(find_high_paid))
            .route("/high-paid/names", web::get().to(find_high_paid_names))
            .route("/highest-paid", web::get().to(find_highest_paid))
            .route("/total-salary", web::get().to(total_salary))
            .route("/lastname/{last_name}", web::get().to(find_by_last_name))
            .route("/position/{position}", web::get().to(find_by_position))
            .route("/email/{email}", web::get().to(find_by_email))
            .route(
                "/under-manager/{manager_id}",
                web::get().to(find_under_manager),
            )
            .route("/{id}", web::get().to(get_employee))
            .route("/{id}", web::put().to(update_employee))
            .route("/{id}", web::delete().to(delete_employee)),
    );
}
