use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::employees::models::EmployeeResponse;
use crate::modules::employees::services::employee_service::EmployeeService;
use crate::modules::managers::models::{
    CreateManagerRequest, ManagerResponse, UpdateManagerRequest,
};
use crate::modules::managers::services::manager_service::ManagerService;

/// Create a new manager
/// POST /api/v1/managers
pub async fn create_manager(
    service: web::Data<Arc<ManagerService>>,
    request: web::Json<CreateManagerRequest>,
) -> Result<HttpResponse, AppError> {
    let manager = service.create_manager(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(ManagerResponse::from(manager)))
}

/// Get manager by ID
/// GET /api/v1/managers/{id}
pub async fn get_manager(
    service: web::Data<Arc<ManagerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let manager = service
        .get_manager_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Manager not found with id: {}", id)))?;

    Ok(HttpResponse::Ok().json(ManagerResponse::from(manager)))
}

/// Partial update of a manager
/// PUT /api/v1/managers/{id}
pub async fn update_manager(
    service: web::Data<Arc<ManagerService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateManagerRequest>,
) -> Result<HttpResponse, AppError> {
    let manager = service
        .update_manager(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ManagerResponse::from(manager)))
}

/// Delete a manager along with its employees
/// DELETE /api/v1/managers/{id}
pub async fn delete_manager(
    service: web::Data<Arc<ManagerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employees_removed = service.delete_manager(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "deleted": true,
        "employees_removed": employees_removed,
    })))
}

/// List all managers
/// GET /api/v1/managers
pub async fn get_all_managers(
    service: web::Data<Arc<ManagerService>>,
) -> Result<HttpResponse, AppError> {
    let managers = service.get_all_managers().await?;
    let responses: Vec<ManagerResponse> = managers.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// Employees owned by a manager, as a derived query view
/// GET /api/v1/managers/{id}/employees
pub async fn get_manager_employees(
    employees: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let list = employees.find_by_manager(path.into_inner()).await?;
    let responses: Vec<EmployeeResponse> = list.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// Configure manager routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/managers")
            .route("", web::post().to(create_manager))
            .route("", web::get().to(get_all_managers))
            .route("/{id}", web::get().to(get_manager))
            .route("/{id}", web::put().to(update_manager))
            .route("/{id}", web::delete().to(delete_manager))
            .route("/{id}/employees", web::get().to(get_manager_employees)),
    );
}
