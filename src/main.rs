use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffhub::config::Config;
use staffhub::middleware::RequestId;
use staffhub::modules::employees::repositories::{EmployeeRepository, MySqlEmployeeRepository};
use staffhub::modules::employees::services::{build_strategy, EmployeeService};
use staffhub::modules::employees::controllers as employee_controllers;
use staffhub::modules::health::controllers as health_controllers;
use staffhub::modules::managers::controllers as manager_controllers;
use staffhub::modules::managers::repositories::{ManagerRepository, MySqlManagerRepository};
use staffhub::modules::managers::services::ManagerService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffhub=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting Staffhub record-management service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Creation strategy: {:?}", config.app.creation_mode);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config.database.create_pool().await?;

    tracing::info!(
        "Database pool initialized (max {} connections)",
        config.database.max_connections
    );

    // Wire repositories, creation strategy, and services
    let employee_repo: Arc<dyn EmployeeRepository> =
        Arc::new(MySqlEmployeeRepository::new(db_pool.clone()));
    let manager_repo: Arc<dyn ManagerRepository> =
        Arc::new(MySqlManagerRepository::new(db_pool.clone()));

    let creation = build_strategy(
        config.app.creation_mode,
        db_pool.clone(),
        employee_repo.clone(),
    );

    let employee_service = Arc::new(EmployeeService::new(
        employee_repo,
        manager_repo.clone(),
        creation,
    ));
    let manager_service = Arc::new(ManagerService::new(manager_repo));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .app_data(web::Data::new(employee_service.clone()))
            .app_data(web::Data::new(manager_service.clone()))
            .configure(health_controllers::configure)
            .service(
                web::scope("/api/v1")
                    .configure(employee_controllers::configure)
                    .configure(manager_controllers::configure),
            )
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
