mod api;
mod cache;
mod config;
mod database;
mod lifecycle;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env();

    log::info!("🚀 Starting Userinfo Service...");

    // Static content is loaded once; a missing file fails startup before bind.
    let cache_data = web::Data::new(
        cache::ContentCache::populate().expect("Failed to load static content"),
    );

    lifecycle::spawn_signal_listener();

    // Initialize MongoDB connection
    let db = database::MongoDB::connect(&config)
        .await
        .expect("Failed to connect to MongoDB");
    let db_data = web::Data::new(db);

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", config.bind_address, config.bind_port);
    log::info!(
        "📚 Swagger UI available at: http://{}:{}/swagger-ui/",
        config.bind_address,
        config.bind_port
    );

    let bind = format!("{}:{}", config.bind_address, config.bind_port);

    // Start HTTP server
    HttpServer::new(move || {
        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(cache_data.clone())
            .app_data(db_data.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Static content
            .route("/", web::get().to(api::pages::index))
            .route("/hello", web::get().to(api::pages::hello))
            .route("/asciimo", web::get().to(api::pages::asciimo))
            // Userdatas queries
            .route("/userAllinfo", web::get().to(api::users::user_all_info))
            .route("/userNameInfo/{name}", web::get().to(api::users::user_name_info))
    })
    // Termination is owned by the lifecycle module, not actix-web.
    .disable_signals()
    .bind(bind)?
    .run()
    .await?;

    // Plain exit path: logged without a signal name, normal status.
    log::info!(
        "{}: server stopped",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}
