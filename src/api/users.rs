use crate::{database::MongoDB, services::user_service};
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

// Query failures are logged in full; the response body stays generic.
fn query_failed() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        success: false,
        error: "database query failed".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/userAllinfo",
    tag = "Users",
    responses(
        (status = 200, description = "All user records as a JSON array"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn user_all_info(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("👥 GET /userAllinfo - Listing all user records");

    match user_service::find_all(&db).await {
        Ok(users) => {
            log::info!("✅ Users retrieved: {}", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            query_failed()
        }
    }
}

#[utoipa::path(
    get,
    path = "/userNameInfo/{name}",
    tag = "Users",
    params(
        ("name" = String, Path, description = "Substring to match against the name field, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching user records as a JSON array"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn user_name_info(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    log::info!("🔍 GET /userNameInfo/{}", name);

    match user_service::find_by_name(&db, &name).await {
        Ok(users) => {
            log::info!("✅ Found {} users matching '{}'", users.len(), name);
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Failed to search users by name '{}': {}", name, e);
            query_failed()
        }
    }
}
