use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userinfo Service API",
        version = "1.0.0",
        description = "Minimal demonstration web server: cached static pages plus read-only queries against the userdatas collection."
    ),
    paths(
        crate::api::users::user_all_info,
        crate::api::users::user_name_info,
    ),
    components(
        schemas(
            crate::api::users::ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "Read-only queries against the userdatas collection.")
    )
)]
pub struct ApiDoc;
