//! HTTP handlers and route configuration.

mod posts;
mod users;

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// Read routes match by path prefix; the identifier is whatever follows the
/// last `/`, so `/users/` reaches `get_user` with an empty id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(web::resource("/users").route(web::post().to(users::create_user)))
        .service(web::resource("/users/{tail:.*}").route(web::get().to(users::get_user)))
        .service(web::resource("/posts").route(web::post().to(posts::create_post)))
        // Must precede `/posts/{tail}`. Only reads are served here; any other
        // method is reported as not found.
        .service(
            web::resource("/posts/users/{tail:.*}")
                .route(web::get().to(posts::list_user_posts))
                .default_service(web::route().to(not_found)),
        )
        .service(web::resource("/posts/{tail:.*}").route(web::get().to(posts::get_post)))
        .default_service(web::route().to(not_found));
}

/// Bodies are decoded regardless of the declared content type.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Not found".to_string()))
}
