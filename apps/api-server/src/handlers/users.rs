//! Account handlers.

use actix_web::{HttpResponse, web};

use gram_shared::dto::{CreateUserRequest, InsertOneResponse};

use crate::extract::ResourceId;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users/{id}
///
/// Any path under `/users/` lands here; the last segment is the id.
pub async fn get_user(state: web::Data<AppState>, id: ResourceId) -> AppResult<HttpResponse> {
    let user = state.users.find(id.as_str()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /users
///
/// Responds with the insertion acknowledgment, not the stored record.
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .users
        .register(req.name, req.email, &req.password)
        .await?;
    tracing::info!(user_id = %id, "User created");

    Ok(HttpResponse::Ok().json(InsertOneResponse::from(id)))
}
