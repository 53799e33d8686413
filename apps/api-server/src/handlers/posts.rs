//! Post handlers.

use actix_web::{HttpResponse, web};

use gram_core::domain::Page;
use gram_shared::dto::{CreatePostRequest, InsertOneResponse};

use crate::extract::ResourceId;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, id: ResourceId) -> AppResult<HttpResponse> {
    let post = state.posts.find(id.as_str()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = state
        .posts
        .create(req.uid, req.caption, req.image_url)
        .await?;
    tracing::info!(post_id = %id, user_id = %req.uid, "Post created");

    Ok(HttpResponse::Ok().json(InsertOneResponse::from(id)))
}

/// GET /posts/users/{id}?skip=&limit=
///
/// Query values are read raw so that unparsable ones fall back to defaults
/// instead of failing the request. The first occurrence of a key wins.
pub async fn list_user_posts(
    state: web::Data<AppState>,
    id: ResourceId,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let param = |name: &str| {
        query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };
    let page = Page::from_params(param("skip"), param("limit"));

    let posts = state.posts.list_for_user(id.as_str(), page).await?;
    tracing::debug!(user_id = %id.as_str(), count = posts.len(), "Listed user posts");

    Ok(HttpResponse::Ok().json(posts))
}
