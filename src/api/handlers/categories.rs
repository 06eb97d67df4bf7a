//! Category CRUD endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::dto::{CategoryAddRequest, CategoryListDto, CategoryUpdateRequest};
use crate::api::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Creates category routes. Mutations require a bearer token.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// GET /api/categories
async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryListDto>>> {
    let categories = state.services.categories.list_categories().await?;
    Ok(Json(
        categories.into_iter().map(CategoryListDto::from).collect(),
    ))
}

/// GET /api/categories/{id}
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CategoryListDto>> {
    let category = state.services.categories.get_category(id).await?;
    Ok(Json(CategoryListDto::from(category)))
}

/// POST /api/categories
async fn create_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CategoryAddRequest>,
) -> AppResult<(StatusCode, Json<CategoryListDto>)> {
    payload.validate()?;
    let category = state.services.categories.add_category(payload.name).await?;
    Ok((StatusCode::CREATED, Json(CategoryListDto::from(category))))
}

/// PUT /api/categories/{id}
async fn update_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryUpdateRequest>,
) -> AppResult<Json<CategoryListDto>> {
    payload.validate()?;
    let changes = payload.into_update_category();
    if changes.name.is_none() {
        return Err(AppError::BadRequest {
            message: "No fields to update".to_string(),
        });
    }
    let category = state.services.categories.update_category(id, changes).await?;
    Ok(Json(CategoryListDto::from(category)))
}

/// DELETE /api/categories/{id}
async fn delete_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if state.services.categories.remove_category(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            entity: "category".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}
