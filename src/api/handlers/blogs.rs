//! Blog endpoints: CRUD with image upload, category association,
//! comment threading, search, and listings.

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use validator::Validate;

use crate::api::dto::{
    BlogFormData, BlogListDto, CategoryBlogDto, CategoryListDto, CommentAddDto, CommentListDto,
    CommentQuery, SearchQuery,
};
use crate::api::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::upload;

/// Creates blog-related routes. Paths mirror the public API surface;
/// create/update/delete require a bearer token (enforced by the
/// `AuthUser` extractor on those handlers).
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all).post(create_blog))
        .route("/GetLastFive", get(get_last_five))
        .route("/Search", get(search))
        .route("/GetAllByCategoryId/{id}", get(get_all_by_category_id))
        .route("/AddToCategory", post(add_to_category))
        .route("/RemoveFromCategory", delete(remove_from_category))
        .route("/AddComment", post(add_comment))
        .route("/{id}", get(get_by_id).put(update_blog).delete(delete_blog))
        .route("/{id}/GetCategories", get(get_categories))
        .route("/{id}/GetComments", get(get_comments))
}

/// GET /api/blogs - All blogs, newest first.
async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<BlogListDto>>> {
    let blogs = state.services.blogs.get_all_sorted_by_posted_time().await?;
    Ok(Json(blogs.into_iter().map(BlogListDto::from).collect()))
}

/// GET /api/blogs/{id}
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BlogListDto>> {
    let blog = state.services.blogs.get_blog(id).await?;
    Ok(Json(BlogListDto::from(blog)))
}

/// POST /api/blogs - Create a blog from a multipart form with an
/// optional JPEG image. The author is the authenticated caller.
async fn create_blog(
    State(state): State<AppState>,
    user: AuthUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<BlogListDto>)> {
    let form = BlogFormData::from_multipart(multipart).await?;
    let (request, image) = form.into_add_request()?;
    request.validate()?;

    let image_path = match image {
        Some(part) => Some(
            upload::save_image(
                &part.data,
                part.content_type.as_deref(),
                &state.uploads.directory,
            )
            .await?,
        ),
        None => None,
    };

    let author = state
        .services
        .app_users
        .find_by_username(&user.username)
        .await?;
    let blog = state
        .services
        .blogs
        .add_blog(
            request.title,
            request.short_description,
            request.description,
            image_path,
            author.id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(BlogListDto::from(blog))))
}

/// PUT /api/blogs/{id} - Update text fields and/or replace the image.
async fn update_blog(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Json<BlogListDto>> {
    let form = BlogFormData::from_multipart(multipart).await?;
    let (request, image) = form.into_update_request();
    request.validate()?;

    let image_path = match image {
        Some(part) => Some(
            upload::save_image(
                &part.data,
                part.content_type.as_deref(),
                &state.uploads.directory,
            )
            .await?,
        ),
        None => None,
    };

    let changes = request.into_update_blog(image_path);
    if changes.title.is_none()
        && changes.short_description.is_none()
        && changes.description.is_none()
        && changes.image_path.is_none()
    {
        return Err(AppError::BadRequest {
            message: "No fields to update".to_string(),
        });
    }

    let blog = state.services.blogs.update_blog(id, changes).await?;
    Ok(Json(BlogListDto::from(blog)))
}

/// DELETE /api/blogs/{id}
async fn delete_blog(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if state.services.blogs.remove_blog(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            entity: "blog".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}

/// POST /api/blogs/AddToCategory - Link a blog to a category.
/// Linking the same pair twice yields 409.
async fn add_to_category(
    State(state): State<AppState>,
    Json(link): Json<CategoryBlogDto>,
) -> AppResult<(StatusCode, Json<CategoryBlogDto>)> {
    state
        .services
        .blogs
        .add_to_category(link.blog_id, link.category_id)
        .await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// DELETE /api/blogs/RemoveFromCategory?blog_id=&category_id=
async fn remove_from_category(
    State(state): State<AppState>,
    Query(link): Query<CategoryBlogDto>,
) -> AppResult<StatusCode> {
    state
        .services
        .blogs
        .remove_from_category(link.blog_id, link.category_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/blogs/GetAllByCategoryId/{id}
async fn get_all_by_category_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<BlogListDto>>> {
    let blogs = state.services.blogs.get_all_by_category_id(id).await?;
    Ok(Json(blogs.into_iter().map(BlogListDto::from).collect()))
}

/// GET /api/blogs/{id}/GetCategories
async fn get_categories(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<CategoryListDto>>> {
    let categories = state.services.blogs.get_categories(id).await?;
    Ok(Json(
        categories.into_iter().map(CategoryListDto::from).collect(),
    ))
}

/// GET /api/blogs/GetLastFive
async fn get_last_five(State(state): State<AppState>) -> AppResult<Json<Vec<BlogListDto>>> {
    let blogs = state.services.blogs.get_last_five().await?;
    Ok(Json(blogs.into_iter().map(BlogListDto::from).collect()))
}

/// GET /api/blogs/{id}/GetComments?parent_comment_id=
///
/// Comments at the requested level with their full subtrees. An
/// unknown blog id yields an empty list.
async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<CommentQuery>,
) -> AppResult<Json<Vec<CommentListDto>>> {
    let threads = state
        .services
        .comments
        .get_thread(id, query.parent_comment_id)
        .await?;
    Ok(Json(threads.into_iter().map(CommentListDto::from).collect()))
}

/// GET /api/blogs/Search?s=
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<BlogListDto>>> {
    let blogs = state.services.blogs.search(&query.s).await?;
    Ok(Json(blogs.into_iter().map(BlogListDto::from).collect()))
}

/// POST /api/blogs/AddComment
async fn add_comment(
    State(state): State<AppState>,
    Json(payload): Json<CommentAddDto>,
) -> AppResult<(StatusCode, Json<CommentListDto>)> {
    payload.validate()?;
    let comment = state
        .services
        .comments
        .add_comment(payload.blog_id, payload.parent_comment_id, payload.content)
        .await?;
    Ok((StatusCode::CREATED, Json(CommentListDto::from(comment))))
}
