//! Handlers for `/articles`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use sprout_core::content::{validate_body, validate_title};
use sprout_core::types::DbId;
use sprout_db::models::article::{Article, CreateArticle, UpdateArticle};
use sprout_db::repositories::ArticleRepo;
use sprout_db::store::EntityStore;

use crate::actions::{self, OWNER_OR_ADMIN};
use crate::error::{AppError, AppResult};
use crate::handlers::created;
use crate::middleware::auth::{AuthUser, CurrentActor};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/articles?owner_id=&limit=&offset=
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Article>>>> {
    let articles =
        ArticleRepo::list(&state.pool, params.owner_id, params.limit, params.offset).await?;
    Ok(Json(DataResponse::ok(articles)))
}

/// POST /api/v1/articles
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateArticle>,
) -> AppResult<Response> {
    validate_title(&input.title)?;
    validate_body(&input.content)?;

    let article = state
        .store::<ArticleRepo>()
        .create(auth.user_id, &input)
        .await?;

    tracing::info!(user_id = auth.user_id, article_id = article.id, "Article published");
    Ok(created("articles", article.id, article))
}

/// GET /api/v1/articles/{id}
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Article>>> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Article", id))?;
    Ok(Json(DataResponse::ok(article)))
}

/// PUT /api/v1/articles/{id}
pub async fn update_article(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<Json<DataResponse<Article>>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref content) = input.content {
        validate_body(content)?;
    }

    let article = actions::update(
        &state.store::<ArticleRepo>(),
        actor.as_ref(),
        id,
        &input,
        OWNER_OR_ADMIN,
    )
    .await?;

    tracing::info!(user_id = ?actor.0.map(|a| a.id), article_id = id, "Article updated");
    Ok(Json(DataResponse::ok(article)))
}

/// DELETE /api/v1/articles/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    actions::delete(&state.store::<ArticleRepo>(), actor.as_ref(), id, OWNER_OR_ADMIN).await?;
    tracing::info!(user_id = ?actor.0.map(|a| a.id), article_id = id, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}
