//! Handlers for `/galleries`, including attaching images.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use sprout_core::content::{validate_description, validate_title, MAX_GALLERY_IMAGES};
use sprout_core::error::CoreError;
use sprout_core::types::DbId;
use sprout_core::uploads::gallery_image_key;
use sprout_db::models::gallery::{AddGalleryImage, CreateGallery, Gallery, UpdateGallery};
use sprout_db::repositories::GalleryRepo;
use sprout_db::store::EntityStore;

use crate::actions::{self, OWNER_OR_ADMIN};
use crate::error::{AppError, AppResult};
use crate::handlers::created;
use crate::middleware::auth::{AuthUser, CurrentActor};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/galleries?owner_id=&limit=&offset=
pub async fn list_galleries(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Gallery>>>> {
    let galleries =
        GalleryRepo::list(&state.pool, params.owner_id, params.limit, params.offset).await?;
    Ok(Json(DataResponse::ok(galleries)))
}

/// POST /api/v1/galleries
pub async fn create_gallery(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateGallery>,
) -> AppResult<Response> {
    validate_title(&input.title)?;
    if let Some(ref description) = input.description {
        validate_description(description)?;
    }

    let gallery = state
        .store::<GalleryRepo>()
        .create(auth.user_id, &input)
        .await?;

    tracing::info!(user_id = auth.user_id, gallery_id = gallery.id, "Gallery created");
    Ok(created("galleries", gallery.id, gallery))
}

/// GET /api/v1/galleries/{id}
pub async fn get_gallery(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Gallery>>> {
    let gallery = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Gallery", id))?;
    Ok(Json(DataResponse::ok(gallery)))
}

/// PUT /api/v1/galleries/{id}
pub async fn update_gallery(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGallery>,
) -> AppResult<Json<DataResponse<Gallery>>> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }
    if let Some(ref description) = input.description {
        validate_description(description)?;
    }

    let gallery = actions::update(
        &state.store::<GalleryRepo>(),
        actor.as_ref(),
        id,
        &input,
        OWNER_OR_ADMIN,
    )
    .await?;

    tracing::info!(user_id = ?actor.0.map(|a| a.id), gallery_id = id, "Gallery updated");
    Ok(Json(DataResponse::ok(gallery)))
}

/// DELETE /api/v1/galleries/{id}
pub async fn delete_gallery(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    actions::delete(&state.store::<GalleryRepo>(), actor.as_ref(), id, OWNER_OR_ADMIN).await?;
    tracing::info!(user_id = ?actor.0.map(|a| a.id), gallery_id = id, "Gallery deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/galleries/{id}/images
///
/// Record an uploaded image. The stored key is generated under the
/// gallery owner's prefix; the client file name only contributes its
/// extension. A full gallery rejects the image with 400.
pub async fn add_image(
    State(state): State<AppState>,
    actor: CurrentActor,
    Path(id): Path<DbId>,
    Json(input): Json<AddGalleryImage>,
) -> AppResult<Json<DataResponse<Gallery>>> {
    let gallery = actions::authorize(
        &state.store::<GalleryRepo>(),
        actor.as_ref(),
        id,
        OWNER_OR_ADMIN,
    )
    .await?;

    let key = gallery_image_key(gallery.owner_id, &input.file_name)?;
    let Some(gallery) =
        GalleryRepo::append_image(&state.pool, id, &key, MAX_GALLERY_IMAGES as i32).await?
    else {
        // Either full, or deleted since it was authorized.
        if GalleryRepo::find_by_id(&state.pool, id).await?.is_none() {
            return Err(AppError::not_found("Gallery", id));
        }
        return Err(AppError::Core(CoreError::Validation(format!(
            "A gallery may hold at most {MAX_GALLERY_IMAGES} images"
        ))));
    };

    tracing::info!(
        user_id = ?actor.0.map(|a| a.id),
        gallery_id = id,
        image_key = %key,
        "Gallery image added"
    );
    Ok(Json(DataResponse::ok(gallery)))
}
