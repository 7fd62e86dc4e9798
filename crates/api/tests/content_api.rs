//! Diaries, galleries and articles: owner-or-admin access with 404 masking.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{
    body_json, delete, delete_auth, get, post_json_auth, put_json_auth, user_with_token,
};
use serde_json::json;
use sprout_core::content::MAX_GALLERY_IMAGES;
use sprout_core::roles::Role;
use sprout_db::repositories::{DiaryRepo, GalleryRepo};
use sqlx::PgPool;

async fn create(app: axum::Router, uri: &str, token: &str, body: serde_json::Value) -> i64 {
    let response = post_json_auth(app, uri, body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Diaries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn diary_create_sets_location(pool: PgPool) {
    let (user, token) = user_with_token(&pool, "journal", Role::User).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/diaries",
        json!({ "title": "First frost", "content": "Covered the dahlias." }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[LOCATION].to_str().unwrap().to_string();
    let json = body_json(response).await;
    assert_eq!(location, format!("/api/v1/diaries/{}", json["data"]["id"]));
    assert_eq!(json["data"]["owner_id"], user.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_owner_diary_delete_is_404_and_row_survives(pool: PgPool) {
    let (_author, author_token) = user_with_token(&pool, "journal", Role::User).await;
    let (_other, other_token) = user_with_token(&pool, "snoop", Role::User).await;
    let app = common::build_test_app(pool.clone());

    let id = create(
        app.clone(),
        "/api/v1/diaries",
        &author_token,
        json!({ "title": "Seedlings", "content": "Tomatoes up." }),
    )
    .await;

    let response = delete_auth(app.clone(), &format!("/api/v1/diaries/{id}"), &other_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    assert!(DiaryRepo::find_by_id(&pool, id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn masked_denial_matches_missing_resource(pool: PgPool) {
    let (_author, author_token) = user_with_token(&pool, "journal", Role::User).await;
    let (_other, other_token) = user_with_token(&pool, "snoop", Role::User).await;
    let app = common::build_test_app(pool);

    let id = create(
        app.clone(),
        "/api/v1/diaries",
        &author_token,
        json!({ "title": "Seedlings", "content": "Tomatoes up." }),
    )
    .await;

    let denied = put_json_auth(
        app.clone(),
        &format!("/api/v1/diaries/{id}"),
        json!({ "title": "Hijacked" }),
        &other_token,
    )
    .await;
    let missing = put_json_auth(
        app,
        "/api/v1/diaries/999999",
        json!({ "title": "Hijacked" }),
        &other_token,
    )
    .await;

    assert_eq!(denied.status(), missing.status());
    assert_eq!(
        body_json(denied).await["code"],
        body_json(missing).await["code"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_moderates_diary(pool: PgPool) {
    let (_author, author_token) = user_with_token(&pool, "journal", Role::User).await;
    let (_admin, admin_token) = user_with_token(&pool, "warden", Role::Admin).await;
    let app = common::build_test_app(pool);

    let id = create(
        app.clone(),
        "/api/v1/diaries",
        &author_token,
        json!({ "title": "Spam", "content": "Buy seeds at ..." }),
    )
    .await;

    let response = delete_auth(app.clone(), &format!("/api/v1/diaries/{id}"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/diaries/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn diary_cannot_link_someone_elses_plant(pool: PgPool) {
    let (_author, author_token) = user_with_token(&pool, "journal", Role::User).await;
    let (_other, other_token) = user_with_token(&pool, "neighbour", Role::User).await;
    let app = common::build_test_app(pool);

    let plant_id = create(
        app.clone(),
        "/api/v1/plants",
        &other_token,
        json!({
            "name": "Fig",
            "category": "tree",
            "watering_interval_days": 5,
            "nutrient_interval_days": 30
        }),
    )
    .await;

    let response = post_json_auth(
        app,
        "/api/v1/diaries",
        json!({ "title": "My fig", "content": "Not mine.", "plant_id": plant_id }),
        &author_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn diary_validation(pool: PgPool) {
    let (_author, token) = user_with_token(&pool, "journal", Role::User).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/diaries",
        json!({ "title": "", "content": "Body" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/diaries",
        json!({ "title": "t".repeat(201), "content": "Body" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Galleries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_image_gets_generated_key(pool: PgPool) {
    let (owner, token) = user_with_token(&pool, "shutter", Role::User).await;
    let app = common::build_test_app(pool);

    let id = create(
        app.clone(),
        "/api/v1/galleries",
        &token,
        json!({ "title": "June borders" }),
    )
    .await;

    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/galleries/{id}/images"),
        json!({ "file_name": "../../etc/Lupins.JPG" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let paths = json["data"]["image_paths"].as_array().unwrap();
    assert_eq!(paths.len(), 1);
    let key = paths[0].as_str().unwrap();
    assert!(key.starts_with(&format!("galleries/{}/", owner.id)));
    assert!(key.ends_with(".jpg"));
    assert!(!key.contains(".."));

    let response = post_json_auth(
        app,
        &format!("/api/v1/galleries/{id}/images"),
        json!({ "file_name": "notes.txt" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_image_by_stranger_is_masked(pool: PgPool) {
    let (_owner, token) = user_with_token(&pool, "shutter", Role::User).await;
    let (_other, other_token) = user_with_token(&pool, "snoop", Role::User).await;
    let app = common::build_test_app(pool);

    let id = create(
        app.clone(),
        "/api/v1/galleries",
        &token,
        json!({ "title": "June borders" }),
    )
    .await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/galleries/{id}/images"),
        json!({ "file_name": "photo.png" }),
        &other_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_rejects_image_past_cap(pool: PgPool) {
    let (_owner, token) = user_with_token(&pool, "shutter", Role::User).await;
    let app = common::build_test_app(pool);

    let id = create(
        app.clone(),
        "/api/v1/galleries",
        &token,
        json!({ "title": "Every dahlia" }),
    )
    .await;
    let uri = format!("/api/v1/galleries/{id}/images");

    for n in 0..MAX_GALLERY_IMAGES {
        let response = post_json_auth(
            app.clone(),
            &uri,
            json!({ "file_name": format!("dahlia-{n}.jpg") }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = post_json_auth(app, &uri, json!({ "file_name": "one-more.jpg" }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_gallery_uploads_stop_at_cap(pool: PgPool) {
    let (_owner, token) = user_with_token(&pool, "shutter", Role::User).await;
    let app = common::build_test_app(pool.clone());

    let id = create(
        app.clone(),
        "/api/v1/galleries",
        &token,
        json!({ "title": "Seedlings" }),
    )
    .await;
    let uri = format!("/api/v1/galleries/{id}/images");

    let uploads: Vec<_> = (0..MAX_GALLERY_IMAGES + 20)
        .map(|n| {
            let (app, uri, token) = (app.clone(), uri.clone(), token.clone());
            tokio::spawn(async move {
                post_json_auth(app, &uri, json!({ "file_name": format!("{n}.png") }), &token)
                    .await
                    .status()
            })
        })
        .collect();

    let mut accepted = 0;
    for upload in uploads {
        let status = upload.await.unwrap();
        if status == StatusCode::OK {
            accepted += 1;
        } else {
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }
    assert_eq!(accepted, MAX_GALLERY_IMAGES);

    let gallery = GalleryRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(gallery.image_paths.len(), MAX_GALLERY_IMAGES);
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn article_lifecycle(pool: PgPool) {
    let (author, token) = user_with_token(&pool, "writer", Role::User).await;
    let app = common::build_test_app(pool);

    let id = create(
        app.clone(),
        "/api/v1/articles",
        &token,
        json!({ "title": "Composting 101", "content": "Greens and browns." }),
    )
    .await;
    let uri = format!("/api/v1/articles/{id}");

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "content": "Greens, browns and patience." }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Composting 101");
    assert_eq!(json["data"]["content"], "Greens, browns and patience.");

    let json = body_json(get(app.clone(), &format!("/api/v1/articles?owner_id={}", author.id)).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Anonymous callers are denied like strangers.
    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
