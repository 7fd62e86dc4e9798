//! Plant CRUD, care actions and owner-only access.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, delete, delete_auth, get, get_auth, post_auth, post_json_auth, put_json_auth,
    user_with_token,
};
use serde_json::json;
use sprout_core::roles::Role;
use sqlx::PgPool;

fn basil() -> serde_json::Value {
    json!({
        "name": "Genovese basil",
        "category": "herb",
        "watering_interval_days": 2,
        "nutrient_interval_days": 14
    })
}

/// Create a plant through the API and return its id.
async fn create_plant(app: axum::Router, token: &str, body: serde_json::Value) -> i64 {
    let response = post_json_auth(app, "/api/v1/plants", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_with_location_and_care(pool: PgPool) {
    let (user, token) = user_with_token(&pool, "gardener", Role::User).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(app, "/api/v1/plants", basil(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response.headers()[LOCATION].to_str().unwrap().to_string();
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();

    assert_eq!(location, format!("/api/v1/plants/{id}"));
    assert_eq!(json["data"]["owner_id"], user.id);
    assert_eq!(json["data"]["category"], "herb");
    // Never watered: due now.
    assert_eq!(json["data"]["care"]["watering"]["is_due"], true);
    assert_eq!(json["data"]["care"]["nutrient"]["is_due"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(app, "/api/v1/plants", basil()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_validates_intervals_and_dates(pool: PgPool) {
    let (_user, token) = user_with_token(&pool, "gardener", Role::User).await;
    let app = common::build_test_app(pool);

    let mut zero = basil();
    zero["watering_interval_days"] = json!(0);
    let response = post_json_auth(app.clone(), "/api/v1/plants", zero, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut too_long = basil();
    too_long["nutrient_interval_days"] = json!(366);
    let response = post_json_auth(app.clone(), "/api/v1/plants", too_long, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut future = basil();
    future["last_watered_at"] = json!(Utc::now() + Duration::days(1));
    let response = post_json_auth(app.clone(), "/api/v1/plants", future, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut unknown = basil();
    unknown["category"] = json!("fungus");
    let response = post_json_auth(app, "/api/v1/plants", unknown, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn care_status_follows_last_date(pool: PgPool) {
    let (_user, token) = user_with_token(&pool, "gardener", Role::User).await;
    let app = common::build_test_app(pool);

    let mut body = basil();
    body["watering_interval_days"] = json!(7);
    body["last_watered_at"] = json!(Utc::now() - Duration::days(3));
    let id = create_plant(app.clone(), &token, body).await;

    let json = body_json(get(app, &format!("/api/v1/plants/{id}")).await).await;
    assert_eq!(json["data"]["care"]["watering"]["is_due"], false);
    assert_eq!(json["data"]["care"]["nutrient"]["is_due"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn watering_resets_track_only(pool: PgPool) {
    let (_user, token) = user_with_token(&pool, "gardener", Role::User).await;
    let app = common::build_test_app(pool);
    let id = create_plant(app.clone(), &token, basil()).await;

    let response = post_auth(app, &format!("/api/v1/plants/{id}/water"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["last_watered_at"].is_string());
    assert!(json["data"]["last_fed_at"].is_null());
    assert_eq!(json["data"]["watering_interval_days"], 2);
    assert_eq!(json["data"]["care"]["watering"]["is_due"], false);
    assert_eq!(json["data"]["care"]["nutrient"]["is_due"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn feeding_resets_nutrient_track(pool: PgPool) {
    let (_user, token) = user_with_token(&pool, "gardener", Role::User).await;
    let app = common::build_test_app(pool);
    let id = create_plant(app.clone(), &token, basil()).await;

    let response = post_auth(app, &format!("/api/v1/plants/{id}/feed"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["last_fed_at"].is_string());
    assert_eq!(json["data"]["care"]["nutrient"]["is_due"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_water_and_feed_both_succeed(pool: PgPool) {
    let (_user, token) = user_with_token(&pool, "gardener", Role::User).await;
    let app = common::build_test_app(pool);
    let id = create_plant(app.clone(), &token, basil()).await;
    let water_uri = format!("/api/v1/plants/{id}/water");
    let feed_uri = format!("/api/v1/plants/{id}/feed");

    for _ in 0..50 {
        let (watered, fed) = tokio::join!(
            post_auth(app.clone(), &water_uri, &token),
            post_auth(app.clone(), &feed_uri, &token),
        );
        assert_eq!(watered.status(), StatusCode::OK);
        assert_eq!(fed.status(), StatusCode::OK);

        let json = body_json(fed).await;
        assert_eq!(json["data"]["care"]["nutrient"]["is_due"], false);
    }

    let json = body_json(get(app, &format!("/api/v1/plants/{id}")).await).await;
    assert!(json["data"]["last_watered_at"].is_string());
    assert!(json["data"]["last_fed_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn due_lists_only_callers_plants_needing_care(pool: PgPool) {
    let (_user, token) = user_with_token(&pool, "gardener", Role::User).await;
    let (_other, other_token) = user_with_token(&pool, "neighbour", Role::User).await;
    let app = common::build_test_app(pool);

    let due_id = create_plant(app.clone(), &token, basil()).await;

    let mut cared_for = basil();
    cared_for["name"] = json!("Rosemary");
    cared_for["last_watered_at"] = json!(Utc::now());
    cared_for["last_fed_at"] = json!(Utc::now());
    create_plant(app.clone(), &token, cared_for).await;

    create_plant(app.clone(), &other_token, basil()).await;

    let json = body_json(get_auth(app, "/api/v1/plants/due", &token).await).await;
    let due = json["data"].as_array().unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0]["id"], due_id);
}

// ---------------------------------------------------------------------------
// Owner-only access
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_owner_mutations_are_masked_as_404(pool: PgPool) {
    let (_owner, owner_token) = user_with_token(&pool, "gardener", Role::User).await;
    let (_other, other_token) = user_with_token(&pool, "neighbour", Role::User).await;
    let (_admin, admin_token) = user_with_token(&pool, "warden", Role::Admin).await;
    let app = common::build_test_app(pool);
    let id = create_plant(app.clone(), &owner_token, basil()).await;
    let uri = format!("/api/v1/plants/{id}");

    let response = put_json_auth(app.clone(), &uri, json!({ "name": "Mine now" }), &other_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_auth(app.clone(), &format!("{uri}/water"), &other_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Plants are owner-only; admins get no override.
    let response = delete_auth(app.clone(), &uri, &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Still there and unchanged.
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["data"]["name"], "Genovese basil");
    assert!(json["data"]["last_watered_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn owner_updates_and_deletes(pool: PgPool) {
    let (_owner, token) = user_with_token(&pool, "gardener", Role::User).await;
    let app = common::build_test_app(pool);
    let id = create_plant(app.clone(), &token, basil()).await;
    let uri = format!("/api/v1/plants/{id}");

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "watering_interval_days": 3, "notes": "South window" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["watering_interval_days"], 3);
    assert_eq!(json["data"]["name"], "Genovese basil");

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_owner(pool: PgPool) {
    let (owner, token) = user_with_token(&pool, "gardener", Role::User).await;
    let (_other, other_token) = user_with_token(&pool, "neighbour", Role::User).await;
    let app = common::build_test_app(pool);

    create_plant(app.clone(), &token, basil()).await;
    create_plant(app.clone(), &other_token, basil()).await;

    let json = body_json(get(app.clone(), "/api/v1/plants").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(get(app, &format!("/api/v1/plants?owner_id={}", owner.id)).await).await;
    let plants = json["data"].as_array().unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0]["owner_id"], owner.id);
}
