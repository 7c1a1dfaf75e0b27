//! 카테고리(Category) API 통합 테스트

mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, test_app};
use serde_json::json;

/// "Еда" 퍼센트 인코딩
const EDA_ENCODED: &str = "%D0%95%D0%B4%D0%B0";

#[tokio::test]
async fn duplicate_category_name_is_conflict() {
    let app = test_app().await;

    let (status, first) = post(
        &app,
        "/api/v1/categories",
        json!({ "name": "Еда", "color": "#FF5733" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["color"], "#FF5733");
    assert_eq!(first["id"].as_str().unwrap().len(), 36);

    let (status, body) = post(
        &app,
        "/api/v1/categories",
        json!({ "name": "Еда", "color": "#000000" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already exists"));

    let (_, all) = get(&app, "/api/v1/categories").await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn color_defaults_to_black_and_is_validated() {
    let app = test_app().await;

    let (status, body) = post(&app, "/api/v1/categories", json!({ "name": "Транспорт" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["color"], "#000000");

    let (status, body) = post(
        &app,
        "/api/v1/categories",
        json!({ "name": "Здоровье", "color": "#GGGGGG" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("color"));

    let (status, _) = post(&app, "/api/v1/categories", json!({ "name": "X" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_by_name_returns_null_instead_of_404() {
    let app = test_app().await;
    post(&app, "/api/v1/categories", json!({ "name": "Еда" })).await;

    let (status, body) = get(&app, &format!("/api/v1/categories/name/{EDA_ENCODED}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Еда");

    let (status, body) = get(&app, "/api/v1/categories/name/Nothing").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn rename_onto_existing_name_is_conflict_and_leaves_record_unchanged() {
    let app = test_app().await;
    let (_, cat_a) = post(&app, "/api/v1/categories", json!({ "name": "Кино" })).await;
    let (_, cat_b) = post(&app, "/api/v1/categories", json!({ "name": "Книги" })).await;
    let uri_a = format!("/api/v1/categories/{}", cat_a["id"].as_str().unwrap());

    let (status, _) = put(&app, &uri_a, json!({ "name": cat_b["name"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, unchanged) = get(&app, &uri_a).await;
    assert_eq!(unchanged, cat_a);
}

#[tokio::test]
async fn rename_to_own_name_and_recolor_succeeds() {
    let app = test_app().await;
    let (_, cat) = post(&app, "/api/v1/categories", json!({ "name": "Спорт" })).await;
    let uri = format!("/api/v1/categories/{}", cat["id"].as_str().unwrap());

    let (status, body) = put(&app, &uri, json!({ "name": "Спорт", "color": "#33ff57" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Спорт");
    assert_eq!(body["color"], "#33ff57");

    let (status, body) = put(&app, &uri, json!({ "name": "Фитнес" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Фитнес");
    assert_eq!(body["color"], "#33ff57");
}

#[tokio::test]
async fn update_with_invalid_color_is_422() {
    let app = test_app().await;
    let (_, cat) = post(&app, "/api/v1/categories", json!({ "name": "Подарки" })).await;
    let uri = format!("/api/v1/categories/{}", cat["id"].as_str().unwrap());

    let (status, _) = put(&app, &uri, json!({ "color": "red" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_returns_prior_state_then_404() {
    let app = test_app().await;
    let (_, cat) = post(&app, "/api/v1/categories", json!({ "name": "Образование" })).await;
    let uri = format!("/api/v1/categories/{}", cat["id"].as_str().unwrap());

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, cat);

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Category not found");

    // 삭제된 이름은 다시 쓸 수 있습니다.
    let (status, _) = post(&app, "/api/v1/categories", json!({ "name": "Образование" })).await;
    assert_eq!(status, StatusCode::CREATED);
}
