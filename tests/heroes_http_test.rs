//! HTTP surface tests for the heroes router.
//!
//! Requests are driven through the router with `tower::ServiceExt::oneshot`
//! against an in-memory SQLite database and an in-process cache.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::Fixture;
use tour_of_heroes::adapters::http::{HeroesHttpConfig, HeroesHttpServer};
use tour_of_heroes::{Hero, HeroRepository, StateStore};

fn router(fixture: &Fixture) -> Router {
    HeroesHttpServer::new(fixture.service(), HeroesHttpConfig::default()).build_router()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_list_heroes_reads_through_cache() {
    let fixture = Fixture::new().await;
    fixture.repo.create(&Hero::new(1, "Narco")).await.unwrap();
    let app = router(&fixture);

    let response = app.clone().oneshot(empty_request("GET", "/heroes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([{"id": 1, "name": "Narco"}]));

    // The cached list wins over the newer database state
    fixture.repo.create(&Hero::new(2, "Bombasto")).await.unwrap();
    let response = app.oneshot(empty_request("GET", "/heroes")).await.unwrap();
    assert_eq!(body_json(response).await, json!([{"id": 1, "name": "Narco"}]));
}

#[tokio::test]
async fn test_get_hero() {
    let fixture = Fixture::new().await;
    fixture.repo.create(&Hero::new(12, "Narco")).await.unwrap();
    let app = router(&fixture);

    let response = app.clone().oneshot(empty_request("GET", "/heroes/12")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 12, "name": "Narco"}));

    let response = app.oneshot(empty_request("GET", "/heroes/13")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_put_hero() {
    let fixture = Fixture::new().await;
    fixture.repo.create(&Hero::new(3, "Magma")).await.unwrap();
    let app = router(&fixture);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/heroes/3", json!({"id": 3, "name": "Magneta"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(fixture.repo.get(3).await.unwrap().unwrap().name, "Magneta");

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/heroes/3", json!({"id": 4, "name": "Tornado"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(fixture.repo.get(3).await.unwrap().unwrap().name, "Magneta");

    let response = app
        .oneshot(json_request("PUT", "/heroes/9", json!({"id": 9, "name": "Ghost"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_hero_returns_location() {
    let fixture = Fixture::new().await;
    let app = router(&fixture);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/heroes", json!({"id": 15, "name": "Magneta"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/heroes/15");
    assert_eq!(body_json(response).await, json!({"id": 15, "name": "Magneta"}));

    let response = app.clone().oneshot(empty_request("GET", "/heroes/15")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request("POST", "/heroes", json!({"id": 15, "name": "Copycat"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_post_hero_with_zero_id_gets_assigned_id() {
    let fixture = Fixture::new().await;
    let app = router(&fixture);

    let response = app
        .oneshot(json_request("POST", "/heroes", json!({"id": 0, "name": "Tornado"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/heroes/1");
    assert_eq!(body_json(response).await, json!({"id": 1, "name": "Tornado"}));
}

#[tokio::test]
async fn test_post_hero_refreshes_cached_list() {
    let fixture = Fixture::new().await;
    fixture.repo.create(&Hero::new(1, "Narco")).await.unwrap();
    let app = router(&fixture);

    app.clone().oneshot(empty_request("GET", "/heroes")).await.unwrap();
    app.clone()
        .oneshot(json_request("POST", "/heroes", json!({"id": 2, "name": "Bombasto"})))
        .await
        .unwrap();

    let response = app.oneshot(empty_request("GET", "/heroes")).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!([{"id": 1, "name": "Narco"}, {"id": 2, "name": "Bombasto"}])
    );
}

#[tokio::test]
async fn test_malformed_hero_body_is_bad_request() {
    let fixture = Fixture::new().await;
    fixture.repo.create(&Hero::new(3, "Magma")).await.unwrap();
    let app = router(&fixture);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/heroes", json!({"id": 4})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/heroes/3", json!({"id": "three", "name": "Magma"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/heroes")
                .body(Body::from(r#"{"id": 5, "name": "Tornado"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(fixture.repo.get(4).await.unwrap().is_none());
    assert!(fixture.repo.get(5).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_hero() {
    let fixture = Fixture::new().await;
    fixture.repo.create(&Hero::new(7, "Dynama")).await.unwrap();
    let app = router(&fixture);

    let response = app.clone().oneshot(empty_request("DELETE", "/heroes/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(empty_request("GET", "/heroes/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", "/heroes/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(fixture.cache.get("heroes").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_villain_passes_hero_name() {
    let fixture = Fixture::new().await;
    let app = router(&fixture);

    let response = app
        .oneshot(empty_request("GET", "/heroes/villain/Batman"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"name": "Joker", "id": 1}));

    let requested = fixture.villains.requested.lock().unwrap().clone();
    assert_eq!(requested, vec!["Batman".to_string()]);
}

#[tokio::test]
async fn test_health_check() {
    let fixture = Fixture::new().await;
    let response = router(&fixture)
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"OK");
}
