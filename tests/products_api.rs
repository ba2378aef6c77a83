//! Router tests for the product endpoints

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use rest_api::api::{create_router_with_state, AppState};
use rest_api::domain::product::{Product, ProductId};
use rest_api::domain::storage::Storage;
use rest_api::domain::DomainError;
use rest_api::infrastructure::services::ProductService;
use rest_api::infrastructure::user::{Argon2Hasher, InMemoryUserRepository, UserService};
use serde_json::{json, Value};

use common::{app, call, json_body, send};

fn lamp() -> Value {
    json!({"name": "Lamp", "price": 25.5, "quantity": 4, "image": "lamp.jpg"})
}

async fn create(app: &axum::Router, body: Value) -> Value {
    let (status, body) = send(app, "POST", "/product", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["newProduct"].clone()
}

#[tokio::test]
async fn test_list_empty_then_one() {
    let app = app();

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No Products found"}));

    let product = create(&app, lamp()).await;

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["allProducts"][0], product);
}

#[tokio::test]
async fn test_create_and_get() {
    let app = app();
    let product = create(&app, lamp()).await;
    assert_eq!(product["name"], "Lamp");
    assert_eq!(product["price"], 25.5);
    assert_eq!(product["quantity"], 4);

    let id = product["id"].as_str().unwrap();
    let (status, body) = send(&app, "GET", &format!("/product/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"], product);
}

#[tokio::test]
async fn test_create_zero_price_and_quantity_are_missing() {
    let (status, body) = send(
        &app(),
        "POST",
        "/product",
        Some(json!({"name": "Ghost", "price": 0, "quantity": 0, "image": "ghost.png"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Please provide all the required parameters.."}));
}

#[tokio::test]
async fn test_create_keeps_integer_numbers() {
    let request = Request::builder()
        .method("POST")
        .uri("/product")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"Lamp","price":25.5,"quantity":4,"image":"lamp.jpg"}"#))
        .unwrap();
    let response = call(&app(), request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#""price":25.5"#));
    assert!(text.contains(r#""quantity":4,"#) || text.contains(r#""quantity":4}"#));
}

#[tokio::test]
async fn test_empty_json_body_reads_as_empty_object() {
    let app = app();
    let product = create(&app, lamp()).await;
    let uri = format!("/product/{}", product["id"].as_str().unwrap());

    let request = Request::builder()
        .method("PUT")
        .uri(&uri)
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let response = call(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["updatedProduct"], product);

    let request = Request::builder()
        .method("POST")
        .uri("/product")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let response = call(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "Please provide all the required parameters.."}));
}

#[tokio::test]
async fn test_update_to_zero_quantity() {
    let app = app();
    let product = create(&app, lamp()).await;
    let uri = format!("/product/{}", product["id"].as_str().unwrap());

    let (status, body) = send(&app, "PUT", &uri, Some(json!({"quantity": 0}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedProduct"]["quantity"], 0);
}

#[tokio::test]
async fn test_create_validation_messages() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/product",
        Some(json!({"name": "Lamp", "price": 1, "quantity": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Please provide all the required parameters.."}));

    let (status, body) = send(
        &app,
        "POST",
        "/product",
        Some(json!({"name": "Lamp", "price": "free", "quantity": 1, "image": "lamp.jpg"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Price and quantity must be valid numbers.."}));
}

#[tokio::test]
async fn test_form_encoded_create_fails_numeric_check() {
    let request = Request::builder()
        .method("POST")
        .uri("/product")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=Lamp&price=25&quantity=4&image=lamp.jpg"))
        .unwrap();
    let response = call(&app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "Price and quantity must be valid numbers.."}));
}

#[tokio::test]
async fn test_create_without_content_type_reports_missing_fields() {
    let request = Request::builder()
        .method("POST")
        .uri("/product")
        .body(Body::from("name=Lamp"))
        .unwrap();
    let response = call(&app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "Please provide all the required parameters.."}));
}

#[tokio::test]
async fn test_update_merges_fields() {
    let app = app();
    let product = create(&app, lamp()).await;
    let id = product["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/product/{id}"),
        Some(json!({"id": "other", "quantity": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedProduct"]["id"], id);
    assert_eq!(body["updatedProduct"]["quantity"], 10);
    assert_eq!(body["updatedProduct"]["name"], "Lamp");
    assert_eq!(body["updatedProduct"]["price"], 25.5);
}

#[tokio::test]
async fn test_update_errors() {
    let app = app();
    let product = create(&app, lamp()).await;
    let id = product["id"].as_str().unwrap();

    let (status, body) = send(&app, "PUT", "/product/missing", Some(json!({"quantity": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product does not exist.."}));

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/product/{id}"),
        Some(json!({"price": "cheap"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Price and quantity must be valid numbers.."}));
}

#[tokio::test]
async fn test_get_unknown_product() {
    let (status, body) = send(&app(), "GET", "/product/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product does not exist"}));
}

#[tokio::test]
async fn test_delete_product_twice() {
    let app = app();
    let product = create(&app, lamp()).await;
    let id = product["id"].as_str().unwrap().to_string();
    let uri = format!("/product/{id}");

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"msg": "Product deleted.."}));

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": format!("No Product with ID {id}")}));
    }

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[derive(Debug)]
struct BrokenStorage;

#[async_trait]
impl Storage<Product> for BrokenStorage {
    async fn get(&self, _key: &ProductId) -> Result<Option<Product>, DomainError> {
        Err(DomainError::storage("Failed to acquire read lock"))
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Err(DomainError::storage("Failed to acquire read lock"))
    }

    async fn create(&self, _entity: Product) -> Result<Product, DomainError> {
        Err(DomainError::storage("Failed to acquire write lock"))
    }

    async fn update(&self, _entity: Product) -> Result<Product, DomainError> {
        Err(DomainError::storage("Failed to acquire write lock"))
    }

    async fn delete(&self, _key: &ProductId) -> Result<bool, DomainError> {
        Err(DomainError::storage("Failed to acquire write lock"))
    }
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let users = UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(Argon2Hasher::new()),
    );
    let products = ProductService::new(Arc::new(BrokenStorage));
    let app = create_router_with_state(AppState::new(Arc::new(users), Arc::new(products)));

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to acquire read lock"}));

    let (status, body) = send(&app, "POST", "/product", Some(lamp())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to acquire write lock"}));
}
