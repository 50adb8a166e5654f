use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use eshop::core::middleware::REQUEST_ID_HEADER;
use eshop::{create_router, AppState, Product, ProductService};
use tower::ServiceExt;

fn app(state: &AppState) -> Router {
    create_router(state.clone(), Duration::from_secs(5))
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn test_homepage() {
    let app = app(&AppState::default());
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/product/list"));
}

#[tokio::test]
async fn test_create_form_then_list() {
    let state = AppState::default();
    let app = app(&state);

    let response = get(&app, "/product/create").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("name=\"productName\""));

    let response = post_form(
        &app,
        "/product/create",
        "productName=Sampo+Cap+Bambang&productQuantity=100",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "list");

    let products = state.product_service.find_all();
    assert_eq!(products.len(), 1);
    assert!(products[0].id.as_deref().is_some_and(|id| !id.is_empty()));

    let html = body_text(get(&app, "/product/list").await).await;
    assert!(html.contains("<td>Sampo Cap Bambang</td>"));
    assert!(html.contains("<td>100</td>"));
}

#[tokio::test]
async fn test_create_invalid_form_redisplays() {
    let state = AppState::default();
    let app = app(&state);

    let response = post_form(&app, "/product/create", "productName=+&productQuantity=0").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Name cannot be blank"));
    assert!(html.contains("Quantity must be at least 1"));

    let response = post_form(&app, "/product/create", "productName=Sabun&productQuantity=").await;
    assert!(body_text(response).await.contains("Quantity cannot be null"));

    assert!(state.product_service.find_all().is_empty());
}

#[tokio::test]
async fn test_create_non_numeric_quantity_redisplays_form() {
    let state = AppState::default();
    let app = app(&state);
    let response = post_form(&app, "/product/create", "productName=Sabun&productQuantity=abc").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Create New Product"));
    assert!(html.contains("Quantity must be a number"));
    assert!(html.contains(r#"value="Sabun""#));
    assert!(html.contains(r#"value="abc""#));
    assert!(state.product_service.find_all().is_empty());
}

#[tokio::test]
async fn test_edit_non_numeric_quantity_redisplays_form() {
    let state = AppState::default();
    state
        .product_service
        .create(Product::new("Original Name", 100).with_id("test-id"))
        .unwrap();
    let app = app(&state);

    let response = post_form(
        &app,
        "/product/edit",
        "productId=test-id&productName=Renamed&productQuantity=99999999999",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Edit Product"));
    assert!(html.contains("Quantity must be a number"));
    assert_eq!(
        state.product_service.find_by_id(Some("test-id")),
        Some(Product::new("Original Name", 100).with_id("test-id"))
    );
}

#[tokio::test]
async fn test_create_without_form_content_type_is_bad_request() {
    let app = app(&AppState::default());
    let response = app
        .clone()
        .oneshot(
            Request::post("/product/create")
                .body(Body::from("productName=Sabun"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_flow() {
    let state = AppState::default();
    state
        .product_service
        .create(Product::new("Original Name", 100).with_id("test-id"))
        .unwrap();
    let app = app(&state);

    let html = body_text(get(&app, "/product/edit?id=test-id").await).await;
    assert!(html.contains("value=\"Original Name\""));
    assert!(html.contains("value=\"test-id\""));

    let response = post_form(
        &app,
        "/product/edit",
        "productId=test-id&productName=Updated+Name&productQuantity=200",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "list");
    assert_eq!(
        state.product_service.find_by_id(Some("test-id")),
        Some(Product::new("Updated Name", 200).with_id("test-id"))
    );
}

#[tokio::test]
async fn test_edit_missing_product_redirects_to_list() {
    let app = app(&AppState::default());

    let response = get(&app, "/product/edit?id=missing").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/product/list");

    let response = get(&app, "/product/edit").await;
    assert_eq!(location(&response), "/product/list");
}

#[tokio::test]
async fn test_delete_flow() {
    let state = AppState::default();
    state
        .product_service
        .create(Product::new("Product 1", 100).with_id("id-1"))
        .unwrap();
    state
        .product_service
        .create(Product::new("Product 2", 200).with_id("id-2"))
        .unwrap();
    let app = app(&state);

    let response = post_form(&app, "/product/delete", "id=id-1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/product/list");

    let remaining: Vec<_> = state
        .product_service
        .find_all()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(remaining, vec![Some("id-2".to_string())]);

    let response = post_form(&app, "/product/delete", "id=unknown").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(state.product_service.find_all().len(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let state = AppState::default();
    state
        .product_service
        .create(Product::new("Sabun", 1))
        .unwrap();
    let app = app(&state);

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["products"], 1);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app(&AppState::default());
    let response = get(&app, "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = app(&AppState::default());

    let first = get(&app, "/product/list").await;
    let second = post_form(&app, "/product/delete", "id=unknown").await;

    let first_id = first.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
    let second_id = second.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&first_id).is_ok());
    assert_ne!(first_id, second_id);
}
