//! 应用层：路由与共享状态

pub mod home;
pub mod product;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;
use product::handler;
use product::service::{ProductService, ProductServiceImpl};

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    pub fn new(product_service: Arc<dyn ProductService>) -> Self {
        Self { product_service }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ProductServiceImpl::in_memory()))
    }
}

/// 产品路由，挂载在 `/product` 下
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/create",
            get(handler::create_product_page).post(handler::create_product_post),
        )
        .route("/list", get(handler::product_list_page))
        .route(
            "/edit",
            get(handler::edit_product_page).post(handler::edit_product_post),
        )
        .route("/delete", post(handler::delete_product))
}

/// 组装完整应用路由
pub fn create_router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/", get(home::main_page))
        .route("/health", get(home::health_check))
        .nest("/product", product_routes())
        .fallback(home::not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
