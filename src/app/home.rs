//! 首页与健康检查

use axum::{extract::State, response::Json};

use super::AppState;
use crate::core::error::CoreError;
use crate::core::response::{Page, View};

pub async fn main_page() -> View {
    View::Render(Page::Homepage)
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "products": state.product_service.find_all().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 未匹配路由
pub async fn not_found() -> CoreError {
    CoreError::NotFound("页面不存在".to_string())
}
