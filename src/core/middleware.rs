//! 核心中间件模块

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// 响应中回传的请求 ID 头
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件
///
/// 每个请求分配一个 ID，处理器内的日志都挂在同一个 span 下；
/// 表单提交后的重定向目标会一并记录。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!(
        "request",
        id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut response = next.run(req).instrument(span.clone()).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    span.in_scope(|| match location {
        Some(location) => info!(%status, elapsed_ms, %location, "重定向"),
        None if status.is_client_error() || status.is_server_error() => {
            warn!(%status, elapsed_ms, "请求失败")
        }
        None => info!(%status, elapsed_ms, "请求完成"),
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
