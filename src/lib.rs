//! # eshop
//!
//! 产品目录的增删改查 Web 应用：
//! - `app`：产品模型、内存仓库、业务服务、处理器与页面
//! - `core`：错误类型、视图响应、中间件
//! - `infrastructure`：配置加载与日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::product::model::{Product, ProductForm};
pub use app::product::repository::{InMemoryProductRepository, ProductRepository};
pub use app::product::service::{ProductService, ProductServiceImpl};
pub use app::{create_router, AppState};
pub use crate::core::error::{CoreError, ServiceError};
