//! 产品业务服务

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::model::Product;
use super::repository::{InMemoryProductRepository, ProductRepository};
use crate::core::error::ServiceError;

pub const NAME_EMPTY_MESSAGE: &str = "Product name cannot be empty";
pub const QUANTITY_NEGATIVE_MESSAGE: &str = "Product quantity cannot be negative";

/// 产品服务 trait，与传输层无关
pub trait ProductService: Send + Sync + 'static {
    fn create(&self, product: Product) -> Result<Product, ServiceError>;
    fn find_all(&self) -> Vec<Product>;
    fn find_by_id(&self, id: Option<&str>) -> Option<Product>;
    fn update(&self, product: Product) -> Result<Option<Product>, ServiceError>;
    fn delete(&self, id: Option<&str>);
}

/// 默认产品服务实现
///
/// 仓库由互斥锁保护，每个操作在持锁期间完成整个仓库调用。
pub struct ProductServiceImpl<R = InMemoryProductRepository> {
    repository: Arc<Mutex<R>>,
}

impl<R> Clone for ProductServiceImpl<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl ProductServiceImpl {
    pub fn in_memory() -> Self {
        Self::new(InMemoryProductRepository::new())
    }
}

impl<R: ProductRepository> ProductServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }

    // 仓库操作不会留下不一致的状态，锁中毒时直接取回
    fn repository(&self) -> MutexGuard<'_, R> {
        self.repository
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// 名称先于数量校验，遇到第一个错误即返回
fn validate_product(product: &Product) -> Result<(), ServiceError> {
    if product
        .name
        .as_deref()
        .map_or(true, |name| name.trim().is_empty())
    {
        return Err(ServiceError::Validation(NAME_EMPTY_MESSAGE.to_string()));
    }
    if product.quantity < 0 {
        return Err(ServiceError::Validation(
            QUANTITY_NEGATIVE_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

impl<R: ProductRepository> ProductService for ProductServiceImpl<R> {
    fn create(&self, product: Product) -> Result<Product, ServiceError> {
        if let Err(err) = validate_product(&product) {
            warn!("创建产品校验失败: {}", err);
            return Err(err);
        }
        let created = self.repository().create(product);
        info!("✅ 产品已创建: id={:?}, name={:?}", created.id, created.name);
        Ok(created)
    }

    fn find_all(&self) -> Vec<Product> {
        let products: Vec<Product> = self.repository().find_all().cloned().collect();
        debug!("获取到 {} 个产品", products.len());
        products
    }

    fn find_by_id(&self, id: Option<&str>) -> Option<Product> {
        let product = self.repository().find_by_id(id);
        debug!("查询产品 {:?}: {}", id, if product.is_some() { "命中" } else { "不存在" });
        product
    }

    fn update(&self, product: Product) -> Result<Option<Product>, ServiceError> {
        if let Err(err) = validate_product(&product) {
            warn!("更新产品校验失败: {}", err);
            return Err(err);
        }
        let id = product.id.clone();
        let updated = self.repository().update(product);
        match &updated {
            Some(_) => info!("✅ 产品已更新: id={:?}", id),
            None => info!("更新的产品不存在: id={:?}", id),
        }
        Ok(updated)
    }

    fn delete(&self, id: Option<&str>) {
        self.repository().delete(id);
        info!("删除产品: id={:?}", id);
    }
}
