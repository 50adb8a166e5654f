//! 产品仓库
//!
//! 内存存储，按插入顺序保存，查找/更新/删除均为线性扫描。

use super::model::Product;
use uuid::Uuid;

/// 产品仓库 trait
pub trait ProductRepository: Send + 'static {
    /// 保存产品；id 缺失或为空时生成新的 UUID
    fn create(&mut self, product: Product) -> Product;

    /// 按插入顺序遍历当前所有产品
    fn find_all(&self) -> Box<dyn Iterator<Item = &Product> + '_>;

    fn find_by_id(&self, id: Option<&str>) -> Option<Product>;

    /// 整体替换第一个 id 匹配的记录，未匹配时不做修改
    fn update(&mut self, product: Product) -> Option<Product>;

    /// 删除第一个 id 匹配的记录
    fn delete(&mut self, id: Option<&str>);
}

/// 基于 `Vec` 的内存仓库
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn create(&mut self, mut product: Product) -> Product {
        if product.id.as_deref().map_or(true, str::is_empty) {
            product.id = Some(Uuid::new_v4().to_string());
        }
        self.products.push(product.clone());
        product
    }

    fn find_all(&self) -> Box<dyn Iterator<Item = &Product> + '_> {
        Box::new(self.products.iter())
    }

    fn find_by_id(&self, id: Option<&str>) -> Option<Product> {
        self.products.iter().find(|p| p.has_id(id)).cloned()
    }

    fn update(&mut self, product: Product) -> Option<Product> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.has_id(product.id.as_deref()))?;
        *slot = product.clone();
        Some(product)
    }

    fn delete(&mut self, id: Option<&str>) {
        if let Some(index) = self.products.iter().position(|p| p.has_id(id)) {
            self.products.remove(index);
        }
    }
}
