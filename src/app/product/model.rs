//! 产品数据模型

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// 产品记录
///
/// `id` 为空时由仓库在创建时生成；`name` 允许缺失，由服务层校验。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: Option<String>,
    pub quantity: i32,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            quantity,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// 仅当两边都有 id 且完全相等时匹配，缺失的 id 永不匹配
    pub(crate) fn has_id(&self, id: Option<&str>) -> bool {
        matches!((self.id.as_deref(), id), (Some(own), Some(wanted)) if own == wanted)
    }
}

/// 表单提交的产品数据（表现层校验）
///
/// 数量按原始字符串绑定，无法解析时作为字段错误返回，而不是拒绝整个请求。
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub product_id: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub product_name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_quantity"))]
    pub product_quantity: String,
}

impl ProductForm {
    /// 表单校验失败时的错误消息，按字段名排序
    pub fn errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
                fields.sort_by(|a, b| a.0.cmp(&b.0));
                fields
                    .into_iter()
                    .flat_map(|(_, errors)| {
                        errors.iter().map(|error| {
                            error
                                .message
                                .as_ref()
                                .map(|msg| msg.to_string())
                                .unwrap_or_else(|| "Validation error".to_string())
                        })
                    })
                    .collect()
            }
        }
    }

    pub fn quantity(&self) -> Option<i32> {
        self.product_quantity.trim().parse().ok()
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone().unwrap_or_default(),
            product_quantity: product.quantity.to_string(),
        }
    }
}

impl From<ProductForm> for Product {
    fn from(form: ProductForm) -> Self {
        let quantity = form.quantity().unwrap_or_default();
        Self {
            id: form.product_id,
            name: Some(form.product_name),
            quantity,
        }
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("not_blank", "Name cannot be blank"));
    }
    Ok(())
}

fn validate_quantity(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(field_error("required", "Quantity cannot be null"));
    }
    match value.parse::<i32>() {
        Err(_) => Err(field_error("type_mismatch", "Quantity must be a number")),
        Ok(quantity) if quantity < 1 => {
            Err(field_error("range", "Quantity must be at least 1"))
        }
        Ok(_) => Ok(()),
    }
}

/// 空字符串视为缺失，其余原样保留
fn empty_string_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    Ok(opt.filter(|s| !s.is_empty()))
}
