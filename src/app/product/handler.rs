//! 产品处理器

use axum::{
    extract::{rejection::FormRejection, Query, State},
    Form,
};
use serde::Deserialize;
use tracing::{debug, warn};

use super::model::{Product, ProductForm};
use super::service::ProductService;
use crate::app::AppState;
use crate::core::error::CoreError;
use crate::core::response::{Page, View};

const REDIRECT_LIST: View = View::Redirect("list");
const REDIRECT_PRODUCT_LIST: View = View::Redirect("/product/list");

/// `?id=` 与删除表单共用的参数
#[derive(Debug, Default, Deserialize)]
pub struct IdParam {
    pub id: Option<String>,
}

pub async fn create_product_page() -> View {
    View::Render(Page::CreateProduct {
        form: ProductForm::default(),
        errors: Vec::new(),
    })
}

pub async fn create_product_post(
    State(state): State<AppState>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<View, CoreError> {
    let Form(form) = form?;
    let errors = form.errors();
    if !errors.is_empty() {
        debug!("创建表单校验失败: {:?}", errors);
        return Ok(View::Render(Page::CreateProduct { form, errors }));
    }

    match state.product_service.create(Product::from(form.clone())) {
        Ok(_) => Ok(REDIRECT_LIST),
        Err(err) => Ok(View::Render(Page::CreateProduct {
            form,
            errors: vec![err.to_string()],
        })),
    }
}

pub async fn product_list_page(State(state): State<AppState>) -> View {
    View::Render(Page::ProductList {
        products: state.product_service.find_all(),
    })
}

pub async fn edit_product_page(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> View {
    match state.product_service.find_by_id(params.id.as_deref()) {
        Some(product) => View::Render(Page::EditProduct {
            form: ProductForm::from(&product),
            errors: Vec::new(),
        }),
        None => {
            warn!("编辑的产品不存在: {:?}", params.id);
            REDIRECT_PRODUCT_LIST
        }
    }
}

pub async fn edit_product_post(
    State(state): State<AppState>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<View, CoreError> {
    let Form(form) = form?;
    let errors = form.errors();
    if !errors.is_empty() {
        debug!("编辑表单校验失败: {:?}", errors);
        return Ok(View::Render(Page::EditProduct { form, errors }));
    }

    match state.product_service.update(Product::from(form.clone())) {
        Ok(_) => Ok(REDIRECT_LIST),
        Err(err) => Ok(View::Render(Page::EditProduct {
            form,
            errors: vec![err.to_string()],
        })),
    }
}

pub async fn delete_product(
    State(state): State<AppState>,
    Form(params): Form<IdParam>,
) -> View {
    state.product_service.delete(params.id.as_deref());
    REDIRECT_PRODUCT_LIST
}
