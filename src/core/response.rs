//! 核心响应处理模块
//!
//! 处理器返回 [`View`]：渲染一个命名页面，或重定向到另一个地址。

use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::app::product::model::{Product, ProductForm};
use crate::app::product::view;

/// 可渲染的页面
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Homepage,
    CreateProduct {
        form: ProductForm,
        errors: Vec<String>,
    },
    ProductList {
        products: Vec<Product>,
    },
    EditProduct {
        form: ProductForm,
        errors: Vec<String>,
    },
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Homepage => "Homepage",
            Page::CreateProduct { .. } => "CreateProduct",
            Page::ProductList { .. } => "ProductList",
            Page::EditProduct { .. } => "EditProduct",
        }
    }
}

/// 处理器结果
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Render(Page),
    Redirect(&'static str),
}

impl View {
    /// 视图名称，重定向形如 `redirect:list`
    pub fn name(&self) -> String {
        match self {
            View::Render(page) => page.name().to_string(),
            View::Redirect(target) => format!("redirect:{}", target),
        }
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            View::Render(page) => Some(page),
            View::Redirect(_) => None,
        }
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        match self {
            View::Render(page) => Html(view::render(&page)).into_response(),
            View::Redirect(target) => Redirect::to(target).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};

    #[test]
    fn test_view_names() {
        assert_eq!(View::Render(Page::Homepage).name(), "Homepage");
        assert_eq!(
            View::Render(Page::ProductList { products: vec![] }).name(),
            "ProductList"
        );
        assert_eq!(View::Redirect("list").name(), "redirect:list");
        assert_eq!(
            View::Redirect("/product/list").name(),
            "redirect:/product/list"
        );
    }

    #[test]
    fn test_redirect_response() {
        let response = View::Redirect("list").into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "list");
    }

    #[test]
    fn test_render_response_is_html() {
        let response = View::Render(Page::Homepage).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }
}
