//! 产品页面渲染
//!
//! 页面直接用 `format!` 拼接，所有用户输入都经过 HTML 转义。

use super::model::{Product, ProductForm};
use crate::core::response::Page;

pub fn render(page: &Page) -> String {
    match page {
        Page::Homepage => layout(
            "Homepage",
            r#"<h1>Welcome to ADV Shop</h1>
<p><a href="/product/list">Product List</a></p>
<p><a href="/product/create">Create Product</a></p>"#,
        ),
        Page::ProductList { products } => layout("Product List", &product_list(products)),
        Page::CreateProduct { form, errors } => layout(
            "Create New Product",
            &product_form("Create New Product", "create", form, errors, false),
        ),
        Page::EditProduct { form, errors } => layout(
            "Edit Product",
            &product_form("Edit Product", "edit", form, errors, true),
        ),
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        escape(title),
        body
    )
}

fn product_list(products: &[Product]) -> String {
    let rows: String = products
        .iter()
        .map(|product| {
            let id = escape(product.id.as_deref().unwrap_or_default());
            format!(
                r#"<tr>
<td>{name}</td>
<td>{quantity}</td>
<td><a href="edit?id={id}">Edit</a></td>
<td><form method="post" action="delete"><input type="hidden" name="id" value="{id}"><button type="submit">Delete</button></form></td>
</tr>
"#,
                name = escape(product.name.as_deref().unwrap_or_default()),
                quantity = product.quantity,
                id = id,
            )
        })
        .collect();

    format!(
        r#"<h2>Product List</h2>
<a href="create">Create Product</a>
<table>
<thead><tr><th>Product Name</th><th>Quantity</th><th></th><th></th></tr></thead>
<tbody>
{}</tbody>
</table>"#,
        rows
    )
}

fn product_form(
    heading: &str,
    action: &str,
    form: &ProductForm,
    errors: &[String],
    with_id: bool,
) -> String {
    let error_list = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|e| format!("<li>{}</li>", escape(e)))
            .collect();
        format!("<ul class=\"errors\">{}</ul>\n", items)
    };
    let id_field = if with_id {
        format!(
            "<input type=\"hidden\" name=\"productId\" value=\"{}\">\n",
            escape(form.product_id.as_deref().unwrap_or_default())
        )
    } else {
        String::new()
    };

    format!(
        r#"<h3>{heading}</h3>
{errors}<form method="post" action="{action}">
{id_field}<label for="nameInput">Name</label>
<input type="text" id="nameInput" name="productName" value="{name}">
<label for="quantityInput">Quantity</label>
<input type="number" id="quantityInput" name="productQuantity" value="{quantity}">
<button type="submit">Submit</button>
</form>"#,
        heading = escape(heading),
        errors = error_list,
        action = action,
        id_field = id_field,
        name = escape(&form.product_name),
        quantity = escape(&form.product_quantity),
    )
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
