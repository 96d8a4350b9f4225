//! 店铺页面路由表
//!
//! 把前端路径解析为页面，并能反向生成规范路径（用于分享链接和跳转）。

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Home,
    Products { category: Option<String> },
    ProductDetail { id: String },
    Cart,
    Checkout,
    OrderSuccess,
    BulkInquiry,
    About,
    Contact,
    NotFound { path: String },
}

impl Page {
    /// 解析 `path?query`，尾部斜杠忽略；`category=all` 视为无分类
    pub fn parse(uri: &str) -> Self {
        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (uri, None),
        };
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Page::Home,
            ["products"] => Page::Products {
                category: query
                    .and_then(|q| query_param(q, "category"))
                    .filter(|c| !c.is_empty() && c != "all"),
            },
            ["products", id] => Page::ProductDetail { id: id.to_string() },
            ["cart"] => Page::Cart,
            ["checkout"] => Page::Checkout,
            ["order-success"] => Page::OrderSuccess,
            ["bulk-inquiry"] => Page::BulkInquiry,
            ["about"] => Page::About,
            ["contact"] => Page::Contact,
            _ => Page::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Products { category: None } => "/products".to_string(),
            Page::Products {
                category: Some(category),
            } => format!("/products?category={}", urlencoding::encode(category)),
            Page::ProductDetail { id } => format!("/products/{}", id),
            Page::Cart => "/cart".to_string(),
            Page::Checkout => "/checkout".to_string(),
            Page::OrderSuccess => "/order-success".to_string(),
            Page::BulkInquiry => "/bulk-inquiry".to_string(),
            Page::About => "/about".to_string(),
            Page::Contact => "/contact".to_string(),
            Page::NotFound { path } => path.clone(),
        }
    }

    /// 主导航
    pub fn navigation() -> Vec<NavLink> {
        [
            ("Home", Page::Home),
            ("Products", Page::Products { category: None }),
            ("Bulk Orders", Page::BulkInquiry),
            ("About", Page::About),
            ("Contact", Page::Contact),
        ]
        .into_iter()
        .map(|(name, page)| NavLink {
            name,
            href: page.path(),
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: String,
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            urlencoding::decode(v)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| v.to_string())
        })
}
