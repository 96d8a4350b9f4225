//! 商品筛选
//!
//! 分类、名称搜索、价格区间三个条件之间为 AND；多个价格区间之间为 OR。

use super::model::{PriceRange, Product, ProductQuery};

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// `None` 表示全部分类
    pub category: Option<String>,
    pub search: String,
    pub price_ranges: Vec<PriceRange>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() || category == ALL_CATEGORIES {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// 勾选价格区间，重复勾选不会产生重复项
    pub fn price_range(mut self, range: PriceRange) -> Self {
        if !self.price_ranges.contains(&range) {
            self.price_ranges.push(range);
        }
        self
    }

    /// 从查询参数构造；无法识别的价格区间被忽略，等同于不限
    pub fn from_query(query: &ProductQuery) -> Self {
        let mut filter = Self::new()
            .category(query.category.clone().unwrap_or_default())
            .search(query.q.clone().unwrap_or_default());

        if let Some(price) = &query.price {
            for range in price
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(PriceRange::parse)
            {
                filter = filter.price_range(range);
            }
        }
        filter
    }

    pub fn category_id(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    pub fn matches(&self, product: &Product) -> bool {
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| product.category == category);

        let matches_search = product
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());

        let matches_price = self.price_ranges.is_empty()
            || self
                .price_ranges
                .iter()
                .any(|range| range.contains(product.price));

        matches_category && matches_search && matches_price
    }

    pub fn apply<'a, I>(&self, products: I) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }

    /// 可分享的列表页路径，只有分类写入 URL
    pub fn canonical_path(&self) -> String {
        match &self.category {
            Some(category) => format!("/products?category={}", urlencoding::encode(category)),
            None => "/products".to_string(),
        }
    }
}
