//! 商品目录业务服务

use super::data::{CATEGORIES, PRODUCTS};
use super::filter::ProductFilter;
use rand::Rng;

use super::model::{
    BulkPricingTier, Category, Product, ProductDetail, ProductListing, ReviewSummary,
};
use crate::core::error::CoreError;

#[derive(Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    pub fn categories(&self) -> &'static [Category] {
        &CATEGORIES
    }

    pub fn products(&self) -> &'static [Product] {
        &PRODUCTS
    }

    pub fn find(&self, id: &str) -> Option<&'static Product> {
        PRODUCTS.iter().find(|p| p.id == id)
    }

    pub fn get_product(&self, id: &str) -> Result<&'static Product, CoreError> {
        self.find(id)
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))
    }

    pub fn list(&self, filter: &ProductFilter) -> ProductListing {
        let products = filter.apply(self.products());
        ProductListing {
            heading: heading(filter.category.as_deref()),
            category: filter.category_id().to_string(),
            canonical_path: filter.canonical_path(),
            price_ranges: filter.price_ranges.clone(),
            count: products.len(),
            products,
        }
    }

    pub fn detail(&self, id: &str) -> Result<ProductDetail, CoreError> {
        let product = self.get_product(id)?;
        Ok(ProductDetail {
            product: product.clone(),
            bulk_pricing: bulk_pricing(product.price, product.bulk_price),
            reviews: generate_reviews(),
            canonical_path: format!("/products/{}", product.id),
        })
    }
}

pub fn generate_reviews() -> ReviewSummary {
    let mut rng = rand::thread_rng();
    let tenths: u32 = rng.gen_range(35..=50);
    ReviewSummary {
        rating: f64::from(tenths) / 10.0,
        count: rng.gen_range(50..250),
    }
}

/// 列表页标题：`silk` -> `Silk Fabrics`
fn heading(category: Option<&str>) -> String {
    match category {
        None => "Our Premium Fabrics".to_string(),
        Some(category) => {
            let mut chars = category.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            };
            format!("{} Fabrics", capitalized)
        }
    }
}

/// 批量价格阶梯，折扣四舍五入到整数卢比
pub fn bulk_pricing(price: u32, bulk_price: u32) -> Vec<BulkPricingTier> {
    let discounted = |percent: u32| (price * percent + 50) / 100;
    vec![
        BulkPricingTier { quantity: "1-50 meters", price },
        BulkPricingTier { quantity: "51-100 meters", price: discounted(92) },
        BulkPricingTier { quantity: "101-500 meters", price: discounted(85) },
        BulkPricingTier { quantity: "500+ meters", price: bulk_price },
    ]
}
