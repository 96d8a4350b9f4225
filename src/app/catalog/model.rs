//! 商品目录数据模型

use serde::{Deserialize, Serialize};

/// 面料商品（静态数据，运行期只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// 零售单价（卢比/米）
    pub price: u32,
    /// 批发单价，仅用于展示
    pub bulk_price: u32,
    pub image: &'static str,
    pub category: &'static str,
    pub material: &'static str,
    pub width: &'static str,
    pub gsm: &'static str,
    pub colors: &'static [&'static str],
    pub in_stock: bool,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    pub specifications: &'static [(&'static str, &'static str)],
}

impl Product {
    /// 默认颜色：列表中的第一个
    pub fn default_color(&self) -> Option<&'static str> {
        self.colors.first().copied()
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c.eq_ignore_ascii_case(color))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

/// 批量价格阶梯
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkPricingTier {
    pub quantity: &'static str,
    pub price: u32,
}

/// 价格区间筛选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "under-500")]
    Under500,
    #[serde(rename = "500-1000")]
    From500To1000,
    #[serde(rename = "1000-2000")]
    From1000To2000,
    #[serde(rename = "above-2000")]
    Above2000,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Under500,
        PriceRange::From500To1000,
        PriceRange::From1000To2000,
        PriceRange::Above2000,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Under500 => "under-500",
            PriceRange::From500To1000 => "500-1000",
            PriceRange::From1000To2000 => "1000-2000",
            PriceRange::Above2000 => "above-2000",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_str() == value)
    }

    /// 区间边界与页面一致：500 和 1000 两侧都包含，1000 同时落在两个区间
    pub fn contains(&self, price: u32) -> bool {
        match self {
            PriceRange::Under500 => price < 500,
            PriceRange::From500To1000 => (500..=1000).contains(&price),
            PriceRange::From1000To2000 => (1000..=2000).contains(&price),
            PriceRange::Above2000 => price > 2000,
        }
    }
}

/// 商品列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    /// 名称搜索关键字
    pub q: Option<String>,
    /// 逗号分隔的价格区间，例如 `under-500,500-1000`
    pub price: Option<String>,
}

/// 商品列表响应
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub heading: String,
    pub category: String,
    /// 可分享的页面路径，分类已写入查询参数
    pub canonical_path: String,
    pub price_ranges: Vec<PriceRange>,
    pub count: usize,
    pub products: Vec<Product>,
}

/// 评价概要，仅用于展示，每次请求随机生成
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewSummary {
    /// 3.5 - 5.0，保留一位小数
    pub rating: f64,
    pub count: u32,
}

/// 商品详情响应
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub bulk_pricing: Vec<BulkPricingTier>,
    pub reviews: ReviewSummary,
    pub canonical_path: String,
}
