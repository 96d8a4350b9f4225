//! 购物车数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 购物车行（一种商品/颜色/材质组合）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// 对应的商品 id
    pub id: String,
    pub name: String,
    /// 单价（卢比/米）
    pub price: u32,
    /// 数量（米）
    pub quantity: u32,
    pub image: String,
    pub color: String,
    pub material: String,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }

    /// 行身份：商品 id + 颜色 + 材质
    pub fn same_line(&self, other: &CartItem) -> bool {
        self.id == other.id && self.color == other.color && self.material == other.material
    }
}

/// 行选择器：只给商品 id 时匹配该商品的所有行
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LineSelector {
    #[serde(default)]
    pub id: String,
    pub color: Option<String>,
    pub material: Option<String>,
}

impl LineSelector {
    pub fn product(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: None,
            material: None,
        }
    }

    pub fn line(
        id: impl Into<String>,
        color: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            color: Some(color.into()),
            material: Some(material.into()),
        }
    }

    pub fn matches(&self, item: &CartItem) -> bool {
        item.id == self.id
            && self.color.as_deref().map_or(true, |c| c == item.color)
            && self.material.as_deref().map_or(true, |m| m == item.material)
    }
}

/// 购物车快照，合计值总是由行数据重新计算
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    /// Σ 单价 × 数量
    pub total: u64,
    /// Σ 数量，导航栏角标显示该值
    pub item_count: u64,
    /// 行数
    pub line_count: usize,
}

/// 订单金额汇总（含 GST 与运费）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub gst_rate_percent: u32,
    pub gst: Decimal,
    pub shipping: Decimal,
    pub free_shipping: bool,
    pub total_with_gst: Decimal,
}

/// 购物车页面响应
#[derive(Debug, Serialize)]
pub struct CartView {
    #[serde(flatten)]
    pub cart: CartSnapshot,
    pub summary: CartSummary,
}

/// 加入购物车请求
#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[validate(length(min = 1, message = "Product id is required"))]
    pub product_id: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1 meter"))]
    pub quantity: u32,
    /// 为空时使用商品的第一个颜色
    pub color: Option<String>,
    /// 加入后直接跳转购物车页
    #[serde(default)]
    pub buy_now: bool,
}

#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub item: CartItem,
    pub cart: CartSnapshot,
    /// `buy_now` 时的跳转目标
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// 修改数量请求，允许 0 和负数（即删除）
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// 按行操作时的可选颜色/材质参数
#[derive(Debug, Default, Deserialize)]
pub struct LineQuery {
    pub color: Option<String>,
    pub material: Option<String>,
}

impl LineQuery {
    pub fn into_selector(self, id: String) -> LineSelector {
        LineSelector {
            id,
            color: self.color,
            material: self.material,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CartBadge {
    pub item_count: u64,
}
