//! 金额汇总：GST 与运费
//!
//! 使用 `rust_decimal` 计算，结果保留两位小数（四舍五入）。

use rust_decimal::{Decimal, RoundingStrategy};

use super::model::CartSummary;
use crate::infrastructure::config::CheckoutConfig;

const DECIMAL_PLACES: u32 = 2;

fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

pub fn summarize(subtotal: u64, config: &CheckoutConfig) -> CartSummary {
    let subtotal = Decimal::from(subtotal);
    let rate = Decimal::from(config.gst_rate_percent) / Decimal::ONE_HUNDRED;
    let gst = round(subtotal * rate);

    // 严格大于阈值才免运费
    let free_shipping = subtotal > Decimal::from(config.free_shipping_threshold);
    let shipping = if free_shipping {
        Decimal::ZERO
    } else {
        Decimal::from(config.shipping_fee)
    };

    CartSummary {
        subtotal: round(subtotal),
        gst_rate_percent: config.gst_rate_percent,
        gst,
        shipping: round(shipping),
        free_shipping,
        total_with_gst: round(subtotal + gst + shipping),
    }
}
