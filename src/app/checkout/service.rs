//! 结算业务服务
//!
//! 下单是模拟的：固定延迟后清空购物车，生成订单号和预计送达日期，
//! 订单信息只保留在内存中（最近一笔）。

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use super::model::{
    CheckoutView, CustomerInfo, OrderConfirmation, PaymentDetails, ShippingAddress,
};
use super::session::CheckoutSession;
use crate::app::cart::{pricing::summarize, CartService};
use crate::core::error::CoreError;
use crate::infrastructure::config::CheckoutConfig;

const ORDER_ID_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ORDER_ID_SUFFIX_LEN: usize = 9;

#[derive(Clone)]
pub struct CheckoutService {
    session: Arc<Mutex<CheckoutSession>>,
    last_order: Arc<RwLock<Option<OrderConfirmation>>>,
    cart: CartService,
    config: CheckoutConfig,
}

impl CheckoutService {
    pub fn new(cart: CartService, config: CheckoutConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(CheckoutSession::new())),
            last_order: Arc::new(RwLock::new(None)),
            cart,
            config,
        }
    }

    pub async fn view(&self) -> CheckoutView {
        let session = self.session.lock().await;
        self.render(&session).await
    }

    pub async fn set_customer(&self, customer: CustomerInfo) -> Result<CheckoutView, CoreError> {
        let mut session = self.session.lock().await;
        session.set_customer(customer)?;
        Ok(self.render(&session).await)
    }

    pub async fn set_shipping(&self, shipping: ShippingAddress) -> Result<CheckoutView, CoreError> {
        let mut session = self.session.lock().await;
        session.set_shipping(shipping)?;
        Ok(self.render(&session).await)
    }

    pub async fn set_payment(&self, payment: PaymentDetails) -> Result<CheckoutView, CoreError> {
        let mut session = self.session.lock().await;
        session.set_payment(payment)?;
        Ok(self.render(&session).await)
    }

    pub async fn advance(&self) -> Result<CheckoutView, CoreError> {
        let mut session = self.session.lock().await;
        session.advance()?;
        Ok(self.render(&session).await)
    }

    pub async fn back(&self) -> Result<CheckoutView, CoreError> {
        let mut session = self.session.lock().await;
        session.back()?;
        Ok(self.render(&session).await)
    }

    /// 提交订单
    ///
    /// 订单内容在提交时取快照；延迟结束后才清空购物车。
    pub async fn place_order(&self) -> Result<OrderConfirmation, CoreError> {
        let (form, cart) = {
            let mut session = self.session.lock().await;
            let cart = self.cart.snapshot().await;
            if cart.items.is_empty() {
                return Err(CoreError::BadRequest("Your cart is empty".to_string()));
            }
            (session.submit()?, cart)
        };
        let summary = summarize(cart.total, &self.config);
        info!(
            lines = cart.line_count,
            total = %summary.total_with_gst,
            "订单处理中"
        );

        tokio::time::sleep(std::time::Duration::from_millis(
            self.config.processing_delay_ms,
        ))
        .await;

        // 订单确认失败时购物车保持原样，会话回到 Review
        let placed_on = Local::now().date_naive();
        let delivery = match estimated_delivery(placed_on, self.config.delivery_days) {
            Ok(date) => date,
            Err(e) => {
                warn!(error = %e, "下单失败，会话回到 Review");
                self.session.lock().await.reopen();
                return Err(e);
            }
        };

        self.cart.clear().await;

        let confirmation = OrderConfirmation {
            order_id: generate_order_id(&self.config.order_id_prefix),
            placed_on,
            estimated_delivery: delivery,
            items: cart.items,
            summary,
            customer: form.customer,
            shipping: form.shipping,
            payment_method: form.payment.method,
            payment_method_name: form.payment.method.display_name(),
            save_info: form.payment.save_info,
        };

        *self.last_order.write().await = Some(confirmation.clone());
        self.session.lock().await.reset();

        info!(order_id = %confirmation.order_id, "下单成功");
        Ok(confirmation)
    }

    /// 下单任务异常退出后恢复会话
    pub async fn reopen(&self) {
        self.session.lock().await.reopen();
    }

    /// 最近一笔订单；进程重启后丢失
    pub async fn last_order(&self) -> Result<OrderConfirmation, CoreError> {
        match self.last_order.read().await.clone() {
            Some(order) => Ok(order),
            None => {
                warn!("没有可展示的订单");
                Err(CoreError::NotFound("No recent order found".to_string()))
            }
        }
    }

    async fn render(&self, session: &CheckoutSession) -> CheckoutView {
        let cart = self.cart.snapshot().await;
        CheckoutView {
            step: session.step(),
            progress: session.progress(),
            form: session.form().clone(),
            summary: summarize(cart.total, &self.config),
            items: cart.items,
        }
    }
}

/// 订单号：前缀 + 9 位随机大写字母数字，不保证唯一
pub fn generate_order_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ORDER_ID_SUFFIX_LEN)
        .map(|_| ORDER_ID_CHARSET[rng.gen_range(0..ORDER_ID_CHARSET.len())] as char)
        .collect();
    format!("{}{}", prefix, suffix)
}

pub fn estimated_delivery(placed_on: NaiveDate, days: i64) -> Result<NaiveDate, CoreError> {
    Duration::try_days(days)
        .and_then(|delta| placed_on.checked_add_signed(delta))
        .ok_or_else(|| {
            CoreError::InternalServerError(format!("预计送达日期超出范围: {} 天", days))
        })
}
