//! 购物车业务服务
//!
//! 进程内只有一个购物车。每次修改后把新快照发布给订阅者（导航栏角标、
//! 购物车页、结算页）。

use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info};

use super::model::{CartItem, CartSnapshot, LineSelector};
use super::store::CartStore;
use crate::app::catalog::Product;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct CartService {
    store: Arc<RwLock<CartStore>>,
    updates: Arc<watch::Sender<CartSnapshot>>,
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}

impl CartService {
    pub fn new() -> Self {
        let (updates, _) = watch::channel(CartSnapshot::default());
        Self {
            store: Arc::new(RwLock::new(CartStore::new())),
            updates: Arc::new(updates),
        }
    }

    /// 订阅购物车变化
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> CartSnapshot {
        self.store.read().await.snapshot()
    }

    pub async fn add_item(&self, item: CartItem) -> CartSnapshot {
        let mut store = self.store.write().await;
        debug!(id = %item.id, color = %item.color, quantity = item.quantity, "加入购物车");
        store.add_item(item);
        self.publish(&store)
    }

    /// 按商品与所选颜色构造购物车行并加入
    pub async fn add_product(
        &self,
        product: &Product,
        quantity: u32,
        color: Option<&str>,
    ) -> Result<(CartItem, CartSnapshot), CoreError> {
        let color = match color {
            Some(color) if product.has_color(color) => product
                .colors
                .iter()
                .find(|c| c.eq_ignore_ascii_case(color))
                .copied()
                .unwrap_or(color),
            Some(color) => {
                return Err(CoreError::BadRequest(format!(
                    "Color {} is not available for {}",
                    color, product.name
                )))
            }
            None => product.default_color().ok_or_else(|| {
                CoreError::InternalServerError(format!("商品 {} 没有可选颜色", product.id))
            })?,
        };

        let item = CartItem {
            id: product.id.to_string(),
            name: product.name.to_string(),
            price: product.price,
            quantity,
            image: product.image.to_string(),
            color: color.to_string(),
            material: product.material.to_string(),
        };
        let snapshot = self.add_item(item.clone()).await;
        info!("已加入 {} 米 {} ({})", quantity, product.name, color);
        Ok((item, snapshot))
    }

    pub async fn update_quantity(&self, selector: &LineSelector, quantity: i64) -> CartSnapshot {
        let mut store = self.store.write().await;
        if store.update_quantity(selector, quantity) {
            debug!(id = %selector.id, quantity, "修改数量");
            self.publish(&store)
        } else {
            store.snapshot()
        }
    }

    pub async fn remove_item(&self, selector: &LineSelector) -> CartSnapshot {
        let mut store = self.store.write().await;
        if store.remove_item(selector) {
            debug!(id = %selector.id, "移除购物车行");
            self.publish(&store)
        } else {
            store.snapshot()
        }
    }

    pub async fn clear(&self) -> CartSnapshot {
        let mut store = self.store.write().await;
        if store.is_empty() {
            return store.snapshot();
        }
        store.clear();
        info!("购物车已清空");
        self.publish(&store)
    }

    fn publish(&self, store: &CartStore) -> CartSnapshot {
        let snapshot = store.snapshot();
        self.updates.send_replace(snapshot.clone());
        snapshot
    }
}
