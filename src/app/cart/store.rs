//! 购物车状态存储
//!
//! 只保存行数据；total / item_count 每次都从行数据重新计算。

use super::model::{CartItem, CartSnapshot, LineSelector};

#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 相同行（id + 颜色 + 材质）累加数量，否则追加到末尾。
    /// 数量为 0 的条目被忽略。
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|existing| existing.same_line(&item)) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }

    /// 设置匹配行的数量；`quantity <= 0` 时删除。返回是否有行被改动。
    pub fn update_quantity(&mut self, selector: &LineSelector, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(selector);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let mut changed = false;
        for item in self.items.iter_mut().filter(|item| selector.matches(item)) {
            item.quantity = quantity;
            changed = true;
        }
        changed
    }

    /// 删除匹配行，不存在时不做任何事。返回是否有行被删除。
    pub fn remove_item(&mut self, selector: &LineSelector) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !selector.matches(item));
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total: self.total(),
            item_count: self.item_count(),
            line_count: self.items.len(),
        }
    }
}
