//! # 面料商城服务
//!
//! 单商家面料商城的后端：
//! - 商品目录与筛选（静态数据）
//! - 购物车（内存中，进程重启即清空）
//! - 模拟结算流程与订单确认
//! - 联系表单、批量询价与店铺信息

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod routes;

pub use app::AppState;
pub use infrastructure::config::Config;
pub use routes::build_router;
