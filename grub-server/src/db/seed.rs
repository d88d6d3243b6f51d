//! 初始数据
//!
//! 启动时从内嵌的 JSON fixtures 填充内存存储。

use shared::models::{Dish, Order};

use super::repository::{DishRepository, OrderRepository};

const DISHES_JSON: &str = include_str!("../../fixtures/dishes.json");
const ORDERS_JSON: &str = include_str!("../../fixtures/orders.json");

/// 解析内嵌的菜品数据
pub fn fixture_dishes() -> serde_json::Result<Vec<Dish>> {
    serde_json::from_str(DISHES_JSON)
}

/// 解析内嵌的订单数据
pub fn fixture_orders() -> serde_json::Result<Vec<Order>> {
    serde_json::from_str(ORDERS_JSON)
}

/// 用 fixtures 覆盖两个存储的当前内容
pub fn seed(dishes: &DishRepository, orders: &OrderRepository) -> serde_json::Result<()> {
    let seeded_dishes = fixture_dishes()?;
    let seeded_orders = fixture_orders()?;

    tracing::info!(
        dishes = seeded_dishes.len(),
        orders = seeded_orders.len(),
        "Seeding in-memory stores from fixtures"
    );

    dishes.reset(seeded_dishes);
    orders.reset(seeded_orders);
    Ok(())
}
