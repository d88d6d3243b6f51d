use crate::core::{Config, Result};
use crate::db::repository::{DishRepository, OrderRepository};
use crate::db::seed;

/// 服务器状态 - 持有所有存储的共享引用
///
/// 仓库内部使用 Arc，Clone 只是浅拷贝。每个测试可以构造自己的
/// ServerState，互不影响。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | dishes | DishRepository | 菜品存储 |
/// | orders | OrderRepository | 订单存储 |
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config)?;
/// let app = build_app(state.clone());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ServerState {
    pub dishes: DishRepository,
    pub orders: OrderRepository,
}

impl ServerState {
    /// 创建空存储的状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 初始化服务器状态
    ///
    /// 根据 `seed_fixtures` 决定是否载入初始数据。
    pub fn initialize(config: &Config) -> Result<Self> {
        let state = Self::new();
        if config.seed_fixtures {
            seed::seed(&state.dishes, &state.orders)?;
        } else {
            tracing::info!("Fixture seeding disabled, starting with empty stores");
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_seeded() {
        let config = Config::with_overrides(0, true);
        let state = ServerState::initialize(&config).unwrap();
        assert!(state.dishes.count() > 0);
        assert!(state.orders.count() > 0);
    }

    #[test]
    fn test_initialize_empty() {
        let config = Config::with_overrides(0, false);
        let state = ServerState::initialize(&config).unwrap();
        assert_eq!(state.dishes.count(), 0);
        assert_eq!(state.orders.count(), 0);
    }

    #[test]
    fn test_states_are_isolated() {
        let a = ServerState::new();
        let b = ServerState::new();
        a.orders.create(shared::models::OrderFields {
            deliver_to: "x".into(),
            mobile_number: "y".into(),
            status: None,
            dishes: vec![],
        });
        assert_eq!(a.orders.count(), 1);
        assert_eq!(b.orders.count(), 0);
    }
}
