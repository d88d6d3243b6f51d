//! 订单校验与状态守卫
//!
//! 更新流程: 存在性 → 字段校验 → id 一致性 → 状态校验 → 已送达锁定。
//! 每一步都是返回 `AppResult` 的独立函数，由 handler 用 `?` 串联。

use serde_json::Value;
use shared::models::{LineItem, Order, OrderFields, OrderPayload, OrderStatus};

use crate::db::repository::OrderRepository;
use crate::utils::validation::{is_truthy, mismatched_id, positive_integer, required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

pub(crate) fn order_not_found(order_id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::OrderNotFound,
        format!("Order not found: {order_id}"),
    )
}

/// 按路由 id 查找订单
pub fn order_exists(repo: &OrderRepository, order_id: &str) -> AppResult<Order> {
    repo.find_by_id(order_id)
        .ok_or_else(|| order_not_found(order_id))
}

/// 校验订单字段
///
/// 状态不在这里处理：创建和更新对状态的要求不同，见
/// [`create_status`] 与 [`update_status`]。
pub fn validate_order(payload: &OrderPayload) -> AppResult<OrderFields> {
    let deliver_to = required_text(payload.deliver_to.as_ref())
        .ok_or_else(|| AppError::validation("Order must include a deliverTo"))?;
    let mobile_number = required_text(payload.mobile_number.as_ref())
        .ok_or_else(|| AppError::validation("Order must include a mobileNumber"))?;

    let Some(Value::Array(items)) = payload.dishes.as_ref() else {
        return Err(AppError::validation("Order must include a dish"));
    };
    if items.is_empty() {
        return Err(AppError::validation("Order must include at least one dish"));
    }

    let dishes = items
        .iter()
        .enumerate()
        .map(|(index, item)| line_item(index, item))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(OrderFields {
        deliver_to,
        mobile_number,
        status: None,
        dishes,
    })
}

fn line_item(index: usize, item: &Value) -> AppResult<LineItem> {
    let invalid = || {
        AppError::validation(format!(
            "Dish {index} must have a quantity that is an integer greater than 0"
        ))
    };

    let Value::Object(object) = item else {
        return Err(invalid());
    };
    let quantity = object
        .get("quantity")
        .and_then(positive_integer)
        .ok_or_else(invalid)?;

    let mut details = object.clone();
    details.remove("quantity");
    Ok(LineItem::new(quantity, details))
}

fn parse_status(value: &Value) -> AppResult<OrderStatus> {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AppError::with_message(ErrorCode::OrderInvalidStatus, STATUS_MESSAGE))
}

/// 创建时的状态: 缺省或空值 → `None` (默认 pending)，未知值报错
pub fn create_status(value: Option<&Value>) -> AppResult<Option<OrderStatus>> {
    match value {
        Some(value) if is_truthy(Some(value)) => parse_status(value).map(Some),
        _ => Ok(None),
    }
}

/// 更新时的状态: 必须是已知状态
pub fn update_status(value: Option<&Value>) -> AppResult<OrderStatus> {
    match value {
        Some(value) if is_truthy(Some(value)) => parse_status(value),
        _ => Err(AppError::with_message(
            ErrorCode::OrderInvalidStatus,
            STATUS_MESSAGE,
        )),
    }
}

/// 请求体携带的 id 必须与路由 id 一致 (缺省或空值放行)
pub fn ensure_route_id(id: Option<&Value>, route_id: &str) -> AppResult<()> {
    match mismatched_id(id, route_id) {
        Some(id) => Err(AppError::with_message(
            ErrorCode::OrderIdMismatch,
            format!("Order id does not match route id. Order: {id}, Route: {route_id}."),
        )),
        None => Ok(()),
    }
}

/// 已送达的订单不可再修改
pub fn ensure_not_delivered(order: &Order) -> AppResult<()> {
    if order.status.is_terminal() {
        return Err(AppError::with_message(
            ErrorCode::OrderAlreadyDelivered,
            "A delivered order cannot be changed",
        ));
    }
    Ok(())
}

/// 只有 pending 订单可以删除
pub fn ensure_deletable(order: &Order) -> AppResult<()> {
    if !order.status.is_deletable() {
        return Err(AppError::with_message(
            ErrorCode::OrderNotPending,
            "An order cannot be deleted unless it is pending",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> OrderPayload {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
            "mobileNumber": "(505) 143-3369",
            "dishes": [
                { "id": "d351db2b49b69679504652ea1cf38241", "name": "Dolcelatte and chickpea spaghetti", "price": 19, "quantity": 2 }
            ]
        })
    }

    fn message(value: Value) -> String {
        validate_order(&payload(value)).unwrap_err().message
    }

    #[test]
    fn test_valid_order_keeps_line_item_details() {
        let fields = validate_order(&payload(valid())).unwrap();
        assert_eq!(fields.status, None);
        assert_eq!(fields.dishes.len(), 1);
        assert_eq!(fields.dishes[0].quantity, 2);
        assert_eq!(fields.dishes[0].details["price"], json!(19));
        assert!(!fields.dishes[0].details.contains_key("quantity"));
    }

    #[test]
    fn test_field_order() {
        assert_eq!(message(json!({})), "Order must include a deliverTo");

        let mut value = valid();
        value["mobileNumber"] = json!("");
        assert_eq!(message(value), "Order must include a mobileNumber");

        let mut value = valid();
        value["dishes"] = json!("pasta");
        assert_eq!(message(value), "Order must include a dish");

        let mut value = valid();
        value.as_object_mut().unwrap().remove("dishes");
        assert_eq!(message(value), "Order must include a dish");

        let mut value = valid();
        value["dishes"] = json!([]);
        assert_eq!(message(value), "Order must include at least one dish");
    }

    #[test]
    fn test_quantity_names_index() {
        for bad in [json!(0), json!(-1), json!(1.5), json!("2"), json!(null)] {
            let mut value = valid();
            value["dishes"] = json!([{ "quantity": 1 }, { "quantity": 3 }, { "quantity": bad }]);
            assert_eq!(
                message(value),
                "Dish 2 must have a quantity that is an integer greater than 0"
            );
        }

        let mut value = valid();
        value["dishes"] = json!([{ "name": "no quantity" }]);
        assert_eq!(
            message(value),
            "Dish 0 must have a quantity that is an integer greater than 0"
        );

        let mut value = valid();
        value["dishes"] = json!([7]);
        assert_eq!(
            message(value),
            "Dish 0 must have a quantity that is an integer greater than 0"
        );
    }

    #[test]
    fn test_create_status() {
        assert_eq!(create_status(None).unwrap(), None);
        assert_eq!(create_status(Some(&json!(""))).unwrap(), None);
        assert_eq!(
            create_status(Some(&json!("preparing"))).unwrap(),
            Some(OrderStatus::Preparing)
        );
        let err = create_status(Some(&json!("shipped"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidStatus);
    }

    #[test]
    fn test_update_status() {
        assert_eq!(
            update_status(Some(&json!("out-for-delivery"))).unwrap(),
            OrderStatus::OutForDelivery
        );
        for bad in [None, Some(json!("")), Some(json!("invalid")), Some(json!(3))] {
            let err = update_status(bad.as_ref()).unwrap_err();
            assert_eq!(err.message, STATUS_MESSAGE);
        }
    }

    #[test]
    fn test_route_id() {
        assert!(ensure_route_id(None, "abc").is_ok());
        assert!(ensure_route_id(Some(&json!("abc")), "abc").is_ok());
        let err = ensure_route_id(Some(&json!("xyz")), "abc").unwrap_err();
        assert_eq!(
            err.message,
            "Order id does not match route id. Order: xyz, Route: abc."
        );
    }

    #[test]
    fn test_status_guards() {
        let mut order = Order::new("o1", validate_order(&payload(valid())).unwrap());
        assert!(ensure_not_delivered(&order).is_ok());
        assert!(ensure_deletable(&order).is_ok());

        order.status = OrderStatus::Preparing;
        assert_eq!(
            ensure_deletable(&order).unwrap_err().message,
            "An order cannot be deleted unless it is pending"
        );

        order.status = OrderStatus::Delivered;
        assert_eq!(
            ensure_not_delivered(&order).unwrap_err().code,
            ErrorCode::OrderAlreadyDelivered
        );
    }
}
