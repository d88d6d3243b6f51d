//! Dish API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use shared::models::{Dish, DishPayload};

use super::validation::{dish_exists, dish_not_found, ensure_route_id, validate_dish};
use crate::api::extract::DataBody;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /dishes - 获取所有菜品
pub async fn list(State(state): State<ServerState>) -> ApiResponse<Vec<Dish>> {
    ApiResponse::new(state.dishes.find_all())
}

/// GET /dishes/{dish_id} - 获取单个菜品
pub async fn read(
    State(state): State<ServerState>,
    Path(dish_id): Path<String>,
) -> AppResult<ApiResponse<Dish>> {
    let dish = dish_exists(&state.dishes, &dish_id)?;
    Ok(ApiResponse::new(dish))
}

/// POST /dishes - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    DataBody(payload): DataBody<DishPayload>,
) -> AppResult<(StatusCode, ApiResponse<Dish>)> {
    let fields = validate_dish(&payload)?;
    let dish = state.dishes.create(fields);

    tracing::info!(dish_id = %dish.id, name = %dish.name, "Dish created");
    Ok((StatusCode::CREATED, ApiResponse::new(dish)))
}

/// PUT /dishes/{dish_id} - 整体替换菜品
///
/// 顺序: 存在性 → 字段校验 → id 一致性。请求体解析失败按字段校验失败处理，
/// 所以不存在的菜品总是先返回 404。
pub async fn update(
    State(state): State<ServerState>,
    Path(dish_id): Path<String>,
    body: Result<DataBody<DishPayload>, AppError>,
) -> AppResult<ApiResponse<Dish>> {
    let dish = state
        .dishes
        .update_with(&dish_id, |dish| -> AppResult<Dish> {
            let DataBody(payload) = body?;
            let fields = validate_dish(&payload)?;
            ensure_route_id(payload.id.as_ref(), &dish_id)?;
            dish.apply(fields);
            Ok(dish.clone())
        })
        .unwrap_or_else(|| Err(dish_not_found(&dish_id)))?;

    tracing::info!(dish_id = %dish.id, "Dish updated");
    Ok(ApiResponse::new(dish))
}
