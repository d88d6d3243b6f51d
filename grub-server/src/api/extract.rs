//! 请求体提取器
//!
//! 所有写接口的请求体都包在 `data` 下。`DataBody` 负责拆包，并把 axum 的
//! JSON 拒绝 (格式错误、类型错误、缺少 Content-Type) 统一转换为
//! `400 {"error": ...}`。

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::{AppError, RequestEnvelope};

/// `{ "data": T }` 请求体
#[derive(Debug, Clone)]
pub struct DataBody<T>(pub T);

impl<S, T> FromRequest<S> for DataBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(envelope) = Json::<RequestEnvelope<T>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::invalid_request(rejection.body_text())
            })?;
        Ok(Self(envelope.into_inner()))
    }
}
