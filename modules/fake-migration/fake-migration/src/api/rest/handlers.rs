use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Query};
use serde::Deserialize;

use super::dto::{HealthDto, UserProfileDto};
use super::error::{ApiError, ApiResult};
use crate::domain::service::Service;

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub email: Option<String>,
}

/// `GET /?email=<address>`
pub async fn get_profile(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ProfileQuery>,
) -> ApiResult<Json<UserProfileDto>> {
    let email = query
        .email
        .filter(|email| !email.is_empty())
        .ok_or(ApiError::MissingEmail)?;

    let profile = svc.lookup(&email).await?;
    Ok(Json(profile.into()))
}

/// `GET /healthcheck`
pub async fn healthcheck() -> Json<HealthDto> {
    Json(HealthDto::ok())
}
