//! Plain-text identity routes.

use axum::extract::State;
use postboard_core::responses;
use postboard_db::repositories::VisitorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /version
pub async fn app_version(State(state): State<AppState>) -> AppResult<&'static str> {
    VisitorRepo::record_visit(state.store()).await?;
    Ok(responses::APP_VERSION)
}

/// GET /instance
///
/// The platform instance id, or `None` when not running on the platform.
pub async fn instance_id(State(state): State<AppState>) -> AppResult<String> {
    VisitorRepo::record_visit(state.store()).await?;
    Ok(responses::platform_value(
        state.config.platform.instance_id.as_deref(),
    ))
}

/// GET /version-id
pub async fn version_id(State(state): State<AppState>) -> AppResult<String> {
    VisitorRepo::record_visit(state.store()).await?;
    Ok(responses::platform_value(
        state.config.platform.version_id.as_deref(),
    ))
}
