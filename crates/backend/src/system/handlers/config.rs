use axum::extract::Json;
use contracts::system::config::UiBootstrap;

use crate::shared::config::get_config;

/// Startup payload for the frontend: the user-management capability flag
/// and the configured document indices. Public (the shell needs it before
/// anyone can sign in).
pub async fn ui_bootstrap() -> Json<UiBootstrap> {
    let config = get_config();

    Json(UiBootstrap {
        user_management_enabled: config.auth.user_management,
        indices: config.indices.iter().map(|i| i.to_info()).collect(),
    })
}
