use contracts::system::config::UiBootstrap;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the startup payload: the user-management capability flag and the
/// configured indices. The shell is not built until this resolves.
pub async fn fetch_ui_bootstrap() -> Result<UiBootstrap, String> {
    let response = Request::get(&api_url("/api/system/config"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch UI config: {}", response.status()));
    }

    response
        .json::<UiBootstrap>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
