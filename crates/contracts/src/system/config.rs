use serde::{Deserialize, Serialize};

/// A configured document index. Each index contributes one tab to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub id: String,
    pub name: String,
}

/// Startup payload the frontend fetches once, before building the tab shell.
///
/// `user_management_enabled` is the single capability switch: when it is off
/// there is no login tab and no auth wiring at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiBootstrap {
    pub user_management_enabled: bool,
    pub indices: Vec<IndexInfo>,
}
