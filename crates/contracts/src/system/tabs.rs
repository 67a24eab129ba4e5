//! Tab registry and the auth-driven visibility rule.
//!
//! The registry is built once during shell construction with explicit
//! `register` calls; every visibility vector produced afterwards follows
//! registration order, one flag per tab.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auth::UserInfo;

/// Handle returned by [`TabRegistry::register`]. It is the position of the
/// tab in registration order, which is also its position in every
/// visibility vector resolved against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabHandle(usize);

impl TabHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub key: String,
    pub title: String,
    pub initial_visible: bool,
}

/// Ordered set of registered tabs. Immutable after shell construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRegistry {
    entries: Vec<TabEntry>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a tab. Keys must be unique within the registry.
    pub fn register(&mut self, key: &str, title: &str, initial_visible: bool) -> Result<TabHandle> {
        if self.entries.iter().any(|e| e.key == key) {
            bail!("duplicate tab key: {key}");
        }
        self.entries.push(TabEntry {
            key: key.to_string(),
            title: title.to_string(),
            initial_visible,
        });
        Ok(TabHandle(self.entries.len() - 1))
    }

    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn get(&self, handle: TabHandle) -> Option<&TabEntry> {
        self.entries.get(handle.0)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visibility flags as registered, before any auth event has fired.
    pub fn initial_visibility(&self) -> Vec<bool> {
        self.entries.iter().map(|e| e.initial_visible).collect()
    }
}

/// Keys of the two tabs the visibility rule treats specially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTabs {
    pub login: String,
    pub admin: String,
}

/// Auth lifecycle notification: `Some(id)` after sign-in, `None` after
/// sign-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthChange {
    pub user_id: Option<Uuid>,
}

impl AuthChange {
    pub fn signed_in(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn signed_out() -> Self {
        Self { user_id: None }
    }
}

/// Resolve per-tab visibility for an auth state change.
///
/// Signed out, or an id the store does not know, shows only the login tab;
/// an unknown id is a normal outcome, not an error. A signed-in user sees
/// everything except the login tab, with the admin tab shown only when the
/// record carries the administrator flag.
///
/// The output has exactly one flag per registered tab, in registration
/// order. Pure: applying the flags to widgets is the renderer's job.
pub fn resolve_visibility(
    user_id: Option<&Uuid>,
    registry: &TabRegistry,
    special: &SpecialTabs,
    mut find_user: impl FnMut(&Uuid) -> Option<UserInfo>,
) -> Vec<bool> {
    let user = match user_id {
        None => return login_only(registry, special),
        Some(id) => match find_user(id) {
            None => return login_only(registry, special),
            Some(user) => user,
        },
    };

    registry
        .entries
        .iter()
        .map(|e| {
            if e.key == special.login {
                false
            } else if e.key == special.admin {
                user.is_admin
            } else {
                true
            }
        })
        .collect()
}

fn login_only(registry: &TabRegistry, special: &SpecialTabs) -> Vec<bool> {
    registry.entries.iter().map(|e| e.key == special.login).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn registry() -> TabRegistry {
        let mut reg = TabRegistry::new();
        for key in [
            "login-tab",
            "chat-tab",
            "docs-tab",
            "admin-tab",
            "settings-tab",
            "help-tab",
        ] {
            reg.register(key, key, key == "login-tab").unwrap();
        }
        reg
    }

    fn special() -> SpecialTabs {
        SpecialTabs {
            login: "login-tab".to_string(),
            admin: "admin-tab".to_string(),
        }
    }

    fn user(id: Uuid, is_admin: bool) -> UserInfo {
        UserInfo {
            id,
            username: format!("user-{id}"),
            display_name: None,
            is_admin,
        }
    }

    fn store(users: &[UserInfo]) -> HashMap<Uuid, UserInfo> {
        users.iter().map(|u| (u.id, u.clone())).collect()
    }

    #[test]
    fn signed_out_shows_only_login() {
        let reg = registry();
        let flags = resolve_visibility(None, &reg, &special(), |_| None);
        assert_eq!(flags, vec![true, false, false, false, false, false]);
    }

    #[test]
    fn unknown_user_matches_signed_out() {
        let reg = registry();
        let known = user(Uuid::from_u128(2), false);
        let users = store(&[known]);
        let stranger = Uuid::from_u128(1);

        let signed_out = resolve_visibility(None, &reg, &special(), |id| users.get(id).cloned());
        let unknown =
            resolve_visibility(Some(&stranger), &reg, &special(), |id| users.get(id).cloned());
        assert_eq!(unknown, signed_out);
        assert_eq!(unknown, vec![true, false, false, false, false, false]);
    }

    #[test]
    fn member_sees_everything_but_login_and_admin() {
        let reg = registry();
        let member = user(Uuid::from_u128(2), false);
        let users = store(&[member.clone()]);

        let flags =
            resolve_visibility(Some(&member.id), &reg, &special(), |id| users.get(id).cloned());
        assert_eq!(flags, vec![false, true, true, false, true, true]);
    }

    #[test]
    fn admin_also_sees_admin_tab() {
        let reg = registry();
        let admin = user(Uuid::from_u128(3), true);
        let users = store(&[admin.clone()]);

        let flags =
            resolve_visibility(Some(&admin.id), &reg, &special(), |id| users.get(id).cloned());
        assert_eq!(flags, vec![false, true, true, true, true, true]);
    }

    #[test]
    fn output_always_matches_registration_order_and_length() {
        let reg = registry();
        let admin = user(Uuid::from_u128(3), true);
        let users = store(&[admin.clone()]);

        for user_id in [None, Some(Uuid::from_u128(9)), Some(admin.id)] {
            let flags = resolve_visibility(user_id.as_ref(), &reg, &special(), |id| {
                users.get(id).cloned()
            });
            assert_eq!(flags.len(), reg.len());
            // Position of the login flag always matches the registry position.
            let login_pos = reg.position("login-tab").unwrap();
            assert_eq!(flags[login_pos], user_id.map_or(true, |id| id != admin.id));
        }
    }

    #[test]
    fn lookup_is_skipped_when_signed_out() {
        let reg = registry();
        let mut calls = 0;
        let _ = resolve_visibility(None, &reg, &special(), |_| {
            calls += 1;
            None
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn register_rejects_duplicate_keys() {
        let mut reg = TabRegistry::new();
        reg.register("chat-tab", "Chat", true).unwrap();
        assert!(reg.register("chat-tab", "Chat again", true).is_err());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn handles_index_in_registration_order() {
        let mut reg = TabRegistry::new();
        let first = reg.register("login-tab", "Login", true).unwrap();
        let second = reg.register("chat-tab", "Chat", false).unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(reg.get(second).unwrap().key, "chat-tab");
        assert_eq!(reg.initial_visibility(), vec![true, false]);
    }
}
