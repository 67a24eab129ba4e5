use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersAdmin />
        </RequireAdmin>
    }
}

#[component]
fn UsersAdmin() -> impl IntoView {
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let load_users = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    users.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    create_effect(move |_| {
        load_users();
    });

    let on_delete = move |id: Uuid| {
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => users.update(|list| list.retain(|u| u.id != id)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_toggle_admin = move |user: User| {
        let dto = UpdateUserDto {
            id: user.id,
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            is_active: user.is_active,
            is_admin: !user.is_admin,
        };
        spawn_local(async move {
            match api::update_user(dto).await {
                Ok(()) => load_users(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let (new_username, set_new_username) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (new_display_name, set_new_display_name) = signal(String::new());
    let (new_is_admin, set_new_is_admin) = signal(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let display_name = new_display_name.get();
        let dto = CreateUserDto {
            username: new_username.get(),
            password: new_password.get(),
            email: None,
            display_name: if display_name.trim().is_empty() {
                None
            } else {
                Some(display_name)
            },
            is_admin: new_is_admin.get(),
        };

        spawn_local(async move {
            match api::create_user(dto).await {
                Ok(()) => {
                    set_new_username.set(String::new());
                    set_new_password.set(String::new());
                    set_new_display_name.set(String::new());
                    set_new_is_admin.set(false);
                    load_users();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="admin-page">
            <h2>"Users"</h2>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || loading.get()>
                <div class="admin-page__loading">"Loading users..."</div>
            </Show>

            <table class="admin-page__table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Display name"</th>
                        <th>"Email"</th>
                        <th>"Admin"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| (user.id, user.is_admin, user.is_active)
                        children=move |user: User| {
                            let username = user.username.clone();
                            let display_name = user.display_name.clone().unwrap_or_default();
                            let email = user.email.clone().unwrap_or_default();
                            let admin_label = if user.is_admin { "yes" } else { "no" };
                            let status = if user.is_active { "active" } else { "inactive" };
                            let created = user.created_at.format("%Y-%m-%d %H:%M").to_string();
                            let id = user.id;
                            let user_for_toggle = user.clone();
                            view! {
                                <tr>
                                    <td>{username}</td>
                                    <td>{display_name}</td>
                                    <td>{email}</td>
                                    <td>{admin_label}</td>
                                    <td>{status}</td>
                                    <td>{created}</td>
                                    <td>
                                        <button on:click=move |_| on_toggle_admin(
                                            user_for_toggle.clone(),
                                        )>"Toggle admin"</button>
                                        <button on:click=move |_| on_delete(id)>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <h3>"Create user"</h3>
            <form class="admin-page__create" on:submit=on_create>
                <div class="form-group">
                    <label for="new-username">"Username"</label>
                    <input
                        type="text"
                        id="new-username"
                        value=move || new_username.get()
                        on:input=move |ev| set_new_username.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="new-password">"Password"</label>
                    <input
                        type="password"
                        id="new-password"
                        value=move || new_password.get()
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="new-display-name">"Display name"</label>
                    <input
                        type="text"
                        id="new-display-name"
                        value=move || new_display_name.get()
                        on:input=move |ev| set_new_display_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || new_is_admin.get()
                            on:change=move |ev| set_new_is_admin.set(event_target_checked(&ev))
                        />
                        " Administrator"
                    </label>
                </div>
                <button type="submit" class="btn-primary">"Create"</button>
            </form>
        </div>
    }
}
