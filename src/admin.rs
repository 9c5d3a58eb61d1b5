use dioxus::prelude::*;
use dioxus_router::{use_navigator, Link, Outlet};

use crate::api::{ApiClient, ApiError};
use crate::hooks::use_api;
use crate::layout::{LoadingSpinner, SectionHeading};
use crate::routes::Route;

pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Where the admin credential lives between page loads.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Browser local storage on the web, a thread-local store elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformCredentials;

#[cfg(target_arch = "wasm32")]
impl CredentialStore for PlatformCredentials {
    fn load(&self) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::get::<String>(ADMIN_TOKEN_KEY)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    fn save(&self, token: &str) {
        use gloo_storage::{LocalStorage, Storage};
        if let Err(err) = LocalStorage::set(ADMIN_TOKEN_KEY, token) {
            tracing::warn!(error = %err, "admin.token_store_failed");
        }
    }

    fn clear(&self) {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::delete(ADMIN_TOKEN_KEY);
    }
}

/// In-process credential store for targets without browser storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore {
    token: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static NATIVE_CREDENTIALS: MemoryCredentialStore = MemoryCredentialStore::default();
}

#[cfg(not(target_arch = "wasm32"))]
impl CredentialStore for PlatformCredentials {
    fn load(&self) -> Option<String> {
        NATIVE_CREDENTIALS.with(|store| store.load())
    }

    fn save(&self, token: &str) {
        NATIVE_CREDENTIALS.with(|store| store.save(token));
    }

    fn clear(&self) {
        NATIVE_CREDENTIALS.with(|store| store.clear());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Guarded<T> {
    Rendered(T),
    Redirect,
}

/// Presence check only: a stored credential renders `view`, anything else
/// redirects without ever building it.
pub fn guard<T>(store: &impl CredentialStore, view: impl FnOnce() -> T) -> Guarded<T> {
    match store.load() {
        Some(_) => Guarded::Rendered(view()),
        None => Guarded::Redirect,
    }
}

/// Layout around the protected admin routes.
#[component]
pub fn AdminGate() -> Element {
    let navigator = use_navigator();
    let guarded = guard(&PlatformCredentials, || rsx! { Outlet::<Route> {} });
    let redirect = matches!(guarded, Guarded::Redirect);

    use_effect(use_reactive!(|redirect| {
        if redirect {
            tracing::info!("admin.redirect_to_login");
            navigator.replace(Route::AdminLogin {});
        }
    }));

    match guarded {
        Guarded::Rendered(view) => view,
        Guarded::Redirect => rsx! {
            div { class: "admin-page",
                LoadingSpinner { label: "Redirecting to login...".to_string() }
            }
        },
    }
}

#[component]
pub fn AdminLogin() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let signed_in = PlatformCredentials.load().is_some();

    let submit_disabled = loading() || username().trim().is_empty() || password().is_empty();

    rsx! {
        document::Title { "Admin | Chips & Bytes" }
        div { class: "admin-page",
            SectionHeading { title: "Admin Login".to_string(), subtitle: None }
            if signed_in {
                p { class: "admin-note",
                    "You are already signed in. "
                    Link { to: Route::AdminDashboard {}, class: "read-more-link", "Open the dashboard" }
                }
            }
            form {
                class: "admin-form",
                onsubmit: move |event| {
                    event.prevent_default();
                    if submit_disabled {
                        return;
                    }
                    let api = api.clone();
                    let user = username().trim().to_string();
                    let pass = password();
                    spawn(async move {
                        loading.set(true);
                        error.set(None);
                        match api.admin_login(&user, &pass).await {
                            Ok(token) => {
                                PlatformCredentials.save(&token);
                                tracing::info!("admin.login");
                                password.set(String::new());
                                navigator.push(Route::AdminDashboard {});
                            }
                            Err(ApiError::Unauthorized) => {
                                error.set(Some("Invalid username or password.".to_string()));
                            }
                            Err(err) => {
                                tracing::warn!(error = %err, "admin.login_failed");
                                error.set(Some("Login failed. Please try again.".to_string()));
                            }
                        }
                        loading.set(false);
                    });
                },
                label { r#for: "admin-username", "Username" }
                input {
                    id: "admin-username",
                    r#type: "text",
                    autocomplete: "username",
                    value: "{username}",
                    disabled: loading(),
                    oninput: move |event| username.set(event.value()),
                }
                label { r#for: "admin-password", "Password" }
                input {
                    id: "admin-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    disabled: loading(),
                    oninput: move |event| password.set(event.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button { r#type: "submit", class: "primary-button", disabled: submit_disabled,
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Collection {
    Events,
    Announcements,
}

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut notice = use_signal(|| None::<String>);

    let mut events = use_api("admin.events", |api| async move { api.events().await });
    let mut announcements =
        use_api("admin.announcements", |api| async move { api.announcements().await });

    let remove = use_callback(move |(collection, id): (Collection, String)| {
        let api = api.clone();
        spawn(async move {
            let Some(token) = PlatformCredentials.load() else {
                navigator.replace(Route::AdminLogin {});
                return;
            };
            let result = match collection {
                Collection::Events => api.delete_event(&id, &token).await,
                Collection::Announcements => api.delete_announcement(&id, &token).await,
            };
            match result {
                Ok(()) => {
                    tracing::info!(id = %id, ?collection, "admin.deleted");
                    notice.set(None);
                    match collection {
                        Collection::Events => events.restart(),
                        Collection::Announcements => announcements.restart(),
                    }
                }
                Err(ApiError::Unauthorized) => {
                    tracing::warn!("admin.credential_rejected");
                    PlatformCredentials.clear();
                    navigator.replace(Route::AdminLogin {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "admin.delete_failed");
                    notice.set(Some(format!("Delete failed: {err}")));
                }
            }
        });
    });

    rsx! {
        document::Title { "Dashboard | Chips & Bytes" }
        div { class: "admin-page",
            SectionHeading { title: "Admin Dashboard".to_string(), subtitle: None }
            button {
                class: "secondary-button",
                onclick: move |_| {
                    PlatformCredentials.clear();
                    tracing::info!("admin.logout");
                    navigator.replace(Route::AdminLogin {});
                },
                "Log out"
            }
            if let Some(message) = notice() {
                p { class: "form-error", "{message}" }
            }
            h2 { class: "admin-subheading", "Events" }
            {match events() {
                None => rsx! { LoadingSpinner { label: "Loading events...".to_string() } },
                Some(Err(err)) => rsx! { p { class: "form-error", "Could not load events: {err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! { p { class: "empty-state", "No events found." } },
                Some(Ok(list)) => rsx! {
                    ul { class: "admin-list",
                        for event in list {
                            li { key: "{event.id}",
                                span { "{event.title} ({event.date})" }
                                button {
                                    class: "danger-button",
                                    onclick: {
                                        let id = event.id.clone();
                                        move |_| remove.call((Collection::Events, id.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                },
            }}
            h2 { class: "admin-subheading", "Announcements" }
            {match announcements() {
                None => rsx! { LoadingSpinner { label: "Loading announcements...".to_string() } },
                Some(Err(err)) => rsx! { p { class: "form-error", "Could not load announcements: {err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! { p { class: "empty-state", "No announcements yet." } },
                Some(Ok(list)) => rsx! {
                    ul { class: "admin-list",
                        for item in list {
                            li { key: "{item.id}",
                                span { "{item.text}" }
                                button {
                                    class: "danger-button",
                                    onclick: {
                                        let id = item.id.clone();
                                        move |_| remove.call((Collection::Announcements, id.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn missing_credential_redirects_without_building_the_view() {
        let store = MemoryCredentialStore::default();
        let built = Cell::new(false);
        let result = guard(&store, || built.set(true));
        assert_eq!(result, Guarded::Redirect);
        assert!(!built.get());
    }

    #[test]
    fn stored_credential_renders_the_view_unchanged() {
        let store = MemoryCredentialStore::default();
        store.save("opaque-token");
        assert_eq!(guard(&store, || "dashboard"), Guarded::Rendered("dashboard"));
    }

    #[test]
    fn logout_removes_the_credential() {
        let store = MemoryCredentialStore::default();
        store.save("opaque-token");
        store.clear();
        assert_eq!(store.load(), None);
        assert_eq!(guard(&store, || ()), Guarded::Redirect);
    }

    #[test]
    fn platform_store_round_trips_on_native() {
        let store = PlatformCredentials;
        store.clear();
        assert_eq!(store.load(), None);
        store.save("t");
        assert_eq!(store.load().as_deref(), Some("t"));
        store.clear();
    }
}
