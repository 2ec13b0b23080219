//! Signed-in user context and hooks for the UI.
//!
//! The process-wide [`store::UserStore`] is the source of truth. [`UserProvider`]
//! mirrors it into a signal so components re-render on login and logout, and
//! refetches the profile from the backend on startup since the store does not
//! survive a reload.

use api::{BrowserClient, BrowserRedirect, ClientConfig, FetchError, Redirector, UserProfile};
use dioxus::prelude::*;
use store::{has_role, user_store, Role};

/// What components know about the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserState {
    pub user: Option<UserProfile>,
    /// True until the startup profile fetch has finished.
    pub loading: bool,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current user state.
pub fn use_current_user() -> Signal<UserState> {
    use_context::<Signal<UserState>>()
}

/// The backend client provided by [`UserProvider`].
pub fn use_api() -> BrowserClient {
    use_context::<BrowserClient>()
}

/// Provides the backend client and the user state to its children.
#[component]
pub fn UserProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_context_provider(|| BrowserClient::browser(config.clone()));
    let state = use_signal(|| UserState {
        user: user_store::current_user(),
        ..UserState::default()
    });

    let subscription = use_hook(move || {
        user_store::with_global(|store| {
            store.subscribe(move |user| {
                let mut state = state;
                state.set(UserState {
                    user: user.cloned(),
                    loading: false,
                });
            })
        })
    });
    use_drop(move || user_store::with_global(|store| store.unsubscribe(subscription)));

    // Fetch the current user on mount
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            match client.current_user().await {
                Ok(user) => user_store::set_user(user),
                Err(FetchError::SessionExpired) => user_store::set_user(None),
                Err(e) => {
                    tracing::error!("Failed to load profile: {e}");
                    user_store::set_user(None);
                }
            }
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Ends the session, clears the user store and goes to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_api();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            match client.logout().await {
                Ok(()) => {
                    user_store::set_user(None);
                    BrowserRedirect.redirect(&client.config().session.login_path);
                }
                Err(FetchError::SessionExpired) => user_store::set_user(None),
                Err(e) => tracing::error!("Logout failed: {e}"),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Renders `children` only for users holding one of `allowed`; everyone else
/// gets an access-denied notice.
#[component]
pub fn RoleGate(allowed: Vec<Role>, children: Element) -> Element {
    let state = use_current_user()();

    if state.loading {
        return rsx! {
            p { class: "p-8 text-sm text-neutral-500", "Loading..." }
        };
    }

    let role = state.user.as_ref().and_then(|u| u.role);
    if has_role(role, &allowed) {
        rsx! {
            {children}
        }
    } else {
        rsx! {
            div {
                role: "alert",
                class: "m-8 rounded border border-neutral-200 bg-neutral-50 p-6 text-sm text-neutral-600",
                h2 { class: "mb-1 font-semibold text-neutral-800", "Access denied" }
                "You do not have permission to view this page."
            }
        }
    }
}
