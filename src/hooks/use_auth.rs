use yew::prelude::*;

use crate::services::auth_service;
use crate::stores::{next_seq, AuthAction, AuthContext};

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub store: AuthContext,
    pub check: Callback<()>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

/// Fire a session check and route its tagged outcome into the store.
/// Also used by the application root for the on-mount check, where the
/// context is not yet available.
pub fn dispatch_check(store: &AuthContext) {
    let store = store.clone();
    let seq = next_seq();
    store.dispatch(AuthAction::CheckStarted { seq });

    wasm_bindgen_futures::spawn_local(async move {
        match auth_service::check_auth().await {
            Ok(payload) => {
                log::info!("✅ Session valid for {}", payload.user.username);
                store.dispatch(AuthAction::CheckSucceeded { seq, user: payload.user });
            }
            Err(e) => {
                // Expected for anonymous visitors.
                log::info!("ℹ️ No active session: {}", e);
                store.dispatch(AuthAction::CheckFailed { seq });
            }
        }
    });
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let store = use_context::<AuthContext>().expect("AuthContext not provided");

    let check = {
        let store = store.clone();
        Callback::from(move |_| dispatch_check(&store))
    };

    let login = {
        let store = store.clone();
        Callback::from(move |(username, password): (String, String)| {
            let store = store.clone();
            let seq = next_seq();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&username, &password).await {
                    Ok(payload) => {
                        log::info!("✅ Login successful: {}", payload.user.username);
                        store.dispatch(AuthAction::LoginSucceeded { seq, user: payload.user });
                    }
                    Err(message) => {
                        log::error!("❌ Login failed: {}", message);
                        store.dispatch(AuthAction::LoginFailed { seq, message });
                    }
                }
            });
        })
    };

    let logout = {
        let store = store.clone();
        Callback::from(move |_| {
            let store = store.clone();
            let seq = next_seq();

            wasm_bindgen_futures::spawn_local(async move {
                // The local session is cleared even when the server call
                // fails; otherwise the UI would stay logged in against a
                // cookie the user asked to drop.
                if let Err(e) = auth_service::logout().await {
                    log::error!("❌ Logout request failed: {}", e);
                } else {
                    log::info!("👋 Logged out");
                }
                store.dispatch(AuthAction::LoggedOut { seq });
            });
        })
    };

    UseAuthHandle { store, check, login, logout }
}
