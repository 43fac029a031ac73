use web_sys::FormData;
use yew::prelude::*;

use crate::models::Resource;
use crate::services::{ApiClient, ApiError};

/// Per-screen view of one resource collection.
#[derive(Clone, PartialEq)]
pub struct ResourceState<T: Resource> {
    pub items: Vec<T>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl<T: Resource> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            saving: false,
            error: None,
        }
    }
}

/// CRUD handle shared by every resource screen. The save callbacks take
/// an `on_success` so the caller can close its modal; failures stay in
/// `state.error` and the form remains open for retry.
#[derive(Clone, PartialEq)]
pub struct UseResourceHandle<T: Resource> {
    pub state: UseStateHandle<ResourceState<T>>,
    pub reload: Callback<()>,
    pub save: Callback<(T, Callback<()>)>,
    pub save_form: Callback<(Option<String>, FormData, Callback<()>)>,
    pub delete: Callback<String>,
}

fn fetch_into<T: Resource>(state: UseStateHandle<ResourceState<T>>) {
    let mut next = (*state).clone();
    next.loading = true;
    next.error = None;
    state.set(next);

    wasm_bindgen_futures::spawn_local(async move {
        let mut next = (*state).clone();
        match ApiClient::new().fetch_items::<T>().await {
            Ok(items) => {
                log::info!("📋 Loaded {} {}", items.len(), T::LABEL_PLURAL);
                next.items = items;
            }
            Err(e) => {
                log::error!("❌ Error fetching {}: {}", T::LABEL_PLURAL, e);
                next.error = Some(format!(
                    "Failed to load {}. Please try again later.",
                    T::LABEL_PLURAL
                ));
            }
        }
        next.loading = false;
        state.set(next);
    });
}

#[hook]
pub fn use_resource<T: Resource>() -> UseResourceHandle<T> {
    let state = use_state(ResourceState::<T>::default);

    // Initial fetch on mount.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            fetch_into(state);
            || ()
        });
    }

    let reload = {
        let state = state.clone();
        Callback::from(move |_| fetch_into(state.clone()))
    };

    let save = {
        let state = state.clone();
        Callback::from(move |(item, on_success): (T, Callback<()>)| {
            let state = state.clone();
            let mut next = (*state).clone();
            next.saving = true;
            next.error = None;
            state.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().save(&item).await;
                finish_save::<T>(state, result, on_success);
            });
        })
    };

    let save_form = {
        let state = state.clone();
        Callback::from(move |(id, form, on_success): (Option<String>, FormData, Callback<()>)| {
            let state = state.clone();
            let mut next = (*state).clone();
            next.saving = true;
            next.error = None;
            state.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().save_form::<T>(id.as_deref(), &form).await;
                finish_save::<T>(state, result, on_success);
            });
        })
    };

    let delete = {
        let state = state.clone();
        Callback::from(move |id: String| {
            let state = state.clone();
            let mut next = (*state).clone();
            next.error = None;
            state.set(next.clone());

            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().delete::<T>(&id).await {
                    Ok(()) => fetch_into(state),
                    Err(e) => {
                        log::error!("❌ Error deleting {}: {}", T::LABEL, e);
                        let mut next = (*state).clone();
                        next.error = Some(delete_error_message::<T>(&e));
                        state.set(next);
                    }
                }
            });
        })
    };

    UseResourceHandle { state, reload, save, save_form, delete }
}

fn finish_save<T: Resource>(
    state: UseStateHandle<ResourceState<T>>,
    result: Result<(), ApiError>,
    on_success: Callback<()>,
) {
    match result {
        Ok(()) => {
            let mut next = (*state).clone();
            next.saving = false;
            state.set(next.clone());
            on_success.emit(());
            fetch_into(state);
        }
        Err(e) => {
            log::error!("❌ Error saving {}: {}", T::LABEL, e);
            let mut next = (*state).clone();
            next.saving = false;
            next.error = Some(format!("Failed to save {}. Please try again.", T::LABEL));
            state.set(next);
        }
    }
}

/// Business-rule rejections get their specific text; everything else the
/// generic retry message.
fn delete_error_message<T: Resource>(error: &ApiError) -> String {
    error
        .status()
        .and_then(T::delete_rejection)
        .unwrap_or_else(|| format!("Failed to delete {}. Please try again.", T::LABEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Technology, User};

    #[test]
    fn users_delete_400_surfaces_the_business_rule() {
        assert_eq!(
            delete_error_message::<User>(&ApiError::Status(400)),
            "Cannot delete the last active user in the system."
        );
    }

    #[test]
    fn other_delete_failures_fall_back_to_generic_text() {
        assert_eq!(
            delete_error_message::<User>(&ApiError::Status(500)),
            "Failed to delete user. Please try again."
        );
        assert_eq!(
            delete_error_message::<Technology>(&ApiError::Status(400)),
            "Failed to delete technology. Please try again."
        );
        assert_eq!(
            delete_error_message::<Technology>(&ApiError::Network("offline".to_string())),
            "Failed to delete technology. Please try again."
        );
    }
}
