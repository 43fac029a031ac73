use gloo_timers::callback::Timeout;
use web_sys::{FormData, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::AboutMe;
use crate::services::ApiClient;

/// Singleton bio editor, embedded in the dashboard. A backend 404 just
/// means nothing has been stored yet.
#[derive(Clone, PartialEq)]
struct AboutMeState {
    about: Option<AboutMe>,
    loading: bool,
    editing: bool,
    saved: bool,
    error: Option<String>,
}

#[function_component(AboutMeView)]
pub fn about_me_view() -> Html {
    let state = use_state(|| AboutMeState {
        about: None,
        loading: true,
        editing: false,
        saved: false,
        error: None,
    });
    let text_ref = use_node_ref();
    let photo_ref = use_node_ref();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let mut next = (*state).clone();
                match ApiClient::new().fetch_about_me().await {
                    Ok(about) => next.about = about,
                    Err(e) => {
                        log::error!("❌ Error fetching about me: {}", e);
                        next.error = Some(
                            "Failed to load about me information. Please try again later."
                                .to_string(),
                        );
                    }
                }
                next.loading = false;
                state.set(next);
            });
            || ()
        });
    }

    let on_edit = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.editing = true;
            next.error = None;
            state.set(next);
        })
    };

    let on_cancel = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.editing = false;
            state.set(next);
        })
    };

    let on_submit = {
        let state = state.clone();
        let text_ref = text_ref.clone();
        let photo_ref = photo_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(text_area) = text_ref.cast::<HtmlTextAreaElement>() else {
                return;
            };
            let Ok(form) = FormData::new() else { return };
            let _ = form.append_with_str("aboutMe", &text_area.value());

            if let Some(photo) = photo_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            {
                let _ = form.append_with_blob("profilePhoto", &photo);
            }

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut next = (*state).clone();
                match ApiClient::new().update_about_me(&form).await {
                    Ok(updated) => {
                        log::info!("✅ About me updated");
                        next.about = Some(updated);
                        next.editing = false;
                        next.saved = true;
                        state.set(next);

                        // Clear the saved flash after a few seconds.
                        let state = state.clone();
                        Timeout::new(3_000, move || {
                            let mut next = (*state).clone();
                            next.saved = false;
                            state.set(next);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Error updating about me: {}", e);
                        next.error = Some(
                            "Failed to update about me information. Please try again."
                                .to_string(),
                        );
                        state.set(next);
                    }
                }
            });
        })
    };

    if state.loading {
        return html! { <div>{"Loading about me information..."}</div> };
    }

    let edit_label = if state.about.is_some() { "Edit" } else { "Add Information" };

    html! {
        <div class="card mb-4">
            <div class="card-body">
                <div class="d-flex justify-content-between align-items-center mb-3">
                    <h2>{"About Me"}</h2>
                    if !state.editing {
                        <button class="btn btn-primary" onclick={on_edit}>
                            {edit_label}
                        </button>
                    }
                </div>
                if let Some(error) = &state.error {
                    <div class="alert alert-danger">{error}</div>
                }
                if state.saved {
                    <div class="alert alert-success">{"Saved."}</div>
                }
                if !state.editing {
                    { render_current(&state.about) }
                } else {
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label class="form-label">{"Profile Photo"}</label>
                            <input
                                type="file"
                                class="form-control"
                                accept="image/*"
                                ref={photo_ref}
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"About Me"}</label>
                            <textarea
                                class="form-control"
                                rows="3"
                                required=true
                                ref={text_ref}
                                value={state.about.as_ref().map(|a| a.about_me.clone()).unwrap_or_default()}
                            />
                        </div>
                        <div class="d-flex justify-content-end">
                            <button type="button" class="btn btn-secondary me-2" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn btn-primary">
                                {"Save Changes"}
                            </button>
                        </div>
                    </form>
                }
            </div>
        </div>
    }
}

fn render_current(about: &Option<AboutMe>) -> Html {
    match about {
        Some(about) => html! {
            <div class="d-flex">
                <img
                    src={format!("{}{}", CONFIG.backend_url(), about.profile_photo_url)}
                    alt="Profile"
                    class="rounded-circle me-4"
                    style="width: 150px; height: 150px; object-fit: cover;"
                />
                <p>{&about.about_me}</p>
            </div>
        },
        None => html! {
            <div class="alert alert-info">
                {"No information available. Click \"Add Information\" to get started."}
            </div>
        },
    }
}
