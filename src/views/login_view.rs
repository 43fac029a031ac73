use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;

/// Credential form. On success the store flips to authenticated and the
/// route guard redirects to the dashboard by itself.
#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                login.emit((username_input.value(), password_input.value()));
            }
        })
    };

    html! {
        <div class="d-flex align-items-center justify-content-center vh-100">
            <div class="container">
                <div class="row justify-content-center">
                    <div class="col-12 col-sm-10 col-md-8 col-lg-6 col-xl-4">
                        <div class="card shadow-lg">
                            <div class="card-body p-5">
                                <h2 class="text-center mb-4">{"Login"}</h2>
                                if let Some(error) = &auth.store.error {
                                    <p class="text-danger text-center">{error}</p>
                                }
                                <form onsubmit={on_submit}>
                                    <div class="mb-3">
                                        <label class="form-label" for="username">{"Username"}</label>
                                        <input
                                            type="text"
                                            id="username"
                                            class="form-control"
                                            placeholder="Enter your username"
                                            ref={username_ref}
                                            required=true
                                        />
                                    </div>
                                    <div class="mb-4">
                                        <label class="form-label" for="password">{"Password"}</label>
                                        <input
                                            type="password"
                                            id="password"
                                            class="form-control"
                                            placeholder="Enter your password"
                                            ref={password_ref}
                                            required=true
                                        />
                                    </div>
                                    <button type="submit" class="btn btn-primary w-100">
                                        {"Login"}
                                    </button>
                                </form>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
