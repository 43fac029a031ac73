use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Modal;
use crate::hooks::use_resource;
use crate::models::User;

/// Admin account management. Deleting the last active account is refused
/// by the backend; the hook translates that 400 into its specific message.
#[function_component(UsersView)]
pub fn users_view() -> Html {
    let resource = use_resource::<User>();
    let show_modal = use_state(|| false);
    let current = use_state(User::default);

    let open_new = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set(User::default());
            show_modal.set(true);
        })
    };

    let open_edit = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |user: User| {
            current.set(user);
            show_modal.set(true);
        })
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let on_submit = {
        let current = current.clone();
        let save = resource.save.clone();
        let close_modal = close_modal.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save.emit(((*current).clone(), close_modal.clone()));
        })
    };

    let on_username = field_setter(&current, |user, value| user.username = value);
    let on_password = field_setter(&current, |user, value| user.password = value);
    let on_fullname = field_setter(&current, |user, value| user.fullname = value);

    let on_status = {
        let current = current.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut user = (*current).clone();
            user.status = input.checked();
            current.set(user);
        })
    };

    if resource.state.loading {
        return html! { <div>{"Loading users..."}</div> };
    }

    let rows = resource.state.items.iter().map(|user| {
        let edit = {
            let open_edit = open_edit.clone();
            let user = user.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(user.clone()))
        };
        let delete = {
            let delete = resource.delete.clone();
            let id = user.id.clone().unwrap_or_default();
            Callback::from(move |_: MouseEvent| delete.emit(id.clone()))
        };

        html! {
            <tr key={user.id.clone().unwrap_or_default()}>
                <td>{&user.username}</td>
                <td>{&user.fullname}</td>
                <td>{ if user.status { "Active" } else { "Inactive" } }</td>
                <td>
                    <div class="btn-group">
                        <button class="btn btn-sm btn-outline-primary" onclick={edit}>{"Edit"}</button>
                        <button class="btn btn-sm btn-outline-danger" onclick={delete}>{"Delete"}</button>
                    </div>
                </td>
            </tr>
        }
    });

    html! {
        <div>
            <h2>{"Users"}</h2>
            if let Some(error) = &resource.state.error {
                <div class="alert alert-danger">{error}</div>
            }
            <button class="btn btn-primary mb-3" onclick={open_new}>{"Add User"}</button>
            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>{"Username"}</th>
                        <th>{"Full Name"}</th>
                        <th>{"Status"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>

            if *show_modal {
                <Modal
                    title={if current.id.is_some() { "Edit User" } else { "Add User" }}
                    on_close={close_modal.clone()}
                >
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label class="form-label">{"Username"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.username.clone()}
                                oninput={on_username}
                                required=true
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"Password"}</label>
                            <input
                                type="password"
                                class="form-control"
                                value={current.password.clone()}
                                oninput={on_password}
                                required={current.id.is_none()}
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"Full Name"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.fullname.clone()}
                                oninput={on_fullname}
                                required=true
                            />
                        </div>
                        <div class="form-check mb-3">
                            <input
                                type="checkbox"
                                class="form-check-input"
                                id="user-status"
                                checked={current.status}
                                oninput={on_status}
                            />
                            <label class="form-check-label" for="user-status">{"Active"}</label>
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={resource.state.saving}>
                            { if resource.state.saving { "Saving..." } else { "Save" } }
                        </button>
                    </form>
                </Modal>
            }
        </div>
    }
}

fn field_setter(
    current: &UseStateHandle<User>,
    apply: fn(&mut User, String),
) -> Callback<InputEvent> {
    let current = current.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut user = (*current).clone();
        apply(&mut user, input.value());
        current.set(user);
    })
}
