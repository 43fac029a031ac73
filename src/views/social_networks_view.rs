use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Modal;
use crate::hooks::use_resource;
use crate::models::SocialNetwork;

#[function_component(SocialNetworksView)]
pub fn social_networks_view() -> Html {
    let resource = use_resource::<SocialNetwork>();
    let show_modal = use_state(|| false);
    let current = use_state(SocialNetwork::default);

    let open_new = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            current.set(SocialNetwork::default());
            show_modal.set(true);
        })
    };

    let open_edit = {
        let show_modal = show_modal.clone();
        let current = current.clone();
        Callback::from(move |network: SocialNetwork| {
            current.set(network);
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

    let on_name = field_setter(&current, |network, value| network.name = value);
    let on_url = field_setter(&current, |network, value| network.url = value);
    let on_icon_url = field_setter(&current, |network, value| network.icon_url = value);

    let on_status = {
        let current = current.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut network = (*current).clone();
            network.status = input.checked();
            current.set(network);
        })
    };

    if resource.state.loading {
        return html! { <div>{"Loading social networks..."}</div> };
    }

    let rows = resource.state.items.iter().map(|network| {
        let edit = {
            let open_edit = open_edit.clone();
            let network = network.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(network.clone()))
        };
        let delete = {
            let delete = resource.delete.clone();
            let id = network.id.clone().unwrap_or_default();
            Callback::from(move |_: MouseEvent| delete.emit(id.clone()))
        };

        html! {
            <tr key={network.id.clone().unwrap_or_default()}>
                <td>
                    if !network.icon_url.is_empty() {
                        <img src={network.icon_url.clone()} alt={network.name.clone()} width="30" />
                    }
                </td>
                <td>{&network.name}</td>
                <td><a href={network.url.clone()} target="_blank">{&network.url}</a></td>
                <td>{ if network.status { "Visible" } else { "Hidden" } }</td>
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
            <h2>{"Social Networks"}</h2>
            if let Some(error) = &resource.state.error {
                <div class="alert alert-danger">{error}</div>
            }
            <button class="btn btn-primary mb-3" onclick={open_new}>{"Add Social Network"}</button>
            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>{"Icon"}</th>
                        <th>{"Name"}</th>
                        <th>{"URL"}</th>
                        <th>{"Status"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>

            if *show_modal {
                <Modal
                    title={if current.id.is_some() { "Edit Social Network" } else { "Add Social Network" }}
                    on_close={close_modal.clone()}
                >
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label class="form-label">{"Name"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.name.clone()}
                                oninput={on_name}
                                required=true
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"URL"}</label>
                            <input
                                type="url"
                                class="form-control"
                                value={current.url.clone()}
                                oninput={on_url}
                                required=true
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label">{"Icon URL"}</label>
                            <input
                                type="text"
                                class="form-control"
                                value={current.icon_url.clone()}
                                oninput={on_icon_url}
                            />
                        </div>
                        <div class="form-check mb-3">
                            <input
                                type="checkbox"
                                class="form-check-input"
                                id="network-status"
                                checked={current.status}
                                oninput={on_status}
                            />
                            <label class="form-check-label" for="network-status">{"Visible"}</label>
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
    current: &UseStateHandle<SocialNetwork>,
    apply: fn(&mut SocialNetwork, String),
) -> Callback<InputEvent> {
    let current = current.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut network = (*current).clone();
        apply(&mut network, input.value());
        current.set(network);
    })
}
